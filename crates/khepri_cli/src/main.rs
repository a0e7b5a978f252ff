//! Khepri CLI
//!
//! Hash files or stdin with any of the standard sponge variants, verify an
//! expected digest in constant time, and inspect the build's version and
//! CPU capabilities.
//!
//! # Examples
//!
//! ```bash
//! # SHA3-256 of a file (default variant)
//! khepri hash document.pdf
//!
//! # Legacy Keccak-256, reading stdin
//! echo -n "" | khepri hash --algo keccak-256
//!
//! # 64 bytes of SHAKE256 output, JSON formatted
//! khepri hash --algo shake256 --length 64 --json document.pdf
//!
//! # Verify a digest; the comparison is constant-time and the exit code is
//! # 0 on match, 1 on mismatch
//! khepri verify --expect a7ffc6f8... document.pdf
//! ```

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use khepri_abi::{khepri_cpu_flags, khepri_version};
use khepri_core::ct::ct_eq;
use khepri_core::keccak::legacy::Keccak256;
use khepri_core::keccak::sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use khepri_core::keccak::shake::{Shake128, Shake256};

/// Read buffer size for streaming file input (64 KiB).
const CHUNK_SIZE: usize = 64 * 1024;

/// Default XOF output length when `--length` is not given.
const DEFAULT_XOF_LEN: usize = 32;

/// Khepri - SHA-3 / SHAKE / legacy Keccak hashing CLI.
#[derive(Parser)]
#[command(name = "khepri")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output format.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash files, or stdin when no file is given.
    Hash {
        /// Hash variant.
        #[arg(long, value_enum, default_value_t = Algo::Sha3_256)]
        algo: Algo,

        /// Output length in bytes; XOF variants only.
        #[arg(long)]
        length: Option<usize>,

        /// Files to hash ("-" or nothing reads stdin).
        files: Vec<PathBuf>,
    },
    /// Recompute a file's digest and compare it to an expected value.
    Verify {
        /// Hash variant.
        #[arg(long, value_enum, default_value_t = Algo::Sha3_256)]
        algo: Algo,

        /// Expected digest, hex-encoded. For XOF variants its length
        /// doubles as the requested output length.
        #[arg(long)]
        expect: String,

        /// File to check ("-" reads stdin).
        file: PathBuf,
    },
    /// Print version and CPU capability information.
    Info,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algo {
    #[value(name = "sha3-224")]
    Sha3_224,
    #[value(name = "sha3-256")]
    Sha3_256,
    #[value(name = "sha3-384")]
    Sha3_384,
    #[value(name = "sha3-512")]
    Sha3_512,
    #[value(name = "keccak-256")]
    Keccak256,
    #[value(name = "shake128")]
    Shake128,
    #[value(name = "shake256")]
    Shake256,
}

impl Algo {
    fn name(self) -> &'static str {
        match self {
            Algo::Sha3_224 => "sha3-224",
            Algo::Sha3_256 => "sha3-256",
            Algo::Sha3_384 => "sha3-384",
            Algo::Sha3_512 => "sha3-512",
            Algo::Keccak256 => "keccak-256",
            Algo::Shake128 => "shake128",
            Algo::Shake256 => "shake256",
        }
    }

    fn is_xof(self) -> bool {
        matches!(self, Algo::Shake128 | Algo::Shake256)
    }
}

// clap renders the default value through Display.
impl std::fmt::Display for Algo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Serialize)]
struct HashRecord {
    algorithm: &'static str,
    file: String,
    digest: String,
}

#[derive(Serialize)]
struct InfoRecord {
    version: String,
    cpu: CpuRecord,
}

#[derive(Serialize)]
struct CpuRecord {
    avx2: bool,
    sha: bool,
    neon: bool,
    sha3: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_command(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Hash {
            algo,
            length,
            files,
        } => handle_hash(*algo, *length, files, cli.json),
        Commands::Verify { algo, expect, file } => handle_verify(*algo, expect, file),
        Commands::Info => handle_info(cli.json),
    }
}

/// Resolve the XOF output length, rejecting `--length` for fixed digests.
fn resolve_length(algo: Algo, length: Option<usize>) -> Result<usize, Box<dyn std::error::Error>> {
    match length {
        None => Ok(DEFAULT_XOF_LEN),
        Some(0) => Err("--length must be at least 1".into()),
        Some(n) if algo.is_xof() => Ok(n),
        Some(_) => Err(format!("--length only applies to XOF variants, not {}", algo.name()).into()),
    }
}

/// Stream a reader through the chosen variant.
fn hash_reader(
    algo: Algo,
    xof_len: usize,
    reader: &mut dyn Read,
) -> io::Result<Vec<u8>> {
    macro_rules! stream_fixed {
        ($hasher:expr) => {{
            let mut hasher = $hasher;
            let mut buf = vec![0u8; CHUNK_SIZE];
            loop {
                let n = reader.read(&mut buf)?;
                if n == 0 {
                    break;
                }
                hasher.update(&buf[..n]);
            }
            hasher.finalize().to_vec()
        }};
    }

    macro_rules! stream_xof {
        ($xof:expr) => {{
            let mut xof = $xof;
            let mut buf = vec![0u8; CHUNK_SIZE];
            loop {
                let n = reader.read(&mut buf)?;
                if n == 0 {
                    break;
                }
                xof.absorb(&buf[..n]);
            }
            let mut out = vec![0u8; xof_len];
            xof.squeeze(&mut out);
            out
        }};
    }

    Ok(match algo {
        Algo::Sha3_224 => stream_fixed!(Sha3_224::new()),
        Algo::Sha3_256 => stream_fixed!(Sha3_256::new()),
        Algo::Sha3_384 => stream_fixed!(Sha3_384::new()),
        Algo::Sha3_512 => stream_fixed!(Sha3_512::new()),
        Algo::Keccak256 => stream_fixed!(Keccak256::new()),
        Algo::Shake128 => stream_xof!(Shake128::new()),
        Algo::Shake256 => stream_xof!(Shake256::new()),
    })
}

/// Hash a path, with "-" meaning stdin.
fn hash_path(algo: Algo, xof_len: usize, path: &Path) -> io::Result<Vec<u8>> {
    if path == Path::new("-") {
        hash_reader(algo, xof_len, &mut io::stdin().lock())
    } else {
        hash_reader(algo, xof_len, &mut File::open(path)?)
    }
}

fn handle_hash(
    algo: Algo,
    length: Option<usize>,
    files: &[PathBuf],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let xof_len = resolve_length(algo, length)?;

    let stdin_only = [PathBuf::from("-")];
    let files: &[PathBuf] = if files.is_empty() { &stdin_only } else { files };

    let mut records = Vec::with_capacity(files.len());
    for path in files {
        let digest = hash_path(algo, xof_len, path)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        records.push(HashRecord {
            algorithm: algo.name(),
            file: path.display().to_string(),
            digest: hex::encode(digest),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}  {}", record.digest, record.file);
        }
    }
    Ok(())
}

fn handle_verify(
    algo: Algo,
    expect: &str,
    file: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected = hex::decode(expect).map_err(|e| format!("--expect is not valid hex: {}", e))?;
    if expected.is_empty() {
        return Err("--expect must not be empty".into());
    }
    if !algo.is_xof() {
        let want = match algo {
            Algo::Sha3_224 => 28,
            Algo::Sha3_256 | Algo::Keccak256 => 32,
            Algo::Sha3_384 => 48,
            Algo::Sha3_512 => 64,
            _ => unreachable!(),
        };
        if expected.len() != want {
            return Err(format!(
                "{} digests are {} bytes, --expect has {}",
                algo.name(),
                want,
                expected.len()
            )
            .into());
        }
    }

    let actual = hash_path(algo, expected.len(), file)
        .map_err(|e| format!("{}: {}", file.display(), e))?;

    if ct_eq(&actual, &expected) {
        println!("OK  {}", file.display());
        Ok(())
    } else {
        Err(format!("digest mismatch for {}", file.display()).into())
    }
}

fn handle_info(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let v = khepri_version();
    let flags = khepri_cpu_flags();

    if json {
        let record = InfoRecord {
            version: format!("{}.{}.{}", v.major, v.minor, v.patch),
            cpu: CpuRecord {
                avx2: flags.avx2 == 1,
                sha: flags.sha == 1,
                neon: flags.neon == 1,
                sha3: flags.sha3 == 1,
            },
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("khepri {}.{}.{}", v.major, v.minor, v.patch);
        println!(
            "cpu: avx2={} sha={} neon={} sha3={}",
            flags.avx2, flags.sha, flags.neon, flags.sha3
        );
    }
    Ok(())
}
