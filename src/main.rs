//! VortexHash Miner CLI
//!
//! # Commands
//!
//! - `hash` - Digest a hex-encoded 80-byte block header
//! - `mine` - Scan nonces until a digest meets the difficulty target
//! - `benchmark` - Run performance benchmark
//! - `vectors` - Emit a deterministic JSON corpus of reference vectors

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use vhash::algorithm::HEADER_SIZE;
use vhash::header::{decode_header, set_nonce};
use vhash::{VortexHash, hash, meets_difficulty};

#[derive(Parser)]
#[command(name = "vhash")]
#[command(version = "0.1.0")]
#[command(about = "VortexHash proof-of-work miner for Bitcoin-derived blockchains")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Digest a hex-encoded 80-byte block header
    Hash {
        /// Hex-encoded 80-byte header
        header: String,
    },

    /// Scan nonces until the digest meets the difficulty target
    Mine {
        /// Hex-encoded 80-byte header template (the nonce field is overwritten)
        header: String,

        /// Number of threads to use (default: number of CPU cores)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Target difficulty (number of leading zero bits)
        #[arg(short, long, default_value = "16")]
        difficulty: u32,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of hashes to compute
        #[arg(short, long, default_value = "1000")]
        count: u32,
    },

    /// Emit a deterministic JSON corpus of header/digest reference vectors
    Vectors {
        /// Number of vectors to emit
        #[arg(short, long, default_value = "64")]
        count: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Hash { header } => cmd_hash(&header),
        Commands::Mine {
            header,
            threads,
            difficulty,
        } => cmd_mine(&header, threads, difficulty),
        Commands::Benchmark { count } => cmd_benchmark(count),
        Commands::Vectors { count } => cmd_vectors(count),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_hash(header_hex: &str) -> anyhow::Result<()> {
    let header = decode_header(header_hex)?;
    println!("{}", hex::encode(hash(&header)));
    Ok(())
}

fn cmd_mine(header_hex: &str, threads: Option<usize>, difficulty: u32) -> anyhow::Result<()> {
    let template = decode_header(header_hex)?;
    let num_threads = threads.unwrap_or_else(num_cpus::get).max(1);

    // Random starting nonce so restarts do not rescan the same range
    let mut entropy = [0u8; 4];
    getrandom::getrandom(&mut entropy)
        .map_err(|e| anyhow::anyhow!("entropy source failed: {}", e))?;
    let start_nonce = u32::from_le_bytes(entropy);

    println!("Starting mining...");
    println!("Difficulty: {} bits", difficulty);
    println!("Threads: {}", num_threads);

    let found = AtomicBool::new(false);
    let hashes = AtomicU64::new(0);
    let start = Instant::now();

    std::thread::scope(|scope| {
        for t in 0..num_threads {
            let found = &found;
            let hashes = &hashes;
            scope.spawn(move || {
                // Each thread owns its hasher; no shared mutable state
                let mut hasher = VortexHash::new();
                let mut header = template;
                let mut nonce = start_nonce.wrapping_add(t as u32);

                while !found.load(Ordering::Relaxed) {
                    set_nonce(&mut header, nonce);
                    let digest = hasher.hash(&header);
                    hashes.fetch_add(1, Ordering::Relaxed);

                    if meets_difficulty(&digest, difficulty)
                        && !found.swap(true, Ordering::SeqCst)
                    {
                        println!("\nFound valid hash!");
                        println!("Hash:  {}", hex::encode(digest));
                        println!("Nonce: {}", nonce);
                        break;
                    }

                    nonce = nonce.wrapping_add(num_threads as u32);
                }
            });
        }

        // Report hashrate every 5 seconds until a thread wins
        let mut last_report = Instant::now();
        while !found.load(Ordering::Relaxed) {
            std::thread::sleep(Duration::from_millis(200));
            if last_report.elapsed() >= Duration::from_secs(5) {
                let elapsed = start.elapsed().as_secs_f64();
                let total = hashes.load(Ordering::Relaxed);
                print!(
                    "\rHashrate: {:.2} H/s | Hashes: {} | Time: {:.0}s",
                    total as f64 / elapsed,
                    total,
                    elapsed
                );
                use std::io::Write;
                std::io::stdout().flush().ok();
                last_report = Instant::now();
            }
        }
    });

    let elapsed = start.elapsed().as_secs_f64();
    let total = hashes.load(Ordering::Relaxed);
    println!("Hashes computed: {} ({:.2} H/s)", total, total as f64 / elapsed);

    Ok(())
}

fn cmd_benchmark(count: u32) -> anyhow::Result<()> {
    println!("Running benchmark with {} hashes...", count);

    let mut hasher = VortexHash::new();
    let mut header = [0u8; HEADER_SIZE];

    let start = Instant::now();
    for i in 0..count {
        set_nonce(&mut header, i);
        let _ = hasher.hash(&header);
    }
    let elapsed = start.elapsed();

    println!("\nResults:");
    println!("  Total hashes: {}", count);
    println!("  Time elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("  Hashrate: {:.2} H/s", count as f64 / elapsed.as_secs_f64());

    println!("\nAlgorithm parameters:");
    println!("  Header size: {} bytes", HEADER_SIZE);
    println!(
        "  Mixing matrix: {}x{} f64",
        vhash::algorithm::MATRIX_DIM,
        vhash::algorithm::MATRIX_DIM
    );
    println!("  Version: {}", vhash::algorithm::VERSION);

    Ok(())
}

#[derive(Serialize)]
struct TestVector {
    header: String,
    digest: String,
}

fn cmd_vectors(count: u32) -> anyhow::Result<()> {
    let mut hasher = VortexHash::new();
    let mut vectors = Vec::with_capacity(count as usize);

    for i in 0..count {
        let header = vector_header(i);
        let digest = hasher.hash(&header);
        vectors.push(TestVector {
            header: hex::encode(header),
            digest: hex::encode(digest),
        });
    }

    println!("{}", serde_json::to_string_pretty(&vectors)?);
    Ok(())
}

/// Deterministic header for vector `i`: byte `k` is `(i*80 + k) mod 251`,
/// with the nonce field then forced to `i`. Trivial for any other
/// implementation to reproduce when cross-checking digests.
fn vector_header(i: u32) -> [u8; HEADER_SIZE] {
    let mut header = [0u8; HEADER_SIZE];
    for (k, byte) in header.iter_mut().enumerate() {
        *byte = ((i as usize * HEADER_SIZE + k) % 251) as u8;
    }
    set_nonce(&mut header, i);
    header
}
