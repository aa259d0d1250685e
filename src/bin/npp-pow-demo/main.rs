//! Nonce-iterating CLI driver around [`ab_npp_pow::Solver`].
//!
//! Patches a nonce into a fixed block template, expands it via SHAKE256 into the solver's
//! 672-byte input, and on a hit, writes the solution into the template and hashes the completed
//! header with SHA3-256. This mirrors the reference project's own demo driver; it carries no
//! tested invariants of its own (those live in the library).

use ab_npp_pow::{verify, Solution, Solver, INPUT_BYTES};
use clap::Parser;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_256, Shake256};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::info;

/// Hex-encoded block template: a fixed base region (hashed to derive the numbers table) followed
/// by a zeroed 16-byte region reserved for the solution.
const BLOCK_TEMPLATE_HEX: &str = concat!(
    "0707f7a4f0d605b303260816ba3f10902e1a145ac5fad3aa3af6ea44c11869dc4f853f002b2eea0000000077b206",
    "a02ca5b1d4ce6bbfdf0acac38bded34d2dcdeef95cd20cefc12f61d5610900000000000000000000000000000000",
);

/// Byte offset of the 4-byte little-endian nonce within the block template.
const NONCE_OFFSET: usize = 39;

/// Length of the template's hashed base region; the solution is appended right after it.
const BLOCK_TEMPLATE_BASE_SIZE: usize = 76;

/// Number-partitioning proof-of-work demonstration CLI.
#[derive(Debug, Parser)]
#[clap(about, version)]
struct Args {
    /// How many consecutive nonces to try.
    nonces_count: u32,
    /// Maximum number of leaf probes per nonce.
    #[arg(default_value_t = 16)]
    max_leaves: usize,
    /// Keep searching after the first solution for a given nonce instead of stopping early.
    #[arg(default_value_t = true)]
    full_probe: bool,
    /// First nonce to try.
    #[arg(long)]
    starting_nonce: Option<u32>,
}

/// Errors surfaced by the demonstration binary.
#[derive(Debug, thiserror::Error)]
enum Error {
    /// The embedded block template's hex string failed to decode.
    #[error("invalid block template hex: {0}")]
    Template(#[from] hex::FromHexError),
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let starting_nonce = args.starting_nonce.unwrap_or_else(|| {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is after the Unix epoch")
            .as_nanos();
        seed as u32
    });

    info!(
        nonces = args.nonces_count,
        max_leaves = args.max_leaves,
        full_probe = args.full_probe,
        starting_nonce,
        "running number-partitioning proof-of-work search"
    );

    let mut block_template = hex::decode(BLOCK_TEMPLATE_HEX)?;
    debug_assert_eq!(block_template.len(), BLOCK_TEMPLATE_BASE_SIZE + 16);

    let mut solver = Solver::new();
    let mut solutions = [Solution::default(); 10];
    let mut total_solutions: u64 = 0;
    let start = Instant::now();

    for nonce in starting_nonce..starting_nonce.wrapping_add(args.nonces_count) {
        block_template[NONCE_OFFSET..NONCE_OFFSET + 4].copy_from_slice(&nonce.to_le_bytes());

        let mut numbers_buffer = [0u8; INPUT_BYTES];
        let mut shake = Shake256::default();
        shake.update(&block_template[..BLOCK_TEMPLATE_BASE_SIZE]);
        shake.finalize_xof().read(&mut numbers_buffer);

        let found = solver
            .solve(&numbers_buffer, &mut solutions, args.max_leaves, args.full_probe)
            .expect("numbers_buffer is exactly INPUT_BYTES long");

        for solution in &solutions[..found] {
            block_template[BLOCK_TEMPLATE_BASE_SIZE..BLOCK_TEMPLATE_BASE_SIZE + 16]
                .copy_from_slice(&solution.to_bytes());

            let pow_hash = Sha3_256::digest(&block_template);
            let valid = verify(*solution, solver.numbers());

            info!(
                nonce,
                solution = %hex::encode(solution.to_bytes()),
                pow_hash = %hex::encode(pow_hash),
                valid,
                "found solution"
            );
        }

        total_solutions += found as u64;
    }

    let elapsed = start.elapsed().as_secs_f64();
    info!(
        total_solutions,
        solutions_per_second = total_solutions as f64 / elapsed,
        nonces_per_solution = args.nonces_count as f64 / total_solutions.max(1) as f64,
        "search complete"
    );

    Ok(())
}
