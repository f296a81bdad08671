//! Throughput benchmark for Runestone encoding and decoding.
//!
//! Builds a deterministic corpus of synthetic runestones, encodes each into
//! an `OP_RETURN` script, then decodes the corpus on one thread and fanned
//! out across worker threads.
//!
//! Usage: `bench-runestones [COUNT] [WORKERS]`

use std::thread;
use std::time::Instant;

use bitcoin::absolute::LockTime;
use bitcoin::transaction::Version;
use bitcoin::{Amount, ScriptBuf, Transaction, TxOut};
use runestone::{Edict, Etching, Rune, RuneId, Runestone, Terms};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_COUNT: usize = 100_000;
const OUTPUTS: usize = 3;

// =============================================================================
// CORPUS GENERATION
// =============================================================================

/// SplitMix64, so every run benchmarks the same corpus.
struct SplitMix(u64);

impl SplitMix {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.below(100) < percent
    }
}

fn rune_id(rng: &mut SplitMix) -> RuneId {
    RuneId {
        block: 840_000 + rng.below(100_000),
        tx: rng.below(4_000) as u32,
    }
}

fn build_etching(rng: &mut SplitMix) -> Etching {
    Etching {
        divisibility: Some(rng.below(39) as u8),
        premine: rng.chance(50).then(|| u128::from(rng.next())),
        rune: Some(Rune(u128::from(rng.next()) << 32 | u128::from(rng.next() as u32))),
        spacers: rng.chance(30).then(|| rng.below(1 << 12) as u32),
        symbol: char::from_u32(0x16A0 + rng.below(80) as u32),
        terms: rng.chance(70).then(|| Terms {
            amount: Some(u128::from(rng.below(1_000_000))),
            cap: Some(u128::from(rng.below(1_000_000))),
            height: (Some(840_000), rng.chance(50).then_some(1_000_000)),
            offset: (None, rng.chance(20).then(|| rng.below(10_000))),
        }),
    }
}

fn build_runestone(rng: &mut SplitMix) -> Runestone {
    let edicts = (0..rng.below(8))
        .map(|_| Edict {
            id: rune_id(rng),
            amount: u128::from(rng.next()),
            output: u128::from(rng.below(OUTPUTS as u64 + 1)),
        })
        .collect();

    Runestone {
        edicts,
        etching: rng.chance(10).then(|| build_etching(rng)),
        cenotaph: false,
        mint: rng.chance(40).then(|| rune_id(rng)),
        pointer: rng.chance(25).then(|| u128::from(rng.below(OUTPUTS as u64))),
    }
}

fn carry(script_pubkey: ScriptBuf) -> Transaction {
    let mut output = vec![TxOut {
        value: Amount::ZERO,
        script_pubkey,
    }];
    output.extend((1..OUTPUTS).map(|_| TxOut {
        value: Amount::from_sat(546),
        script_pubkey: ScriptBuf::new(),
    }));

    Transaction {
        version: Version::TWO,
        lock_time: LockTime::ZERO,
        input: Vec::new(),
        output,
    }
}

/// Decodes a slice of transactions, returning (runestones, cenotaphs).
fn decode_all(transactions: &[Transaction]) -> (usize, usize) {
    let mut runestones = 0;
    let mut cenotaphs = 0;
    for tx in transactions {
        if let Some(runestone) = Runestone::decipher(tx) {
            runestones += 1;
            if runestone.cenotaph {
                cenotaphs += 1;
            }
        }
    }
    (runestones, cenotaphs)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let count = args
        .next()
        .map(|arg| arg.parse().expect("COUNT must be a number"))
        .unwrap_or(DEFAULT_COUNT);
    let workers = args
        .next()
        .map(|arg| arg.parse().expect("WORKERS must be a number"))
        .unwrap_or_else(|| thread::available_parallelism().map_or(1, |n| n.get()))
        .max(1);

    info!(count, workers, "generating corpus");

    let mut rng = SplitMix(0x5255_4E45);
    let corpus: Vec<Runestone> = (0..count).map(|_| build_runestone(&mut rng)).collect();

    // Benchmark encoding
    let encode_start = Instant::now();
    let scripts: Vec<ScriptBuf> = corpus
        .iter()
        .map(|runestone| runestone.encipher().expect("Failed to encode"))
        .collect();
    let encode_time = encode_start.elapsed();

    let script_bytes: usize = scripts.iter().map(|script| script.len()).sum();

    println!("=== Encode ===");
    println!(
        "{} runestones, {} script bytes in {:?}",
        corpus.len(),
        script_bytes,
        encode_time
    );
    println!(
        "  Avg script size: {:.1} bytes",
        script_bytes as f64 / corpus.len().max(1) as f64
    );
    println!(
        "  Throughput: {:.0} runestones/s",
        corpus.len() as f64 / encode_time.as_secs_f64()
    );

    let transactions: Vec<Transaction> = scripts.into_iter().map(carry).collect();

    // Warmup
    let _ = decode_all(&transactions[..transactions.len().min(1_000)]);

    // Benchmark decoding (single thread)
    let decode_start = Instant::now();
    let (found, cenotaphs) = decode_all(&transactions);
    let decode_time = decode_start.elapsed();

    println!("\n=== Decode (1 thread) ===");
    println!("{} runestones ({} cenotaphs) in {:?}", found, cenotaphs, decode_time);
    println!(
        "  Throughput: {:.0} runestones/s",
        found as f64 / decode_time.as_secs_f64()
    );

    assert_eq!(found, corpus.len(), "every transaction carries a runestone");
    assert_eq!(cenotaphs, 0, "generated runestones are well-formed");

    // Benchmark decoding (fanned out, no shared state between calls)
    let chunk_size = transactions.len().div_ceil(workers).max(1);
    let parallel_start = Instant::now();
    let (parallel_found, parallel_cenotaphs) = thread::scope(|scope| {
        let handles: Vec<_> = transactions
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || decode_all(chunk)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("decode worker panicked"))
            .fold((0, 0), |(a, b), (c, d)| (a + c, b + d))
    });
    let parallel_time = parallel_start.elapsed();

    println!("\n=== Decode ({} threads) ===", workers);
    println!(
        "{} runestones ({} cenotaphs) in {:?}",
        parallel_found, parallel_cenotaphs, parallel_time
    );
    println!(
        "  Speedup: {:.1}x",
        decode_time.as_secs_f64() / parallel_time.as_secs_f64()
    );

    assert_eq!(parallel_found, found);
    assert_eq!(parallel_cenotaphs, cenotaphs);

    // Spot-check round trips
    for (runestone, tx) in corpus.iter().zip(&transactions).take(1_000) {
        let mut expected = runestone.clone();
        expected.edicts.sort_by_key(|edict| edict.id);
        assert_eq!(Runestone::decipher(tx).as_ref(), Some(&expected));
    }
    debug!("round trip spot check passed");
}
