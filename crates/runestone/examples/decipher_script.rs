//! Simple decoder to inspect Runestone scripts.
//!
//! Usage: `cargo run --example decipher_script -- <HEX_SCRIPT> [OUTPUTS]`

use bitcoin::absolute::LockTime;
use bitcoin::transaction::Version;
use bitcoin::{Amount, ScriptBuf, Transaction, TxOut};
use runestone::{Etching, Runestone};

fn print_etching(etching: &Etching) {
    println!("\n=== Etching ===");
    match etching.spaced_rune() {
        Some(spaced) => println!("Rune: {} ({})", spaced, spaced.rune.n()),
        None => println!("Rune: <reserved>"),
    }
    if let Some(divisibility) = etching.divisibility {
        println!("Divisibility: {}", divisibility);
    }
    if let Some(symbol) = etching.symbol {
        println!("Symbol: {}", symbol);
    }
    if let Some(premine) = etching.premine {
        println!("Premine: {}", premine);
    }
    if let Some(terms) = &etching.terms {
        println!("Terms:");
        println!("  amount: {:?}, cap: {:?}", terms.amount, terms.cap);
        println!("  height: {:?}..{:?}", terms.height.0, terms.height.1);
        println!("  offset: {:?}..{:?}", terms.offset.0, terms.offset.1);
    }
    match etching.supply() {
        Some(supply) => println!("Max supply: {}", supply),
        None => println!("Max supply: overflows"),
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let script = args.next().expect("usage: decipher_script <HEX_SCRIPT> [OUTPUTS]");
    let outputs: usize = args
        .next()
        .map(|arg| arg.parse().expect("OUTPUTS must be a number"))
        .unwrap_or(2);

    let bytes = hex::decode(script.trim()).expect("Failed to decode hex");
    println!("Script size: {} bytes", bytes.len());

    let mut output = vec![TxOut {
        value: Amount::ZERO,
        script_pubkey: ScriptBuf::from_bytes(bytes),
    }];
    output.extend((1..outputs.max(1)).map(|_| TxOut {
        value: Amount::ZERO,
        script_pubkey: ScriptBuf::new(),
    }));

    let tx = Transaction {
        version: Version::TWO,
        lock_time: LockTime::ZERO,
        input: Vec::new(),
        output,
    };

    let Some((runestone, flaws)) = Runestone::decipher_with_flaws(&tx) else {
        println!("No runestone");
        return;
    };

    if runestone.cenotaph {
        println!("Cenotaph");
        for flaw in &flaws {
            println!("  - {}", flaw);
        }
    }

    if let Some(mint) = runestone.mint {
        println!("Mint: {}", mint);
    }
    if let Some(pointer) = runestone.pointer {
        println!("Pointer: {}", pointer);
    }

    if let Some(etching) = &runestone.etching {
        print_etching(etching);
    }

    println!("\n=== Edicts ({}) ===", runestone.edicts.len());
    for edict in &runestone.edicts {
        println!("  {} x{} -> output {}", edict.id, edict.amount, edict.output);
    }
}
