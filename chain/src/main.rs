// src/main.rs
//
// Minimal local demo: mines a few blocks against an in-memory ledger
// with no networking, and prints the resulting chain. Useful for
// sanity-checking the core without standing up the HTTP node; the real
// node binary lives in the `node` crate.

use chain::{Ledger, LedgerConfig, Miner, MINING_SENDER};

fn main() {
    let mut ledger = Ledger::new(LedgerConfig::default(), now());
    let miner = Miner::new();

    println!("genesis: {:#?}", ledger.last_block());

    for _ in 0..3 {
        ledger.add_transaction(MINING_SENDER, "demo-recipient", 2.0, None, None);
        let (block, hash) = miner.mine_once(&mut ledger, "demo-miner", now());
        println!(
            "mined block nonce={} hash={} txs={}",
            block.nonce,
            hash,
            block.transactions.len()
        );
    }

    println!("final chain length: {}", ledger.chain().len());
    println!(
        "demo-miner balance: {}",
        ledger.calculate_total_amount("demo-miner")
    );
}

fn now() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}
