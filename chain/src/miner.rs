// chain/src/miner.rs

//! Proof-of-work mining.

use crate::ledger::Ledger;
use crate::types::{Block, MINING_DIFFICULTY, Transaction, leading_zero_hex_chars};

/// Runs proof-of-work over a ledger's current pool.
///
/// Stateless by design: all mutable state lives in the [`Ledger`] it is
/// handed, so a `Miner` is safe to share across scheduler ticks.
#[derive(Default)]
pub struct Miner;

impl Miner {
    pub fn new() -> Self {
        Self
    }

    /// Mines exactly one block against `ledger`'s current pool, crediting
    /// the coinbase reward to `reward_address`.
    ///
    /// 1. Appends the coinbase transaction to a snapshot of the pool.
    /// 2. Scans nonces until `Block::proof_hash` over
    ///    `{transactions, nonce, previous_hash}` has `MINING_DIFFICULTY`
    ///    leading hex zeros.
    /// 3. Seals the block (adding `timestamp`), appends it to the chain,
    ///    and clears the pool.
    ///
    /// An empty pool before the coinbase is still mined — this produces a
    /// coinbase-only block rather than skipping the tick.
    ///
    /// Returns the sealed block and its 4-field hash.
    pub fn mine_once(&self, ledger: &mut Ledger, reward_address: &str, now: f64) -> (Block, String) {
        let mut transactions: Vec<Transaction> = ledger.pool().to_vec();
        transactions.push(Transaction::coinbase(reward_address));

        let previous_hash = ledger.last_block().hash();

        let mut nonce: u64 = 0;
        loop {
            let proof = Block::proof_hash(&transactions, nonce, &previous_hash);
            if leading_zero_hex_chars(&proof) >= MINING_DIFFICULTY {
                break;
            }
            nonce += 1;
        }

        let block = Block {
            timestamp: now,
            transactions,
            nonce,
            previous_hash,
        };
        let block_hash = block.hash();

        ledger.append_block(block.clone());

        (block, block_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerConfig;
    use crate::types::MINING_SENDER;

    #[test]
    fn mine_once_produces_difficulty_satisfying_block() {
        let mut ledger = Ledger::new(LedgerConfig::default(), 0.0);
        let miner = Miner::new();
        let (block, _hash) = miner.mine_once(&mut ledger, "miner-address", 1.0);
        assert!(block.satisfies_difficulty());
        let proof = Block::proof_hash(&block.transactions, block.nonce, &block.previous_hash);
        assert!(leading_zero_hex_chars(&proof) >= MINING_DIFFICULTY);
    }

    #[test]
    fn mine_with_empty_pool_produces_coinbase_only_block() {
        let mut ledger = Ledger::new(LedgerConfig::default(), 0.0);
        assert!(ledger.pool().is_empty());

        let miner = Miner::new();
        let (block, _hash) = miner.mine_once(&mut ledger, "miner-address", 1.0);

        assert_eq!(block.transactions.len(), 1);
        assert_eq!(block.transactions[0].sender_blockchain_address, MINING_SENDER);
        assert_eq!(block.transactions[0].recipient_blockchain_address, "miner-address");
        assert!(ledger.pool().is_empty());
        assert_eq!(ledger.chain().len(), 2);
    }

    #[test]
    fn mining_includes_pending_pool_transactions_plus_coinbase() {
        let mut ledger = Ledger::new(LedgerConfig::default(), 0.0);
        ledger.add_transaction(MINING_SENDER, "A", 10.0, None, None);

        let miner = Miner::new();
        let (block, _hash) = miner.mine_once(&mut ledger, "M", 1.0);

        assert_eq!(block.transactions.len(), 2);
        assert_eq!(block.transactions[0].recipient_blockchain_address, "A");
        assert_eq!(block.transactions[1].recipient_blockchain_address, "M");
    }

    #[test]
    fn mined_block_links_to_previous_hash() {
        let mut ledger = Ledger::new(LedgerConfig::default(), 0.0);
        let genesis_hash = ledger.last_block().hash();
        let miner = Miner::new();
        let (block, _hash) = miner.mine_once(&mut ledger, "M", 1.0);
        assert_eq!(block.previous_hash, genesis_hash);
    }
}
