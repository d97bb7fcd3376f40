// chain/src/ledger.rs

//! The Ledger: owns the chain and the pending-transaction pool, and
//! enforces every chain-level invariant.

use crate::crypto;
use crate::types::{Block, MINING_SENDER, Transaction};

/// Tunable policy knobs for [`Ledger`].
///
/// `enforce_solvency` resolves the core's Open Question 2: the source
/// comments this check out in one revision and restores it in another.
/// Off by default, matching the networked revision.
#[derive(Clone, Copy, Debug)]
pub struct LedgerConfig {
    pub enforce_solvency: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            enforce_solvency: false,
        }
    }
}

/// Owns `chain` and `pool` exclusively; every other component holds only
/// a read-write-through-`Ledger` view.
#[derive(Debug)]
pub struct Ledger {
    chain: Vec<Block>,
    pool: Vec<Transaction>,
    config: LedgerConfig,
}

impl Ledger {
    /// Creates a new ledger seeded with just the genesis block.
    pub fn new(config: LedgerConfig, genesis_timestamp: f64) -> Self {
        Self {
            chain: vec![Block::genesis(genesis_timestamp)],
            pool: Vec::new(),
            config,
        }
    }

    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    pub fn pool(&self) -> &[Transaction] {
        &self.pool
    }

    pub fn last_block(&self) -> &Block {
        self.chain.last().expect("chain always has at least the genesis block")
    }

    /// Attempts to append `tx` to the pool.
    ///
    /// Coinbase transactions (`sender == "THE BLOCKCHAIN"`) are appended
    /// unconditionally. Any other transaction must carry a valid ECDSA
    /// signature over `{sender, recipient, value}`; on failure this
    /// returns `false` and the pool is unchanged. When
    /// `LedgerConfig::enforce_solvency` is set, non-coinbase senders must
    /// also have a running balance at least `value` before the
    /// transaction is accepted.
    pub fn add_transaction(
        &mut self,
        sender_blockchain_address: &str,
        recipient_blockchain_address: &str,
        value: f64,
        sender_public_key: Option<&str>,
        signature: Option<&str>,
    ) -> bool {
        if sender_blockchain_address != MINING_SENDER {
            let Some(public_key) = sender_public_key else {
                return false;
            };
            let Some(signature) = signature else {
                return false;
            };
            if !crypto::verify(
                public_key,
                signature,
                sender_blockchain_address,
                recipient_blockchain_address,
                value,
            ) {
                return false;
            }

            if self.config.enforce_solvency {
                let balance = self.calculate_total_amount(sender_blockchain_address);
                if balance < value {
                    return false;
                }
            }
        }

        self.pool.push(Transaction {
            sender_blockchain_address: sender_blockchain_address.to_string(),
            recipient_blockchain_address: recipient_blockchain_address.to_string(),
            value,
        });
        true
    }

    /// Sums credits and debits for `address` across sealed blocks only;
    /// the pending pool is never counted.
    pub fn calculate_total_amount(&self, address: &str) -> f64 {
        let mut total = 0.0;
        for block in &self.chain {
            for tx in &block.transactions {
                if tx.recipient_blockchain_address == address {
                    total += tx.value;
                }
                if tx.sender_blockchain_address == address {
                    total -= tx.value;
                }
            }
        }
        total
    }

    /// Checks linkage (I2) and proof-of-work (I3) for every block after
    /// genesis. The genesis block itself is not independently validated
    /// beyond being present.
    pub fn valid_chain(chain: &[Block]) -> bool {
        if chain.is_empty() {
            return false;
        }
        for i in 1..chain.len() {
            let previous = &chain[i - 1];
            let current = &chain[i];

            if current.previous_hash != previous.hash() {
                return false;
            }
            if !current.satisfies_difficulty() {
                return false;
            }
        }
        true
    }

    /// Replaces the local chain with `candidate` if it is both valid and
    /// strictly longer. Returns whether the replacement happened. Never
    /// touches the pool.
    pub fn replace_chain(&mut self, candidate: Vec<Block>) -> bool {
        if candidate.len() <= self.chain.len() {
            return false;
        }
        if !Self::valid_chain(&candidate) {
            return false;
        }
        self.chain = candidate;
        true
    }

    /// Appends `block` to the chain (used only by the miner, which has
    /// already produced a block satisfying linkage and difficulty) and
    /// clears the pool.
    pub(crate) fn append_block(&mut self, block: Block) {
        self.chain.push(block);
        self.clear_pool();
    }

    /// Drops all pending transactions. Called on local block append and
    /// on a peer's block-gossip DELETE.
    pub fn clear_pool(&mut self) {
        self.pool.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::Keypair;

    fn fresh_ledger() -> Ledger {
        Ledger::new(LedgerConfig::default(), 0.0)
    }

    #[test]
    fn genesis_chain_is_valid() {
        let ledger = fresh_ledger();
        assert_eq!(ledger.chain().len(), 1);
        assert!(Ledger::valid_chain(ledger.chain()));
    }

    #[test]
    fn coinbase_transaction_bypasses_signature_check() {
        let mut ledger = fresh_ledger();
        assert!(ledger.add_transaction(MINING_SENDER, "miner", 1.0, None, None));
        assert_eq!(ledger.pool().len(), 1);
    }

    #[test]
    fn unsigned_non_coinbase_transaction_is_rejected() {
        let mut ledger = fresh_ledger();
        assert!(!ledger.add_transaction("A", "B", 1.0, None, None));
        assert!(ledger.pool().is_empty());
    }

    #[test]
    fn validly_signed_transaction_is_accepted() {
        let mut ledger = fresh_ledger();
        let keypair = Keypair::generate();
        let (sender, signature) = keypair.sign("B", 1.0);
        let accepted = ledger.add_transaction(
            &sender,
            "B",
            1.0,
            Some(&keypair.public_key_hex()),
            Some(&signature),
        );
        assert!(accepted);
        assert_eq!(ledger.pool().len(), 1);
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let mut ledger = fresh_ledger();
        let keypair = Keypair::generate();
        let (sender, signature) = keypair.sign("B", 1.0);
        let accepted = ledger.add_transaction(
            &sender,
            "B",
            2.0, // value mismatch invalidates the signature
            Some(&keypair.public_key_hex()),
            Some(&signature),
        );
        assert!(!accepted);
    }

    #[test]
    fn solvency_policy_rejects_overdrawn_sender() {
        let mut ledger = Ledger::new(
            LedgerConfig {
                enforce_solvency: true,
            },
            0.0,
        );
        let keypair = Keypair::generate();
        let (sender, signature) = keypair.sign("B", 5.0);
        let accepted = ledger.add_transaction(
            &sender,
            "B",
            5.0,
            Some(&keypair.public_key_hex()),
            Some(&signature),
        );
        assert!(!accepted, "sender has zero balance and should be rejected");
    }

    #[test]
    fn calculate_total_amount_only_counts_sealed_blocks() {
        let mut ledger = fresh_ledger();
        ledger.add_transaction(MINING_SENDER, "M", 10.0, None, None);
        // Still in the pool: must not count yet.
        assert_eq!(ledger.calculate_total_amount("M"), 0.0);

        let block = Block {
            timestamp: 1.0,
            transactions: ledger.pool().to_vec(),
            nonce: 0,
            previous_hash: ledger.last_block().hash(),
        };
        ledger.append_block(block);

        assert_eq!(ledger.calculate_total_amount("M"), 10.0);
        assert!(ledger.pool().is_empty());
    }

    #[test]
    fn replace_chain_rejects_shorter_or_equal_length() {
        let mut ledger = fresh_ledger();
        let same_length = ledger.chain().to_vec();
        assert!(!ledger.replace_chain(same_length));
    }

    #[test]
    fn replace_chain_rejects_invalid_candidate() {
        let mut ledger = fresh_ledger();
        let mut candidate = ledger.chain().to_vec();
        candidate.push(Block {
            timestamp: 1.0,
            transactions: Vec::new(),
            nonce: 0,
            previous_hash: "not-the-real-previous-hash".to_string(),
        });
        assert!(!ledger.replace_chain(candidate));
    }

    #[test]
    fn replace_chain_accepts_longer_valid_candidate() {
        let mut ledger = fresh_ledger();
        let mut candidate = ledger.chain().to_vec();
        let previous_hash = candidate.last().unwrap().hash();
        let mut nonce = 0u64;
        loop {
            if Block::proof_hash(&[], nonce, &previous_hash)
                .starts_with(&"0".repeat(crate::types::MINING_DIFFICULTY))
            {
                break;
            }
            nonce += 1;
        }
        candidate.push(Block {
            timestamp: 1.0,
            transactions: Vec::new(),
            nonce,
            previous_hash,
        });
        assert!(ledger.replace_chain(candidate));
        assert_eq!(ledger.chain().len(), 2);
    }
}
