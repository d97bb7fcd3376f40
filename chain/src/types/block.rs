// chain/src/types/block.rs

//! Block types and the two canonical hash forms.

use serde::Serialize;

use super::Transaction;
use crate::codec;

/// Required count of leading `'0'` hex characters in a block's proof hash.
pub const MINING_DIFFICULTY: usize = 3;

/// An ordered record sealed by the miner.
///
/// The canonical form used for chain linkage (`previous_hash` of the
/// next block) is the key-sorted mapping of all four fields below,
/// including `timestamp`. This is deliberately *not* the same mapping
/// used to check proof-of-work — see [`ProofPayload`].
#[derive(Clone, Debug, Serialize)]
pub struct Block {
    /// Wall-clock seconds when the block was sealed. Informational only;
    /// included in the hash but not otherwise load-bearing.
    pub timestamp: f64,
    /// Transactions captured when the block was sealed, coinbase last.
    pub transactions: Vec<Transaction>,
    /// Nonce satisfying proof-of-work at the fixed difficulty.
    pub nonce: u64,
    /// Hex digest of the prior block's canonical (4-field) form.
    pub previous_hash: String,
}

/// The 3-field mapping hashed during proof-of-work search and
/// re-validated by [`Block::proof_hash`].
///
/// This intentionally omits `timestamp`: §4.4's asymmetry means a
/// miner's nonce search and a validator's difficulty re-check must hash
/// the same bytes regardless of when the block happened to be sealed.
#[derive(Serialize)]
struct ProofPayload<'a> {
    transactions: &'a [Transaction],
    nonce: u64,
    previous_hash: &'a str,
}

impl Block {
    /// Builds the genesis block: `nonce = 0`, `previous_hash = H({})`,
    /// no transactions.
    pub fn genesis(timestamp: f64) -> Self {
        let empty: serde_json::Value = serde_json::json!({});
        Self {
            timestamp,
            transactions: Vec::new(),
            nonce: 0,
            previous_hash: codec::hash(&empty),
        }
    }

    /// `H(block)` over the full 4-field canonical form. Used as the
    /// `previous_hash` of the next block and as block identity on the
    /// wire.
    pub fn hash(&self) -> String {
        codec::hash(self)
    }

    /// `H({transactions, nonce, previous_hash})`, the 3-field form
    /// checked against the difficulty. Used both by the miner's nonce
    /// search and by `valid_chain`'s proof-of-work re-check.
    pub fn proof_hash(transactions: &[Transaction], nonce: u64, previous_hash: &str) -> String {
        let payload = ProofPayload {
            transactions,
            nonce,
            previous_hash,
        };
        codec::hash(&payload)
    }

    /// Whether this block's proof hash satisfies the fixed difficulty.
    pub fn satisfies_difficulty(&self) -> bool {
        let proof = Self::proof_hash(&self.transactions, self.nonce, &self.previous_hash);
        leading_zero_hex_chars(&proof) >= MINING_DIFFICULTY
    }
}

/// Counts leading `'0'` hex characters in `hex_digest`.
pub fn leading_zero_hex_chars(hex_digest: &str) -> usize {
    hex_digest.chars().take_while(|&c| c == '0').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_previous_hash_matches_empty_mapping_hash() {
        let genesis = Block::genesis(0.0);
        assert_eq!(
            genesis.previous_hash,
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
        assert_eq!(genesis.nonce, 0);
        assert!(genesis.transactions.is_empty());
    }

    #[test]
    fn proof_hash_ignores_timestamp() {
        let txs = vec![Transaction::coinbase("miner")];
        let a = Block {
            timestamp: 1.0,
            transactions: txs.clone(),
            nonce: 7,
            previous_hash: "abc".to_string(),
        };
        let b = Block {
            timestamp: 999.0,
            transactions: txs,
            nonce: 7,
            previous_hash: "abc".to_string(),
        };
        assert_eq!(
            Block::proof_hash(&a.transactions, a.nonce, &a.previous_hash),
            Block::proof_hash(&b.transactions, b.nonce, &b.previous_hash)
        );
    }

    #[test]
    fn block_hash_changes_with_timestamp() {
        let txs = vec![Transaction::coinbase("miner")];
        let a = Block {
            timestamp: 1.0,
            transactions: txs.clone(),
            nonce: 7,
            previous_hash: "abc".to_string(),
        };
        let b = Block {
            timestamp: 2.0,
            transactions: txs,
            nonce: 7,
            previous_hash: "abc".to_string(),
        };
        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn leading_zero_count_is_exact() {
        assert_eq!(leading_zero_hex_chars("000abc"), 3);
        assert_eq!(leading_zero_hex_chars("0a0bc"), 1);
        assert_eq!(leading_zero_hex_chars("abc"), 0);
    }
}
