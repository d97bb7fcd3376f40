// chain/src/types/transaction.rs

//! Transaction data model.

use serde::{Deserialize, Serialize};

/// Sentinel sender address for the fixed coinbase reward.
pub const MINING_SENDER: &str = "THE BLOCKCHAIN";

/// Fixed reward paid to the miner's own address for each sealed block.
pub const MINING_REWARD: f64 = 1.0;

/// An immutable transfer of `value` from `sender_blockchain_address` to
/// `recipient_blockchain_address`.
///
/// Field names are the wire names, not abstract `sender`/`recipient`:
/// they are also the keys hashed and signed over, so the struct doubles
/// as both the wire DTO and the signing payload with one `Serialize`
/// impl. Signatures and public keys are never part of this type — they
/// are presented once at submission, checked, and discarded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender_blockchain_address: String,
    pub recipient_blockchain_address: String,
    pub value: f64,
}

impl Transaction {
    /// Builds the fixed coinbase transaction credited to `recipient`.
    pub fn coinbase(recipient: impl Into<String>) -> Self {
        Self {
            sender_blockchain_address: MINING_SENDER.to_string(),
            recipient_blockchain_address: recipient.into(),
            value: MINING_REWARD,
        }
    }

    /// Whether this transaction is the coinbase reward, exempt from
    /// signature verification and solvency checks.
    pub fn is_coinbase(&self) -> bool {
        self.sender_blockchain_address == MINING_SENDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coinbase_transaction_has_fixed_sender_and_reward() {
        let tx = Transaction::coinbase("miner-address");
        assert!(tx.is_coinbase());
        assert_eq!(tx.recipient_blockchain_address, "miner-address");
        assert_eq!(tx.value, MINING_REWARD);
    }

    #[test]
    fn ordinary_transaction_is_not_coinbase() {
        let tx = Transaction {
            sender_blockchain_address: "A".to_string(),
            recipient_blockchain_address: "B".to_string(),
            value: 1.0,
        };
        assert!(!tx.is_coinbase());
    }
}
