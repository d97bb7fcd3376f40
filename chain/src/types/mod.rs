//! Core domain types used by the chain.
//!
//! This module defines the transaction and block record shapes shared
//! across the ledger, miner, gossip, and wire layers. There is no
//! newtype-per-hash indirection here: addresses and hashes are plain
//! `String`s, because the canonical encoding that matters is the JSON
//! mapping itself (see [`crate::codec`]), not an in-memory byte layout.

pub mod block;
pub mod transaction;

pub use block::{Block, MINING_DIFFICULTY, leading_zero_hex_chars};
pub use transaction::{MINING_REWARD, MINING_SENDER, Transaction};
