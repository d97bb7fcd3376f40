//! Chain library crate.
//!
//! This crate provides the core building blocks of a proof-of-work
//! blockchain node:
//!
//! - canonical encoding and SHA-256 hashing (`codec`),
//! - ECDSA-P256 verification and Base58 address derivation (`crypto`),
//! - a minimal keypair/signing helper (`wallet`),
//! - the transaction/block data model (`types`),
//! - the ledger: chain + pool + invariants (`ledger`),
//! - the proof-of-work miner (`miner`),
//! - LAN peer discovery (`peers`),
//! - peer gossip and longest-chain consensus (`gossip`),
//! - single-flight periodic scheduling (`scheduler`),
//! - the bundled per-process node object (`node`),
//! - and top-level configuration (`config`).
//!
//! The `node` binary crate composes these into an HTTP-served process.

pub mod codec;
pub mod config;
pub mod crypto;
pub mod error;
pub mod gossip;
pub mod ledger;
pub mod miner;
pub mod node;
pub mod peers;
pub mod scheduler;
pub mod types;
pub mod wallet;

pub use config::NodeConfig;
pub use error::NodeError;
pub use gossip::{PeerClient, resolve_conflicts};
pub use ledger::{Ledger, LedgerConfig};
pub use miner::Miner;
pub use node::Node;
pub use peers::PeerFinder;
pub use scheduler::{MINING_TIMER_SEC, NEIGHBOURS_SYNC_SEC, Scheduler};
pub use types::{Block, MINING_DIFFICULTY, MINING_REWARD, MINING_SENDER, Transaction};
pub use wallet::Keypair;
