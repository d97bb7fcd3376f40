// chain/src/error.rs

//! Error types surfaced at the wire boundary.
//!
//! The core itself never throws: the Ledger returns booleans and the
//! wire layer maps them to status codes (§7). `NodeError` exists only
//! so `node`'s handlers have something typed to map to a status code
//! and a `{"message": "..."}` body, following the teacher's manual
//! `enum` + hand-written `Display`/`Error` style rather than pulling in
//! a derive-macro error crate.

use std::fmt;

/// Errors a wire-API handler can hand back to its caller.
#[derive(Debug)]
pub enum NodeError {
    /// A request was missing a required field.
    MissingField(&'static str),
    /// `add_transaction`/`create_transaction` rejected the transaction
    /// (bad signature, or insolvent sender under the solvency policy).
    TransactionRejected,
    /// A mining attempt could not be completed.
    MiningSkipped,
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeError::MissingField(field) => write!(f, "missing required field: {field}"),
            NodeError::TransactionRejected => write!(f, "transaction rejected"),
            NodeError::MiningSkipped => write!(f, "mining skipped"),
        }
    }
}

impl std::error::Error for NodeError {}
