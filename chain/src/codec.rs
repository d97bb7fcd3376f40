// chain/src/codec.rs

//! Canonical JSON encoding and SHA-256 hashing.
//!
//! Every hash in the system — block linkage, proof-of-work difficulty,
//! transaction signing — goes through the single routine in this module.
//! Key ordering must agree across nodes or proof-of-work and signature
//! checks stop being reproducible, so this is the one place that is
//! allowed to know about serialization.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Serializes `value` to its canonical JSON text.
///
/// `serde_json::Value`'s `Map` is backed by a `BTreeMap` as long as the
/// `preserve_order` feature is off (it is, here and transitively), so
/// converting through `serde_json::to_value` already sorts object keys
/// lexicographically by their UTF-8 bytes at every nesting level. What
/// `to_value` does not do on its own is guarantee the *compact* encoding
/// `to_string` produces is stable across calls, so this function is the
/// single choke point any hashing or signing code must go through rather
/// than calling `serde_json::to_string` directly on arbitrary values.
pub fn canonical_json<T: Serialize>(value: &T) -> String {
    let as_value = serde_json::to_value(value).expect("value must be representable as JSON");
    serde_json::to_string(&as_value).expect("canonical JSON value must serialize")
}

/// `H(x)`: SHA-256 of `canonical_json(x)`, returned as lowercase hex.
pub fn hash<T: Serialize>(value: &T) -> String {
    let bytes = canonical_json(value);
    let digest = Sha256::digest(bytes.as_bytes());
    hex::encode(digest)
}

/// Hashes an already-encoded canonical JSON string.
///
/// Used where the canonical text has already been built (e.g. the
/// miner's per-nonce proof hash, where rebuilding the `serde_json::Value`
/// on every iteration would be wasteful).
pub fn hash_str(canonical: &str) -> String {
    let digest = Sha256::digest(canonical.as_bytes());
    hex::encode(digest)
}
