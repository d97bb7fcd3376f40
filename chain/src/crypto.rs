// chain/src/crypto.rs

//! ECDSA-P256 signature verification and Base58 address derivation.
//!
//! Both routines are collaborator-level concerns per the core's scope —
//! the ledger only needs a yes/no answer and an opaque address string —
//! but are implemented here (not stubbed) so the wire API and tests run
//! end to end.

use p256::ecdsa::signature::hazmat::PrehashVerifier;
use p256::ecdsa::{Signature, VerifyingKey};
use ripemd::Ripemd160;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::codec;

/// The three fields signed over and verified against, key-sorted by
/// `codec::hash` the same way a block or proof payload is.
#[derive(Serialize)]
struct SignedPayload<'a> {
    sender_blockchain_address: &'a str,
    recipient_blockchain_address: &'a str,
    value: f64,
}

/// Verifies that `signature_hex` over `{sender, recipient, value}` was
/// produced by the private key matching `public_key_hex`.
///
/// `public_key_hex` is a 64-byte hex string: the raw, uncompressed
/// `X||Y` coordinate pair without the SEC1 `0x04` prefix, matching
/// Python's `ecdsa` `VerifyingKey.to_string()` convention. `signature_hex`
/// is a 64-byte hex string: raw `r||s`, matching `SigningKey.sign()`'s
/// default output with no ASN.1 wrapping.
///
/// Any decoding failure or a genuinely invalid signature both return
/// `false` — this function never returns an error, per the core's
/// "verification failure is silent rejection" contract.
pub fn verify(
    public_key_hex: &str,
    signature_hex: &str,
    sender_blockchain_address: &str,
    recipient_blockchain_address: &str,
    value: f64,
) -> bool {
    let Some(verifying_key) = decode_verifying_key(public_key_hex) else {
        return false;
    };
    let Some(signature) = decode_signature(signature_hex) else {
        return false;
    };

    let payload = SignedPayload {
        sender_blockchain_address,
        recipient_blockchain_address,
        value,
    };
    let digest = Sha256::digest(codec::canonical_json(&payload).as_bytes());

    verifying_key.verify_prehash(&digest, &signature).is_ok()
}

fn decode_verifying_key(public_key_hex: &str) -> Option<VerifyingKey> {
    let raw = hex::decode(public_key_hex).ok()?;
    if raw.len() != 64 {
        return None;
    }
    let mut sec1 = Vec::with_capacity(65);
    sec1.push(0x04);
    sec1.extend_from_slice(&raw);
    VerifyingKey::from_sec1_bytes(&sec1).ok()
}

fn decode_signature(signature_hex: &str) -> Option<Signature> {
    let raw = hex::decode(signature_hex).ok()?;
    Signature::from_slice(&raw).ok()
}

/// Derives a Base58 blockchain address from a raw (uncompressed, no
/// `0x04` prefix) hex-encoded public key.
///
/// Pipeline: SHA-256 the public key bytes, RIPEMD-160 that digest,
/// prepend a `0x00` version byte, double-SHA-256 the result and keep
/// the first 4 bytes as a checksum, concatenate version+payload with
/// the checksum, then Base58-encode the whole thing.
///
/// Returns `None` if `public_key_hex` is not valid hex.
pub fn derive_address(public_key_hex: &str) -> Option<String> {
    let public_key_bytes = hex::decode(public_key_hex).ok()?;

    let sha256_digest = Sha256::digest(&public_key_bytes);
    let ripemd_digest = Ripemd160::digest(sha256_digest);

    let mut versioned = Vec::with_capacity(1 + ripemd_digest.len());
    versioned.push(0x00u8);
    versioned.extend_from_slice(&ripemd_digest);

    let checksum_source = Sha256::digest(Sha256::digest(&versioned));
    let checksum = &checksum_source[0..4];

    let mut payload = versioned;
    payload.extend_from_slice(checksum);

    Some(bs58::encode(payload).into_string())
}
