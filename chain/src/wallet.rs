// chain/src/wallet.rs

//! Minimal keypair generation, for tests and for the node's own coinbase
//! identity. This is not a wallet UI or a key-management story — both
//! are out of the core's scope — just enough to produce a real,
//! verifiable signature.

use p256::ecdsa::SigningKey;
use p256::ecdsa::signature::hazmat::PrehashSigner;
use rand_core::OsRng;
use sha2::{Digest, Sha256};

use crate::codec;
use crate::crypto;

/// A P-256 keypair together with the blockchain address derived from its
/// public key.
pub struct Keypair {
    signing_key: SigningKey,
    blockchain_address: String,
}

impl Keypair {
    /// Generates a fresh random keypair and derives its address.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut OsRng);
        let public_key_hex = public_key_hex_of(&signing_key);
        let blockchain_address =
            crypto::derive_address(&public_key_hex).expect("freshly generated key must be valid hex");
        Self {
            signing_key,
            blockchain_address,
        }
    }

    /// This keypair's derived blockchain address.
    pub fn address(&self) -> &str {
        &self.blockchain_address
    }

    /// Raw uncompressed public key, hex-encoded without the SEC1 `0x04`
    /// prefix (matching the wire/verification convention).
    pub fn public_key_hex(&self) -> String {
        public_key_hex_of(&self.signing_key)
    }

    /// Signs a transfer of `value` from this keypair's own address to
    /// `recipient`, returning `(sender_blockchain_address, signature_hex)`.
    pub fn sign(&self, recipient: &str, value: f64) -> (String, String) {
        let sender = self.blockchain_address.clone();

        #[derive(serde::Serialize)]
        struct SignedPayload<'a> {
            sender_blockchain_address: &'a str,
            recipient_blockchain_address: &'a str,
            value: f64,
        }
        let payload = SignedPayload {
            sender_blockchain_address: &sender,
            recipient_blockchain_address: recipient,
            value,
        };
        let digest = Sha256::digest(codec::canonical_json(&payload).as_bytes());

        let signature: p256::ecdsa::Signature = self
            .signing_key
            .sign_prehash(&digest)
            .expect("signing a fixed-size digest cannot fail");

        (sender, hex::encode(signature.to_bytes()))
    }
}

fn public_key_hex_of(signing_key: &SigningKey) -> String {
    let verifying_key = signing_key.verifying_key();
    let encoded = verifying_key.to_encoded_point(false);
    // Drop the leading 0x04 SEC1 tag; keep raw X||Y, matching the
    // wire/verification convention.
    hex::encode(&encoded.as_bytes()[1..])
}
