// chain/src/gossip.rs

//! Peer gossip calls and longest-chain consensus.
//!
//! `PeerClient` is the async counterpart of the teacher's
//! `ml_client::http::HttpMlVerifier`: a small struct wrapping a
//! `reqwest::Client` with one method per remote call, errors collapsed
//! to a swallow-and-log outcome rather than propagated, since a single
//! unreachable peer must never fail the calling operation.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;
use crate::types::{Block, Transaction};

const PEER_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
struct TransactionPayload<'a> {
    sender_blockchain_address: &'a str,
    recipient_blockchain_address: &'a str,
    value: f64,
    sender_public_key: &'a str,
    signature: &'a str,
}

#[derive(Deserialize)]
struct ChainResponse {
    chain: Vec<WireBlock>,
}

/// Wire shape of a block as returned by a peer's `GET /chain`.
#[derive(Deserialize)]
struct WireBlock {
    timestamp: f64,
    transactions: Vec<Transaction>,
    nonce: u64,
    previous_hash: String,
}

impl From<WireBlock> for Block {
    fn from(wire: WireBlock) -> Self {
        Block {
            timestamp: wire.timestamp,
            transactions: wire.transactions,
            nonce: wire.nonce,
            previous_hash: wire.previous_hash,
        }
    }
}

/// HTTP client for the four peer-facing gossip calls.
pub struct PeerClient {
    http: reqwest::Client,
}

impl PeerClient {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(PEER_REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client with a fixed timeout must build");
        Self { http }
    }

    /// PUTs a transaction to `peer`'s `/transactions` endpoint. Failures
    /// are logged and swallowed — gossip has no retry.
    pub async fn broadcast_transaction(
        &self,
        peer: &str,
        sender_blockchain_address: &str,
        recipient_blockchain_address: &str,
        value: f64,
        sender_public_key: &str,
        signature: &str,
    ) {
        let payload = TransactionPayload {
            sender_blockchain_address,
            recipient_blockchain_address,
            value,
            sender_public_key,
            signature,
        };
        let url = format!("http://{peer}/transactions");
        if let Err(e) = self.http.put(&url).json(&payload).send().await {
            tracing::debug!(%peer, error = %e, "failed to gossip transaction to peer");
        }
    }

    /// DELETEs `peer`'s `/transactions` to signal that a block was
    /// produced locally and pools should clear.
    pub async fn broadcast_pool_cleared(&self, peer: &str) {
        let url = format!("http://{peer}/transactions");
        if let Err(e) = self.http.delete(&url).send().await {
            tracing::debug!(%peer, error = %e, "failed to notify peer of pool clear");
        }
    }

    /// PUTs `peer`'s `/consensus` endpoint, asking it to run
    /// `resolve_conflicts` on its own end.
    pub async fn trigger_consensus(&self, peer: &str) {
        let url = format!("http://{peer}/consensus");
        if let Err(e) = self.http.put(&url).send().await {
            tracing::debug!(%peer, error = %e, "failed to trigger consensus on peer");
        }
    }

    /// GETs `peer`'s `/chain`. Returns `None` on any I/O or decode
    /// failure — the caller treats a missing response the same as an
    /// unreachable peer.
    pub async fn fetch_chain(&self, peer: &str) -> Option<Vec<Block>> {
        let url = format!("http://{peer}/chain");
        let response = match self.http.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(%peer, error = %e, "failed to fetch chain from peer");
                return None;
            }
        };
        match response.json::<ChainResponse>().await {
            Ok(parsed) => Some(parsed.chain.into_iter().map(Block::from).collect()),
            Err(e) => {
                tracing::debug!(%peer, error = %e, "failed to decode peer chain response");
                None
            }
        }
    }
}

impl Default for PeerClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Visits every peer's `/chain`, adopts the longest valid candidate
/// seen if it strictly exceeds the local chain's length, and returns
/// whether a replacement happened. Ties retain the local chain. Never
/// clears the pool.
pub async fn resolve_conflicts(
    ledger: &mut Ledger,
    client: &PeerClient,
    peers: &HashSet<String>,
) -> bool {
    let mut longest: Option<Vec<Block>> = None;
    let mut longest_len = ledger.chain().len();

    for peer in peers {
        let Some(candidate) = client.fetch_chain(peer).await else {
            continue;
        };
        if candidate.len() > longest_len && Ledger::valid_chain(&candidate) {
            longest_len = candidate.len();
            longest = Some(candidate);
        }
    }

    match longest {
        Some(chain) => ledger.replace_chain(chain),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerConfig;

    #[tokio::test]
    async fn resolve_conflicts_is_a_noop_with_no_peers() {
        let mut ledger = Ledger::new(LedgerConfig::default(), 0.0);
        let client = PeerClient::new();
        let replaced = resolve_conflicts(&mut ledger, &client, &HashSet::new()).await;
        assert!(!replaced);
        assert_eq!(ledger.chain().len(), 1);
    }
}
