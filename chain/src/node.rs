// chain/src/node.rs

//! The bundled domain object: one `Node` per running process, owning
//! the ledger plus everything that drives it. Generalizes the teacher's
//! `DefaultConsensusEngine` type alias + `AppState` bundle into a single
//! struct with high-level async methods, so wire-API handlers and the
//! scheduler both call through the same surface.

use std::collections::HashSet;

use crate::gossip::{self, PeerClient};
use crate::ledger::{Ledger, LedgerConfig};
use crate::miner::Miner;
use crate::peers::PeerFinder;
use crate::types::Block;

/// Everything a running node needs: the ledger, the miner, the peer
/// finder and gossip client, the currently known peer set, and this
/// node's own identity.
pub struct Node {
    ledger: Ledger,
    miner: Miner,
    peer_finder: PeerFinder,
    peer_client: PeerClient,
    peers: HashSet<String>,
    /// This node's own `host:port`, used to exclude itself from
    /// discovery and as the gossip target identity.
    self_address: String,
    /// Blockchain address coinbase rewards are credited to.
    reward_address: String,
}

impl Node {
    pub fn new(
        ledger_config: LedgerConfig,
        genesis_timestamp: f64,
        self_address: String,
        reward_address: String,
        peer_finder: PeerFinder,
    ) -> Self {
        Self {
            ledger: Ledger::new(ledger_config, genesis_timestamp),
            miner: Miner::new(),
            peer_finder,
            peer_client: PeerClient::new(),
            peers: HashSet::new(),
            self_address,
            reward_address,
        }
    }

    pub fn chain(&self) -> &[Block] {
        self.ledger.chain()
    }

    pub fn pool(&self) -> &[crate::types::Transaction] {
        self.ledger.pool()
    }

    pub fn peers(&self) -> &HashSet<String> {
        &self.peers
    }

    pub fn calculate_total_amount(&self, address: &str) -> f64 {
        self.ledger.calculate_total_amount(address)
    }

    /// `PUT /transactions`: accepts into the pool, no gossip.
    pub fn add_transaction(
        &mut self,
        sender_blockchain_address: &str,
        recipient_blockchain_address: &str,
        value: f64,
        sender_public_key: Option<&str>,
        signature: Option<&str>,
    ) -> bool {
        self.ledger.add_transaction(
            sender_blockchain_address,
            recipient_blockchain_address,
            value,
            sender_public_key,
            signature,
        )
    }

    /// `POST /transactions`: accepts into the pool and, on success,
    /// gossips the transaction to every known peer.
    pub async fn create_transaction(
        &mut self,
        sender_blockchain_address: &str,
        recipient_blockchain_address: &str,
        value: f64,
        sender_public_key: Option<&str>,
        signature: Option<&str>,
    ) -> bool {
        let accepted = self.add_transaction(
            sender_blockchain_address,
            recipient_blockchain_address,
            value,
            sender_public_key,
            signature,
        );

        if accepted {
            let public_key = sender_public_key.unwrap_or_default();
            let signature = signature.unwrap_or_default();
            for peer in self.peers.clone() {
                self.peer_client
                    .broadcast_transaction(
                        &peer,
                        sender_blockchain_address,
                        recipient_blockchain_address,
                        value,
                        public_key,
                        signature,
                    )
                    .await;
            }
        }

        accepted
    }

    /// `DELETE /transactions`.
    pub fn clear_pool(&mut self) {
        self.ledger.clear_pool();
    }

    /// Runs one proof-of-work attempt, then notifies peers that a block
    /// was produced (pool-clear hint) and asks them to run consensus.
    pub async fn mine_once(&mut self, now: f64) -> (Block, String) {
        let (block, hash) = self.miner.mine_once(&mut self.ledger, &self.reward_address, now);

        for peer in self.peers.clone() {
            self.peer_client.broadcast_pool_cleared(&peer).await;
            self.peer_client.trigger_consensus(&peer).await;
        }

        (block, hash)
    }

    /// Re-sweeps the LAN subnet and replaces the peer set.
    pub fn refresh_peers(&mut self) {
        self.peers = self.peer_finder.refresh();
    }

    /// Runs longest-valid-chain consensus against the current peer set.
    pub async fn resolve_conflicts(&mut self) -> bool {
        gossip::resolve_conflicts(&mut self.ledger, &self.peer_client, &self.peers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_node() -> Node {
        Node::new(
            LedgerConfig::default(),
            0.0,
            "127.0.0.1:5000".to_string(),
            "miner-address".to_string(),
            PeerFinder::new("127.0.0.1", 5000),
        )
    }

    #[tokio::test]
    async fn mine_once_with_no_peers_still_seals_a_block() {
        let mut node = test_node();
        let (block, hash) = node.mine_once(1.0).await;
        assert!(block.satisfies_difficulty());
        assert_eq!(node.chain().len(), 2);
        assert_eq!(node.chain().last().unwrap().hash(), hash);
    }

    #[tokio::test]
    async fn create_transaction_with_no_peers_returns_add_transaction_result() {
        let mut node = test_node();
        let accepted = node
            .create_transaction("THE BLOCKCHAIN", "someone", 1.0, None, None)
            .await;
        assert!(accepted);
        assert_eq!(node.pool().len(), 1);
    }

    #[test]
    fn refresh_peers_updates_peer_set_for_non_ipv4_host_to_empty() {
        let mut node = Node::new(
            LedgerConfig::default(),
            0.0,
            "node.local:5000".to_string(),
            "miner".to_string(),
            PeerFinder::new("node.local", 5000),
        );
        node.refresh_peers();
        assert!(node.peers().is_empty());
    }
}
