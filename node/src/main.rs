// node/src/main.rs

//! Proof-of-work blockchain node binary.
//!
//! Exposes the wire API from spec §6 on top of a `chain::Node`:
//!
//! - `GET /chain`
//! - `GET|POST|PUT|DELETE /transactions`
//! - `GET /mine`, `GET /mine/start`
//! - `PUT /consensus`
//! - `GET /amount`
//!
//! and drives the background mining and peer-refresh loops via
//! `chain::Scheduler`.

use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;

use chain::{Keypair, Node, NodeConfig, PeerFinder};
use node::build_router;
use node::config::{ApiConfig, local_ipv4};
use node::state::{AppState, SharedState, now};

/// A small proof-of-work blockchain node.
#[derive(Parser, Debug)]
#[command(name = "node")]
struct Cli {
    /// Port to bind the HTTP API to. The node also uses this as its own
    /// identity during LAN peer discovery.
    #[arg(long, default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "node=info,chain=info".to_string()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let node_cfg = NodeConfig::default();
    let api_cfg = ApiConfig::for_port(cli.port);

    let host = local_ipv4();
    let self_address = format!("{host}:{}", cli.port);

    // This node's own signing identity; its derived address is where
    // coinbase rewards for blocks it mines are credited.
    let keypair = Keypair::generate();
    let reward_address = keypair.address().to_string();

    let mut peer_finder = PeerFinder::new(host, cli.port);
    peer_finder.port_range = node_cfg.peer_port_range;
    peer_finder.ip_offset_range = node_cfg.peer_ip_offset_range;

    let node = Node::new(
        node_cfg.ledger,
        now(),
        self_address.clone(),
        reward_address.clone(),
        peer_finder,
    );

    tracing::info!(
        address = %self_address,
        reward_address = %reward_address,
        "node identity established"
    );

    let cancel = CancellationToken::new();
    let app_state: SharedState = Arc::new(AppState::new(node, cancel.clone()));

    let app = build_router(app_state);

    tracing::info!("node listening on http://{}", api_cfg.listen_addr);

    let listener = tokio::net::TcpListener::bind(api_cfg.listen_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {e}", api_cfg.listen_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel))
        .await
        .map_err(|e| format!("server error: {e}"))?;

    Ok(())
}

/// Waits for Ctrl-C, then cancels the background loops so they stop
/// arming further ticks before the process exits.
async fn shutdown_signal(cancel: CancellationToken) {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
    cancel.cancel();
}
