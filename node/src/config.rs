//! Node binary configuration.
//!
//! Only the HTTP listen address is configurable (via `--port`, see
//! `main.rs`'s `Cli`); the underlying ledger/peer-discovery parameters
//! come from `chain::NodeConfig::default()`.

use std::net::SocketAddr;

/// Configuration for the node's HTTP server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP server to.
    pub listen_addr: SocketAddr,
}

impl ApiConfig {
    /// Binds to all interfaces on `port`, per §6 ("The node binds
    /// `0.0.0.0:<port>`").
    pub fn for_port(port: u16) -> Self {
        let addr: SocketAddr = format!("0.0.0.0:{port}")
            .parse()
            .expect("0.0.0.0:<port> always parses for any u16 port");
        Self { listen_addr: addr }
    }
}

/// Best-effort local IPv4 address for this host, used as the `my_host`
/// peer-discovery parameter. Falls back to loopback when it cannot be
/// determined, matching `utils.py::get_host`'s fallback.
pub fn local_ipv4() -> String {
    // Connecting a UDP socket to an external address (without sending
    // anything) is the standard no-DNS way to ask the OS which local
    // interface would be used to reach the outside world.
    std::net::UdpSocket::bind("0.0.0.0:0")
        .and_then(|socket| {
            socket.connect("8.8.8.8:80")?;
            socket.local_addr()
        })
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|_| "127.0.0.1".to_string())
}
