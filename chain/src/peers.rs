// chain/src/peers.rs

//! LAN peer discovery: an IPv4 subnet sweep over a port range, probing
//! each candidate with a short TCP connect.

use std::collections::HashSet;
use std::net::{Ipv4Addr, TcpStream, ToSocketAddrs};
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Parameters for a single peer-discovery sweep.
#[derive(Clone, Debug)]
pub struct PeerFinder {
    pub my_host: String,
    pub my_port: u16,
    /// `[start, end)` range of last-octet offsets from `my_host`'s own
    /// last octet, swept for each candidate address.
    pub ip_offset_range: (u8, u8),
    /// `[start, end)` range of candidate ports to probe.
    pub port_range: (u16, u16),
}

impl PeerFinder {
    pub fn new(my_host: impl Into<String>, my_port: u16) -> Self {
        Self {
            my_host: my_host.into(),
            my_port,
            ip_offset_range: (0, 1),
            port_range: (5000, 5002),
        }
    }

    /// Sweeps the configured port range and IP offsets for reachable
    /// peers, returning `host:port` strings for everything that accepted
    /// a TCP connection within the 1 s timeout — excluding this node's
    /// own address. Connect failures are swallowed (and logged at
    /// `debug`); a non-IPv4 `my_host` yields an empty set.
    pub fn refresh(&self) -> HashSet<String> {
        let Ok(my_ip) = self.my_host.parse::<Ipv4Addr>() else {
            tracing::debug!(host = %self.my_host, "peer discovery skipped: host is not IPv4");
            return HashSet::new();
        };

        let octets = my_ip.octets();
        let prefix = [octets[0], octets[1], octets[2]];
        let last = octets[3];

        let mut found = HashSet::new();
        let my_address = format!("{}:{}", self.my_host, self.my_port);

        for port in self.port_range.0..self.port_range.1 {
            for offset in self.ip_offset_range.0..self.ip_offset_range.1 {
                let candidate_last = last.wrapping_add(offset);
                let candidate_host =
                    format!("{}.{}.{}.{}", prefix[0], prefix[1], prefix[2], candidate_last);
                let candidate_address = format!("{candidate_host}:{port}");

                if candidate_address == my_address {
                    continue;
                }

                if is_reachable(&candidate_address) {
                    found.insert(candidate_address);
                }
            }
        }

        found
    }
}

fn is_reachable(address: &str) -> bool {
    let Ok(mut addrs) = address.to_socket_addrs() else {
        return false;
    };
    let Some(socket_addr) = addrs.next() else {
        return false;
    };

    match TcpStream::connect_timeout(&socket_addr, CONNECT_TIMEOUT) {
        Ok(_stream) => true,
        Err(e) => {
            tracing::debug!(%address, error = %e, "peer probe failed");
            false
        }
    }
}
