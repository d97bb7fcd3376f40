//! Top-level configuration for a chain node.
//!
//! Generalizes the teacher's `ChainConfig` (which aggregated
//! consensus/storage/ml_client/metrics sub-configs) into the knobs this
//! core actually needs: ledger policy and peer-discovery parameters.
//! Scheduler intervals are fixed constants per §6 (`MINING_TIMER_SEC`,
//! `NEIGHBOURS_SYNC_SEC`) rather than configurable, matching the source.

use crate::ledger::LedgerConfig;

/// Default peer-scan port range, `[5000, 5002)`, per §6.
pub const DEFAULT_PORT_RANGE: (u16, u16) = (5000, 5002);
/// Default peer-scan IP offset range, `[0, 1)` (localhost-sweep sized),
/// per §6. Deployers sweeping a real subnet widen this.
pub const DEFAULT_IP_OFFSET_RANGE: (u8, u8) = (0, 1);

/// Top-level configuration for a chain node.
#[derive(Clone, Debug)]
pub struct NodeConfig {
    /// Ledger policy (currently just the solvency-check toggle).
    pub ledger: LedgerConfig,
    /// `[start, end)` port range swept during peer discovery.
    pub peer_port_range: (u16, u16),
    /// `[start, end)` IP-offset range swept during peer discovery.
    pub peer_ip_offset_range: (u8, u8),
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            peer_port_range: DEFAULT_PORT_RANGE,
            peer_ip_offset_range: DEFAULT_IP_OFFSET_RANGE,
        }
    }
}
