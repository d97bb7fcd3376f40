//! Shared application state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use chain::{Node, Scheduler};

/// Shared state held by the API and background tasks.
///
/// This is wrapped in an [`Arc`] and passed to request handlers via
/// Axum's `State` extractor. All mutations to the embedded `Node` (and
/// therefore to its ledger) go through the single `Mutex`, and mining
/// attempts — whether from `GET /mine` or the periodic loop — go
/// through the one `Scheduler` permit, satisfying the "at most one
/// concurrent mining operation" invariant regardless of which caller
/// triggers it.
pub struct AppState {
    pub node: Mutex<Node>,
    pub scheduler: Scheduler,
    pub cancel: CancellationToken,
    mining_started: AtomicBool,
}

/// Thread-safe alias for `AppState`.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(node: Node, cancel: CancellationToken) -> Self {
        Self {
            node: Mutex::new(node),
            scheduler: Scheduler::new(),
            cancel,
            mining_started: AtomicBool::new(false),
        }
    }

    /// Starts the periodic mining and peer-refresh loops exactly once; a
    /// repeated call is a no-op, so `GET /mine/start` is idempotent.
    pub fn start_background_loops(self: &Arc<Self>) {
        if self.mining_started.swap(true, Ordering::SeqCst) {
            return;
        }

        let mining_state = self.clone();
        self.scheduler.spawn_mining_loop(self.cancel.clone(), move || {
            let state = mining_state.clone();
            async move {
                let mut node = state.node.lock().await;
                node.mine_once(now()).await;
            }
        });

        let refresh_state = self.clone();
        self.scheduler
            .spawn_peer_refresh_loop(self.cancel.clone(), move || {
                let state = refresh_state.clone();
                async move {
                    let mut node = state.node.lock().await;
                    node.refresh_peers();
                }
            });
    }
}

pub fn now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}
