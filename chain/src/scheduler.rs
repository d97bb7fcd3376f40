// chain/src/scheduler.rs

//! Single-flight periodic drivers for mining and peer refresh.
//!
//! Each loop owns a `tokio::sync::Mutex<()>` permit, the same shared-state
//! idiom the teacher uses for `AppState`'s fields. A tick that finds the
//! permit already held (a prior tick is still running) skips itself
//! silently instead of queueing — this is what enforces "at most one
//! mining operation and one peer-discovery operation in flight."

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Fixed interval, in seconds, between mining-loop ticks.
pub const MINING_TIMER_SEC: u64 = 20;
/// Fixed interval, in seconds, between peer-refresh ticks.
pub const NEIGHBOURS_SYNC_SEC: u64 = 20;

/// A one-slot, non-blocking permit.
///
/// Wraps a `tokio::sync::Mutex<()>` purely for its `try_lock` semantics;
/// the unit payload is never inspected.
#[derive(Clone, Default)]
pub struct Permit(Arc<Mutex<()>>);

impl Permit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to acquire the permit without blocking. Returns `true`
    /// and holds it for the duration of `body` if free; returns `false`
    /// immediately (running nothing) if already held.
    async fn try_run<F, Fut>(&self, body: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        match self.0.clone().try_lock_owned() {
            Ok(_guard) => {
                body().await;
                true
            }
            Err(_) => false,
        }
    }
}

/// Bundles the two periodic-task permits a node needs.
#[derive(Clone, Default)]
pub struct Scheduler {
    pub mining: Permit,
    pub peer_refresh: Permit,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts a single mining run through the same permit the periodic
    /// loop uses, so a manual `GET /mine` can never race a scheduled tick.
    /// Returns `None` if the permit was already held.
    pub async fn try_mine<F, Fut, T>(&self, body: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let mut result = None;
        let ran = self
            .mining
            .try_run(|| async {
                result = Some(body().await);
            })
            .await;
        if ran { result } else { None }
    }

    /// Spawns the mining loop: every `MINING_TIMER_SEC`, try to acquire
    /// `self.mining` and run `mine_tick`; skip silently if it's already
    /// held. Stops arming further ticks once `cancel` is triggered.
    pub fn spawn_mining_loop<F, Fut>(&self, cancel: CancellationToken, mine_tick: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let permit = self.mining.clone();
        tokio::spawn(async move {
            run_periodic(cancel, Duration::from_secs(MINING_TIMER_SEC), permit, mine_tick).await;
        });
    }

    /// Spawns the peer-refresh loop: identical pattern, with
    /// `NEIGHBOURS_SYNC_SEC` and `self.peer_refresh`.
    pub fn spawn_peer_refresh_loop<F, Fut>(&self, cancel: CancellationToken, refresh_tick: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let permit = self.peer_refresh.clone();
        tokio::spawn(async move {
            run_periodic(
                cancel,
                Duration::from_secs(NEIGHBOURS_SYNC_SEC),
                permit,
                refresh_tick,
            )
            .await;
        });
    }
}

async fn run_periodic<F, Fut>(cancel: CancellationToken, period: Duration, permit: Permit, tick: F)
where
    F: Fn() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut interval = tokio::time::interval(period);
    // The first tick fires immediately; consume it so the loop waits a
    // full period before its first attempt, matching a re-arm-at-end-of-tick
    // timer rather than a fire-on-start one.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("scheduler loop stopping on cancellation");
                return;
            }
            _ = interval.tick() => {
                let ran = permit.try_run(&tick).await;
                if !ran {
                    tracing::debug!("permit already held, skipping tick");
                }
            }
        }
    }
}
