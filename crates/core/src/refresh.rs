//! Periodic fetch-and-build loop.
//!
//! The loop owns the dashboard state and publishes it through a
//! [`tokio::sync::watch`] channel. Readers get cheap clones of the latest
//! state and never block the loop.
//!
//! ```text
//!   Loading ──first build──▶ Ready ──every tick──▶ Ready (snapshot replaced)
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::models::snapshot::Snapshot;
use crate::services::snapshot_service::SnapshotPipeline;

/// Latest completed refresh.
#[derive(Debug, Clone, Serialize)]
pub struct ReadyState {
    pub snapshot: Arc<Snapshot>,
    pub refreshed_at: DateTime<Utc>,
    /// Completed refreshes since the loop started (1 on the first Ready).
    pub refresh_count: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardState {
    /// No refresh has completed yet; `snapshot` is empty.
    Loading { snapshot: Arc<Snapshot> },
    Ready(ReadyState),
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading { .. })
    }

    pub fn snapshot(&self) -> &Snapshot {
        match self {
            DashboardState::Loading { snapshot } => snapshot,
            DashboardState::Ready(ready) => &ready.snapshot,
        }
    }

    pub fn refresh_count(&self) -> u64 {
        match self {
            DashboardState::Loading { .. } => 0,
            DashboardState::Ready(ready) => ready.refresh_count,
        }
    }
}

/// Start the refresh loop on the current tokio runtime.
///
/// The first refresh runs immediately; later ones every `interval`.
/// Must be called from within a tokio runtime.
pub fn spawn_refresh_loop(pipeline: Arc<SnapshotPipeline>, interval: Duration) -> RefreshHandle {
    let initial = DashboardState::Loading {
        snapshot: Arc::new(pipeline.placeholder()),
    };
    let (tx, rx) = watch::channel(initial);
    let cancel = CancellationToken::new();

    let task = tokio::spawn(run_loop(pipeline, interval, tx, cancel.clone()));

    RefreshHandle {
        state: rx,
        cancel,
        task: Some(task),
    }
}

async fn run_loop(
    pipeline: Arc<SnapshotPipeline>,
    interval: Duration,
    tx: watch::Sender<DashboardState>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut refresh_count: u64 = 0;

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let snapshot = pipeline.run_once().await;

        // A fetch that raced teardown completes, but nobody gets to see it.
        if cancel.is_cancelled() {
            debug!("discarding snapshot that finished after teardown");
            break;
        }

        refresh_count += 1;
        if refresh_count == 1 {
            info!(
                total_usd = snapshot.total_locked_value_usd(),
                live = snapshot.reference_price().is_live(),
                "dashboard ready"
            );
        } else {
            debug!(
                refresh_count,
                total_usd = snapshot.total_locked_value_usd(),
                "snapshot refreshed"
            );
        }

        tx.send_replace(DashboardState::Ready(ReadyState {
            snapshot: Arc::new(snapshot),
            refreshed_at: Utc::now(),
            refresh_count,
        }));
    }

    info!(refresh_count, "refresh loop stopped");
}

/// Owner's handle on a running refresh loop.
///
/// Tearing down is explicit ([`RefreshHandle::shutdown`]) and happens once:
/// `shutdown` consumes the handle. Dropping the handle also stops the loop.
pub struct RefreshHandle {
    state: watch::Receiver<DashboardState>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Clone of the latest published state.
    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// A receiver that observes every state the loop publishes from now on.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.clone()
    }

    /// Wait until the first refresh has completed.
    ///
    /// Returns the Loading state unchanged if the loop stops before that.
    pub async fn ready(&self) -> DashboardState {
        let mut rx = self.state.clone();
        let result = rx.wait_for(|s| !s.is_loading()).await.map(|s| (*s).clone());
        match result {
            Ok(state) => state,
            Err(_) => rx.borrow().clone(),
        }
    }

    /// Cancel the timer and wait for the loop task to exit.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                debug!(error = %e, "refresh task ended abnormally");
            }
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
