pub mod errors;
pub mod models;
pub mod providers;
#[cfg(not(target_arch = "wasm32"))]
pub mod refresh;
pub mod render;
pub mod services;

use chrono::{DateTime, Utc};
use std::sync::Arc;

use errors::CoreError;
use models::{
    chart::{DistributionSlice, TrendPoint},
    settings::DashboardSettings,
    snapshot::Snapshot,
};
use providers::registry::PriceProviderRegistry;
#[cfg(not(target_arch = "wasm32"))]
use refresh::{DashboardState, RefreshHandle};
use render::PageData;
use services::{
    chart_service::ChartService,
    price_service::PriceService,
    snapshot_service::{SnapshotBuilder, SnapshotPipeline},
};

/// Main entry point for the Flare TVL dashboard core library.
/// Holds the validated settings and all services needed to build and render snapshots.
#[must_use]
pub struct FlareTvlDashboard {
    settings: DashboardSettings,
    pipeline: Arc<SnapshotPipeline>,
    chart_service: ChartService,
}

impl std::fmt::Debug for FlareTvlDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlareTvlDashboard")
            .field("reference_asset", &self.settings.reference_asset.id)
            .field("assets", &self.settings.assets.len())
            .field("providers", &self.pipeline.price_service().provider_names())
            .field("refresh_interval_secs", &self.settings.refresh_interval_secs)
            .finish()
    }
}

impl FlareTvlDashboard {
    /// Dashboard with the stock Flare settings and the default providers.
    pub fn new() -> Self {
        Self::build(
            DashboardSettings::default(),
            PriceProviderRegistry::new_with_defaults(),
        )
    }

    /// Dashboard with custom settings and the default providers.
    pub fn with_settings(settings: DashboardSettings) -> Result<Self, CoreError> {
        Self::with_registry(settings, PriceProviderRegistry::new_with_defaults())
    }

    /// Dashboard with custom settings and a custom provider chain.
    pub fn with_registry(
        settings: DashboardSettings,
        registry: PriceProviderRegistry,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(settings, registry))
    }

    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Shared handle on the fetch-and-build pipeline.
    #[must_use]
    pub fn pipeline(&self) -> Arc<SnapshotPipeline> {
        Arc::clone(&self.pipeline)
    }

    // ── Snapshots ───────────────────────────────────────────────────

    /// Run one fetch-and-build cycle. Never fails; a failed price fetch
    /// yields a snapshot priced at the fallback constant.
    pub async fn load_snapshot(&self) -> Snapshot {
        self.pipeline.run_once().await
    }

    // ── Charts ──────────────────────────────────────────────────────

    #[must_use]
    pub fn trend_series(&self, snapshot: &Snapshot) -> Vec<TrendPoint> {
        self.chart_service.trend_series(snapshot)
    }

    #[must_use]
    pub fn distribution(&self, snapshot: &Snapshot) -> Vec<DistributionSlice> {
        self.chart_service.distribution(snapshot)
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// Render the full page for a completed snapshot.
    #[must_use]
    pub fn render_snapshot(&self, snapshot: &Snapshot, refreshed_at: Option<DateTime<Utc>>) -> String {
        let trend = self.trend_series(snapshot);
        let distribution = self.distribution(snapshot);
        render::render_dashboard_page(
            &self.settings,
            PageData {
                snapshot,
                refreshed_at,
                trend: &trend,
                distribution: &distribution,
            },
        )
    }

    #[must_use]
    pub fn render_loading(&self) -> String {
        render::render_loading_page(&self.settings)
    }

    /// Render whatever the refresh loop currently holds.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn render(&self, state: &DashboardState) -> String {
        match state {
            DashboardState::Loading { .. } => self.render_loading(),
            DashboardState::Ready(ready) => {
                self.render_snapshot(&ready.snapshot, Some(ready.refreshed_at))
            }
        }
    }

    // ── Refresh loop ────────────────────────────────────────────────

    /// Start refreshing on the current tokio runtime: once now, then every
    /// `refresh_interval_secs`. Shut the returned handle down on teardown.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn start(&self) -> RefreshHandle {
        refresh::spawn_refresh_loop(self.pipeline(), self.settings.refresh_interval())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: DashboardSettings, registry: PriceProviderRegistry) -> Self {
        let price_service = PriceService::new(
            registry,
            settings.reference_asset.clone(),
            settings.fallback_price_usd,
        );
        let builder = SnapshotBuilder::new(settings.assets.clone(), settings.protocols.clone());
        let chart_service = ChartService::new(
            settings.trend_history.clone(),
            settings.current_trend_label.clone(),
        );

        Self {
            settings,
            pipeline: Arc::new(SnapshotPipeline::new(price_service, builder)),
            chart_service,
        }
    }
}

impl Default for FlareTvlDashboard {
    fn default() -> Self {
        Self::new()
    }
}
