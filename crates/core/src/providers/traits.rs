use async_trait::async_trait;

use crate::errors::CoreError;

/// Trait abstraction for USD price sources.
///
/// Providers report failures as errors; turning a failure into the fallback
/// price is the price service's job, not the provider's.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider (for logs and the price caption).
    fn name(&self) -> &str;

    /// Get the current USD price of an asset, by provider-side asset id.
    async fn get_usd_price(&self, asset_id: &str) -> Result<f64, CoreError>;
}
