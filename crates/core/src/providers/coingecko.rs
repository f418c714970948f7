use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::PriceProvider;
use crate::errors::CoreError;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";
const PROVIDER_NAME: &str = "CoinGecko";

/// CoinGecko API provider for spot prices.
///
/// - **Free**: No API key required for `simple/price`.
/// - **Endpoint**: `/simple/price?ids={id}&vs_currencies=usd`
/// - **Response**: `{ "<id>": { "usd": <number> } }`
///
/// CoinGecko uses lowercase ids ("ripple", "flare-networks"), not tickers.
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the provider at another host serving the same API (a proxy or a test server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(10));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn price_endpoint(&self) -> String {
        format!("{}/simple/price", self.base_url)
    }

    /// Build the `simple/price` request for one asset; the id is query-encoded.
    pub fn price_request(&self, asset_id: &str) -> RequestBuilder {
        self.client
            .get(self.price_endpoint())
            .query(&[("ids", asset_id), ("vs_currencies", "usd")])
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

#[derive(Deserialize)]
struct SimplePriceEntry {
    usd: Option<f64>,
}

/// Extract the USD price of `asset_id` from a `simple/price` response body.
///
/// A missing asset, a missing or null `usd` field, and a price that is not a
/// finite positive number are all reported as errors.
pub fn parse_simple_price(body: &str, asset_id: &str) -> Result<f64, CoreError> {
    let resp: HashMap<String, SimplePriceEntry> =
        serde_json::from_str(body).map_err(|e| CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!("Failed to parse response for {asset_id}: {e}"),
        })?;

    let price = resp
        .get(asset_id)
        .ok_or_else(|| CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!("No entry for {asset_id} in response"),
        })?
        .usd
        .ok_or_else(|| CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!("No usd price for {asset_id}"),
        })?;

    if !price.is_finite() || price <= 0.0 {
        return Err(CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!("Invalid price for {asset_id}: {price}"),
        });
    }

    Ok(price)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PriceProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn get_usd_price(&self, asset_id: &str) -> Result<f64, CoreError> {
        let body = self
            .price_request(asset_id)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_simple_price(&body, asset_id)
    }
}
