use serde::{Deserialize, Serialize};

/// Where a reference price came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceSource {
    /// Fetched from a provider during this refresh.
    Live { provider: String },
    /// Every provider failed; the configured constant was substituted.
    Fallback,
}

/// The reference asset's USD price for one refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Provider-side id (CoinGecko id, e.g., "ripple")
    pub asset_id: String,

    /// Display symbol (e.g., "XRP")
    pub symbol: String,

    pub price_usd: f64,

    pub source: PriceSource,
}

impl PriceQuote {
    pub fn live(
        asset_id: impl Into<String>,
        symbol: impl Into<String>,
        price_usd: f64,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            symbol: symbol.into(),
            price_usd,
            source: PriceSource::Live {
                provider: provider.into(),
            },
        }
    }

    pub fn fallback(asset_id: impl Into<String>, symbol: impl Into<String>, price_usd: f64) -> Self {
        Self {
            asset_id: asset_id.into(),
            symbol: symbol.into(),
            price_usd,
            source: PriceSource::Fallback,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.source, PriceSource::Live { .. })
    }

    /// Name of the provider that served this quote, if any.
    pub fn provider(&self) -> Option<&str> {
        match &self.source {
            PriceSource::Live { provider } => Some(provider),
            PriceSource::Fallback => None,
        }
    }
}
