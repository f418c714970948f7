use serde::{Deserialize, Serialize};

/// How an asset in the configured table is priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetPricing {
    /// Takes the live reference price (e.g., FXRP and stXRP track XRP).
    Reference,
    /// A constant placeholder price in USD.
    Fixed { price_usd: f64 },
}

impl AssetPricing {
    /// Resolve the unit price given the current reference price.
    pub fn unit_price(&self, reference_price_usd: f64) -> f64 {
        match self {
            AssetPricing::Reference => reference_price_usd,
            AssetPricing::Fixed { price_usd } => *price_usd,
        }
    }
}

/// One row of the configured asset table.
///
/// Balances and locations are placeholder figures until a real TVL source
/// is wired in; only the reference price is live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Ticker symbol as displayed (case preserved, e.g., "stXRP")
    pub symbol: String,

    /// Value locked in USD
    pub locked_value_usd: f64,

    /// Where the asset is locked (protocols, contracts)
    pub location: String,

    pub pricing: AssetPricing,
}

impl AssetConfig {
    pub fn new(
        symbol: impl Into<String>,
        locked_value_usd: f64,
        location: impl Into<String>,
        pricing: AssetPricing,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            locked_value_usd,
            location: location.into(),
            pricing,
        }
    }

    /// Convenience constructor for an asset priced at the live reference price.
    pub fn reference(
        symbol: impl Into<String>,
        locked_value_usd: f64,
        location: impl Into<String>,
    ) -> Self {
        Self::new(symbol, locked_value_usd, location, AssetPricing::Reference)
    }

    /// Convenience constructor for an asset with a constant price.
    pub fn fixed(
        symbol: impl Into<String>,
        locked_value_usd: f64,
        price_usd: f64,
        location: impl Into<String>,
    ) -> Self {
        Self::new(
            symbol,
            locked_value_usd,
            location,
            AssetPricing::Fixed { price_usd },
        )
    }
}

/// A priced asset inside a snapshot. Replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub symbol: String,
    pub locked_value_usd: f64,
    pub unit_price_usd: f64,
    pub location: String,
}
