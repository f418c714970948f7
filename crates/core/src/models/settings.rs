use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use crate::errors::CoreError;

use super::asset::{AssetConfig, AssetPricing};
use super::chart::TrendPoint;
use super::protocol::ProtocolEntry;

/// The asset whose price is fetched live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceAsset {
    /// CoinGecko asset id (e.g., "ripple")
    pub id: String,

    /// Display symbol (e.g., "XRP")
    pub symbol: String,
}

impl Default for ReferenceAsset {
    fn default() -> Self {
        Self {
            id: "ripple".to_string(),
            symbol: "XRP".to_string(),
        }
    }
}

/// Everything the dashboard shows that is not fetched live.
///
/// `Default` reproduces the stock Flare dashboard. A JSON file may override
/// any subset of fields; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub title: String,

    /// Static "data as of" caption shown in the header
    pub data_as_of: String,

    pub footer: String,

    pub reference_asset: ReferenceAsset,

    /// Substituted whenever the live fetch fails
    pub fallback_price_usd: f64,

    pub refresh_interval_secs: u64,

    /// Static 24h change caption (there is no history to compute it from)
    pub change_24h_label: String,

    /// Asset whose locked value gets its own metrics card
    pub highlighted_asset: String,

    pub assets: Vec<AssetConfig>,

    pub protocols: Vec<ProtocolEntry>,

    /// Historical trend points, in millions of USD, drawn before the current total
    pub trend_history: Vec<TrendPoint>,

    /// Label for the trend point that carries the current total
    pub current_trend_label: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        const FLR_PRICE: f64 = 0.025;
        Self {
            title: "Flare TVL Dashboard".to_string(),
            data_as_of: "Data as of Dec 3, 2025 | Powered by DeFiLlama".to_string(),
            footer: "Built with Rust | Data from DeFiLlama".to_string(),
            reference_asset: ReferenceAsset::default(),
            fallback_price_usd: 2.18,
            refresh_interval_secs: 60,
            change_24h_label: "+0.70%".to_string(),
            highlighted_asset: "FXRP".to_string(),
            assets: vec![
                AssetConfig::reference(
                    "FXRP",
                    149_579_262.0,
                    "Kinetic (Lending), SparkDEX (Liquidity)",
                ),
                AssetConfig::reference("stXRP", 50_000_000.0, "Firelight Staking"),
                AssetConfig::fixed(
                    "WFLR",
                    25_000_000.0,
                    FLR_PRICE,
                    "WNat Contract, FTSO Delegation",
                ),
                AssetConfig::fixed(
                    "rFLR",
                    15_000_000.0,
                    FLR_PRICE,
                    "Incentive Pools (FAssets Program)",
                ),
                AssetConfig::fixed("FLR", 100_000_000.0, FLR_PRICE, "Native Staking/Validators"),
            ],
            protocols: vec![
                ProtocolEntry::new("Kinetic", 80_000_000.0),
                ProtocolEntry::new("SparkDEX", 40_000_000.0),
                ProtocolEntry::new("Firelight", 50_000_000.0),
                ProtocolEntry::new("FTSO", 25_000_000.0),
                ProtocolEntry::new("Validators", 100_000_000.0),
            ],
            trend_history: vec![
                TrendPoint::new("Oct 2025", 120.0),
                TrendPoint::new("Nov 2025", 150.0),
            ],
            current_trend_label: "Dec 2025".to_string(),
        }
    }
}

impl DashboardSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a local JSON file and validate them.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Check the invariants the snapshot builder relies on.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.refresh_interval_secs == 0 {
            return Err(CoreError::InvalidSettings(
                "refresh_interval_secs must be greater than zero".into(),
            ));
        }
        if !self.fallback_price_usd.is_finite() || self.fallback_price_usd <= 0.0 {
            return Err(CoreError::InvalidSettings(format!(
                "fallback_price_usd must be a positive number, got {}",
                self.fallback_price_usd
            )));
        }
        if self.reference_asset.id.trim().is_empty() {
            return Err(CoreError::InvalidSettings(
                "reference_asset.id must not be empty".into(),
            ));
        }
        if self.assets.is_empty() {
            return Err(CoreError::InvalidSettings(
                "asset table must contain at least one asset".into(),
            ));
        }

        let mut seen = HashSet::new();
        for asset in &self.assets {
            if asset.symbol.trim().is_empty() {
                return Err(CoreError::InvalidSettings(
                    "asset symbol must not be empty".into(),
                ));
            }
            if !seen.insert(asset.symbol.as_str()) {
                return Err(CoreError::InvalidSettings(format!(
                    "duplicate asset symbol '{}'",
                    asset.symbol
                )));
            }
            if !asset.locked_value_usd.is_finite() || asset.locked_value_usd < 0.0 {
                return Err(CoreError::InvalidSettings(format!(
                    "locked value of {} must be finite and non-negative, got {}",
                    asset.symbol, asset.locked_value_usd
                )));
            }
            if let AssetPricing::Fixed { price_usd } = asset.pricing {
                if !price_usd.is_finite() || price_usd <= 0.0 {
                    return Err(CoreError::InvalidSettings(format!(
                        "fixed price of {} must be a positive number, got {price_usd}",
                        asset.symbol
                    )));
                }
            }
        }

        for protocol in &self.protocols {
            if !protocol.locked_value_usd.is_finite() || protocol.locked_value_usd < 0.0 {
                return Err(CoreError::InvalidSettings(format!(
                    "locked value of protocol {} must be finite and non-negative",
                    protocol.name
                )));
            }
        }

        if let Some(point) = self
            .trend_history
            .iter()
            .find(|p| !p.value_millions.is_finite())
        {
            return Err(CoreError::InvalidSettings(format!(
                "trend point '{}' is not a finite number",
                point.label
            )));
        }

        Ok(())
    }
}
