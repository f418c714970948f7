use serde::Serialize;

use super::asset::AssetEntry;
use super::price::PriceQuote;
use super::protocol::ProtocolEntry;

/// Result of one fetch-and-build cycle.
///
/// Assets keep the order of the configured table and are keyed by symbol.
/// The total is recomputed in [`Snapshot::new`] and cannot drift from the
/// assets, since fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    total_locked_value_usd: f64,
    assets: Vec<AssetEntry>,
    reference_price: PriceQuote,
    protocols: Vec<ProtocolEntry>,
}

impl Snapshot {
    pub fn new(
        assets: Vec<AssetEntry>,
        reference_price: PriceQuote,
        protocols: Vec<ProtocolEntry>,
    ) -> Self {
        let total_locked_value_usd = assets.iter().map(|a| a.locked_value_usd).sum();
        Self {
            total_locked_value_usd,
            assets,
            reference_price,
            protocols,
        }
    }

    /// The placeholder held while the first refresh is still running.
    pub fn empty(reference_price: PriceQuote) -> Self {
        Self::new(Vec::new(), reference_price, Vec::new())
    }

    pub fn total_locked_value_usd(&self) -> f64 {
        self.total_locked_value_usd
    }

    /// All assets, in table order.
    pub fn assets(&self) -> &[AssetEntry] {
        &self.assets
    }

    /// Look up an asset by its symbol (exact match).
    pub fn asset(&self, symbol: &str) -> Option<&AssetEntry> {
        self.assets.iter().find(|a| a.symbol == symbol)
    }

    pub fn reference_price(&self) -> &PriceQuote {
        &self.reference_price
    }

    pub fn protocols(&self) -> &[ProtocolEntry] {
        &self.protocols
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
