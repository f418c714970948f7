use crate::models::asset::{AssetConfig, AssetEntry};
use crate::models::price::PriceQuote;
use crate::models::protocol::ProtocolEntry;
use crate::models::snapshot::Snapshot;
use crate::services::price_service::PriceService;

/// Turns the configured asset table plus one reference price into a [`Snapshot`].
///
/// Pure and deterministic: the same quote always yields the same snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    assets: Vec<AssetConfig>,
    protocols: Vec<ProtocolEntry>,
}

impl SnapshotBuilder {
    pub fn new(assets: Vec<AssetConfig>, protocols: Vec<ProtocolEntry>) -> Self {
        Self { assets, protocols }
    }

    pub fn asset_table(&self) -> &[AssetConfig] {
        &self.assets
    }

    pub fn build(&self, quote: &PriceQuote) -> Snapshot {
        let entries = self
            .assets
            .iter()
            .map(|config| AssetEntry {
                symbol: config.symbol.clone(),
                locked_value_usd: config.locked_value_usd,
                unit_price_usd: config.pricing.unit_price(quote.price_usd),
                location: config.location.clone(),
            })
            .collect();

        Snapshot::new(entries, quote.clone(), self.protocols.clone())
    }
}

/// One refresh: fetch the reference price, then build a snapshot from it.
pub struct SnapshotPipeline {
    price_service: PriceService,
    builder: SnapshotBuilder,
}

impl SnapshotPipeline {
    pub fn new(price_service: PriceService, builder: SnapshotBuilder) -> Self {
        Self {
            price_service,
            builder,
        }
    }

    pub fn price_service(&self) -> &PriceService {
        &self.price_service
    }

    pub fn builder(&self) -> &SnapshotBuilder {
        &self.builder
    }

    /// Run a single fetch-and-build cycle. Never fails; see [`PriceService`].
    pub async fn run_once(&self) -> Snapshot {
        let quote = self.price_service.fetch_reference_price().await;
        self.builder.build(&quote)
    }

    /// The empty snapshot shown while the first cycle is running.
    pub fn placeholder(&self) -> Snapshot {
        Snapshot::empty(self.price_service.fallback_quote())
    }
}
