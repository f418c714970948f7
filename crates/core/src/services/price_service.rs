use tracing::{debug, warn};

use crate::models::price::PriceQuote;
use crate::models::settings::ReferenceAsset;
use crate::providers::registry::PriceProviderRegistry;

/// Fetches the reference asset's USD price, degrading to a constant.
///
/// `fetch_reference_price` cannot fail from the caller's point of view:
/// providers are tried in registration order and, if none returns a finite
/// positive price, the fallback constant is returned with
/// [`PriceSource::Fallback`](crate::models::price::PriceSource::Fallback).
pub struct PriceService {
    registry: PriceProviderRegistry,
    reference: ReferenceAsset,
    fallback_price_usd: f64,
}

impl PriceService {
    pub fn new(
        registry: PriceProviderRegistry,
        reference: ReferenceAsset,
        fallback_price_usd: f64,
    ) -> Self {
        Self {
            registry,
            reference,
            fallback_price_usd,
        }
    }

    pub fn reference_asset(&self) -> &ReferenceAsset {
        &self.reference
    }

    pub fn fallback_price_usd(&self) -> f64 {
        self.fallback_price_usd
    }

    /// Names of the registered providers, in the order they are tried.
    pub fn provider_names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// The quote used when nothing live is available.
    pub fn fallback_quote(&self) -> PriceQuote {
        PriceQuote::fallback(
            &self.reference.id,
            &self.reference.symbol,
            self.fallback_price_usd,
        )
    }

    /// Fetch the live reference price, or the fallback quote on any failure.
    pub async fn fetch_reference_price(&self) -> PriceQuote {
        let id = &self.reference.id;

        for provider in self.registry.providers() {
            match provider.get_usd_price(id).await {
                Ok(price) if price.is_finite() && price > 0.0 => {
                    debug!(provider = provider.name(), asset = %id, price, "fetched reference price");
                    return PriceQuote::live(id, &self.reference.symbol, price, provider.name());
                }
                Ok(price) => {
                    warn!(provider = provider.name(), asset = %id, price, "provider returned an unusable price");
                }
                Err(e) => {
                    warn!(provider = provider.name(), asset = %id, error = %e, "price fetch failed");
                }
            }
        }

        warn!(
            asset = %id,
            fallback = self.fallback_price_usd,
            "no live price available, using fallback"
        );
        self.fallback_quote()
    }
}
