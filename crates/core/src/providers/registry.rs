use super::coingecko::CoinGeckoProvider;
use super::traits::PriceProvider;

/// Ordered list of price providers.
///
/// The price service asks them in registration order and stops at the
/// first usable price.
pub struct PriceProviderRegistry {
    providers: Vec<Box<dyn PriceProvider>>,
}

impl PriceProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Create a registry with the default providers pre-configured.
    pub fn new_with_defaults() -> Self {
        let mut registry = Self::new();

        // CoinGecko — no API key needed
        registry.register(Box::new(CoinGeckoProvider::new()));

        registry
    }

    /// Register a provider at the end of the fallback order.
    pub fn register(&mut self, provider: Box<dyn PriceProvider>) {
        self.providers.push(provider);
    }

    /// All providers, in fallback order.
    pub fn providers(&self) -> Vec<&dyn PriceProvider> {
        self.providers.iter().map(|p| p.as_ref()).collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }
}

impl Default for PriceProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
