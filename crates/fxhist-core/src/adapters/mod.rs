pub mod dukascopy;
pub mod oanda;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

pub use dukascopy::DukascopyLoader;
pub use oanda::OandaLoader;

use crate::config::LoaderConfig;
use crate::http_client::HttpClient;
use crate::loader::MarketLoader;
use crate::ProviderId;

/// Loader variant for `provider`, sharing `http_client`.
pub fn loader_for(
    provider: ProviderId,
    http_client: Arc<dyn HttpClient>,
    config: &LoaderConfig,
) -> Arc<dyn MarketLoader> {
    match provider {
        ProviderId::Oanda => Arc::new(OandaLoader::with_http_client(http_client, config)),
        ProviderId::Dukascopy => Arc::new(DukascopyLoader::with_http_client(http_client, config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::NoopHttpClient;

    #[test]
    fn loader_for_returns_matching_variant() {
        let config = LoaderConfig::default();
        for provider in ProviderId::ALL {
            let loader = loader_for(provider, Arc::new(NoopHttpClient), &config);
            assert_eq!(loader.id(), provider);
        }
    }
}
