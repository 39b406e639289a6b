use chain_eth::chains::{require_chain, EvmChain};

use crate::error::WhoisError;

/// Public exchange-rate endpoint. Rates are quoted per one USD.
pub const DEFAULT_RATES_URL: &str = "https://api.coinbase.com/v2/exchange-rates";

/// Runtime settings for a lookup session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Injected wallet provider. `None` means no provider is present.
    pub provider_url: Option<String>,
    /// Node used for balance reads, overriding the provider.
    pub rpc_url: Option<String>,
    pub chain_id: u64,
    pub rates_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider_url: None,
            rpc_url: None,
            chain_id: 1,
            rates_url: DEFAULT_RATES_URL.to_string(),
        }
    }
}

impl Config {
    pub fn chain(&self) -> Result<&'static EvmChain, WhoisError> {
        Ok(require_chain(self.chain_id)?)
    }

    /// Endpoint for balance and contract reads.
    ///
    /// An explicit RPC URL wins, then the injected provider, then the chain's
    /// public endpoint.
    pub fn read_rpc_url(&self) -> Result<String, WhoisError> {
        if let Some(url) = non_empty(&self.rpc_url) {
            return Ok(url.to_string());
        }
        if let Some(url) = non_empty(&self.provider_url) {
            return Ok(url.to_string());
        }
        Ok(self.chain()?.rpc_url.to_string())
    }

    /// The injected provider URL, treating a blank value as absent.
    pub fn injected_provider_url(&self) -> Option<&str> {
        non_empty(&self.provider_url)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_mainnet_public_rpc() {
        let config = Config::default();
        assert_eq!(config.read_rpc_url().unwrap(), "https://eth.llamarpc.com");
        assert_eq!(config.rates_url, DEFAULT_RATES_URL);
        assert!(config.injected_provider_url().is_none());
    }

    #[test]
    fn provider_is_used_for_reads() {
        let config = Config {
            provider_url: Some("http://127.0.0.1:8545".into()),
            ..Config::default()
        };
        assert_eq!(config.read_rpc_url().unwrap(), "http://127.0.0.1:8545");
    }

    #[test]
    fn explicit_rpc_url_wins() {
        let config = Config {
            provider_url: Some("http://127.0.0.1:8545".into()),
            rpc_url: Some("http://node:8545".into()),
            ..Config::default()
        };
        assert_eq!(config.read_rpc_url().unwrap(), "http://node:8545");
    }

    #[test]
    fn blank_provider_is_absent() {
        let config = Config {
            provider_url: Some("  ".into()),
            ..Config::default()
        };
        assert!(config.injected_provider_url().is_none());
    }

    #[test]
    fn unknown_chain_is_config_error() {
        let config = Config {
            chain_id: 424242,
            ..Config::default()
        };
        let err = config.read_rpc_url().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: unsupported chain: 424242");
    }

    #[test]
    fn non_mainnet_chain_is_rejected() {
        // Listed token contracts are mainnet addresses.
        let config = Config {
            chain_id: 10,
            ..Config::default()
        };
        assert!(matches!(config.chain(), Err(WhoisError::Config(_))));
        assert!(config.read_rpc_url().is_err());
    }
}
