//! Wiring of a session from [`Config`].

use std::sync::Arc;

use chain_eth::chains::EvmChain;
use tracing::debug;

use crate::balance::{BalanceFetcher, StaticTokenList, TokenLookup};
use crate::config::Config;
use crate::connector::{ConnectionStatus, WalletConnector};
use crate::error::WhoisError;
use crate::fiat::{HttpRateSource, RateSource};
use crate::lookup::LookupView;
use crate::provider::{JsonRpcProvider, WalletProvider};

/// One page session: the connect control plus the lookup form.
pub struct WhoisApp {
    pub connector: WalletConnector,
    pub view: LookupView,
    chain: &'static EvmChain,
}

impl WhoisApp {
    /// Builds the session from explicit parts.
    pub fn new(
        injected: Option<Arc<dyn WalletProvider>>,
        reader: Arc<dyn WalletProvider>,
        tokens: Arc<dyn TokenLookup>,
        rates: Arc<dyn RateSource>,
        chain: &'static EvmChain,
    ) -> Self {
        Self {
            connector: WalletConnector::new(injected),
            view: LookupView::new(BalanceFetcher::new(reader, tokens), rates),
            chain,
        }
    }

    /// Builds the session with HTTP-backed providers and the static token list.
    pub fn from_config(config: &Config) -> Result<Self, WhoisError> {
        let chain = config.chain()?;

        let injected: Option<Arc<dyn WalletProvider>> = match config.injected_provider_url() {
            Some(url) => Some(Arc::new(JsonRpcProvider::new(url)?)),
            None => None,
        };
        let read_url = config.read_rpc_url()?;
        debug!(chain = chain.name, read_url = %read_url, injected = injected.is_some(), "session config");

        let reader: Arc<dyn WalletProvider> = Arc::new(JsonRpcProvider::new(&read_url)?);

        Ok(Self::new(
            injected,
            reader,
            Arc::new(StaticTokenList),
            Arc::new(HttpRateSource::new(&config.rates_url)),
            chain,
        ))
    }

    pub fn chain(&self) -> &'static EvmChain {
        self.chain
    }

    /// Initial load: silently reconnect an already authorized wallet.
    pub async fn load(&mut self) -> ConnectionStatus {
        self.connector.reconnect().await
    }
}
