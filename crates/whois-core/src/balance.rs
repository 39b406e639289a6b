//! Balance fetching for native ether and listed ERC-20 tokens.

use std::sync::Arc;

use tracing::debug;

use chain_eth::erc20;
use chain_eth::tokens::{self, TokenInfo};
use chain_eth::units::{format_ether, format_units};

use crate::error::WhoisError;
use crate::provider::WalletProvider;
use crate::types::{Currency, TokenMetadata};

/// Resolves a currency symbol to its contract.
pub trait TokenLookup: Send + Sync {
    fn lookup(&self, symbol: &str) -> Option<&'static TokenInfo>;
}

/// The built-in mainnet token list.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticTokenList;

impl TokenLookup for StaticTokenList {
    fn lookup(&self, symbol: &str) -> Option<&'static TokenInfo> {
        tokens::get_token(symbol)
    }
}

/// A formatted balance and the ticker its exchange rate is keyed by.
#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    pub ticker: &'static str,
    pub formatted: String,
}

pub struct BalanceFetcher {
    provider: Arc<dyn WalletProvider>,
    tokens: Arc<dyn TokenLookup>,
}

impl BalanceFetcher {
    pub fn new(provider: Arc<dyn WalletProvider>, tokens: Arc<dyn TokenLookup>) -> Self {
        Self { provider, tokens }
    }

    fn resolve(&self, symbol: &str) -> Result<&'static TokenInfo, WhoisError> {
        self.tokens
            .lookup(symbol)
            .ok_or_else(|| WhoisError::UnknownToken(symbol.to_string()))
    }

    /// Native balance formatted as ether.
    pub async fn native_balance(&self, address: &str) -> Result<String, WhoisError> {
        let wei = self.provider.get_balance(address).await?;
        debug!(address, %wei, "native balance");
        Ok(format_ether(wei))
    }

    /// `balanceOf(address)` on the listed token, formatted at its decimals.
    pub async fn token_balance(&self, address: &str, symbol: &str) -> Result<String, WhoisError> {
        let token = self.resolve(symbol)?;
        let calldata = erc20::encode_balance_of(address)?;
        let output = self.provider.call(token.address, calldata).await?;
        let raw = erc20::decode_balance_of(&output)?;
        debug!(address, token = token.symbol, %raw, "token balance");
        Ok(format_units(raw, token.decimals)?)
    }

    /// Balance in `currency`; the token list is only consulted for tokens.
    pub async fn fetch(&self, address: &str, currency: Currency) -> Result<Balance, WhoisError> {
        let formatted = match currency.token_symbol() {
            Some(symbol) => self.token_balance(address, symbol).await?,
            None => self.native_balance(address).await?,
        };
        Ok(Balance {
            ticker: currency.ticker(),
            formatted,
        })
    }

    /// Reads `name()` and `symbol()` from a listed token's contract.
    pub async fn token_metadata(&self, symbol: &str) -> Result<TokenMetadata, WhoisError> {
        let token = self.resolve(symbol)?;

        let name = self.provider.call(token.address, erc20::encode_name()).await?;
        let on_chain_symbol = self
            .provider
            .call(token.address, erc20::encode_symbol())
            .await?;

        Ok(TokenMetadata {
            name: erc20::decode_text(&name)?,
            symbol: erc20::decode_text(&on_chain_symbol)?,
            address: token.address.to_string(),
            decimals: token.decimals,
        })
    }
}
