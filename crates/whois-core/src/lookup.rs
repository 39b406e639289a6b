//! The lookup form: query input, submit, and the state it renders from.
//!
//! Each submit resets the loading and error flags, validates the address
//! locally, then awaits the balance read and the rate fetch in sequence.
//! Failures end up as a message on the view; nothing is returned as an error.

use std::sync::Arc;

use tracing::{info, warn};

use chain_eth::address::normalize_address;

use crate::balance::BalanceFetcher;
use crate::error::WhoisError;
use crate::fiat::{self, RateSource};
use crate::types::{Currency, LookupResult};

/// Message shown when the address fails local validation.
pub const INVALID_VALUE: &str = "Invalid value";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    Loading,
    Success,
    Error(String),
}

pub struct LookupView {
    fetcher: BalanceFetcher,
    rates: Arc<dyn RateSource>,
    address: String,
    currency: Currency,
    state: LookupState,
    result: Option<LookupResult>,
}

impl LookupView {
    pub fn new(fetcher: BalanceFetcher, rates: Arc<dyn RateSource>) -> Self {
        Self {
            fetcher,
            rates,
            address: String::new(),
            currency: Currency::default(),
            state: LookupState::Idle,
            result: None,
        }
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn fetcher(&self) -> &BalanceFetcher {
        &self.fetcher
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LookupState::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            LookupState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Most recent successful result, kept across later failures.
    pub fn result(&self) -> Option<&LookupResult> {
        self.result.as_ref()
    }

    /// Runs a lookup for the current input.
    pub async fn submit(&mut self) -> &LookupState {
        self.state = LookupState::Loading;

        let address = match normalize_address(&self.address) {
            Ok(address) => address,
            Err(e) => {
                warn!(error = %e, "rejected lookup input");
                self.state = LookupState::Error(INVALID_VALUE.to_string());
                return &self.state;
            }
        };

        match self.run(&address, self.currency).await {
            Ok(result) => {
                info!(address = %result.address, currency = %result.currency, "lookup succeeded");
                self.result = Some(result);
                self.state = LookupState::Success;
            }
            Err(e) => {
                warn!(error = %e, "lookup failed");
                self.state = LookupState::Error(e.to_string());
            }
        }
        &self.state
    }

    async fn run(&self, address: &str, currency: Currency) -> Result<LookupResult, WhoisError> {
        let balance = self.fetcher.fetch(address, currency).await?;
        let fiat = fiat::convert(self.rates.as_ref(), &balance.formatted, balance.ticker).await?;

        Ok(LookupResult {
            address: address.to_string(),
            currency,
            balance: balance.formatted,
            fiat,
        })
    }
}
