use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WhoisError;

/// Currencies offered by the lookup form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// The chain's native currency (ether).
    #[default]
    Native,
    Dai,
    Zrx,
    Usdt,
    Bat,
}

impl Currency {
    /// Every option, in the order the form lists them.
    pub const ALL: [Currency; 5] = [
        Currency::Native,
        Currency::Dai,
        Currency::Zrx,
        Currency::Usdt,
        Currency::Bat,
    ];

    /// Ticker shown to the user and used as the exchange-rate key.
    pub fn ticker(&self) -> &'static str {
        match self {
            Currency::Native => "ETH",
            Currency::Dai => "DAI",
            Currency::Zrx => "ZRX",
            Currency::Usdt => "USDT",
            Currency::Bat => "BAT",
        }
    }

    /// Token-list symbol, or `None` for the native currency.
    pub fn token_symbol(&self) -> Option<&'static str> {
        match self {
            Currency::Native => None,
            other => Some(other.ticker()),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker())
    }
}

impl FromStr for Currency {
    type Err = WhoisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("native") {
            return Ok(Currency::Native);
        }
        Currency::ALL
            .into_iter()
            .find(|c| c.ticker().eq_ignore_ascii_case(s))
            .ok_or_else(|| WhoisError::UnknownToken(s.to_string()))
    }
}

/// Outcome of one successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    /// Checksummed address that was queried.
    pub address: String,
    pub currency: Currency,
    /// Balance as a decimal string at the currency's precision.
    pub balance: String,
    /// Fiat estimate with locale grouping; `NaN` when no rate was available.
    pub fiat: String,
}

/// On-chain metadata of a listed token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub address: String,
    pub decimals: u8,
}
