//! Wallet balance lookup with a fiat estimate.
//!
//! The flow mirrors a small form: a [`connector::WalletConnector`] for the
//! injected wallet, a [`lookup::LookupView`] holding the query input and the
//! last result, a [`balance::BalanceFetcher`] for native and ERC-20 reads, and
//! [`fiat`] for the exchange-rate conversion.

pub mod app;
pub mod balance;
pub mod config;
pub mod connector;
pub mod error;
pub mod fiat;
pub mod lookup;
pub mod provider;
pub mod types;

pub use app::WhoisApp;
pub use config::Config;
pub use error::WhoisError;
pub use lookup::{LookupState, LookupView};
pub use types::{Currency, LookupResult, TokenMetadata};
