//! Wallet connection state.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::error::WhoisError;
use crate::provider::WalletProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    NotConnected,
    Connected(Vec<String>),
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::NotConnected => f.write_str("Not connected"),
            ConnectionStatus::Connected(accounts) => {
                write!(f, "Connected: {}", accounts.join(", "))
            }
        }
    }
}

/// Holds the accounts granted by the injected provider, if there is one.
pub struct WalletConnector {
    provider: Option<Arc<dyn WalletProvider>>,
    accounts: Vec<String>,
}

impl WalletConnector {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self {
            provider,
            accounts: Vec::new(),
        }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn accounts(&self) -> &[String] {
        &self.accounts
    }

    pub fn status(&self) -> ConnectionStatus {
        if self.accounts.is_empty() {
            ConnectionStatus::NotConnected
        } else {
            ConnectionStatus::Connected(self.accounts.clone())
        }
    }

    /// Requests account access.
    ///
    /// Without a provider this does nothing and leaves the status as not
    /// connected. Provider errors are returned for the caller to alert on.
    pub async fn connect(&mut self) -> Result<ConnectionStatus, WhoisError> {
        let Some(provider) = &self.provider else {
            return Ok(ConnectionStatus::NotConnected);
        };

        let accounts = provider.request_accounts().await?;
        info!(count = accounts.len(), "wallet connected");
        self.accounts = accounts;
        Ok(self.status())
    }

    /// Reconnects without prompting when the provider already reports
    /// authorized accounts. Failures are logged and leave the status as is.
    pub async fn reconnect(&mut self) -> ConnectionStatus {
        let listed = match &self.provider {
            Some(provider) => provider.list_accounts().await,
            None => return self.status(),
        };

        match listed {
            Ok(accounts) if !accounts.is_empty() => {
                if let Err(e) = self.connect().await {
                    warn!(error = %e, "silent reconnect failed");
                }
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "could not list authorized accounts"),
        }
        self.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        assert_eq!(ConnectionStatus::NotConnected.to_string(), "Not connected");
        let status = ConnectionStatus::Connected(vec!["0xabc".into(), "0xdef".into()]);
        assert_eq!(status.to_string(), "Connected: 0xabc, 0xdef");
    }

    #[tokio::test]
    async fn connect_without_provider_is_noop() {
        let mut connector = WalletConnector::new(None);
        assert!(!connector.has_provider());
        let status = connector.connect().await.unwrap();
        assert_eq!(status, ConnectionStatus::NotConnected);
        assert!(connector.accounts().is_empty());
    }

    #[tokio::test]
    async fn reconnect_without_provider_is_noop() {
        let mut connector = WalletConnector::new(None);
        assert_eq!(connector.reconnect().await, ConnectionStatus::NotConnected);
    }
}
