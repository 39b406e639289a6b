//! Wallet provider access.
//!
//! [`WalletProvider`] is the seam between the lookup flow and whatever
//! supplies accounts and chain reads. [`JsonRpcProvider`] speaks JSON-RPC 2.0
//! over HTTP to an EIP-1193 style endpoint.

use std::sync::atomic::{AtomicU64, Ordering};

use alloy_primitives::U256;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use chain_eth::units::parse_quantity;

use crate::error::WhoisError;

#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Asks the wallet to authorize account access (`eth_requestAccounts`).
    async fn request_accounts(&self) -> Result<Vec<String>, WhoisError>;

    /// Accounts already authorized, without prompting (`eth_accounts`).
    async fn list_accounts(&self) -> Result<Vec<String>, WhoisError>;

    /// Native balance in wei at the latest block.
    async fn get_balance(&self, address: &str) -> Result<U256, WhoisError>;

    /// Read-only contract call at the latest block.
    async fn call(&self, to: &str, data: Vec<u8>) -> Result<Vec<u8>, WhoisError>;
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC client for a wallet provider or node.
pub struct JsonRpcProvider {
    client: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl std::fmt::Debug for JsonRpcProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonRpcProvider")
            .field("url", &self.url)
            .finish()
    }
}

impl JsonRpcProvider {
    pub fn new(url: &str) -> Result<Self, WhoisError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| WhoisError::Config(format!("invalid provider URL {url:?}: {e}")))?;

        Ok(Self {
            client: reqwest::Client::new(),
            url: parsed.to_string(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, WhoisError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(method, id, url = %self.url, "json-rpc request");

        let body = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let response: RpcResponse<T> = response.json().await?;

        if let Some(error) = response.error {
            debug!(method, id, code = error.code, "json-rpc error");
            return Err(WhoisError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        response
            .result
            .ok_or_else(|| WhoisError::Decode(format!("{method} returned no result")))
    }
}

#[async_trait]
impl WalletProvider for JsonRpcProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, WhoisError> {
        self.request("eth_requestAccounts", json!([])).await
    }

    async fn list_accounts(&self) -> Result<Vec<String>, WhoisError> {
        self.request("eth_accounts", json!([])).await
    }

    async fn get_balance(&self, address: &str) -> Result<U256, WhoisError> {
        let quantity: String = self
            .request("eth_getBalance", json!([address, "latest"]))
            .await?;
        Ok(parse_quantity(&quantity)?)
    }

    async fn call(&self, to: &str, data: Vec<u8>) -> Result<Vec<u8>, WhoisError> {
        let tx = json!({
            "to": to,
            "data": format!("0x{}", hex::encode(data)),
        });
        let output: String = self.request("eth_call", json!([tx, "latest"])).await?;

        let digits = output.strip_prefix("0x").unwrap_or(&output);
        hex::decode(digits).map_err(|e| WhoisError::Decode(format!("eth_call output: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_url() {
        let err = JsonRpcProvider::new("not a url").unwrap_err();
        assert!(matches!(err, WhoisError::Config(_)));
    }

    #[test]
    fn request_serializes_as_json_rpc() {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: 7,
            method: "eth_accounts",
            params: json!([]),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({"jsonrpc": "2.0", "id": 7, "method": "eth_accounts", "params": []})
        );
    }

    #[test]
    fn response_with_error_object() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"error":{"code":4001,"message":"User rejected the request."}}"#;
        let response: RpcResponse<Vec<String>> = serde_json::from_str(raw).unwrap();
        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, 4001);
        assert_eq!(error.message, "User rejected the request.");
    }

    #[test]
    fn response_with_result() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"result":"0x10"}"#;
        let response: RpcResponse<String> = serde_json::from_str(raw).unwrap();
        assert_eq!(response.result.as_deref(), Some("0x10"));
        assert!(response.error.is_none());
    }
}
