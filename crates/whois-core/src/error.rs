use thiserror::Error;

#[derive(Debug, Error)]
pub enum WhoisError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Unknown token: {0}")]
    UnknownToken(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Exchange rates unavailable: {0}")]
    Rates(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<chain_eth::error::EthError> for WhoisError {
    fn from(e: chain_eth::error::EthError) -> Self {
        use chain_eth::error::EthError;
        match e {
            EthError::InvalidAddress(msg) => WhoisError::InvalidAddress(msg),
            EthError::UnknownToken(symbol) => WhoisError::UnknownToken(symbol),
            EthError::UnsupportedChain(id) => {
                WhoisError::Config(format!("unsupported chain: {id}"))
            }
            other => WhoisError::Decode(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for WhoisError {
    fn from(e: reqwest::Error) -> Self {
        WhoisError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for WhoisError {
    fn from(e: serde_json::Error) -> Self {
        WhoisError::Decode(e.to_string())
    }
}
