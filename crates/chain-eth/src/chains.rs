use serde::Serialize;

use crate::error::EthError;

/// Definition of an EVM-compatible blockchain network.
///
/// Only networks the static token list is valid on are listed here.
#[derive(Debug, Clone, Serialize)]
pub struct EvmChain {
    pub chain_id: u64,
    pub name: &'static str,
    /// Public read endpoint used when no other RPC URL is configured.
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
}

impl EvmChain {
    /// Explorer page for an account on this chain.
    pub fn address_url(&self, address: &str) -> String {
        format!("{}/address/{address}", self.explorer_url)
    }
}

/// Ethereum Mainnet (chain ID 1).
pub const ETHEREUM: EvmChain = EvmChain {
    chain_id: 1,
    name: "Ethereum",
    rpc_url: "https://eth.llamarpc.com",
    explorer_url: "https://etherscan.io",
};

const ALL_CHAINS: &[&EvmChain] = &[&ETHEREUM];

/// Returns the chain definition for a given chain ID, or `None` if unsupported.
pub fn get_chain(chain_id: u64) -> Option<&'static EvmChain> {
    ALL_CHAINS
        .iter()
        .find(|c| c.chain_id == chain_id)
        .copied()
}

/// Like [`get_chain`], but an unknown ID is an error.
pub fn require_chain(chain_id: u64) -> Result<&'static EvmChain, EthError> {
    get_chain(chain_id).ok_or(EthError::UnsupportedChain(chain_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_ethereum() {
        let chain = get_chain(1).expect("Ethereum should be supported");
        assert_eq!(chain.name, "Ethereum");
        assert!(chain.rpc_url.starts_with("https://"));
    }

    #[test]
    fn l2_and_testnet_ids_are_unsupported() {
        // The token list holds mainnet contract addresses only.
        for id in [10, 8453, 42161, 11155111] {
            assert!(get_chain(id).is_none(), "chain {id}");
        }
    }

    #[test]
    fn require_unknown_chain_errors() {
        let err = require_chain(999999).unwrap_err();
        assert_eq!(err.to_string(), "unsupported chain: 999999");
    }

    #[test]
    fn address_url_joins_explorer() {
        let url = ETHEREUM.address_url("0x000000000000000000000000000000000000dEaD");
        assert_eq!(
            url,
            "https://etherscan.io/address/0x000000000000000000000000000000000000dEaD"
        );
    }
}
