//! Ethereum/EVM primitives for the whois lookup.
//!
//! This crate provides:
//! - Address validation and EIP-55 checksums
//! - Minimal ABI encoding/decoding for read-only calls
//! - ERC-20 `name`, `symbol` and `balanceOf` call data
//! - Unit formatting of raw on-chain amounts
//! - Static chain and token tables
//!
//! Nothing here performs I/O.

pub mod abi;
pub mod address;
pub mod chains;
pub mod erc20;
pub mod error;
pub mod tokens;
pub mod units;
