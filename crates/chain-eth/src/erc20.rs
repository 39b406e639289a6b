//! Read-only ERC-20 calls: `name()`, `symbol()` and `balanceOf(address)`.

use alloy_primitives::U256;

use crate::abi::{decode_string, decode_uint256, encode_function_call, AbiParam};
use crate::address::parse_address;
use crate::error::EthError;

/// Function selector for `name()`: `0x06fdde03`.
pub const NAME_SELECTOR: [u8; 4] = [0x06, 0xfd, 0xde, 0x03];

/// Function selector for `symbol()`: `0x95d89b41`.
pub const SYMBOL_SELECTOR: [u8; 4] = [0x95, 0xd8, 0x9b, 0x41];

/// Function selector for `balanceOf(address)`: `0x70a08231`.
pub const BALANCE_OF_SELECTOR: [u8; 4] = [0x70, 0xa0, 0x82, 0x31];

/// Encodes an ERC-20 `name()` call.
pub fn encode_name() -> Vec<u8> {
    encode_function_call(NAME_SELECTOR, &[])
}

/// Encodes an ERC-20 `symbol()` call.
pub fn encode_symbol() -> Vec<u8> {
    encode_function_call(SYMBOL_SELECTOR, &[])
}

/// Encodes an ERC-20 `balanceOf(address)` call.
///
/// # Returns
///
/// The complete calldata (4-byte selector + 32 bytes of ABI-encoded address).
pub fn encode_balance_of(owner: &str) -> Result<Vec<u8>, EthError> {
    let addr = parse_address(owner)?;
    Ok(encode_function_call(BALANCE_OF_SELECTOR, &[AbiParam::Address(addr)]))
}

/// Decodes the return data of `balanceOf`.
pub fn decode_balance_of(data: &[u8]) -> Result<U256, EthError> {
    decode_uint256(data)
}

/// Decodes the return data of `name()` or `symbol()`.
pub fn decode_text(data: &[u8]) -> Result<String, EthError> {
    decode_string(data)
}
