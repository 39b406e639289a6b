//! Minimal ABI encoding and decoding for read-only EVM calls.
//!
//! Just enough to build `eth_call` data for view functions that take static
//! arguments, and to decode the `uint256` and `string` values they return.

use alloy_primitives::U256;

use crate::error::EthError;

/// Size of one ABI word.
pub const WORD: usize = 32;

/// A single ABI-encoded parameter.
#[derive(Debug, Clone)]
pub enum AbiParam {
    /// A 20-byte Ethereum address, left-padded to 32 bytes.
    Address([u8; 20]),
}

/// Encodes a function call with the given 4-byte selector and ABI parameters.
///
/// The output is `selector || encode(params[0]) || encode(params[1]) || ...`
/// where each parameter is encoded as a 32-byte ABI word.
pub fn encode_function_call(selector: [u8; 4], params: &[AbiParam]) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + params.len() * WORD);
    data.extend_from_slice(&selector);

    for param in params {
        data.extend_from_slice(&encode_param(param));
    }

    data
}

/// Encodes a single [`AbiParam`] as a 32-byte ABI word.
fn encode_param(param: &AbiParam) -> [u8; WORD] {
    match param {
        AbiParam::Address(addr) => {
            // Left-pad: 12 zero bytes + 20 address bytes.
            let mut word = [0u8; WORD];
            word[12..].copy_from_slice(addr);
            word
        }
    }
}

/// Reads the 32-byte word at `offset`.
fn word_at(data: &[u8], offset: usize) -> Result<&[u8], EthError> {
    offset
        .checked_add(WORD)
        .and_then(|end| data.get(offset..end))
        .ok_or_else(|| {
            EthError::DecodingError(format!(
                "expected a word at offset {offset}, return data is {} bytes",
                data.len()
            ))
        })
}

/// Reads a word as a `usize` offset or length.
fn word_as_usize(data: &[u8], offset: usize) -> Result<usize, EthError> {
    let value = U256::from_be_slice(word_at(data, offset)?);
    usize::try_from(value)
        .map_err(|_| EthError::DecodingError(format!("value {value} does not fit in usize")))
}

/// Decodes a single `uint256` return value.
///
/// Trailing bytes beyond the first word are ignored.
pub fn decode_uint256(data: &[u8]) -> Result<U256, EthError> {
    Ok(U256::from_be_slice(word_at(data, 0)?))
}

/// Decodes a single `string` return value.
///
/// Some older tokens declare `name()`/`symbol()` as `bytes32`; a bare 32-byte
/// return is decoded that way, with the trailing NUL padding stripped.
pub fn decode_string(data: &[u8]) -> Result<String, EthError> {
    if data.len() == WORD {
        let end = data.iter().position(|&b| b == 0).unwrap_or(WORD);
        return String::from_utf8(data[..end].to_vec())
            .map_err(|e| EthError::DecodingError(format!("invalid utf-8 in bytes32: {e}")));
    }

    let offset = word_as_usize(data, 0)?;
    let len = word_as_usize(data, offset)?;
    let start = offset
        .checked_add(WORD)
        .ok_or_else(|| EthError::DecodingError("string offset overflow".into()))?;
    let bytes = start
        .checked_add(len)
        .and_then(|end| data.get(start..end))
        .ok_or_else(|| {
            EthError::DecodingError(format!(
                "string of {len} bytes runs past the end of {} bytes of return data",
                data.len()
            ))
        })?;

    String::from_utf8(bytes.to_vec())
        .map_err(|e| EthError::DecodingError(format!("invalid utf-8 in string: {e}")))
}
