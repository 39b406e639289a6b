use sha3::{Digest, Keccak256};

use crate::error::EthError;

/// Returns the 40-character hex body of a 0x-prefixed address, or an error
/// describing why the input is not shaped like one.
fn hex_body(address: &str) -> Result<&str, EthError> {
    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| EthError::InvalidAddress("address must start with 0x".into()))?;

    if hex_part.len() != 40 {
        return Err(EthError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_part.len()
        )));
    }

    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EthError::InvalidAddress(
            "address contains non-hex characters".into(),
        ));
    }

    Ok(hex_part)
}

/// Parses a 0x-prefixed hex address string into a 20-byte array.
///
/// Only the shape is checked here; use [`validate_address`] when the EIP-55
/// checksum of a mixed-case address matters.
pub fn parse_address(address: &str) -> Result<[u8; 20], EthError> {
    let hex_part = hex_body(address)?;

    let bytes = hex::decode(hex_part)
        .map_err(|e| EthError::InvalidAddress(format!("invalid hex: {e}")))?;

    let mut addr = [0u8; 20];
    addr.copy_from_slice(&bytes);
    Ok(addr)
}

/// Validates an Ethereum address string.
///
/// Checks that the address has the correct format (0x + 40 hex characters).
/// If the address contains mixed case, the EIP-55 checksum is verified and
/// `Ok(false)` is returned on mismatch.
pub fn validate_address(address: &str) -> Result<bool, EthError> {
    let hex_part = hex_body(address)?;

    let is_all_lower = hex_part.chars().all(|c| !c.is_ascii_uppercase());
    let is_all_upper = hex_part.chars().all(|c| !c.is_ascii_lowercase());

    if is_all_lower || is_all_upper {
        return Ok(true);
    }

    let checksummed = checksum_address(address)?;
    Ok(&checksummed[2..] == hex_part)
}

/// Applies EIP-55 mixed-case checksum encoding to an Ethereum address.
///
/// Input case is ignored; the returned string is always `0x` followed by the
/// checksummed body.
pub fn checksum_address(address: &str) -> Result<String, EthError> {
    let hex_part = hex_body(address)?.to_lowercase();

    // EIP-55: hash the lowercase hex address (without 0x).
    let hash = Keccak256::digest(hex_part.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");

    for (i, c) in hex_part.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }

    Ok(checksummed)
}

/// Trims user input and returns the checksummed form of a valid address.
///
/// Empty input, malformed input and mixed-case input with a wrong checksum are
/// all rejected with [`EthError::InvalidAddress`].
pub fn normalize_address(input: &str) -> Result<String, EthError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EthError::InvalidAddress("address is empty".into()));
    }

    if !validate_address(trimmed)? {
        return Err(EthError::InvalidAddress("bad EIP-55 checksum".into()));
    }

    checksum_address(trimmed)
}
