//! Conversion between raw on-chain integers and decimal strings.

use alloy_primitives::U256;

use crate::error::EthError;

/// Decimals of the native currency on every supported chain.
pub const ETHER_DECIMALS: u8 = 18;

/// Formats a raw integer amount as a decimal string with `decimals` places.
///
/// Trailing zeros of the fraction are dropped but at least one fractional
/// digit is kept, so one whole token renders as `"1.0"`.
pub fn format_units(value: U256, decimals: u8) -> Result<String, EthError> {
    // 10^78 overflows a U256.
    if decimals > 77 {
        return Err(EthError::EncodingError(format!(
            "{decimals} decimals is out of range"
        )));
    }

    let scale = U256::from(10u64).pow(U256::from(decimals));
    let whole = value / scale;
    let fraction = value % scale;

    let mut fraction = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    while fraction.ends_with('0') {
        fraction.pop();
    }
    if fraction.is_empty() {
        fraction.push('0');
    }

    Ok(format!("{whole}.{fraction}"))
}

/// Formats a wei amount as ether.
pub fn format_ether(wei: U256) -> String {
    // 18 is always in range.
    format_units(wei, ETHER_DECIMALS).unwrap_or_default()
}

/// Parses a JSON-RPC hex quantity (`"0x1bc16d674ec80000"`).
///
/// `"0x"` and `"0x0"` both decode to zero.
pub fn parse_quantity(quantity: &str) -> Result<U256, EthError> {
    let digits = quantity
        .strip_prefix("0x")
        .ok_or_else(|| EthError::DecodingError(format!("quantity {quantity:?} lacks 0x prefix")))?;

    if digits.is_empty() {
        return Ok(U256::ZERO);
    }

    U256::from_str_radix(digits, 16)
        .map_err(|e| EthError::DecodingError(format!("invalid quantity {quantity:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(s: &str) -> U256 {
        s.parse().unwrap()
    }

    #[test]
    fn one_ether() {
        assert_eq!(format_ether(wei("1000000000000000000")), "1.0");
    }

    #[test]
    fn zero_formats_with_one_fraction_digit() {
        assert_eq!(format_ether(U256::ZERO), "0.0");
        assert_eq!(format_units(U256::ZERO, 6).unwrap(), "0.0");
    }

    #[test]
    fn fractional_ether_keeps_leading_zeros() {
        assert_eq!(format_ether(wei("1500000000000000")), "0.0015");
    }

    #[test]
    fn smallest_unit() {
        assert_eq!(format_ether(U256::from(1u64)), "0.000000000000000001");
    }

    #[test]
    fn six_decimal_token() {
        assert_eq!(format_units(U256::from(12_345_678u64), 6).unwrap(), "12.345678");
        assert_eq!(format_units(U256::from(1_000_000u64), 6).unwrap(), "1.0");
    }

    #[test]
    fn zero_decimals() {
        assert_eq!(format_units(U256::from(42u64), 0).unwrap(), "42.0");
    }

    #[test]
    fn large_balance() {
        let value = wei("123456789000000000000000000");
        assert_eq!(format_ether(value), "123456789.0");
    }

    #[test]
    fn too_many_decimals_errors() {
        assert!(format_units(U256::from(1u64), 78).is_err());
    }

    #[test]
    fn parse_quantity_hex() {
        assert_eq!(
            parse_quantity("0xde0b6b3a7640000").unwrap(),
            wei("1000000000000000000")
        );
    }

    #[test]
    fn parse_quantity_zero_forms() {
        assert_eq!(parse_quantity("0x0").unwrap(), U256::ZERO);
        assert_eq!(parse_quantity("0x").unwrap(), U256::ZERO);
    }

    #[test]
    fn parse_quantity_rejects_decimal() {
        assert!(parse_quantity("1000").is_err());
        assert!(parse_quantity("0xzz").is_err());
    }
}
