//! Fiat conversion through a public exchange-rate endpoint.
//!
//! Rates are fetched fresh on every conversion. A missing rate is not an
//! error: the estimate comes out as NaN and is displayed as such.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::WhoisError;

/// Source of exchange rates, keyed by currency ticker.
///
/// A rate is the amount of that currency one unit of fiat buys.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rates(&self) -> Result<HashMap<String, String>, WhoisError>;
}

#[derive(Debug, Deserialize)]
struct ExchangeRatesEnvelope {
    data: ExchangeRates,
}

#[derive(Debug, Deserialize)]
struct ExchangeRates {
    rates: HashMap<String, String>,
}

/// Coinbase-style `GET /v2/exchange-rates` client.
#[derive(Debug)]
pub struct HttpRateSource {
    client: reqwest::Client,
    url: String,
}

impl HttpRateSource {
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    async fn fetch_rates(&self) -> Result<HashMap<String, String>, WhoisError> {
        debug!(url = %self.url, "fetching exchange rates");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| WhoisError::Rates(e.to_string()))?
            .error_for_status()
            .map_err(|e| WhoisError::Rates(e.to_string()))?;

        let envelope: ExchangeRatesEnvelope = response
            .json()
            .await
            .map_err(|e| WhoisError::Rates(e.to_string()))?;

        Ok(envelope.data.rates)
    }
}

/// Picks the rate for `ticker`, yielding NaN when it is missing or unparsable.
pub fn rate_for(rates: &HashMap<String, String>, ticker: &str) -> f64 {
    rates
        .get(ticker)
        .and_then(|r| r.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Divides a formatted balance by a rate.
pub fn fiat_estimate(balance: &str, rate: f64) -> f64 {
    balance.trim().parse::<f64>().unwrap_or(f64::NAN) / rate
}

const GROUPED_FRACTION_DIGITS: usize = 3;

/// Every finite `f64` has an exact decimal expansion within this many
/// fraction digits.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Rounds a non-negative finite value to `places` fraction digits, ties away
/// from zero, returning the whole and fraction digit strings.
///
/// Works on the exact decimal expansion, so `0.0625` rounds up to `0.063`
/// while `1.0005` (stored just below the tie) rounds down.
fn round_fraction(value: f64, places: usize) -> (String, String) {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(places))
        .collect();

    if fraction.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let fraction_digits = digits.split_off(split);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&fraction_digits).into_owned(),
    )
}

/// Formats a number the way an en-US locale would for display: thousands
/// grouped with `,`, at most three fraction digits, trailing zeros dropped.
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let (whole, fraction) = round_fraction(value.abs(), GROUPED_FRACTION_DIGITS);
    let whole = whole.as_str();
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

/// Fetches rates and converts `balance` of `ticker` to a display string.
pub async fn convert(
    source: &dyn RateSource,
    balance: &str,
    ticker: &str,
) -> Result<String, WhoisError> {
    let rates = source.fetch_rates().await?;
    let rate = rate_for(&rates, ticker);
    if rate.is_nan() {
        debug!(ticker, "no exchange rate available");
    }
    Ok(format_grouped(fiat_estimate(balance, rate)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(1234567.891), "1,234,567.891");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(999.0), "999");
    }

    #[test]
    fn rounds_to_three_fraction_digits() {
        assert_eq!(format_grouped(0.12345), "0.123");
        assert_eq!(format_grouped(2.5), "2.5");
        assert_eq!(format_grouped(0.0004), "0");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_grouped(1.0 / 16.0), "0.063");
        assert_eq!(format_grouped(0.0005), "0.001");
        assert_eq!(format_grouped(-2.0625), "-2.063");
    }

    #[test]
    fn values_stored_below_a_tie_round_down() {
        // 1.0005 is held as 1.000499999...
        assert_eq!(format_grouped(1.0005), "1");
    }

    #[test]
    fn rounding_carries_into_whole_part() {
        assert_eq!(format_grouped(999.9996), "1,000");
        assert_eq!(format_grouped(0.9999), "1");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_grouped(-1234.5), "-1,234.5");
    }

    #[test]
    fn nan_and_infinity() {
        assert_eq!(format_grouped(f64::NAN), "NaN");
        assert_eq!(format_grouped(f64::INFINITY), "∞");
    }

    #[test]
    fn missing_rate_is_nan() {
        let table = rates(&[("ETH", "0.0005")]);
        assert!(rate_for(&table, "BAT").is_nan());
        assert_eq!(rate_for(&table, "ETH"), 0.0005);
    }

    #[test]
    fn unparsable_rate_is_nan() {
        let table = rates(&[("ETH", "n/a")]);
        assert!(rate_for(&table, "ETH").is_nan());
    }

    #[test]
    fn estimate_divides_by_rate() {
        assert_eq!(fiat_estimate("2.0", 0.25), 8.0);
        assert!(fiat_estimate("2.0", f64::NAN).is_nan());
    }

    #[test]
    fn envelope_parses_coinbase_shape() {
        let raw = r#"{"data":{"currency":"USD","rates":{"ETH":"0.00025","DAI":"1.0001"}}}"#;
        let envelope: ExchangeRatesEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.data.rates["ETH"], "0.00025");
        assert_eq!(envelope.data.rates.len(), 2);
    }
}
