//! Text rendering of the session state.

use chain_eth::chains::EvmChain;
use whois_core::connector::ConnectionStatus;
use whois_core::{LookupResult, LookupState};

/// The connect control: the connected accounts, or a hint to connect.
pub fn banner(status: &ConnectionStatus) -> String {
    match status {
        ConnectionStatus::Connected(_) => format!("[{status}]"),
        ConnectionStatus::NotConnected => "[Connect wallet: run `connect`]".to_string(),
    }
}

pub fn result_lines(result: &LookupResult, chain: &EvmChain) -> Vec<String> {
    vec![
        format!("Address: {}", result.address),
        format!("Balance: {} {}", result.balance, result.currency),
        format!("USD Conversion $: {}", result.fiat),
        format!("Explorer: {}", chain.address_url(&result.address)),
    ]
}

/// Everything below the form: error banner, loading line, or result.
pub fn view_lines(
    state: &LookupState,
    result: Option<&LookupResult>,
    chain: &EvmChain,
) -> Vec<String> {
    let mut lines = Vec::new();
    if let LookupState::Error(message) = state {
        lines.push(format!("! {message}"));
    }
    if *state == LookupState::Loading {
        lines.push("Searching...".to_string());
    } else if let Some(result) = result {
        lines.extend(result_lines(result, chain));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_eth::chains::ETHEREUM;
    use whois_core::Currency;

    fn sample() -> LookupResult {
        LookupResult {
            address: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".into(),
            currency: Currency::Dai,
            balance: "12.5".into(),
            fiat: "12.499".into(),
        }
    }

    #[test]
    fn banner_shows_accounts() {
        let status = ConnectionStatus::Connected(vec!["0xabc".into()]);
        assert_eq!(banner(&status), "[Connected: 0xabc]");
        assert!(banner(&ConnectionStatus::NotConnected).contains("Connect wallet"));
    }

    #[test]
    fn success_renders_result() {
        let result = sample();
        let lines = view_lines(&LookupState::Success, Some(&result), &ETHEREUM);
        assert_eq!(lines[1], "Balance: 12.5 DAI");
        assert_eq!(lines[2], "USD Conversion $: 12.499");
        assert!(lines[3].starts_with("Explorer: https://etherscan.io/address/0x5aAe"));
    }

    #[test]
    fn error_is_shown_above_previous_result() {
        let result = sample();
        let state = LookupState::Error("Invalid value".into());
        let lines = view_lines(&state, Some(&result), &ETHEREUM);
        assert_eq!(lines[0], "! Invalid value");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn loading_hides_result() {
        let result = sample();
        let lines = view_lines(&LookupState::Loading, Some(&result), &ETHEREUM);
        assert_eq!(lines, vec!["Searching...".to_string()]);
    }

    #[test]
    fn idle_without_result_is_blank() {
        assert!(view_lines(&LookupState::Idle, None, &ETHEREUM).is_empty());
    }
}
