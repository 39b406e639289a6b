use serde::Serialize;

/// A well-known ERC-20 token on Ethereum mainnet.
#[derive(Debug, Clone, Serialize)]
pub struct TokenInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    /// EIP-55 checksummed contract address.
    pub address: &'static str,
    pub decimals: u8,
}

/// Dai Stablecoin.
pub const DAI: TokenInfo = TokenInfo {
    symbol: "DAI",
    name: "Dai Stablecoin",
    address: "0x6B175474E89094C44Da98b954EedeAC495271d0F",
    decimals: 18,
};

/// 0x Protocol Token.
pub const ZRX: TokenInfo = TokenInfo {
    symbol: "ZRX",
    name: "0x Protocol Token",
    address: "0xE41d2489571d322189246DaFA5ebDe1F4699F498",
    decimals: 18,
};

/// Tether USD.
pub const USDT: TokenInfo = TokenInfo {
    symbol: "USDT",
    name: "Tether USD",
    address: "0xdAC17F958D2ee523a2206206994597C13D831ec7",
    decimals: 6,
};

/// Basic Attention Token.
pub const BAT: TokenInfo = TokenInfo {
    symbol: "BAT",
    name: "Basic Attention Token",
    address: "0x0D8775F648430679A709E98d2b0Cb6250d2887EF",
    decimals: 18,
};

const ALL_TOKENS: &[&TokenInfo] = &[&DAI, &ZRX, &USDT, &BAT];

/// Looks up a listed token by symbol, ignoring case.
pub fn get_token(symbol: &str) -> Option<&'static TokenInfo> {
    ALL_TOKENS
        .iter()
        .find(|t| t.symbol.eq_ignore_ascii_case(symbol.trim()))
        .copied()
}

/// Returns every listed token.
pub fn listed_tokens() -> Vec<&'static TokenInfo> {
    ALL_TOKENS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::validate_address;

    #[test]
    fn get_dai() {
        let token = get_token("DAI").expect("DAI should be listed");
        assert_eq!(token.name, "Dai Stablecoin");
        assert_eq!(token.decimals, 18);
    }

    #[test]
    fn usdt_has_six_decimals() {
        assert_eq!(get_token("USDT").unwrap().decimals, 6);
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(get_token(" bat ").unwrap().symbol, "BAT");
        assert_eq!(get_token("zrx").unwrap().symbol, "ZRX");
    }

    #[test]
    fn unlisted_symbol_returns_none() {
        assert!(get_token("ETH").is_none());
        assert!(get_token("").is_none());
    }

    #[test]
    fn listed_tokens_has_four_entries() {
        assert_eq!(listed_tokens().len(), 4);
    }

    #[test]
    fn all_addresses_are_checksummed() {
        for token in listed_tokens() {
            assert!(
                validate_address(token.address).unwrap(),
                "{} address should carry a valid EIP-55 checksum",
                token.symbol
            );
            assert!(token.address.chars().any(|c| c.is_ascii_uppercase()));
        }
    }
}
