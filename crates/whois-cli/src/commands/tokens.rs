//! `whois tokens` — the built-in token list.

use chain_eth::tokens::listed_tokens;

/// Run the `tokens` subcommand.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{:<6} {:<24} {:>8}  CONTRACT", "SYMBOL", "NAME", "DECIMALS");
    for token in listed_tokens() {
        println!(
            "{:<6} {:<24} {:>8}  {}",
            token.symbol, token.name, token.decimals, token.address
        );
    }
    Ok(())
}
