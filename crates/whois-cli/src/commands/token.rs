//! `whois token` — on-chain metadata of a listed token.

use whois_core::{Config, WhoisApp};

/// Run the `token` subcommand.
pub async fn run(config: &Config, symbol: &str) -> Result<(), Box<dyn std::error::Error>> {
    let app = WhoisApp::from_config(config)?;
    let metadata = app.view.fetcher().token_metadata(symbol).await?;

    println!("Token:    {}", metadata.name);
    println!("Symbol:   {}", metadata.symbol);
    println!("Contract: {}", metadata.address);
    println!("Decimals: {}", metadata.decimals);
    Ok(())
}
