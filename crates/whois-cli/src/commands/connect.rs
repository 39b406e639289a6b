//! `whois connect` — request account access from the injected wallet.
//!
//! Without a provider nothing is requested and the wallet stays
//! not connected.

use whois_core::{Config, WhoisApp};

use crate::render;

/// Run the `connect` subcommand.
pub async fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = WhoisApp::from_config(config)?;

    if !app.connector.has_provider() {
        println!("{}", render::banner(&app.connector.status()));
        return Ok(());
    }

    let status = app.connector.connect().await?;
    println!("{}", render::banner(&status));
    Ok(())
}
