//! `whois lookup` — one submit of the lookup form.

use whois_core::{Config, Currency, LookupState, WhoisApp};

use crate::render;

/// Run the `lookup` subcommand.
pub async fn run(
    config: &Config,
    address: String,
    currency: Currency,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = WhoisApp::from_config(config)?;

    let status = app.load().await;
    println!("{}", render::banner(&status));

    app.view.set_address(address);
    app.view.set_currency(currency);
    eprintln!("Searching...");

    if let LookupState::Error(message) = app.view.submit().await {
        return Err(message.clone().into());
    }

    if let Some(result) = app.view.result() {
        for line in render::result_lines(result, app.chain()) {
            println!("{line}");
        }
    }
    Ok(())
}
