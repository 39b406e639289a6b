//! `whois shell` — the lookup form as a line-oriented prompt.
//!
//! One session lives for the whole shell, so each search overwrites the
//! previous result the way resubmitting the form does.

use std::io::{self, BufRead, Write};

use whois_core::{Config, Currency, WhoisApp};

use crate::render;

const HELP: &str = "\
commands:
  address <0x...>   set the address to look up
  currency <TICKER> ETH, DAI, ZRX, USDT or BAT
  search            look up the current address
  connect           request wallet access
  help              show this help
  quit              leave the shell";

#[derive(Debug, PartialEq)]
enum ShellCommand {
    Address(String),
    Currency(Currency),
    Search,
    Connect,
    Help,
    Quit,
    Empty,
}

fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));

    match word.to_ascii_lowercase().as_str() {
        "" => Ok(ShellCommand::Empty),
        "address" => Ok(ShellCommand::Address(rest.to_string())),
        "currency" => rest
            .parse::<Currency>()
            .map(ShellCommand::Currency)
            .map_err(|e| e.to_string()),
        "search" => Ok(ShellCommand::Search),
        "connect" => Ok(ShellCommand::Connect),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => Err(format!("unknown command `{other}` (try `help`)")),
    }
}

/// Run the `shell` subcommand.
pub async fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = WhoisApp::from_config(config)?;

    let status = app.load().await;
    println!("{}", render::banner(&status));
    println!("{HELP}");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} {}> ", app.view.currency(), app.view.address());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };

        let command = match parse_line(&line?) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            ShellCommand::Address(address) => app.view.set_address(address),
            ShellCommand::Currency(currency) => app.view.set_currency(currency),
            ShellCommand::Search => {
                println!("Searching...");
                let state = app.view.submit().await.clone();
                for line in render::view_lines(&state, app.view.result(), app.chain()) {
                    println!("{line}");
                }
            }
            ShellCommand::Connect => match app.connector.connect().await {
                Ok(status) => println!("{}", render::banner(&status)),
                Err(e) => println!("alert: {e}"),
            },
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => break,
            ShellCommand::Empty => {}
        }
    }

    Ok(())
}
