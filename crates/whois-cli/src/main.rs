//! # whois CLI
//!
//! Entry point for the `whois` binary.
//!
//! Subcommands:
//! - `whois connect` — Request account access from the injected wallet
//! - `whois lookup`  — Balance of an address in ETH or a listed token, with a USD estimate
//! - `whois token`   — On-chain name and symbol of a listed token
//! - `whois tokens`  — Print the built-in token list
//! - `whois shell`   — Interactive form that keeps one view across searches

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use whois_core::config::{Config, DEFAULT_RATES_URL};
use whois_core::Currency;

mod commands;
mod render;

/// whois — look up an Ethereum address balance and its USD value.
#[derive(Parser)]
#[command(name = "whois", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Injected wallet provider (JSON-RPC URL). Without one the wallet is not connected.
    #[arg(long, env = "WHOIS_PROVIDER_URL", global = true)]
    provider_url: Option<String>,

    /// Node for balance reads (default: the provider, else the chain's public RPC).
    #[arg(long, env = "WHOIS_RPC_URL", global = true)]
    rpc_url: Option<String>,

    /// Chain ID. Only Ethereum mainnet (1) is supported.
    #[arg(long, env = "WHOIS_CHAIN_ID", default_value_t = 1, global = true)]
    chain_id: u64,

    /// Exchange-rate endpoint.
    #[arg(long, env = "WHOIS_RATES_URL", default_value = DEFAULT_RATES_URL, global = true)]
    rates_url: String,
}

impl From<GlobalArgs> for Config {
    fn from(args: GlobalArgs) -> Self {
        Config {
            provider_url: args.provider_url,
            rpc_url: args.rpc_url,
            chain_id: args.chain_id,
            rates_url: args.rates_url,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Request account access from the injected wallet provider.
    Connect,

    /// Look up a balance and convert it to USD.
    Lookup {
        /// Address to query (0x...).
        #[arg(long)]
        address: String,

        /// ETH or one of DAI, ZRX, USDT, BAT (default: ETH).
        #[arg(long, default_value = "ETH")]
        currency: Currency,
    },

    /// Read name() and symbol() from a listed token contract.
    Token {
        /// Token symbol, e.g. DAI.
        symbol: String,
    },

    /// Print the built-in token list.
    Tokens,

    /// Interactive lookup form.
    Shell,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::from(cli.global);

    let result = match cli.command {
        Commands::Connect => commands::connect::run(&config).await,
        Commands::Lookup { address, currency } => {
            commands::lookup::run(&config, address, currency).await
        }
        Commands::Token { symbol } => commands::token::run(&config, &symbol).await,
        Commands::Tokens => commands::tokens::run(),
        Commands::Shell => commands::shell::run(&config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
