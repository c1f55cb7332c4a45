//! `hallen` command-line entrypoint.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use hallen_config::Config;
use hallen_extract::Item;
use hallen_fetch::{ClientOptions, Retriever};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Look up where a Bücherhallen Hamburg catalog item is on the shelf.
#[derive(Parser, Debug)]
#[command(name = "hallen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog item ID, as in `/suchergebnis-detail/medium/<ID>.html`
    id: String,

    /// Additional configuration file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Branch whose room to show, overriding the configured one
    #[arg(short, long)]
    location: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err:?}");
            return ExitCode::FAILURE;
        },
    };
    let options = ClientOptions {
        user_agent: config.http.user_agent.clone(),
        timeout: config.http.timeout(),
        connect_timeout: config.http.connect_timeout(),
    };
    let item = match Retriever::with_options(&options).and_then(|retriever| retriever.fetch_item_details(&cli.id)) {
        Ok(item) => item,
        Err(err) => {
            tracing::info!(retryable = err.is_retryable(), "Lookup failed");
            eprintln!("{err:?}");
            return ExitCode::FAILURE;
        },
    };
    print_item(&item, cli.location.as_deref().unwrap_or(&config.preferred_location));
    ExitCode::SUCCESS
}

fn print_item(item: &Item, location: &str) {
    println!("{item}");
    if item.availabilities().is_empty() {
        println!("  not held at any location");
    }
    for availability in item.availabilities() {
        let marker = if availability.is_available() { '+' } else { '-' };
        println!("  {marker} {availability}");
    }
    let room = item.preferred_room_for(location);
    if !room.is_empty() {
        println!("room: {room}");
    }
}
