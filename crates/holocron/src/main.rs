//! holocron: browse the Star Wars API from the terminal
//!
//! One-shot pages (`holocron person 1`) print and exit. `holocron browse`
//! reads page commands from stdin, sharing one cache across the session.

use anyhow::Context;
use clap::{Parser, Subcommand};
use holocron::{Config, Navigate, Session};
use holocron_client::ResourceClient;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "holocron")]
#[command(about = "Browse the Star Wars API from the terminal")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "holocron.toml")]
    config: String,

    /// API base URL (overrides config file)
    #[arg(long, env = "HOLOCRON_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides config file)
    #[arg(long, env = "HOLOCRON_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(flatten)]
    Page(Navigate),
    /// Interactive session reading page commands from stdin
    Browse,
}

/// One line of input in a browse session
#[derive(Parser)]
#[command(no_binary_name = true, disable_help_flag = true)]
struct Line {
    #[command(subcommand)]
    to: Navigate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.api.timeout_secs = timeout_secs;
    }

    // Logs go to stderr so pages stay clean on stdout
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(base_url = %config.api.base_url, "starting holocron");

    let client = ResourceClient::new(config.api.client_config())
        .context("building HTTP client")?;
    let session = Session::new(client);

    match cli.command {
        Command::Page(to) => {
            let page = session.navigate(&to).await;
            print!("{}", page.text);
            if page.is_failure() {
                std::process::exit(1);
            }
        }
        Command::Browse => browse(&session).await?,
    }

    Ok(())
}

async fn browse(session: &Session) -> anyhow::Result<()> {
    println!("{}", session.home(None, 1).await.text);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            _ => {}
        }

        match Line::try_parse_from(words) {
            Ok(Line { to }) => {
                let page = session.navigate(&to).await;
                debug!(source = ?page.source, "page rendered");
                println!("{}", page.text);
            }
            Err(e) => println!("{e}"),
        }
    }

    let stats = session.cache().stats();
    info!(entities = stats.entities, searches = stats.searches, "session ended");
    Ok(())
}
