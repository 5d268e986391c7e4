//! Termchat TUI entry point.

use clap::Parser;
use termchat_core::User;
use termchat_tui::{RelayChannel, Runtime, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Termchat terminal client
#[derive(Parser, Debug)]
#[command(name = "termchat")]
#[command(about = "Terminal chat client with a slash-command interpreter")]
#[command(version)]
struct Args {
    /// Username to log in as
    ///
    /// If not provided, a random user{N} name is generated.
    #[arg(short, long)]
    username: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs to this file
    ///
    /// The terminal owns stdout, so logging is disabled unless a file is
    /// given.
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = std::fs::File::create(path)?;
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
        tracing_subscriber::registry().with(fmt::layer().with_writer(file)).with(filter).init();
    }

    let channel = RelayChannel::spawn();
    let driver = TerminalDriver::new(channel)?;

    let runtime = match args.username {
        Some(name) => Runtime::with_user(driver, User::named(name)),
        None => Runtime::new(driver),
    };

    Ok(runtime.run().await?)
}
