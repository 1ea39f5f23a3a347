use dbping::cli::{Cli, Commands};
use dbping::commands::check;
use std::process;
use tracing_subscriber::EnvFilter;

// Allow println in main CLI binary
#[allow(clippy::disallowed_methods)]
fn main() {
    init_logging();

    let cli = Cli::parse();
    tracing::debug!("dbping CLI initialized");

    match cli.command {
        Some(Commands::Check { url, config }) => {
            // Handle async command in sync context
            let rt = tokio::runtime::Runtime::new().unwrap();
            if let Err(e) = rt.block_on(check::handle_check(url, &config)) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        None => {
            println!("dbping - Use --help for available commands");
        }
    }
}

/// Initialize logging based on environment variables
fn init_logging() {
    // Default to INFO level, can be overridden by RUST_LOG environment variable
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dbping=info,warn"));

    // Logs go to stderr; standard output carries only connection diagnostics
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
