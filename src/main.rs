//! token-launcher: A terminal wizard for preparing token launches

use clap::Parser;
use color_eyre::Result;
use std::fs::File;
use std::path::PathBuf;
use token_launcher_core::LauncherConfig;
use token_launcher_tui::App;
use tracing::Level;
use tracing_subscriber::{EnvFilter, prelude::*};

/// token-launcher: Terminal wizard for token launches
#[derive(Parser, Debug)]
#[command(name = "token-launcher")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: <config_dir>/token-launcher/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Payment address shown on the review step (overrides the config file)
    #[arg(long)]
    payment_address: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Log file path (default: <temp_dir>/token-launcher.log)
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging to file (not stdout, which would corrupt TUI)
    let log_path = resolve_log_path(cli.log_file);
    let log_file = File::create(&log_path)?;

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_file)
                .with_ansi(true)
                .with_target(false),
        )
        .with(filter)
        .init();

    tracing::info!("Starting token-launcher");

    let (config, source) = LauncherConfig::load(cli.config.as_deref())?;
    let config = config.with_payment_address(cli.payment_address);
    config.validate()?;
    tracing::info!("Using config: {}", source);

    // Run the TUI
    let mut app = App::new(config);
    app.run()?;

    tracing::info!("Goodbye!");
    Ok(())
}

/// Resolve the log file path, falling back to the platform temp directory.
fn resolve_log_path(log_file: Option<String>) -> PathBuf {
    match log_file {
        Some(path) => PathBuf::from(path),
        None => std::env::temp_dir().join("token-launcher.log"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn default_log_path_uses_temp_dir() {
        let path = resolve_log_path(None);
        let expected = std::env::temp_dir().join("token-launcher.log");
        assert_eq!(path, expected);
    }

    #[test]
    fn explicit_log_path_is_used() {
        let custom = "/some/custom/path.log".to_string();
        let path = resolve_log_path(Some(custom.clone()));
        assert_eq!(path, PathBuf::from(custom));
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn payment_address_flag_is_parsed() {
        let cli = Cli::parse_from(["token-launcher", "--payment-address", "ADDR", "-d"]);
        assert_eq!(cli.payment_address.as_deref(), Some("ADDR"));
        assert!(cli.debug);
        assert!(cli.config.is_none());
    }
}
