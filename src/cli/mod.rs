//! CLI commands implementation.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use console::style;

use crate::config::Settings;
use crate::ocr::{OcrBackend, TesseractBackend};
use crate::server;

#[derive(Parser)]
#[command(name = "dealsight")]
#[command(about = "Business listing screenshot analysis and opportunity scoring")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Bind address: port, host, or host:port
        #[arg(short, long, default_value = "127.0.0.1:8080", env = "DEALSIGHT_BIND")]
        bind: String,
    },

    /// Check that external dependencies are configured
    Check,
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Arc::new(Settings::from_env());

    match cli.command {
        Commands::Serve { bind } => cmd_serve(settings, &bind).await,
        Commands::Check => cmd_check(&settings),
    }
}

/// Start the web server.
async fn cmd_serve(settings: Arc<Settings>, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    println!(
        "{} Starting Dealsight server at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    server::serve(settings, &host, port).await
}

/// Report the status of external dependencies.
fn cmd_check(settings: &Settings) -> anyhow::Result<()> {
    let ocr = TesseractBackend::new(&settings.tesseract_cmd, &settings.tesseract_lang);
    if ocr.is_available() {
        println!("{} {}", style("✓").green(), ocr.availability_hint());
    } else {
        println!("{} {}", style("✗").red(), ocr.availability_hint());
    }

    if settings.anthropic_api_key.is_empty() {
        println!(
            "{} ANTHROPIC_API_KEY is not set; LLM requests will fail",
            style("✗").red()
        );
    } else {
        println!("{} Anthropic API key is configured", style("✓").green());
    }

    Ok(())
}

/// Parse a bind address that can be:
/// - Just a port: "8080" -> 127.0.0.1:8080
/// - Just a host: "0.0.0.0" -> 0.0.0.0:8080
/// - Host and port: "0.0.0.0:8080" -> 0.0.0.0:8080
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use default port
    Ok((bind.to_string(), 8080))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bind_port_only() {
        assert_eq!(
            parse_bind_address("3000").unwrap(),
            ("127.0.0.1".to_string(), 3000)
        );
    }

    #[test]
    fn test_parse_bind_host_only() {
        assert_eq!(
            parse_bind_address("0.0.0.0").unwrap(),
            ("0.0.0.0".to_string(), 8080)
        );
    }

    #[test]
    fn test_parse_bind_host_and_port() {
        assert_eq!(
            parse_bind_address("0.0.0.0:9000").unwrap(),
            ("0.0.0.0".to_string(), 9000)
        );
    }
}
