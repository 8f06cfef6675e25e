//! Reelsmith CLI binary.
//!
//! - `generate`: run the workflow and write a zip bundle
//! - `voices`: list narration voices
//! - `config`: print the effective configuration

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, list_voices, run_generate, show_config};

    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    #[cfg(feature = "otel")]
    reelsmith::init_telemetry(cli.verbose)?;

    #[cfg(not(feature = "otel"))]
    {
        use tracing_subscriber::EnvFilter;

        let filter = if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    let outcome = match cli.command {
        Commands::Generate(args) => run_generate(args).await,
        Commands::Voices { config, keys } => list_voices(config.as_deref(), keys.as_deref()).await,
        Commands::Config { config } => show_config(config.as_deref()),
    };

    #[cfg(feature = "otel")]
    reelsmith::shutdown_telemetry();

    outcome?;
    Ok(())
}
