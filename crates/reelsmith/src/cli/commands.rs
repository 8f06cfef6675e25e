//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use reelsmith::ScriptLength;
use std::path::PathBuf;

/// Reelsmith - turn one prompt into a narrated, illustrated media bundle
#[derive(Parser, Debug)]
#[command(name = "reelsmith")]
#[command(about = "Turn one prompt into a narrated, illustrated media bundle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full workflow and write a bundle
    Generate(GenerateArgs),

    /// List narration voices available to the speech key
    Voices {
        /// Configuration file overriding the bundled defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// TOML key file with a [keys] table
        #[arg(long)]
        keys: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Configuration file overriding the bundled defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Arguments for `generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The video idea
    #[arg(long, short)]
    pub prompt: String,

    /// Narration length: short, medium or long (defaults to the configured length)
    #[arg(long, short)]
    pub length: Option<ScriptLength>,

    /// Where to write the zip bundle
    #[arg(long, short, default_value = "bundle.zip")]
    pub output: PathBuf,

    /// Configuration file overriding the bundled defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// TOML key file with a [keys] table
    #[arg(long)]
    pub keys: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_generate() {
        let cli = Cli::try_parse_from([
            "reelsmith",
            "generate",
            "--prompt",
            "Tide pools",
            "--length",
            "long",
            "--output",
            "out.zip",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.prompt, "Tide pools");
        assert_eq!(args.length, Some(ScriptLength::Long));
        assert_eq!(args.output, PathBuf::from("out.zip"));
        assert!(args.keys.is_none());
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["reelsmith", "generate", "-p", "Deserts"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.length.is_none());
        assert_eq!(args.output, PathBuf::from("bundle.zip"));
    }

    #[test]
    fn test_rejects_unknown_length() {
        assert!(Cli::try_parse_from(["reelsmith", "generate", "-p", "x", "-l", "epic"]).is_err());
    }

    #[test]
    fn test_generate_requires_prompt() {
        assert!(Cli::try_parse_from(["reelsmith", "generate"]).is_err());
    }
}
