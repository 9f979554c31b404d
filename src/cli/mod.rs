//! CLI command definitions and handlers

mod analyze;
mod catalog;
mod init;

use crate::classifier::Classifier;
use crate::config::{load_config, NbtiConfig};
use crate::reporters::{OutputFormat, RenderOptions};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// NBTI - nail measurement personality classifier
#[derive(Parser, Debug)]
#[command(name = "nbti")]
#[command(
    version,
    about = "Classify fingernail measurements into NBTI persona and durability result cards",
    long_about = "NBTI reads the per-finger nail measurements produced by the nail analysis \
backend and classifies them into result cards.\n\n\
Stage 1 uses the index/ring 2D:4D ratio and nail shape to pick one of six personas.\n\
Stage 2 uses nail curvature statistics to pick one of three durability profiles.",
    after_help = "\
Examples:
  nbti step1 payload.json              Persona card from an analysis payload
  nbti step2 - < payload.json          Durability profile from stdin
  nbti step1 --sample -f json          Classify the built-in sample measurements
  nbti analyze --step1 a.json --step2 b.json   Combined result with share card
  nbti catalog D-A                     Show one result card
  nbti init                            Write an example nbti.toml"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence
    #[arg(
        long,
        global = true,
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: String,

    /// Config file (default: ./nbti.toml, then the user config)
    #[arg(long, global = true, env = "NBTI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable ANSI colors in text output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the measurements for one stage come from
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Analysis payload JSON file (`-` or omitted: stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Classify the built-in sample measurements instead of reading input
    #[arg(long, conflicts_with = "input")]
    pub sample: bool,

    /// Use the sample measurements when the payload reports an analysis error
    #[arg(long)]
    pub fallback: bool,
}

/// Output flags shared by the classifying commands
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format: text, json, markdown (or md)
    #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
    pub format: Option<String>,

    /// Output file path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stage 1: persona card from index and ring nail measurements
    #[command(after_help = "\
Examples:
  nbti step1 payload.json                      Text card
  nbti step1 payload.json -f json              JSON in the web client's shape
  nbti step1 payload.json --fallback           Sample result if the analysis failed
  nbti step1 --sample -f markdown -o card.md   Markdown card from sample data")]
    Step1 {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Stage 2: durability profile from nail curvature
    #[command(after_help = "\
Examples:
  nbti step2 payload.json                      Text card
  cat payload.json | nbti step2 -f json        Read the payload from stdin
  nbti step2 --sample                          Classify the sample measurements")]
    Step2 {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Combined result of both stages, with a share card
    #[command(after_help = "\
Examples:
  nbti analyze --step1 hand1.json --step2 hand2.json
  nbti analyze --sample -f json
  nbti analyze --step2 hand2.json -f markdown -o result.md")]
    Analyze {
        /// Stage 1 payload (`-` for stdin)
        #[arg(long, value_name = "FILE")]
        step1: Option<PathBuf>,

        /// Stage 2 payload (`-` for stdin)
        #[arg(long, value_name = "FILE")]
        step2: Option<PathBuf>,

        /// Classify the built-in sample measurements for both stages
        #[arg(long, conflicts_with_all = ["step1", "step2"])]
        sample: bool,

        /// Use the sample measurements when a payload reports an analysis error
        #[arg(long)]
        fallback: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List result cards, or show one by code (P1-P6, D-A, D-B, D-C)
    #[command(after_help = "\
Examples:
  nbti catalog                 List all cards
  nbti catalog P3              Show one persona
  nbti catalog d-b -f json     One profile as JSON")]
    Catalog {
        /// Card code
        code: Option<String>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,
    },

    /// Write an example nbti.toml
    Init {
        /// Directory to write nbti.toml into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Write the user-level config instead
        #[arg(long, conflicts_with = "path")]
        user: bool,
    },
}

/// Loaded config plus the flags every command needs
pub(crate) struct Session {
    pub config: NbtiConfig,
    pub classifier: Classifier,
    no_color: bool,
}

impl Session {
    fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read working directory")?;
        let config = load_config(cli.config.as_deref(), &cwd)?;
        Ok(Self {
            classifier: Classifier::new(config.thresholds),
            no_color: cli.no_color || config.no_color(),
            config,
        })
    }

    /// Explicit `-f` or the configured default
    pub fn format(&self, flag: Option<&str>) -> Result<OutputFormat> {
        OutputFormat::from_str(flag.unwrap_or_else(|| self.config.format()))
    }

    /// Colors only when writing to a terminal that supports them
    pub fn render_options(&self, output: Option<&Path>) -> RenderOptions {
        RenderOptions {
            color: !self.no_color && output.is_none() && console::colors_enabled(),
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // init must work even when the existing config is broken
    let session = || Session::load(&cli);

    match &cli.command {
        Commands::Init { path, user } => init::run(path, *user),
        Commands::Step1 { input, output } => {
            analyze::run_step(&session()?, analyze::Stage::One, input, output)
        }
        Commands::Step2 { input, output } => {
            analyze::run_step(&session()?, analyze::Stage::Two, input, output)
        }
        Commands::Analyze {
            step1,
            step2,
            sample,
            fallback,
            output,
        } => analyze::run_combined(
            &session()?,
            step1.as_deref(),
            step2.as_deref(),
            *sample,
            *fallback,
            output,
        ),
        Commands::Catalog { code, format } => {
            catalog::run(&session()?, code.as_deref(), format.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_step_flags_parse() {
        let cli =
            Cli::try_parse_from(["nbti", "step1", "in.json", "-f", "json", "--fallback"]).unwrap();
        match cli.command {
            Commands::Step1 { input, output } => {
                assert_eq!(input.input, Some(PathBuf::from("in.json")));
                assert!(input.fallback);
                assert!(!input.sample);
                assert_eq!(output.format.as_deref(), Some("json"));
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_sample_conflicts_with_input() {
        assert!(Cli::try_parse_from(["nbti", "step2", "in.json", "--sample"]).is_err());
        assert!(Cli::try_parse_from(["nbti", "analyze", "--step1", "a.json", "--sample"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["nbti", "step1", "-f", "sarif"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["nbti", "catalog", "--no-color", "--log-level", "debug"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.log_level, "debug");
    }
}
