// orgmerge CLI - compiles yearly organization dumps into one merged archive

mod compile;
mod exit_codes;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::EXIT_SUCCESS;

#[derive(Parser)]
#[command(name = "orgmerge")]
#[command(about = "Merge multi-year organization archives into one deduplicated dataset")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full compilation from a TOML config file
    #[command(after_help = "\
Examples:
  orgmerge run compile.toml
  orgmerge run compile.toml --json
  orgmerge run compile.toml --output merged.json")]
    Run {
        /// Path to the compile config file
        config: PathBuf,

        /// Output JSON to stdout as well as the configured file
        #[arg(long)]
        json: bool,

        /// Write the snapshot to this path instead of the configured one
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a compile config without running
    #[command(after_help = "\
Examples:
  orgmerge validate compile.toml")]
    Validate {
        /// Path to the compile config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { config, json, output } => compile::cmd_run(config, json, output),
        Commands::Validate { config } => compile::cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}
