// Rust guideline compliant 2026-10-19

//! Stagerun CLI Application
//!
//! Command-line interface for the Stagerun pre-commit runner.

use clap::Parser;
use stagerun_cli::commands::{self, hooks::HookAction};
use stagerun_cli::terminal::print_error;
use stagerun_cli::{create_formatter, should_use_color};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "stagerun",
    version,
    about = "Stagerun: run lint and format commands on staged files",
    long_about = "Stagerun maps the files staged for commit onto commands through glob rules, and keeps the formatter's option file in sync with its configuration.",
    after_help = "Examples:\n  stagerun init\n  stagerun hooks pre-commit --dry-run\n  stagerun plan src/index.ts README.md\n  stagerun formatter-options --write .prettierrc.json\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Write the default configuration and install the pre-commit hook
    Init,

    /// Run Stagerun Git hooks
    Hooks {
        #[command(subcommand)]
        action: HookAction,
    },

    /// Show the commands that would run for the given files
    Plan {
        /// Files to match against the rules
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print or write the formatter options
    FormatterOptions {
        /// Write the options to this file instead of printing them
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let json = cli.json;
    let use_color = !cli.no_color && should_use_color();

    if let Err(err) = run(cli, use_color) {
        let message = format!("{:#}", err);
        if json {
            eprintln!("{}", create_formatter(true, false).format_error(&message));
        } else {
            print_error(&message, use_color);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, use_color: bool) -> anyhow::Result<()> {
    stagerun_cli::logging::init_tracing(&cli.log_level)?;

    let formatter = create_formatter(cli.json, use_color);
    let cwd = std::env::current_dir()?;

    match cli.command {
        Some(Commands::Init) => {
            commands::init::execute(&cwd)?;
        }
        Some(Commands::Hooks { action }) => {
            commands::hooks::execute(action, &cwd, cli.config, formatter.as_ref())?;
        }
        Some(Commands::Plan { files }) => {
            let (config, rules) = commands::load_config(&cwd, cli.config.as_deref())?;
            commands::plan::execute(&config, &rules, &cwd, &files, formatter.as_ref())?;
        }
        Some(Commands::FormatterOptions { write }) => {
            let (config, _) = commands::load_config(&cwd, cli.config.as_deref())?;
            commands::formatter_options::execute(&config, write.as_deref(), use_color)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
