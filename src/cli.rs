//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands;
use keymatch::output::OutputMode;

/// keymatch - Upload key files and check files against stored keys
#[derive(Parser, Debug)]
#[command(
    name = "keymatch",
    version,
    about = "Upload key files and check files against stored keys",
    long_about = "Exchange CSV key files with a key-matching service.\n\n\
                  Upload stores a file's keys under an application name.\n\
                  Check matches a file against every stored key and saves the matches."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Key service URL (overrides config and KEYMATCH_SERVER_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// Directory result files are written to
    #[arg(long, global = true, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Config file to use instead of the discovered one
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload a file's keys under an application name
    Upload {
        /// File to upload
        file: PathBuf,

        /// Application name the keys are filed under
        #[arg(short, long)]
        app_name: Option<String>,
    },

    /// Check a file against the stored keys
    Check {
        /// File to check
        file: PathBuf,

        /// Application name to send along with the check
        #[arg(short, long)]
        app_name: Option<String>,
    },

    /// Upload one file and check another at the same time
    Exchange {
        /// File to upload
        #[arg(long)]
        upload: PathBuf,

        /// File to check
        #[arg(long)]
        check: PathBuf,

        /// Application name for the upload (also sent with the check)
        #[arg(short, long)]
        app_name: Option<String>,
    },

    /// Interactive session reading commands from stdin
    Shell {
        /// Initial application name
        #[arg(short, long)]
        app_name: Option<String>,
    },

    /// Show or create configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,

        /// Write ~/.keymatch/config.toml instead of ./.keymatch.toml
        #[arg(long)]
        global: bool,
    },
}

/// Options every command shares
#[derive(Debug, Clone)]
pub struct GlobalOpts {
    /// Output mode
    pub mode: OutputMode,
    /// `--server`
    pub server: Option<String>,
    /// `--out-dir`
    pub out_dir: Option<PathBuf>,
    /// `--config`
    pub config: Option<PathBuf>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let opts = GlobalOpts {
        mode: output_mode,
        server: cli.server,
        out_dir: cli.out_dir,
        config: cli.config,
    };

    match cli.command {
        Some(Command::Upload { file, app_name }) => {
            block_on(commands::upload(&opts, &file, app_name))
        },
        Some(Command::Check { file, app_name }) => block_on(commands::check(&opts, &file, app_name)),
        Some(Command::Exchange {
            upload,
            check,
            app_name,
        }) => block_on(commands::exchange(&opts, &upload, &check, app_name)),
        Some(Command::Shell { app_name }) => block_on(commands::shell(&opts, app_name)),
        Some(Command::Config { action }) => commands::config_cmd(action, &opts),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": keymatch::VERSION
                    })
                );
            } else {
                println!("keymatch v{}", keymatch::VERSION);
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": keymatch::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("keymatch v{}", keymatch::VERSION);
                println!("\nRun 'keymatch --help' for usage");
                println!("Run 'keymatch upload <FILE> --app-name <NAME>' to get started");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}

/// Drive a command on a single-threaded runtime
fn block_on<F>(future: F) -> anyhow::Result<ExitCode>
where
    F: Future<Output = anyhow::Result<ExitCode>>,
{
    tokio::runtime::Builder::new_current_thread().enable_all().build()?.block_on(future)
}
