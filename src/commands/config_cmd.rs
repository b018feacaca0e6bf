//! Config command - show or create configuration

use std::process::ExitCode;

use anyhow::bail;

use keymatch::config::Config;
use keymatch::output::{OperationResult, OutputMode};
use keymatch::paths;

use crate::cli::{ConfigAction, GlobalOpts};

/// Handle config subcommands
pub fn config_cmd(action: ConfigAction, opts: &GlobalOpts) -> anyhow::Result<ExitCode> {
    match action {
        ConfigAction::Show => show(opts),
        ConfigAction::Init { force, global } => init(force, global, opts.mode),
    }
}

fn show(opts: &GlobalOpts) -> anyhow::Result<ExitCode> {
    let config = Config::load(opts.config.as_deref())?;
    let source = opts.config.clone().or_else(Config::discovered_path);

    if opts.mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "source": source.map(|p| p.to_string_lossy().into_owned()),
                "config": config,
            })
        );
    } else {
        match source {
            Some(path) => println!("# {}", path.display()),
            None => println!("# built-in defaults"),
        }
        print!("{}", toml::to_string_pretty(&config)?);
    }
    Ok(ExitCode::SUCCESS)
}

fn init(force: bool, global: bool, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let path = if global { paths::global_config() } else { paths::project_config() };
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    Config::default().save_to(&path)?;

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);
    Ok(ExitCode::SUCCESS)
}
