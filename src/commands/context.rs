//! Session wiring shared by the workflow commands

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::ensure;

use keymatch::adapters::{ConsoleNotifier, FsArtifactSink, HttpKeyService};
use keymatch::config::Config;
use keymatch::core::services::Session;
use keymatch::output::{OutputMode, SessionReport};

use crate::cli::GlobalOpts;

/// A session plus the notifier it reports through
pub struct Context {
    pub session: Session,
    notifier: Arc<ConsoleNotifier>,
    mode: OutputMode,
}

impl Context {
    /// Build a session from config, overridden by command-line flags
    ///
    /// `app_name` falls back to `defaults.app_name` from the config.
    pub fn new(opts: &GlobalOpts, app_name: Option<String>) -> anyhow::Result<Self> {
        let config = Config::load(opts.config.as_deref())?;
        let url = opts.server.clone().unwrap_or_else(|| config.server.url.clone());
        let out_dir = opts.out_dir.clone().unwrap_or_else(|| config.output.dir.clone());
        log::debug!("service {url}, output {}", out_dir.display());

        let service = HttpKeyService::new(url, config.server.timeout())?;
        let notifier = Arc::new(ConsoleNotifier::new(opts.mode));
        let session = Session::new(
            Arc::new(service),
            Arc::new(FsArtifactSink::new(out_dir)),
            notifier.clone(),
        );

        if let Some(name) = app_name.or(config.defaults.app_name) {
            session.set_app_name(name);
        }

        Ok(Self {
            session,
            notifier,
            mode: opts.mode,
        })
    }

    /// Print the final report
    pub fn report(&self) {
        let report = SessionReport {
            view: self.session.view(),
            notices: self.notifier.notices(),
        };
        report.render(self.mode);
    }

    /// Output mode in effect
    pub const fn mode(&self) -> OutputMode {
        self.mode
    }
}

/// Refuse paths that are not regular files
pub fn ensure_file(path: &Path) -> anyhow::Result<()> {
    ensure!(path.is_file(), "not a file: {}", path.display());
    Ok(())
}

/// Exit code for a finished workflow
pub fn exit_code<T, E>(result: &Result<T, E>) -> ExitCode {
    if result.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
