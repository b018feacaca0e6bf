//! Check command - match a file against the stored keys

use std::path::Path;
use std::process::ExitCode;

use keymatch::core::models::FileRef;

use super::context::{Context, ensure_file, exit_code};
use crate::cli::GlobalOpts;

/// Select `file` for checking, which dispatches it
pub async fn check(
    opts: &GlobalOpts,
    file: &Path,
    app_name: Option<String>,
) -> anyhow::Result<ExitCode> {
    ensure_file(file)?;
    let ctx = Context::new(opts, app_name)?;

    let result = ctx.session.select_check_file(FileRef::new(file)).await;

    ctx.report();
    Ok(exit_code(&result))
}
