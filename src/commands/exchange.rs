//! Exchange command - upload and check at the same time

use std::path::Path;
use std::process::ExitCode;

use keymatch::core::models::FileRef;

use super::context::{Context, ensure_file};
use crate::cli::GlobalOpts;

/// Upload `upload` and check `check` concurrently
///
/// Both workflows run to completion even if one fails.
pub async fn exchange(
    opts: &GlobalOpts,
    upload: &Path,
    check: &Path,
    app_name: Option<String>,
) -> anyhow::Result<ExitCode> {
    ensure_file(upload)?;
    ensure_file(check)?;
    let ctx = Context::new(opts, app_name)?;

    ctx.session.select_upload_file(FileRef::new(upload))?;
    let (uploaded, checked) = tokio::join!(
        ctx.session.dispatch_upload(),
        ctx.session.select_check_file(FileRef::new(check)),
    );

    ctx.report();
    if uploaded.is_ok() && checked.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
