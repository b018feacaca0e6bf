//! Upload command - file a key file under an application name

use std::path::Path;
use std::process::ExitCode;

use keymatch::core::models::FileRef;

use super::context::{Context, ensure_file, exit_code};
use crate::cli::GlobalOpts;

/// Select `file`, then upload it as if the button were clicked
pub async fn upload(
    opts: &GlobalOpts,
    file: &Path,
    app_name: Option<String>,
) -> anyhow::Result<ExitCode> {
    ensure_file(file)?;
    let ctx = Context::new(opts, app_name)?;

    ctx.session.select_upload_file(FileRef::new(file))?;
    let result = ctx.session.dispatch_upload().await;

    ctx.report();
    Ok(exit_code(&result))
}
