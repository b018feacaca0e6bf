//! Upload workflow
//!
//! `Idle -> FileSelected -> (validate) -> Pending -> Succeeded | Failed`.
//! The file stays selected after a failure so the user can retry.

use log::debug;

use crate::core::error::{ServiceError, WorkflowError, WorkflowKind};
use crate::core::models::{AppNameField, FileRef, FileSlot, RequestState, UploadResponse};

use super::CANCELLED;

/// What to send for one upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// The selected file
    pub file: FileRef,
    /// Application name, as entered
    pub app_name: String,
}

/// State machine for tagged uploads
#[derive(Debug, Clone, Default)]
pub struct UploadWorkflow {
    slot: FileSlot,
    state: RequestState<UploadResponse>,
}

impl UploadWorkflow {
    /// Select `file`, replacing any previous selection
    pub fn select_file(&mut self, file: FileRef) -> Result<(), WorkflowError> {
        self.ensure_idle()?;
        debug!("upload: selected {}", file.display_name);
        self.slot.replace(file);
        self.state = RequestState::Idle;
        Ok(())
    }

    /// Clear the selection
    ///
    /// Returns the removed file, `None` if nothing was selected.
    pub fn remove_file(&mut self) -> Result<Option<FileRef>, WorkflowError> {
        self.ensure_idle()?;
        let removed = self.slot.clear();
        if let Some(file) = &removed {
            debug!("upload: removed {}", file.display_name);
            self.state = RequestState::Idle;
        }
        Ok(removed)
    }

    /// Validate and move to `Pending`
    ///
    /// Returns `Ok(None)` without touching anything when no file is selected.
    /// A blank application name leaves the state unchanged and raises the
    /// field's alert.
    pub fn begin(
        &mut self,
        app_name: &mut AppNameField,
    ) -> Result<Option<UploadRequest>, WorkflowError> {
        self.ensure_idle()?;
        let Some(file) = self.slot.file().cloned() else {
            return Ok(None);
        };
        let app_name = app_name.validate_for_upload()?.to_string();

        debug!("upload: {} pending", file.display_name);
        self.state = RequestState::Pending;
        Ok(Some(UploadRequest { file, app_name }))
    }

    /// Record the outcome of the request started by [`Self::begin`]
    pub fn finish(
        &mut self,
        result: Result<UploadResponse, ServiceError>,
    ) -> Result<UploadResponse, WorkflowError> {
        match result {
            Ok(response) => {
                debug!("upload: succeeded as {}", response.filename);
                self.state = RequestState::Succeeded(response.clone());
                Ok(response)
            },
            Err(err) => {
                debug!("upload: failed: {err}");
                self.state = RequestState::Failed(err.to_string());
                Err(err.into())
            },
        }
    }

    /// Abandon the request started by [`Self::begin`]
    ///
    /// Only a `Pending` workflow is affected; it becomes `Failed("cancelled")`
    /// and can be dispatched again.
    pub fn cancel(&mut self) {
        if self.state.is_pending() {
            debug!("upload: cancelled");
            self.state = RequestState::Failed(CANCELLED.to_string());
        }
    }

    /// Current request state
    #[must_use]
    pub const fn state(&self) -> &RequestState<UploadResponse> {
        &self.state
    }

    /// The selection
    #[must_use]
    pub const fn slot(&self) -> &FileSlot {
        &self.slot
    }

    fn ensure_idle(&self) -> Result<(), WorkflowError> {
        if self.state.is_pending() {
            return Err(WorkflowError::Busy(WorkflowKind::Upload));
        }
        Ok(())
    }
}
