//! Check workflow
//!
//! Selecting a file dispatches it straight away. A selection made while a
//! check is in flight is refused.

use log::debug;

use crate::core::error::{ServiceError, WorkflowError, WorkflowKind};
use crate::core::models::{
    AppNameField, CheckResponse, CheckSummary, FileRef, FileSlot, MatchedKey, RequestState,
};

use super::CANCELLED;

/// What to send for one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    /// The selected file
    pub file: FileRef,
    /// Application name, when one was entered
    pub app_name: Option<String>,
}

/// State machine for key checks
#[derive(Debug, Clone, Default)]
pub struct CheckWorkflow {
    slot: FileSlot,
    state: RequestState<CheckResponse>,
    summary: Option<CheckSummary>,
}

impl CheckWorkflow {
    /// Select `file` and move to `Pending`
    ///
    /// The application name is read now, not when the field was last edited.
    pub fn select_file(
        &mut self,
        file: FileRef,
        app_name: &AppNameField,
    ) -> Result<CheckRequest, WorkflowError> {
        if self.state.is_pending() {
            return Err(WorkflowError::Busy(WorkflowKind::Check));
        }
        debug!("check: {} pending", file.display_name);
        self.slot.replace(file.clone());
        self.state = RequestState::Pending;
        Ok(CheckRequest {
            file,
            app_name: app_name.value_if_present().map(String::from),
        })
    }

    /// Record the outcome of the request started by [`Self::select_file`]
    ///
    /// A failure keeps the summary of the last successful check.
    pub fn finish(
        &mut self,
        result: Result<CheckResponse, ServiceError>,
    ) -> Result<(CheckSummary, String), WorkflowError> {
        match result {
            Ok(response) => {
                let summary = CheckSummary::from(&response);
                debug!("check: {} matched {} key(s)", summary.filename, summary.matched_count);
                let content = response.file.clone();
                self.summary = Some(summary.clone());
                self.state = RequestState::Succeeded(response);
                Ok((summary, content))
            },
            Err(err) => {
                debug!("check: failed: {err}");
                self.state = RequestState::Failed(err.to_string());
                Err(err.into())
            },
        }
    }

    /// Abandon the request started by [`Self::select_file`]
    ///
    /// Only a `Pending` workflow is affected. The last summary is kept.
    pub fn cancel(&mut self) {
        if self.state.is_pending() {
            debug!("check: cancelled");
            self.state = RequestState::Failed(CANCELLED.to_string());
        }
    }

    /// Current request state
    #[must_use]
    pub const fn state(&self) -> &RequestState<CheckResponse> {
        &self.state
    }

    /// The file most recently selected
    #[must_use]
    pub const fn slot(&self) -> &FileSlot {
        &self.slot
    }

    /// Summary of the last successful check
    #[must_use]
    pub const fn summary(&self) -> Option<&CheckSummary> {
        self.summary.as_ref()
    }

    /// Matching keys found by the last successful check
    #[must_use]
    pub fn matched_count(&self) -> u64 {
        self.summary.as_ref().map_or(0, |s| s.matched_count)
    }

    /// Keys found by the last successful check
    #[must_use]
    pub fn matched_keys(&self) -> &[MatchedKey] {
        self.summary.as_ref().map(|s| s.entries.as_slice()).unwrap_or_default()
    }
}
