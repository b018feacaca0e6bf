//! Session controller
//!
//! Owns the application name and both workflows, turns inbound events into
//! state transitions, calls the key service and reports outcomes through the
//! notifier.
//!
//! The session runs on a single thread. Workflow state is borrowed only in
//! short synchronous sections before and after each awaited service call, so
//! an upload and a check can be in flight at the same time on one task.

use std::cell::RefCell;
use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;

use crate::core::error::WorkflowError;
use crate::core::models::{
    AppNameField, CheckSummary, DeliveredArtifact, FileRef, MATCHED_ARTIFACT, MatchedKey, Notice,
    SessionEvent, StateLabel, UPLOADED_ARTIFACT, UploadResponse,
};
use crate::core::ports::{ArtifactSink, KeyService, Notifier};

use super::check::CheckWorkflow;
use super::emitter::ResultArtifactEmitter;
use super::upload::UploadWorkflow;

/// Snapshot of everything the presentation layer renders
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    /// Application name as entered
    pub app_name: String,
    /// Whether the "Application Name is required" banner is up
    pub missing_app_name_alert: bool,
    /// Upload request state
    pub upload_state: StateLabel,
    /// Name of the file selected for upload
    pub upload_file_name: Option<String>,
    /// Message of the last failed upload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_error: Option<String>,
    /// Check request state
    pub check_state: StateLabel,
    /// Name of the file most recently selected for checking
    pub check_file_name: Option<String>,
    /// File name the service reported for the last successful check
    pub checked_file_name: Option<String>,
    /// Message of the last failed check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_error: Option<String>,
    /// Matching keys found by the last successful check
    pub matched_count: u64,
    /// Keys found by the last successful check
    pub matched_keys: Vec<MatchedKey>,
    /// Artifacts delivered during this session
    pub artifacts: Vec<DeliveredArtifact>,
    /// When the snapshot was taken (RFC3339)
    pub generated_at: String,
}

/// The dual-workflow controller
pub struct Session {
    service: Arc<dyn KeyService>,
    notifier: Arc<dyn Notifier>,
    emitter: ResultArtifactEmitter,
    app_name: RefCell<AppNameField>,
    upload: RefCell<UploadWorkflow>,
    check: RefCell<CheckWorkflow>,
    artifacts: RefCell<Vec<DeliveredArtifact>>,
}

impl Session {
    /// Create a session with an empty application name
    #[must_use]
    pub fn new(
        service: Arc<dyn KeyService>,
        sink: Arc<dyn ArtifactSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            service,
            notifier,
            emitter: ResultArtifactEmitter::new(sink),
            app_name: RefCell::new(AppNameField::default()),
            upload: RefCell::new(UploadWorkflow::default()),
            check: RefCell::new(CheckWorkflow::default()),
            artifacts: RefCell::new(Vec::new()),
        }
    }

    /// Feed one inbound event
    pub async fn handle(&self, event: SessionEvent) -> Result<(), WorkflowError> {
        match event {
            SessionEvent::UploadFilePicked(file) => self.select_upload_file(file),
            SessionEvent::CheckFilePicked(file) => self.select_check_file(file).await.map(|_| ()),
            SessionEvent::AppNameChanged(value) => {
                self.set_app_name(value);
                Ok(())
            },
            SessionEvent::RemoveFileClicked => self.remove_upload_file(),
            SessionEvent::UploadButtonClicked => self.dispatch_upload().await.map(|_| ()),
        }
    }

    /// Replace the application name and take down the missing-name banner
    pub fn set_app_name(&self, value: impl Into<String>) {
        self.app_name.borrow_mut().set(value);
        self.notifier.set_missing_app_name_alert(false);
    }

    /// Select the file to upload
    pub fn select_upload_file(&self, file: FileRef) -> Result<(), WorkflowError> {
        let result = self.upload.borrow_mut().select_file(file);
        result.inspect_err(|err| self.report_rejection(err))
    }

    /// Clear the file selected for upload
    pub fn remove_upload_file(&self) -> Result<(), WorkflowError> {
        let result = self.upload.borrow_mut().remove_file();
        result.map(|_| ()).inspect_err(|err| self.report_rejection(err))
    }

    /// Upload the selected file under the current application name
    ///
    /// Returns `Ok(None)` when no file is selected.
    pub async fn dispatch_upload(&self) -> Result<Option<UploadResponse>, WorkflowError> {
        let begun = {
            let mut app_name = self.app_name.borrow_mut();
            self.upload.borrow_mut().begin(&mut app_name)
        };
        let request = match begun {
            Ok(Some(request)) => request,
            Ok(None) => {
                info!("upload: nothing selected");
                return Ok(None);
            },
            Err(err) => {
                self.report_rejection(&err);
                return Err(err);
            },
        };

        info!("upload: sending {} as {}", request.file.display_name, request.app_name);
        let guard = CancelOnDrop::new(|| {
            if let Ok(mut upload) = self.upload.try_borrow_mut() {
                upload.cancel();
            }
        });
        let result = self.service.upload(&request.file, &request.app_name).await;
        guard.disarm();
        let finished = self.upload.borrow_mut().finish(result);

        match finished {
            Ok(response) => {
                self.notifier.notify(&Notice::success(
                    "File uploaded successfully",
                    format!("File: {}\nMessage: {}", response.filename, response.message),
                ));
                self.emit(&response.file, UPLOADED_ARTIFACT);
                Ok(Some(response))
            },
            Err(err) => {
                warn!("upload: {err}");
                self.notifier.notify(&Notice::error("Error uploading file", err.to_string()));
                Err(err)
            },
        }
    }

    /// Select a file to check and dispatch it immediately
    pub async fn select_check_file(&self, file: FileRef) -> Result<CheckSummary, WorkflowError> {
        let begun = {
            let app_name = self.app_name.borrow();
            self.check.borrow_mut().select_file(file, &app_name)
        };
        let request = begun.inspect_err(|err| self.report_rejection(err))?;

        info!("check: sending {}", request.file.display_name);
        let guard = CancelOnDrop::new(|| {
            if let Ok(mut check) = self.check.try_borrow_mut() {
                check.cancel();
            }
        });
        let result = self.service.check(&request.file, request.app_name.as_deref()).await;
        guard.disarm();
        let finished = self.check.borrow_mut().finish(result);

        match finished {
            Ok((summary, content)) => {
                self.emit(&content, MATCHED_ARTIFACT);
                self.notifier.notify(&Notice::success(
                    "File checked successfully",
                    format!(
                        "File: {}\nFound {} matching keys.",
                        summary.filename, summary.matched_count
                    ),
                ));
                Ok(summary)
            },
            Err(err) => {
                warn!("check: {err}");
                self.notifier.notify(&Notice::error("Error checking file", err.to_string()));
                Err(err)
            },
        }
    }

    /// Current state for rendering
    #[must_use]
    pub fn view(&self) -> SessionView {
        let app_name = self.app_name.borrow();
        let upload = self.upload.borrow();
        let check = self.check.borrow();

        SessionView {
            app_name: app_name.value().to_string(),
            missing_app_name_alert: app_name.alert_raised(),
            upload_state: upload.state().label(),
            upload_file_name: upload.slot().display_name().map(String::from),
            upload_error: upload.state().error().map(String::from),
            check_state: check.state().label(),
            check_file_name: check.slot().display_name().map(String::from),
            checked_file_name: check.summary().map(|s| s.filename.clone()),
            check_error: check.state().error().map(String::from),
            matched_count: check.matched_count(),
            matched_keys: check.matched_keys().to_vec(),
            artifacts: self.artifacts.borrow().clone(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Hand `content` to the emitter, reporting a failed delivery
    ///
    /// The workflow stays succeeded either way. A delivery replaces any
    /// earlier one of the same name, as the file itself does.
    fn emit(&self, content: &str, name: &str) {
        match self.emitter.emit(content, name) {
            Ok(delivered) => {
                let mut artifacts = self.artifacts.borrow_mut();
                artifacts.retain(|a| a.name != delivered.name);
                artifacts.push(delivered);
            },
            Err(err) => {
                self.notifier.notify(&Notice::error("Error saving result", err.to_string()));
            },
        }
    }

    fn report_rejection(&self, err: &WorkflowError) {
        warn!("rejected: {err}");
        if matches!(err, WorkflowError::MissingAppName) {
            self.notifier.set_missing_app_name_alert(true);
        }
        self.notifier.notify(&Notice::error("Error", err.to_string()));
    }
}

/// Runs `cancel` when dropped, unless disarmed first
///
/// Held across a service call so a dropped dispatch future does not leave
/// its workflow `Pending`.
struct CancelOnDrop<F: FnOnce()> {
    cancel: Option<F>,
}

impl<F: FnOnce()> CancelOnDrop<F> {
    const fn new(cancel: F) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }

    fn disarm(mut self) {
        self.cancel = None;
    }
}

impl<F: FnOnce()> Drop for CancelOnDrop<F> {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            warn!("request dropped before it finished");
            cancel();
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("app_name", &self.app_name)
            .field("upload", &self.upload)
            .field("check", &self.check)
            .finish_non_exhaustive()
    }
}
