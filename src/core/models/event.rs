//! Inbound events from the presentation layer

use super::FileRef;

/// Something the user did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A file was dropped on or picked for the upload target
    UploadFilePicked(FileRef),
    /// A file was dropped on or picked for the check target
    CheckFilePicked(FileRef),
    /// The application name input changed
    AppNameChanged(String),
    /// The remove button next to the upload file was clicked
    RemoveFileClicked,
    /// The upload button was clicked
    UploadButtonClicked,
}
