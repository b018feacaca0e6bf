//! Domain models for keymatch
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`AppNameField`] - The tag uploads are filed under
//! - [`FileSlot`] - At most one selected file per workflow
//! - [`RequestState`] - Idle, pending, succeeded or failed
//! - [`UploadResponse`] / [`CheckResponse`] - What the service sends back
//! - [`Artifact`] - A result file handed to the user

mod app_name;
mod artifact;
mod event;
mod file_slot;
mod notice;
mod request_state;
mod response;

pub use app_name::AppNameField;
pub use artifact::{
    Artifact, ArtifactHandle, DeliveredArtifact, MATCHED_ARTIFACT, TEXT_CSV, UPLOADED_ARTIFACT,
};
pub use event::SessionEvent;
pub use file_slot::{FileRef, FileSlot};
pub use notice::{Notice, NoticeKind};
pub use request_state::{RequestState, StateLabel};
pub use response::{CheckResponse, CheckSummary, MatchedKey, UploadResponse};
