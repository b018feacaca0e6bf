//! Workflow services
//!
//! - [`upload`] - Tagged upload state machine
//! - [`check`] - Auto-dispatching check state machine
//! - [`emitter`] - Result artifact delivery
//! - [`session`] - Controller owning both workflows

pub mod check;
pub mod emitter;
pub mod session;
pub mod upload;

pub use check::{CheckRequest, CheckWorkflow};
pub use emitter::ResultArtifactEmitter;
pub use session::{Session, SessionView};
pub use upload::{UploadRequest, UploadWorkflow};

/// Failure message of a request whose future was dropped before it finished
pub const CANCELLED: &str = "cancelled";
