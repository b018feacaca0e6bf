//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the workflow controller
//! and the outside world (remote service, file delivery, user interface).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The controller depends only on these traits, never on concrete
//! implementations, so tests drive it with in-memory doubles.

mod artifact_sink;
mod key_service;
mod notifier;

pub use artifact_sink::ArtifactSink;
pub use key_service::KeyService;
pub use notifier::Notifier;
