//! Core domain logic for keymatch
//!
//! This module contains the workflow controller with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (AppNameField, FileSlot, RequestState, responses)
//! - `services/` - Upload and check state machines, artifact emitter, session
//! - `ports/` - Trait definitions for the key service, artifact sink and notifier
//! - `error` - Workflow, service and artifact errors

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
