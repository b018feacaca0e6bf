//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - Key service over multipart HTTP (reqwest)
//! - `file/` - Artifact delivery into an output directory
//! - `console/` - Terminal notices

pub mod console;
pub mod file;
pub mod http;

pub use console::ConsoleNotifier;
pub use file::FsArtifactSink;
pub use http::HttpKeyService;
