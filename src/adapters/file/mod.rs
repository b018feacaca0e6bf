//! File-based artifact delivery
//!
//! Implements `ArtifactSink` by writing results into an output directory.

mod sink;

pub use sink::FsArtifactSink;
