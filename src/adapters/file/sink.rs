//! Output-directory artifact sink

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};

use crate::core::error::ArtifactError;
use crate::core::models::{Artifact, ArtifactHandle, DeliveredArtifact};
use crate::core::ports::ArtifactSink;

/// Writes artifacts into a directory
///
/// Staging writes a hidden `.{name}.{id}.part` file next to the target,
/// delivery renames it onto `{dir}/{name}` and release deletes whatever
/// staging file is left.
#[derive(Debug)]
pub struct FsArtifactSink {
    dir: PathBuf,
    next_id: AtomicU64,
}

impl FsArtifactSink {
    /// Deliver into `dir`, creating it on first use
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            next_id: AtomicU64::new(1),
        }
    }

    /// The output directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn io_error(name: &str, source: std::io::Error) -> ArtifactError {
        ArtifactError::Io {
            name: name.to_string(),
            source,
        }
    }
}

impl ArtifactSink for FsArtifactSink {
    fn stage(&self, artifact: &Artifact) -> Result<ArtifactHandle, ArtifactError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(&artifact.name, e))?;

        let staging = self.dir.join(format!(".{}.{id}.part", artifact.name));
        fs::write(&staging, &artifact.content).map_err(|e| Self::io_error(&artifact.name, e))?;

        Ok(ArtifactHandle {
            id,
            name: artifact.name.clone(),
            size: artifact.content.len(),
            location: Some(staging),
        })
    }

    fn deliver(&self, handle: &ArtifactHandle) -> Result<DeliveredArtifact, ArtifactError> {
        let staging = handle.location.as_ref().ok_or(ArtifactError::UnknownHandle(handle.id))?;
        let target = self.dir.join(&handle.name);
        fs::rename(staging, &target).map_err(|e| Self::io_error(&handle.name, e))?;
        debug!("wrote {}", target.display());

        Ok(DeliveredArtifact {
            name: handle.name.clone(),
            location: Some(target),
            size: handle.size,
        })
    }

    fn release(&self, handle: ArtifactHandle) {
        let Some(staging) = handle.location else {
            return;
        };
        match fs::remove_file(&staging) {
            Ok(()) => debug!("removed leftover {}", staging.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {},
            Err(e) => warn!("could not remove {}: {e}", staging.display()),
        }
    }
}
