//! Result artifact emitter
//!
//! Turns response content into a file the user can retrieve.

use std::sync::Arc;

use log::{debug, warn};

use crate::core::error::ArtifactError;
use crate::core::models::{Artifact, DeliveredArtifact};
use crate::core::ports::ArtifactSink;

/// Hands CSV results to an [`ArtifactSink`]
pub struct ResultArtifactEmitter {
    sink: Arc<dyn ArtifactSink>,
}

impl ResultArtifactEmitter {
    /// Emit through `sink`
    #[must_use]
    pub fn new(sink: Arc<dyn ArtifactSink>) -> Self {
        Self { sink }
    }

    /// Deliver `content` as a CSV artifact called `name`
    ///
    /// The staged handle is released whether or not delivery succeeds.
    pub fn emit(&self, content: &str, name: &str) -> Result<DeliveredArtifact, ArtifactError> {
        let artifact = Artifact::csv(name, content);
        let handle = self.sink.stage(&artifact)?;
        debug!("artifact {name}: staged as handle {}", handle.id);

        let delivered = self.sink.deliver(&handle);
        self.sink.release(handle);

        match &delivered {
            Ok(d) => debug!("artifact {name}: delivered {} bytes", d.size),
            Err(err) => warn!("artifact {name}: {err}"),
        }
        delivered
    }
}

impl std::fmt::Debug for ResultArtifactEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultArtifactEmitter").finish_non_exhaustive()
    }
}
