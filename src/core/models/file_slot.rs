//! Selected file references

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A file chosen by the user
///
/// Only the path is held here. The bytes are read when a request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRef {
    /// Location on the local filesystem
    pub path: PathBuf,
    /// Name shown to the user and sent as the multipart filename
    pub display_name: String,
}

impl FileRef {
    /// Reference `path`, naming it after its final component
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let display_name = path
            .file_name()
            .map_or_else(|| path.to_string_lossy().into_owned(), |n| n.to_string_lossy().into_owned());
        Self { path, display_name }
    }
}

/// Holds at most one selected file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSlot {
    file: Option<FileRef>,
}

impl FileSlot {
    /// Replace whatever was selected
    pub fn replace(&mut self, file: FileRef) {
        self.file = Some(file);
    }

    /// Empty the slot, returning the previous file
    pub fn clear(&mut self) -> Option<FileRef> {
        self.file.take()
    }

    /// The selected file, if any
    #[must_use]
    pub const fn file(&self) -> Option<&FileRef> {
        self.file.as_ref()
    }

    /// Display name of the selected file, if any
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.file.as_ref().map(|f| f.display_name.as_str())
    }

    /// Whether nothing is selected
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.file.is_none()
    }
}
