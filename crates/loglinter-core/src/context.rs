//! Context types for rule execution.

use crate::source::SourcePos;
use crate::types::Location;
use std::path::{Path, PathBuf};

/// Context provided to per-file rules.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Builds a report location for a position inside this file.
    #[must_use]
    pub fn location(&self, pos: SourcePos) -> Location {
        Location::from_pos(self.relative_path.clone(), pos)
    }
}
