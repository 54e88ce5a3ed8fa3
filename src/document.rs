use crate::error::SplitError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw transcript text together with the file it came from
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    /// Read a whole file as UTF-8 text
    ///
    /// Missing files, permission problems and invalid UTF-8 all surface as
    /// `SplitError::Read`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SplitError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SplitError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = text.len(), "read document");

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
