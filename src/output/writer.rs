use super::{PART_EXTENSION, PART_INFIX, TIMESTAMP_FORMAT};
use crate::chunker::PartIndex;
use crate::error::SplitError;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// `<original dir>/<YYYYMMDD_HHMMSS>`
pub fn output_dir_for(original: &Path, timestamp: NaiveDateTime) -> PathBuf {
    let parent = original.parent().unwrap_or_else(|| Path::new(""));
    parent.join(timestamp.format(TIMESTAMP_FORMAT).to_string())
}

/// `<stem>_parte<index>.txt`
pub fn part_file_name(stem: &str, index: PartIndex) -> String {
    format!("{stem}{PART_INFIX}{index}.{PART_EXTENSION}")
}

/// Writes numbered part files into one timestamped directory
#[derive(Debug, Clone)]
pub struct PartWriter {
    dir: PathBuf,
    stem: String,
}

impl PartWriter {
    /// Create (or reuse) the output directory next to `original`
    ///
    /// An existing directory with the same name is not an error, so two runs
    /// inside the same second share it.
    pub fn create(original: &Path, timestamp: NaiveDateTime) -> Result<Self, SplitError> {
        let dir = output_dir_for(original, timestamp);
        fs::create_dir_all(&dir).map_err(|source| SplitError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        debug!(dir = %dir.display(), "output directory ready");

        let stem = original
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self { dir, stem })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, index: PartIndex) -> PathBuf {
        self.dir.join(part_file_name(&self.stem, index))
    }

    /// Write one part as UTF-8, creating or truncating the file
    pub fn write(&self, index: PartIndex, text: &str) -> Result<PathBuf, SplitError> {
        let path = self.path_for(index);
        fs::write(&path, text).map_err(|source| SplitError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = text.len(), "wrote part");
        Ok(path)
    }

    /// Write parts in order, calling `on_written` after each file lands
    ///
    /// Stops at the first failure; files already written stay on disk.
    pub fn write_all<I, F>(&self, parts: I, mut on_written: F) -> Result<Vec<PathBuf>, SplitError>
    where
        I: IntoIterator<Item = (PartIndex, String)>,
        F: FnMut(&Path),
    {
        let mut written = Vec::new();
        for (index, text) in parts {
            let path = self.write(index, &text)?;
            on_written(&path);
            written.push(path);
        }
        Ok(written)
    }
}
