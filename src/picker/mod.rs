mod prompt;

pub use prompt::PromptPicker;

use crate::error::SplitError;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Extensions the picker offers first; anything else is still accepted
pub const TRANSCRIPT_EXTENSIONS: &[&str] = &["srt", "txt"];

/// Source of the input path for a run
pub trait FilePicker {
    /// Ask for a path. `Ok(None)` means nothing was selected.
    fn pick(&mut self) -> Result<Option<PathBuf>, SplitError>;
}

/// A path supplied up front (e.g. on the command line)
#[derive(Debug, Clone, Default)]
pub struct ProvidedPath(Option<PathBuf>);

impl ProvidedPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(Some(path.into()))
    }
}

impl FilePicker for ProvidedPath {
    fn pick(&mut self) -> Result<Option<PathBuf>, SplitError> {
        Ok(self.0.take().and_then(accept))
    }
}

/// Whether `path` matches the transcript filter (case-insensitive)
pub fn is_transcript(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            TRANSCRIPT_EXTENSIONS
                .iter()
                .any(|known| e.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Turn raw picker input into a path, or `None` when nothing was chosen
///
/// Whitespace and one pair of surrounding quotes are stripped, since
/// terminals add them when a file is dropped onto the window.
pub fn parse_selection(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed)
        .trim();

    if unquoted.is_empty() {
        None
    } else {
        accept(PathBuf::from(unquoted))
    }
}

fn accept(path: PathBuf) -> Option<PathBuf> {
    if path.as_os_str().is_empty() {
        return None;
    }
    if !is_transcript(&path) {
        warn!(path = %path.display(), "not a .srt or .txt file, reading it anyway");
    }
    Some(path)
}
