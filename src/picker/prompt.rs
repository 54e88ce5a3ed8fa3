use super::{parse_selection, FilePicker};
use crate::error::SplitError;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::path::PathBuf;

/// Interactive picker: asks for a path on the terminal
///
/// The line editor lives only for the duration of one `pick` call.
#[derive(Debug, Clone)]
pub struct PromptPicker {
    title: String,
}

impl PromptPicker {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for PromptPicker {
    fn default() -> Self {
        Self::new("Select a .srt or .txt file")
    }
}

impl FilePicker for PromptPicker {
    fn pick(&mut self) -> Result<Option<PathBuf>, SplitError> {
        println!("{} (empty line or Ctrl-D to cancel):", self.title);

        let mut editor = Reedline::create();
        let prompt = DefaultPrompt::new(DefaultPromptSegment::Empty, DefaultPromptSegment::Empty);

        match editor.read_line(&prompt)? {
            Signal::Success(line) => Ok(parse_selection(&line)),
            Signal::CtrlC | Signal::CtrlD => Ok(None),
        }
    }
}
