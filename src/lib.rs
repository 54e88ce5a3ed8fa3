// Public API exports
pub mod chunker;
pub mod document;
pub mod error;
pub mod output;
pub mod picker;
pub mod pipeline;
pub mod planner;
pub mod strategy;

// Re-export main types for convenience
pub use error::SplitError;
pub use document::Document;

pub use strategy::{normalize_line_endings, ChunkStrategy, Mode, ParagraphStrategy, WordStrategy};

pub use planner::{
    paragraph_part_count, PartPlan, WordPolicy, DEFAULT_MAX_PARTS, DEFAULT_MIN_PARTS,
    DEFAULT_TARGET_WORDS,
};

pub use chunker::{partition, Part, PartIndex};

pub use output::{output_dir_for, part_file_name, PartWriter};

pub use picker::{FilePicker, PromptPicker, ProvidedPath};

pub use pipeline::{run, run_now, split_text, Progress, RunReport, SplitText};
