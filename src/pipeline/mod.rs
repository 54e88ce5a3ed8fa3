#[cfg(test)]
mod tests;

use crate::chunker::partition;
use crate::document::Document;
use crate::error::SplitError;
use crate::output::PartWriter;
use crate::planner::PartPlan;
use crate::strategy::{normalize_line_endings, ChunkStrategy, Mode};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Progress notifications emitted while a run advances
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// Units were extracted from the document
    Counted { unit_name: &'static str, total: usize },
    /// The part count was decided
    Planned(&'a PartPlan),
    /// A part file was written
    Written(&'a Path),
}

/// Document text split into serialized parts, before anything touches disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitText {
    pub total_units: usize,
    pub plan: PartPlan,
    /// Serialized parts in order; element `i` is part `i + 1`
    pub parts: Vec<String>,
}

/// Summary of a finished run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub source: PathBuf,
    pub mode: Mode,
    pub total_units: usize,
    pub plan: PartPlan,
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Normalize, plan and partition `text` with `strategy`
pub fn split_text(text: &str, strategy: &dyn ChunkStrategy) -> SplitText {
    let normalized = normalize_line_endings(text);
    let units = strategy.units(&normalized);
    let plan = strategy.plan(units.len());

    let parts = partition(&units, plan.parts)
        .iter()
        .map(|part| strategy.join(part.units))
        .collect();

    SplitText {
        total_units: units.len(),
        plan,
        parts,
    }
}

/// Read `path`, split it and write the parts under a directory named by
/// `timestamp`
pub fn run<F>(
    path: &Path,
    mode: Mode,
    timestamp: NaiveDateTime,
    mut on_progress: F,
) -> Result<RunReport, SplitError>
where
    F: FnMut(Progress<'_>),
{
    let document = Document::read(path)?;
    let strategy = mode.strategy();

    let split = split_text(document.text(), strategy.as_ref());
    info!(
        source = %path.display(),
        units = split.total_units,
        parts = split.plan.parts,
        estimated = split.plan.estimated,
        "planned split"
    );
    on_progress(Progress::Counted {
        unit_name: strategy.unit_name(),
        total: split.total_units,
    });
    on_progress(Progress::Planned(&split.plan));

    let writer = PartWriter::create(document.path(), timestamp)?;
    let numbered = split.parts.into_iter().enumerate().map(|(i, text)| (i + 1, text));
    let files = writer.write_all(numbered, |written| on_progress(Progress::Written(written)))?;

    Ok(RunReport {
        source: document.path().to_path_buf(),
        mode,
        total_units: split.total_units,
        plan: split.plan,
        output_dir: writer.dir().to_path_buf(),
        files,
    })
}

/// `run` stamped with the current local time
pub fn run_now<F>(path: &Path, mode: Mode, on_progress: F) -> Result<RunReport, SplitError>
where
    F: FnMut(Progress<'_>),
{
    run(path, mode, Local::now().naive_local(), on_progress)
}
