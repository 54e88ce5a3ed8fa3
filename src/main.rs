use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use transcript_splitter::{
    run_now, FilePicker, Mode, Progress, PromptPicker, ProvidedPath, SplitError,
};

/// Split a .srt or .txt transcript into a few near-equal parts
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Transcript to split; prompts for one when omitted
    path: Option<PathBuf>,

    /// Unit the transcript is split on
    #[arg(long, value_enum, default_value_t = Mode::Words)]
    mode: Mode,

    /// Also print a JSON summary of the run
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut picker: Box<dyn FilePicker> = match cli.path {
        Some(path) => Box::new(ProvidedPath::new(path)),
        None => Box::new(PromptPicker::default()),
    };

    let path = match picker.pick() {
        Ok(Some(path)) => path,
        Ok(None) => {
            println!("No file was selected.");
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let report = run_now(&path, cli.mode, |event| match event {
        Progress::Counted { unit_name, total } => {
            println!("Total {}: {}", unit_name, total);
        }
        Progress::Planned(plan) => {
            // Paragraph mode has no estimate to show, only the step result
            if let Some(target) = plan.target_size {
                println!("Target size per part:   {}", target);
                println!("Estimated parts (ceil): {}", plan.estimated);
                println!("Maximum parts:          {}", plan.max_parts);
            }
            println!("Creating {} parts.", plan.parts);
        }
        Progress::Written(path) => {
            println!("✓ Saved: {}", path.display());
        }
    });

    match report {
        Ok(report) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ SplitError::Read { .. }) => {
            eprintln!("✗ Error reading the file: {}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            eprintln!("✗ Error saving the files: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
