use super::*;
use crate::strategy::{ParagraphStrategy, WordStrategy};
use chrono::NaiveDate;
use std::fs;
use tempfile::TempDir;

fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap()
}

fn numbered_words(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("w{i}")).collect()
}

#[test]
fn test_split_text_words_reassembles() {
    let words = numbered_words(7_501);
    let text = words.join("\n");

    let split = split_text(&text, &WordStrategy::default());
    assert_eq!(split.total_units, 7_501);
    assert_eq!(split.plan.estimated, 4);
    assert_eq!(split.parts.len(), 4);
    assert_eq!(split.parts.join(" "), words.join(" "));
}

#[test]
fn test_split_text_paragraphs_reassembles() {
    let paragraphs: Vec<String> = (0..60).map(|i| format!("line {i}\nmore {i}")).collect();
    let text = paragraphs.join("\r\n\r\n");

    let split = split_text(&text, &ParagraphStrategy);
    assert_eq!(split.total_units, 60);
    assert_eq!(split.plan.parts, 3);
    assert_eq!(split.parts.join("\n\n"), paragraphs.join("\n\n"));
}

#[test]
fn test_split_text_single_paragraph_leaves_empty_part() {
    let split = split_text("just one block", &ParagraphStrategy);
    assert_eq!(split.parts, vec!["just one block".to_string(), String::new()]);
}

#[test]
fn test_split_text_empty_input() {
    let split = split_text("", &WordStrategy::default());
    assert_eq!(split.total_units, 0);
    assert_eq!(split.parts, vec![String::new(), String::new()]);
}

#[test]
fn test_run_five_thousand_words_makes_two_files() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("episode.srt");
    let original = vec!["x"; 5_000].join(" ");
    fs::write(&source, &original).unwrap();

    let mut written = Vec::new();
    let report = run(&source, Mode::Words, fixed_time(), |event| {
        if let Progress::Written(path) = event {
            written.push(path.to_path_buf());
        }
    })
    .unwrap();

    assert_eq!(report.total_units, 5_000);
    assert_eq!(report.plan.estimated, 2);
    assert_eq!(report.plan.parts, 2);
    assert_eq!(report.output_dir, tmp.path().join("20250131_235959"));
    assert_eq!(report.files, written);
    assert_eq!(
        report.files,
        vec![
            report.output_dir.join("episode_parte1.txt"),
            report.output_dir.join("episode_parte2.txt"),
        ]
    );

    let first = fs::read_to_string(&report.files[0]).unwrap();
    let second = fs::read_to_string(&report.files[1]).unwrap();
    assert_eq!(first.split(' ').count(), 2_500);
    assert_eq!(second.split(' ').count(), 2_500);
    assert_eq!(format!("{first} {second}"), original);
}

#[test]
fn test_run_round_trip_through_files() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("notes.txt");
    let paragraphs: Vec<String> = (0..151).map(|i| format!("Paragraph {i}.")).collect();
    fs::write(&source, paragraphs.join("\n\n\n")).unwrap();

    let report = run(&source, Mode::Paragraphs, fixed_time(), |_| {}).unwrap();
    assert_eq!(report.plan.parts, 4);

    let mut rebuilt = Vec::new();
    for file in &report.files {
        let text = fs::read_to_string(file).unwrap();
        rebuilt.extend(ParagraphStrategy.units(&text).into_iter().map(str::to_string));
    }
    assert_eq!(rebuilt, paragraphs);
}

#[test]
fn test_run_twice_in_same_second() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("talk.txt");
    fs::write(&source, "a b c d e").unwrap();

    let first = run(&source, Mode::Words, fixed_time(), |_| {}).unwrap();
    let second = run(&source, Mode::Words, fixed_time(), |_| {}).unwrap();

    assert_eq!(first.output_dir, second.output_dir);
    assert_eq!(first.files, second.files);
    assert_eq!(fs::read_to_string(&second.files[0]).unwrap(), "a b c");
}

#[test]
fn test_run_progress_order() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("talk.txt");
    fs::write(&source, "one two three").unwrap();

    let mut events = Vec::new();
    run(&source, Mode::Words, fixed_time(), |event| {
        events.push(match event {
            Progress::Counted { unit_name, total } => format!("counted {total} {unit_name}"),
            Progress::Planned(plan) => format!("planned {}", plan.parts),
            Progress::Written(path) => format!("wrote {}", path.file_name().unwrap().to_string_lossy()),
        });
    })
    .unwrap();

    assert_eq!(
        events,
        vec![
            "counted 3 words",
            "planned 2",
            "wrote talk_parte1.txt",
            "wrote talk_parte2.txt",
        ]
    );
}

#[test]
fn test_run_read_failure_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("missing.srt");

    let result = run(&source, Mode::Words, fixed_time(), |_| {});
    assert!(matches!(result, Err(SplitError::Read { .. })));
    assert!(!tmp.path().join("20250131_235959").exists());
}

#[test]
fn test_report_serializes() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("talk.txt");
    fs::write(&source, "p1\n\np2").unwrap();

    let report = run(&source, Mode::Paragraphs, fixed_time(), |_| {}).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["mode"], "paragraphs");
    assert_eq!(json["total_units"], 2);
    assert_eq!(json["plan"]["parts"], 2);
    assert!(json["plan"]["target_size"].is_null());
    assert_eq!(json["files"].as_array().unwrap().len(), 2);
}
