//! End-to-end: text through layout into a display list.
#![allow(clippy::unwrap_used, reason = "fixtures are known to be well formed")]

use typeset::{
    BreakParams, DisplayItem, DisplayList, FixedAdvanceMeasure, Length, OverflowPolicy,
    TypesetConfig, deserialize_display_list, serialize_display_list, typeset_text,
};

const PANGRAM: &str = "the quick brown fox jumps over the lazy dog";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Text items grouped into lines from top to bottom as `(label, left, right)`.
fn lines_of(list: &DisplayList) -> Vec<Vec<(String, Length, Length)>> {
    // Default measure at 12pt: 6pt per character.
    let mut lines: Vec<(Length, Vec<(String, Length, Length)>)> = Vec::new();
    for item in &list.items {
        let DisplayItem::Text { label, x, y, .. } = item else {
            continue;
        };
        let right = x + label.chars().count() as Length * 6.0;
        let entry = (label.clone(), *x, right);
        match lines.iter_mut().find(|(line_y, _)| (line_y - y).abs() < 1e-9) {
            Some((_, words)) => words.push(entry),
            None => lines.push((*y, vec![entry])),
        }
    }
    lines.sort_by(|left, right| right.0.total_cmp(&left.0));
    lines.into_iter().map(|(_, words)| words).collect()
}

fn labels(line: &[(String, Length, Length)]) -> Vec<&str> {
    line.iter().map(|(label, _, _)| label.as_str()).collect()
}

/// Optimal breaking justifies every line but the last to the line width.
///
/// # Panics
/// Panics if the lines or their extents are wrong.
#[test]
fn optimal_paragraph_is_justified() {
    init_logging();
    let config = TypesetConfig {
        line_width: 104.0,
        ..TypesetConfig::default()
    };
    let list = typeset_text(PANGRAM, &config, &FixedAdvanceMeasure::default()).unwrap();
    let lines = lines_of(&list);

    assert_eq!(lines.len(), 3);
    assert_eq!(labels(&lines[0]), vec!["the", "quick", "brown", "fox"]);
    assert_eq!(labels(&lines[1]), vec!["jumps", "over", "the", "lazy"]);
    assert_eq!(labels(&lines[2]), vec!["dog"]);
    for line in &lines[..2] {
        let (_, left, _) = &line[0];
        let (_, _, right) = &line[line.len() - 1];
        assert!(left.abs() < 1e-9);
        assert!((right - 104.0).abs() < 1e-6, "line ends at {right}");
    }

    // Bottom edge at zero: the last baseline sits one descent (3pt) up.
    let baselines: Vec<Length> = list
        .items
        .iter()
        .filter_map(|item| match item {
            DisplayItem::Text { y, .. } => Some(*y),
            DisplayItem::Rect { .. } => None,
        })
        .collect();
    assert!(baselines.iter().all(|&y| y >= 3.0 - 1e-9));
    assert!((baselines[baselines.len() - 1] - 3.0).abs() < 1e-9);
    assert!((baselines[0] - 31.0).abs() < 1e-9);
}

/// Wrap mode fills lines greedily with fixed spacing.
///
/// # Panics
/// Panics if the greedy lines are wrong.
#[test]
fn wrap_paragraph_is_greedy() {
    let config = TypesetConfig {
        line_width: 104.0,
        hspacing: 3.0,
        optimal: false,
        ..TypesetConfig::default()
    };
    let list = typeset_text(PANGRAM, &config, &FixedAdvanceMeasure::default()).unwrap();
    let lines = lines_of(&list);

    assert_eq!(lines.len(), 3);
    assert_eq!(labels(&lines[0]), vec!["the", "quick", "brown"]);
    assert_eq!(labels(&lines[1]), vec!["fox", "jumps", "over", "the"]);
    assert_eq!(labels(&lines[2]), vec!["lazy", "dog"]);
}

/// The fail policy surfaces as an error with context.
///
/// # Panics
/// Panics if the pipeline does not fail.
#[test]
fn fail_policy_is_an_error() {
    init_logging();
    let config = TypesetConfig {
        line_width: 20.0,
        break_params: BreakParams {
            overflow: OverflowPolicy::Fail,
            ..BreakParams::default()
        },
        ..TypesetConfig::default()
    };
    let error = typeset_text(PANGRAM, &config, &FixedAdvanceMeasure::default()).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("laying out paragraph"), "{message}");
    assert!(message.contains("no feasible break"), "{message}");

    let rescued = TypesetConfig {
        line_width: 20.0,
        ..TypesetConfig::default()
    };
    let list = typeset_text(PANGRAM, &rescued, &FixedAdvanceMeasure::default()).unwrap();
    assert_eq!(list.text_labels().len(), 9);
}

/// Blank text produces an empty display list.
///
/// # Panics
/// Panics if anything is drawn.
#[test]
fn blank_text_draws_nothing() {
    let list = typeset_text("   ", &TypesetConfig::default(), &FixedAdvanceMeasure::default())
        .unwrap();
    assert!(list.is_empty());
}

/// A pipeline result survives a bincode round trip unchanged.
///
/// # Panics
/// Panics if the replayed list differs.
#[test]
fn pipeline_output_replays() {
    let list = typeset_text(PANGRAM, &TypesetConfig::default(), &FixedAdvanceMeasure::default())
        .unwrap();
    let bytes = serialize_display_list(&list).unwrap();
    assert_eq!(deserialize_display_list(&bytes).unwrap(), list);
}

/// Configuration can be loaded from JSON with partial fields.
///
/// # Panics
/// Panics if the JSON is rejected or defaults are not applied.
#[test]
fn config_from_json() {
    let config: TypesetConfig = serde_json::from_str(
        r#"{ "line_width": 80.0, "optimal": false, "break_params": { "overflow": "fail" } }"#,
    )
    .unwrap();
    assert!((config.line_width - 80.0).abs() < f64::EPSILON);
    assert!(!config.optimal);
    assert_eq!(config.break_params.overflow, OverflowPolicy::Fail);
    assert!((config.line_pitch - 14.0).abs() < f64::EPSILON);
}
