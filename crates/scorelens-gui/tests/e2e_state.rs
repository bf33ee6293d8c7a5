/// End-to-end tests for `AppState` -- the GUI application state machine.
///
/// These tests exercise the real load/reload paths of `AppState` without
/// spinning up an egui window. The real pipeline runs on every load, so no
/// mocking is needed.
use scorelens_core::model::Outcome;
use scorelens_core::{ColumnProblem, PipelineError};
use scorelens_gui::state::{AppPhase, AppState};
use scorelens_gui::ScoreLensState;
use std::fs;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

const GOOD: &str = "\
gender,math score,reading score,writing score
female,72,72,74
male,47,57,44
female,90,95,93
male,40,43,39
";

const NO_WRITING: &str = "\
gender,math score,reading score
female,72,72
";

fn loaded(csv: &str) -> AppState {
    let mut state = AppState::new();
    state.load_bytes("scores.csv", csv.as_bytes().to_vec());
    state
}

// ── Initial state ─────────────────────────────────────────────────────────────

#[test]
fn starts_idle_in_dark_mode() {
    let state = AppState::new();
    assert_eq!(state.phase, AppPhase::Idle);
    assert!(state.report.is_none());
    assert!(state.error.is_none());
    assert!(state.dark_mode);
    assert!(!state.can_reload());
    assert_eq!(state.pass_rate(), None);
}

#[test]
fn build_without_path_stays_idle() {
    let built = ScoreLensState::build(None);
    assert_eq!(built.state().phase, AppPhase::Idle);
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[test]
fn good_input_shows_results() {
    let state = loaded(GOOD);
    assert_eq!(state.phase, AppPhase::Results);
    let report = state.report.as_ref().unwrap();
    assert_eq!(report.source, "scores.csv");
    assert_eq!(report.row_count(), 4);
    assert_eq!(state.outcome_count(Outcome::Pass), 2);
    assert_eq!(state.outcome_count(Outcome::Fail), 2);
    assert_eq!(state.pass_rate(), Some(0.5));
    assert!(state.last_run_duration.is_some());
    assert!(state.can_reload());
}

#[test]
fn missing_column_shows_error() {
    let state = loaded(NO_WRITING);
    assert_eq!(state.phase, AppPhase::Failed);
    assert!(state.report.is_none());
    assert_eq!(
        state.error,
        Some(PipelineError::MissingColumn {
            column: "writing_score".to_string(),
            problem: ColumnProblem::Absent,
        })
    );
}

/// A failed run must not leave the previous report on screen.
#[test]
fn failure_replaces_previous_report() {
    let mut state = loaded(GOOD);
    assert!(state.report.is_some());

    state.load_bytes("broken.csv", NO_WRITING.as_bytes().to_vec());
    assert_eq!(state.phase, AppPhase::Failed);
    assert!(state.report.is_none());
    assert!(state.error.is_some());
}

/// And a successful run clears the previous error.
#[test]
fn success_replaces_previous_error() {
    let mut state = loaded(NO_WRITING);
    state.load_bytes("scores.csv", GOOD.as_bytes().to_vec());
    assert_eq!(state.phase, AppPhase::Results);
    assert!(state.error.is_none());
}

// ── Reload ────────────────────────────────────────────────────────────────────

#[test]
fn reload_reproduces_same_report() {
    let mut state = loaded(GOOD);
    let before = state.report.clone().unwrap();

    assert!(state.reload());
    let after = state.report.as_ref().unwrap();
    assert_eq!(after.table, before.table);
    assert_eq!(after.scores, before.scores);
    assert_eq!(after.outliers, before.outliers);
    assert_eq!(after.groups, before.groups);
    assert!(state.can_reload());
}

#[test]
fn reload_without_input_does_nothing() {
    let mut state = AppState::new();
    assert!(!state.reload());
    assert_eq!(state.phase, AppPhase::Idle);
}

// ── Files on disk ─────────────────────────────────────────────────────────────

#[test]
fn load_path_reads_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("StudentsPerformance.csv");
    fs::write(&path, GOOD).unwrap();

    let mut state = AppState::new();
    state.load_path(&path);
    assert_eq!(state.phase, AppPhase::Results);
    assert_eq!(
        state.report.as_ref().map(|r| r.source.as_str()),
        Some("StudentsPerformance.csv")
    );
    assert_eq!(state.path_input, path.display().to_string());
}

/// Reload reads the file again, so edits on disk show up.
#[test]
fn reload_rereads_file_from_disk() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("scores.csv");
    fs::write(&path, GOOD).unwrap();

    let mut state = AppState::new();
    state.load_path(&path);
    assert_eq!(state.phase, AppPhase::Results);

    fs::write(&path, NO_WRITING).unwrap();
    assert!(state.reload());
    assert_eq!(state.phase, AppPhase::Failed);
    assert!(state.report.is_none());
}

/// A broken file fixed on disk loads cleanly on Reload.
#[test]
fn reload_after_fixing_file_shows_results() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("scores.csv");
    fs::write(&path, NO_WRITING).unwrap();

    let mut state = AppState::new();
    state.load_path(&path);
    assert_eq!(state.phase, AppPhase::Failed);

    fs::write(&path, GOOD).unwrap();
    assert!(state.reload());
    assert_eq!(state.phase, AppPhase::Results);
    assert!(state.error.is_none());
    assert_eq!(state.report.as_ref().map(|r| r.row_count()), Some(4));
}

/// Dropped bytes have no file behind them and are re-run as captured.
#[test]
fn reload_without_path_reruns_captured_bytes() {
    let mut state = loaded(NO_WRITING);
    assert!(state.reload());
    assert_eq!(state.phase, AppPhase::Failed);
    assert_eq!(
        state.last_input.as_ref().map(|i| i.bytes.as_slice()),
        Some(NO_WRITING.as_bytes())
    );
}

#[test]
fn unreadable_path_is_malformed_input() {
    let tmp = TempDir::new().unwrap();
    let mut state = loaded(GOOD);
    state.load_path(&tmp.path().join("missing.csv"));

    assert_eq!(state.phase, AppPhase::Failed);
    assert!(state.report.is_none());
    assert_eq!(state.error.as_ref().map(|e| e.kind()), Some("MalformedInput"));
}

/// A path that did not exist yet can be retried with Reload once it does.
#[test]
fn unreadable_path_can_be_retried() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("late.csv");

    let mut state = AppState::new();
    state.load_path(&path);
    assert_eq!(state.phase, AppPhase::Failed);
    assert!(state.can_reload());

    fs::write(&path, GOOD).unwrap();
    assert!(state.reload());
    assert_eq!(state.phase, AppPhase::Results);
}

#[test]
fn path_input_loads_and_blank_is_ignored() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("scores.csv");
    fs::write(&path, GOOD).unwrap();

    let mut state = AppState::new();
    state.path_input = "   ".to_string();
    state.load_path_input();
    assert_eq!(state.phase, AppPhase::Idle);

    state.path_input = format!("  {}  ", path.display());
    state.load_path_input();
    assert_eq!(state.phase, AppPhase::Results);
}

#[test]
fn build_with_path_loads_on_startup() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("scores.csv");
    fs::write(&path, GOOD).unwrap();

    let built = ScoreLensState::build(Some(path));
    assert_eq!(built.state().phase, AppPhase::Results);
}
