/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. Every input
/// event (file dropped, path confirmed, reload clicked) runs the whole
/// pipeline synchronously and replaces whatever was on screen before,
/// success or failure.
use scorelens_core::loader;
use scorelens_core::model::Outcome;
use scorelens_core::{PipelineConfig, PipelineError, Report};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Nothing loaded yet.
    Idle,
    /// The last run succeeded and `report` is set.
    Results,
    /// The last run failed and `error` is set.
    Failed,
}

/// The input behind the current display, kept so Reload can re-run it.
#[derive(Debug, Clone)]
pub struct LoadedInput {
    pub name: String,
    pub bytes: Vec<u8>,
    /// File the bytes came from. Reload re-reads it so on-disk fixes are
    /// picked up; inputs without a path re-run the captured bytes.
    pub path: Option<PathBuf>,
}

/// All application state.
pub struct AppState {
    // ── Pipeline ──────────────────────────────────────
    pub phase: AppPhase,
    pub config: PipelineConfig,
    pub report: Option<Report>,
    pub error: Option<PipelineError>,
    pub last_input: Option<LoadedInput>,
    /// Wall time of the most recent run.
    pub last_run_duration: Option<Duration>,

    // ── UI state ──────────────────────────────────────
    /// Contents of the toolbar path field.
    pub path_input: String,
    pub show_about: bool,
    /// A file is being dragged over the window.
    pub file_hovering: bool,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create initial application state.
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    pub fn with_config(config: PipelineConfig) -> Self {
        Self {
            phase: AppPhase::Idle,
            config,
            report: None,
            error: None,
            last_input: None,
            last_run_duration: None,
            path_input: String::new(),
            show_about: false,
            file_hovering: false,
            dark_mode: true,
        }
    }

    /// Run the pipeline over `bytes` and replace the display with the result.
    pub fn load_bytes(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.run_input(LoadedInput {
            name: name.into(),
            bytes,
            path: None,
        });
    }

    fn run_input(&mut self, input: LoadedInput) {
        let started = Instant::now();
        let result = scorelens_core::run(&input.name, &input.bytes, &self.config);
        self.last_run_duration = Some(started.elapsed());
        self.last_input = Some(input);
        self.apply_result(result);
    }

    /// Read `path` from disk and run the pipeline over it.
    ///
    /// A file that cannot be read is shown as a failure like any other, and
    /// stays reloadable so it can be retried once it exists.
    pub fn load_path(&mut self, path: &Path) {
        self.path_input = path.display().to_string();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match loader::read_file(path) {
            Ok(bytes) => self.run_input(LoadedInput {
                name,
                bytes,
                path: Some(path.to_path_buf()),
            }),
            Err(e) => {
                tracing::warn!("Could not read {}: {}", path.display(), e);
                self.last_input = Some(LoadedInput {
                    name,
                    bytes: Vec::new(),
                    path: Some(path.to_path_buf()),
                });
                self.last_run_duration = None;
                self.apply_result(Err(e));
            }
        }
    }

    /// Load whatever is in the path field. Blank input is ignored.
    pub fn load_path_input(&mut self) {
        let trimmed = self.path_input.trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        self.load_path(Path::new(&trimmed));
    }

    /// Re-run the pipeline over the last input. A file is read again from
    /// disk; dropped bytes without a path are re-run as captured.
    ///
    /// Returns `false` if nothing has been loaded yet.
    pub fn reload(&mut self) -> bool {
        match self.last_input.take() {
            Some(LoadedInput {
                path: Some(path), ..
            }) => {
                self.load_path(&path);
                true
            }
            Some(input) => {
                self.run_input(input);
                true
            }
            None => false,
        }
    }

    pub fn can_reload(&self) -> bool {
        self.last_input.is_some()
    }

    /// Swap in the outcome of a run. Nothing from the previous run survives.
    fn apply_result(&mut self, result: Result<Report, PipelineError>) {
        match result {
            Ok(report) => {
                self.report = Some(report);
                self.error = None;
                self.phase = AppPhase::Results;
            }
            Err(e) => {
                self.report = None;
                self.error = Some(e);
                self.phase = AppPhase::Failed;
            }
        }
    }

    /// Fraction of rows that passed in the current report.
    pub fn pass_rate(&self) -> Option<f64> {
        self.report.as_ref()?.scores.pass_rate()
    }

    /// Number of rows with `outcome` in the current report.
    pub fn outcome_count(&self, outcome: Outcome) -> usize {
        self.report
            .as_ref()
            .map_or(0, |r| r.scores.count(outcome))
    }
}
