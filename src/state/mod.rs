// src/state/mod.rs
use chrono::Utc;
use tracing::debug;

use crate::api::types::AnalysisResponse;
use crate::jobs::{JobMsg, JobOutcome};

pub mod comparison_state;
pub mod summary_state;
pub mod upload_state;

pub use comparison_state::ComparisonState;
pub use summary_state::SummaryState;
pub use upload_state::UploadState;

// Tab tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Results,
    Summary,
    Comparison,
}

/// Top-level lifecycle of one analysis. Exactly one variant holds at any
/// time; a failed analyze returns to `Idle` rather than keeping a stale
/// payload around.
pub enum AnalysisPhase {
    Idle,
    Loading,
    Ready(AnalysisResponse),
}

/// Generic lifecycle of one follow-up request (summary, comparison).
#[derive(Debug, Clone)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// Downloaded bytes waiting for the shell to run the save dialog. The
/// dialog is modal and must run on the UI thread, so the worker only parks
/// the bytes here.
pub struct PendingSave {
    pub filename: String,
    pub bytes: Vec<u8>,
}

// Core application state
pub struct AppState {
    pub phase: AnalysisPhase,
    pub current_screen: Screen,
    /// Identity of the current analysis cycle. Job results tagged with an
    /// older epoch are discarded on arrival.
    pub epoch: i64,

    pub upload: UploadState,
    pub summary: SummaryState,
    pub comparison: ComparisonState,

    /// Filename currently being fetched from `/outputs/`, if any. Download
    /// buttons are disabled while this is set.
    pub downloading: Option<String>,
    pub pending_save: Option<PendingSave>,

    pub error_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            phase: AnalysisPhase::Idle,
            current_screen: Screen::Results,
            epoch: Utc::now().timestamp_millis(),
            upload: UploadState::default(),
            summary: SummaryState::default(),
            comparison: ComparisonState::default(),
            downloading: None,
            pending_save: None,
            error_message: None,
        }
    }

    /// Enters the loading phase for a fresh analysis cycle and returns the
    /// epoch the analyze job must be tagged with.
    pub fn begin_analysis(&mut self) -> i64 {
        self.bump_epoch();
        self.phase = AnalysisPhase::Loading;
        self.upload.error = None;
        self.summary.reset();
        self.comparison.reset();
        self.downloading = None;
        self.epoch
    }

    /// "New Analysis": back to the upload screen with every view reset.
    pub fn reset(&mut self) {
        self.bump_epoch();
        self.phase = AnalysisPhase::Idle;
        self.current_screen = Screen::Results;
        self.upload = UploadState::default();
        self.summary.reset();
        self.comparison.reset();
        self.downloading = None;
        self.pending_save = None;
    }

    pub fn select_screen(&mut self, screen: Screen) {
        self.current_screen = screen;
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Ready(_))
    }

    /// Applies a finished job to the state. Messages from a superseded
    /// epoch are dropped, which is what clears an in-flight request when
    /// the user starts over.
    pub fn apply_job(&mut self, msg: JobMsg) {
        if msg.epoch != self.epoch {
            debug!(
                msg_epoch = msg.epoch,
                current_epoch = self.epoch,
                "discarding job result from a superseded analysis cycle"
            );
            return;
        }
        match msg.outcome {
            JobOutcome::Analysis(Ok(payload)) => {
                self.phase = AnalysisPhase::Ready(payload);
                self.current_screen = Screen::Results;
            }
            JobOutcome::Analysis(Err(err)) => {
                // Back to the pre-analysis screen; the candidate survives
                // so the user can retry.
                self.phase = AnalysisPhase::Idle;
                self.upload.error = Some(err.to_string());
            }
            JobOutcome::Summary(result) => self.summary.finish(result),
            JobOutcome::Comparison(result) => self.comparison.finish(result),
            JobOutcome::Download { filename, result } => {
                if self.downloading.as_deref() == Some(filename.as_str()) {
                    self.downloading = None;
                }
                match result {
                    Ok(bytes) => self.pending_save = Some(PendingSave { filename, bytes }),
                    Err(err) => self.error_message = Some(err.to_string()),
                }
            }
        }
    }

    fn bump_epoch(&mut self) {
        self.epoch = Utc::now().timestamp_millis().max(self.epoch + 1);
    }
}
