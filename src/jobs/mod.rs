// src/jobs/mod.rs
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use eframe::egui;
use tracing::{error, info};

use crate::api::types::{AnalysisResponse, ComparisonResponse, LlmProvider, SummaryResponse};
use crate::api::{ApiClient, ApiError};

/// Finished backend call, delivered back to the UI thread.
pub enum JobOutcome {
    Analysis(Result<AnalysisResponse, ApiError>),
    Summary(Result<SummaryResponse, ApiError>),
    Comparison(Result<ComparisonResponse, ApiError>),
    Download {
        filename: String,
        result: Result<Vec<u8>, ApiError>,
    },
}

/// Outcome tagged with the analysis epoch current when the job was spawned.
/// The shell drops messages whose epoch no longer matches, so a result from
/// a superseded analysis cycle can never repopulate fresh views.
pub struct JobMsg {
    pub epoch: i64,
    pub outcome: JobOutcome,
}

/// Runs blocking API calls on detached worker threads and hands their
/// outcomes back over an mpsc channel, polled once per frame. egui is
/// immediate-mode, so each send is followed by a repaint request; there is
/// no cancellation, a stale result is simply discarded by its epoch tag.
pub struct JobRunner {
    client: Arc<ApiClient>,
    tx: Sender<JobMsg>,
    rx: Receiver<JobMsg>,
}

impl JobRunner {
    pub fn new(client: ApiClient) -> Self {
        let (tx, rx) = channel();
        Self {
            client: Arc::new(client),
            tx,
            rx,
        }
    }

    pub fn poll(&self) -> Option<JobMsg> {
        self.rx.try_recv().ok()
    }

    pub fn spawn_analyze(&self, epoch: i64, path: PathBuf, ctx: &egui::Context) {
        info!(path = %path.display(), "starting analysis upload");
        self.spawn(epoch, ctx, move |client| {
            JobOutcome::Analysis(client.analyze(&path))
        });
    }

    pub fn spawn_summary(&self, epoch: i64, provider: LlmProvider, ctx: &egui::Context) {
        info!(provider = provider.label(), "requesting executive summary");
        self.spawn(epoch, ctx, move |client| {
            JobOutcome::Summary(client.generate_summary(provider, None))
        });
    }

    pub fn spawn_comparison(&self, epoch: i64, ctx: &egui::Context) {
        info!("requesting model comparison");
        self.spawn(epoch, ctx, |client| {
            JobOutcome::Comparison(client.compare_models())
        });
    }

    pub fn spawn_download(&self, epoch: i64, filename: String, ctx: &egui::Context) {
        info!(filename = %filename, "downloading output file");
        self.spawn(epoch, ctx, move |client| {
            let result = client.download_output(&filename);
            JobOutcome::Download { filename, result }
        });
    }

    fn spawn<F>(&self, epoch: i64, ctx: &egui::Context, job: F)
    where
        F: FnOnce(&ApiClient) -> JobOutcome + Send + 'static,
    {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        thread::spawn(move || {
            let outcome = job(&client);
            log_outcome(&outcome);
            // The receiver only disappears on shutdown; a dead channel just
            // means nobody is left to care about this result.
            let _ = tx.send(JobMsg { epoch, outcome });
            ctx.request_repaint();
        });
    }
}

fn log_outcome(outcome: &JobOutcome) {
    match outcome {
        JobOutcome::Analysis(Ok(payload)) => {
            info!(
                total_reviews = payload.summary.total_reviews,
                "analysis complete"
            );
        }
        JobOutcome::Analysis(Err(err)) => error!(error = %err, "analysis failed"),
        JobOutcome::Summary(Ok(payload)) => {
            info!(provider = %payload.llm_provider, "summary generated");
        }
        JobOutcome::Summary(Err(err)) => error!(error = %err, "summary generation failed"),
        JobOutcome::Comparison(Ok(payload)) => {
            info!(cached = payload.cached, "model comparison fetched");
        }
        JobOutcome::Comparison(Err(err)) => error!(error = %err, "model comparison failed"),
        JobOutcome::Download {
            filename,
            result: Ok(bytes),
        } => info!(filename = %filename, bytes = bytes.len(), "output file downloaded"),
        JobOutcome::Download {
            filename,
            result: Err(err),
        } => error!(filename = %filename, error = %err, "download failed"),
    }
}
