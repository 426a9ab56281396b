mod state;
mod ui;

use crate::config::SplitterConfig;
use crate::error::{Result, SplitterError};
use crate::upload::{ArchiveSaver, HttpBackend, SplitBackend, SpreadsheetFile, UploadOutcome};
use eframe::{egui, App};
pub use state::{
    FormState, RequestState, NO_FILE_ALERT, PROCESSING_MESSAGE, SAVE_ERROR_MESSAGE,
    SUCCESS_MESSAGE, TRANSPORT_ERROR_MESSAGE,
};
use std::path::Path;
use std::sync::mpsc as std_mpsc;
use std::time::Instant;

pub struct NumberSplitter {
    config: SplitterConfig,
    state: FormState,
    backend: Box<dyn SplitBackend>,
    saver: ArchiveSaver,
    next_ticket: u64,
}

impl NumberSplitter {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = SplitterConfig::default();
        let backend = HttpBackend::new(&config);
        Self::with_backend(config, Box::new(backend))
    }

    pub fn with_backend(config: SplitterConfig, backend: Box<dyn SplitBackend>) -> Self {
        tracing::info!(
            endpoint = %config.endpoint,
            download_dir = %config.download_dir.display(),
            "initializing number splitter"
        );
        let mut state = FormState::default();
        state.column_name = config.default_column.clone();
        let saver = ArchiveSaver::new(config.download_dir.clone());
        Self {
            config,
            state,
            backend,
            saver,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    pub fn select_file(&mut self, file: SpreadsheetFile) {
        if self.state.is_processing() {
            tracing::debug!(file = %file.name, "ignoring file selection while processing");
            return;
        }
        tracing::info!(file = %file.name, size = file.size(), "file selected");
        self.state.file = Some(file);
        self.state.reset_deadline = None;
        self.state.set_status(RequestState::Idle, "");
    }

    pub fn load_file(&mut self, path: &Path) {
        match SpreadsheetFile::from_path(path) {
            Ok(file) => self.select_file(file),
            Err(e) => {
                tracing::error!(path = %path.display(), "failed to read spreadsheet: {e}");
                self.state.alert = Some(format!("Could not read {}: {}", path.display(), e));
            }
        }
    }

    pub fn set_column_name(&mut self, value: impl Into<String>) {
        self.state.column_name = value.into();
    }

    pub fn reset(&mut self) {
        if let Some(ticket) = self.state.in_flight {
            tracing::info!(ticket, "reset while processing, outcome will be discarded");
        }
        tracing::info!("resetting form");
        // A late reply still arrives here and is dropped by the ticket check.
        let receiver = self.state.outcome_receiver.take();
        self.state.clear(&self.config.default_column);
        self.state.outcome_receiver = receiver;
    }

    pub fn dismiss_alert(&mut self) {
        self.state.alert = None;
    }

    /// Starts one upload of the selected file. A missing file is reported as
    /// a validation error without touching the request state; a call while a
    /// request is in flight does nothing.
    pub fn submit(&mut self) -> Result<()> {
        if self.state.is_processing() {
            tracing::debug!("submit ignored, request already in flight");
            return Ok(());
        }

        let submission = match self.state.submission() {
            Some(submission) => submission,
            None => {
                tracing::warn!("submit without a selected file");
                self.state.alert = Some(NO_FILE_ALERT.to_string());
                return Err(SplitterError::validation(NO_FILE_ALERT));
            }
        };

        self.next_ticket += 1;
        let ticket = self.next_ticket;

        self.state.reset_deadline = None;
        self.state.last_download = None;
        self.state.set_status(RequestState::Processing, PROCESSING_MESSAGE);
        self.state.in_flight = Some(ticket);

        let (sender, receiver) = std_mpsc::channel();
        self.state.outcome_receiver = Some(receiver);

        tracing::info!(
            ticket,
            file = %submission.file.name,
            column = %submission.column_name,
            "submitting spreadsheet"
        );
        self.backend.dispatch(ticket, submission, sender);
        Ok(())
    }

    /// Drains finished uploads and fires the auto-reset. Returns true when
    /// the form changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;

        let outcome = match &self.state.outcome_receiver {
            Some(receiver) => match receiver.try_recv() {
                Ok(outcome) => Some(outcome),
                Err(std_mpsc::TryRecvError::Empty) => None,
                Err(std_mpsc::TryRecvError::Disconnected) => {
                    tracing::error!("upload worker dropped without replying");
                    Some(UploadOutcome {
                        ticket: self.state.in_flight.unwrap_or_default(),
                        result: Err(SplitterError::RuntimeError {
                            message: "upload worker disconnected".to_string(),
                        }),
                    })
                }
            },
            None => None,
        };

        if let Some(outcome) = outcome {
            if self.state.in_flight == Some(outcome.ticket) {
                self.state.outcome_receiver = None;
                self.finish(outcome, now);
            } else {
                tracing::warn!(ticket = outcome.ticket, "discarding stale upload outcome");
                if self.state.in_flight.is_none() {
                    self.state.outcome_receiver = None;
                }
            }
            changed = true;
        }

        if let Some(deadline) = self.state.reset_deadline {
            if now >= deadline {
                tracing::info!("auto-reset after successful download");
                self.reset();
                changed = true;
            }
        }

        changed
    }

    fn finish(&mut self, outcome: UploadOutcome, now: Instant) {
        self.state.in_flight = None;

        let bytes = match outcome.result {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(ticket = outcome.ticket, "upload failed: {e}");
                self.state.set_status(RequestState::Error, TRANSPORT_ERROR_MESSAGE);
                return;
            }
        };

        match self.saver.save(&bytes) {
            Ok(path) => {
                self.state.last_download = Some(path);
                self.state.set_status(RequestState::Success, SUCCESS_MESSAGE);
                self.state.reset_deadline = Some(now + self.config.reset_delay);
            }
            Err(e) => {
                tracing::error!("failed to save archive: {e}");
                self.state.set_status(RequestState::Error, SAVE_ERROR_MESSAGE);
            }
        }
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.poll(now) {
            ctx.request_repaint();
        }

        if self.state.is_processing() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
        if let Some(deadline) = self.state.reset_deadline {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

impl App for NumberSplitter {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
