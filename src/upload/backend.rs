use crate::config::SplitterConfig;
use crate::error::SplitterError;
use crate::upload::split_client::SplitClient;
use crate::upload::types::{Submission, UploadOutcome};
use std::sync::mpsc::Sender;

/// Seam between the form and whatever performs the upload.
pub trait SplitBackend: Send {
    /// Starts one upload. Exactly one `UploadOutcome` carrying `ticket` must
    /// eventually be sent on `reply`.
    fn dispatch(&self, ticket: u64, submission: Submission, reply: Sender<UploadOutcome>);
}

/// Runs each upload on its own thread and tokio runtime so the UI thread
/// only ever polls the reply channel.
pub struct HttpBackend {
    config: SplitterConfig,
}

impl HttpBackend {
    pub fn new(config: &SplitterConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl SplitBackend for HttpBackend {
    fn dispatch(&self, ticket: u64, submission: Submission, reply: Sender<UploadOutcome>) {
        let config = self.config.clone();

        std::thread::spawn(move || {
            let result = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt.block_on(async {
                    // The client's connection pool is bound to this runtime.
                    match SplitClient::new(&config) {
                        Ok(client) => client.split(&submission).await,
                        Err(e) => Err(e),
                    }
                }),
                Err(e) => {
                    tracing::error!("failed to build upload runtime: {e}");
                    Err(SplitterError::RuntimeError {
                        message: e.to_string(),
                    })
                }
            };

            if reply.send(UploadOutcome { ticket, result }).is_err() {
                tracing::debug!(ticket, "form closed before the upload finished");
            }
        });
    }
}
