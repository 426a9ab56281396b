use crate::config::SplitterConfig;
use crate::error::{Result, SplitterError};
use crate::upload::types::{Submission, SPREADSHEET_MIME};
use reqwest::multipart::{Form, Part};

pub const FILE_FIELD: &str = "file";
pub const COLUMN_FIELD: &str = "column_name";

#[derive(Clone)]
pub struct SplitClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SplitClient {
    pub fn new(config: &SplitterConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    fn build_form(submission: &Submission) -> Result<Form> {
        let file_part = Part::bytes(submission.file.bytes.clone())
            .file_name(submission.file.name.clone())
            .mime_str(SPREADSHEET_MIME)?;

        Ok(Form::new()
            .part(FILE_FIELD, file_part)
            .text(COLUMN_FIELD, submission.column_name.clone()))
    }

    /// Posts the spreadsheet and returns the archive bytes. The body is opaque:
    /// any 2xx counts as success regardless of content type.
    pub async fn split(&self, submission: &Submission) -> Result<Vec<u8>> {
        let form = Self::build_form(submission)?;

        tracing::info!(
            endpoint = %self.endpoint,
            file = %submission.file.name,
            column = %submission.column_name,
            "sending spreadsheet to splitter"
        );

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "splitter rejected the upload");
            return Err(SplitterError::StatusError(status));
        }

        let bytes = response.bytes().await?;
        tracing::info!(size = bytes.len(), "received archive from splitter");
        Ok(bytes.to_vec())
    }
}
