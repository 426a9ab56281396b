use crate::config::DEFAULT_COLUMN_NAME;
use crate::upload::{SpreadsheetFile, Submission, UploadOutcome};
use derivative::Derivative;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Instant;

pub const PROCESSING_MESSAGE: &str = "Processing data...";
pub const SUCCESS_MESSAGE: &str = "Success! Download started. Resetting in 3s...";
pub const TRANSPORT_ERROR_MESSAGE: &str = "Error: Backend unreachable or Column Name wrong.";
pub const SAVE_ERROR_MESSAGE: &str = "Error: Could not save the downloaded archive.";
pub const NO_FILE_ALERT: &str = "Please select a file first";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Processing,
    Success,
    Error,
}

#[derive(Derivative)]
#[derivative(Debug, Default)]
pub struct FormState {
    pub file: Option<SpreadsheetFile>,
    #[derivative(Default(value = "DEFAULT_COLUMN_NAME.to_string()"))]
    pub column_name: String,
    pub request: RequestState,
    pub message: String,
    /// Remount token for the file picker; bumped on every reset.
    pub picker_key: u64,
    /// Blocking alert shown as a modal until dismissed.
    pub alert: Option<String>,
    pub last_download: Option<PathBuf>,
    pub reset_deadline: Option<Instant>,
    pub in_flight: Option<u64>,
    #[derivative(Debug = "ignore")]
    pub outcome_receiver: Option<Receiver<UploadOutcome>>,
}

impl FormState {
    /// Back to a fresh form. The picker key keeps counting so widgets keyed on
    /// it see a new identity.
    pub fn clear(&mut self, default_column: &str) {
        let picker_key = self.picker_key.wrapping_add(1);
        *self = FormState::default();
        self.column_name = default_column.to_string();
        self.picker_key = picker_key;
    }

    pub fn is_processing(&self) -> bool {
        self.request == RequestState::Processing
    }

    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.is_processing()
    }

    pub fn submission(&self) -> Option<Submission> {
        self.file.as_ref().map(|file| Submission {
            file: file.clone(),
            column_name: self.column_name.clone(),
        })
    }

    pub fn set_status(&mut self, request: RequestState, message: &str) {
        self.request = request;
        self.message = message.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_idle_with_mobile_column() {
        let state = FormState::default();
        assert_eq!(state.request, RequestState::Idle);
        assert_eq!(state.column_name, "Mobile");
        assert!(state.file.is_none());
        assert!(state.message.is_empty());
        assert!(!state.can_submit());
    }

    #[test]
    fn clear_bumps_the_picker_key() {
        let mut state = FormState::default();
        state.file = Some(SpreadsheetFile::new("report.xlsx", vec![1, 2, 3]));
        state.column_name = "Phone".to_string();
        state.set_status(RequestState::Error, TRANSPORT_ERROR_MESSAGE);

        state.clear("Mobile");

        assert_eq!(state.picker_key, 1);
        assert!(state.file.is_none());
        assert_eq!(state.column_name, "Mobile");
        assert_eq!(state.request, RequestState::Idle);
        assert!(state.message.is_empty());
    }

    #[test]
    fn processing_blocks_submission() {
        let mut state = FormState::default();
        state.file = Some(SpreadsheetFile::new("report.xlsx", vec![1]));
        assert!(state.can_submit());

        state.set_status(RequestState::Processing, PROCESSING_MESSAGE);
        assert!(!state.can_submit());

        state.set_status(RequestState::Success, SUCCESS_MESSAGE);
        assert!(state.can_submit());
    }

    #[test]
    fn submission_carries_the_column_verbatim() {
        let mut state = FormState::default();
        state.file = Some(SpreadsheetFile::new("report.xlsx", vec![7]));
        state.column_name = "  Phone No ".to_string();

        let submission = state.submission().unwrap();
        assert_eq!(submission.column_name, "  Phone No ");
        assert_eq!(submission.file.name, "report.xlsx");
    }
}
