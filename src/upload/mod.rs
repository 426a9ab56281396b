mod archive;
mod backend;
mod split_client;
mod types;

pub use archive::{archive_file_name, ArchiveSaver, ARCHIVE_PREFIX};
pub use backend::{HttpBackend, SplitBackend};
pub use split_client::{SplitClient, COLUMN_FIELD, FILE_FIELD};
pub use types::{
    SpreadsheetFile, Submission, UploadOutcome, SPREADSHEET_EXTENSION, SPREADSHEET_MIME,
};
