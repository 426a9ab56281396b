use crate::error::Result;
use derivative::Derivative;
use std::fs;
use std::path::Path;

pub const SPREADSHEET_EXTENSION: &str = "xlsx";
pub const SPREADSHEET_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Derivative, Clone, PartialEq, Eq)]
#[derivative(Debug)]
pub struct SpreadsheetFile {
    pub name: String,
    #[derivative(Debug = "ignore")]
    pub bytes: Vec<u8>,
}

impl SpreadsheetFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Ok(Self { name, bytes })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Extension check only; the contents are never inspected.
    pub fn has_spreadsheet_extension(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(SPREADSHEET_EXTENSION))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub file: SpreadsheetFile,
    pub column_name: String,
}

#[derive(Debug)]
pub struct UploadOutcome {
    pub ticket: u64,
    pub result: Result<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_path_keeps_the_file_name_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        let mut handle = fs::File::create(&path).unwrap();
        handle.write_all(b"PK\x03\x04sheet").unwrap();

        let file = SpreadsheetFile::from_path(&path).unwrap();
        assert_eq!(file.name, "report.xlsx");
        assert_eq!(file.bytes, b"PK\x03\x04sheet");
        assert_eq!(file.size(), 9);
    }

    #[test]
    fn from_path_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.xlsx");
        assert!(SpreadsheetFile::from_path(&missing).is_err());
    }

    #[test]
    fn extension_filter_is_case_insensitive() {
        assert!(SpreadsheetFile::has_spreadsheet_extension(Path::new("a/Report.XLSX")));
        assert!(SpreadsheetFile::has_spreadsheet_extension(Path::new("numbers.xlsx")));
        assert!(!SpreadsheetFile::has_spreadsheet_extension(Path::new("numbers.csv")));
        assert!(!SpreadsheetFile::has_spreadsheet_extension(Path::new("xlsx")));
    }

    #[test]
    fn debug_output_skips_the_blob() {
        let file = SpreadsheetFile::new("report.xlsx", vec![0xAB; 4096]);
        let rendered = format!("{:?}", file);
        assert!(rendered.contains("report.xlsx"));
        assert!(!rendered.contains("171"));
    }
}
