use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const ARCHIVE_PREFIX: &str = "Split_Numbers_";

pub fn archive_file_name(millis: i64) -> String {
    format!("{}{}.zip", ARCHIVE_PREFIX, millis)
}

/// Writes returned archives into the download directory.
#[derive(Debug, Clone)]
pub struct ArchiveSaver {
    dir: PathBuf,
    last_stamp: Option<i64>,
}

impl ArchiveSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            last_stamp: None,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stamps never repeat within a session, so a second download in the same
    /// millisecond cannot overwrite the first.
    pub fn next_stamp(&mut self, now_millis: i64) -> i64 {
        let stamp = match self.last_stamp {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last_stamp = Some(stamp);
        stamp
    }

    pub fn save(&mut self, bytes: &[u8]) -> Result<PathBuf> {
        let stamp = self.next_stamp(chrono::Utc::now().timestamp_millis());
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(archive_file_name(stamp));
        fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), size = bytes.len(), "archive saved");
        Ok(path)
    }
}
