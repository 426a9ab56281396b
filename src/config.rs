use std::path::PathBuf;
use std::time::Duration;

pub const BACKEND_URL: &str = "http://202.51.1.164:80/process-excel";
pub const DEFAULT_COLUMN_NAME: &str = "Mobile";
pub const RESET_DELAY: Duration = Duration::from_millis(3000);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct SplitterConfig {
    pub endpoint: String,
    pub default_column: String,
    pub reset_delay: Duration,
    pub request_timeout: Duration,
    pub download_dir: PathBuf,
}

impl SplitterConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }
}

impl Default for SplitterConfig {
    fn default() -> Self {
        let download_dir = dirs::download_dir()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            endpoint: BACKEND_URL.to_string(),
            default_column: DEFAULT_COLUMN_NAME.to_string(),
            reset_delay: RESET_DELAY,
            request_timeout: REQUEST_TIMEOUT,
            download_dir,
        }
    }
}
