pub mod app;
pub mod config;
pub mod error;
pub mod upload;
pub mod utils;

pub use app::{NumberSplitter, RequestState};
pub use config::SplitterConfig;
pub use error::{Result, SplitterError};
