use std::path::PathBuf;
use thiserror::Error;

/// The main error type for hfgrab operations.
#[derive(Debug, Error)]
pub enum HfgrabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize Hub client: {0}")]
    HubInit(String),

    #[error("Hub API error for '{repo_id}': {message}")]
    HubApi { repo_id: String, message: String },

    #[error("dataset '{repo_id}' requires an explicit configuration name")]
    MissingConfig { repo_id: String },

    #[error("no configs available for dataset '{repo_id}'")]
    NoConfigsAvailable { repo_id: String },

    #[error("failed listing datasets for author '{author}': {message}")]
    AuthorListing { author: String, message: String },

    #[error("invalid dataset reference '{input}': {message}")]
    InvalidDatasetRef { input: String, message: String },

    #[error("failed to decode parquet shard {}: {message}", path.display())]
    ParquetParse { path: PathBuf, message: String },

    #[error("no parquet shards found for split '{split}' of '{repo_id}'")]
    SplitUnavailable { repo_id: String, split: String },

    #[error("spreadsheet conversion failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("delimited text conversion failed: {0}")]
    Delimited(#[from] csv::Error),

    #[error("record log conversion failed: {0}")]
    RecordLog(#[from] serde_json::Error),

    #[error("document conversion failed: {0}")]
    Document(String),

    #[error("archive write failed: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("input error: {0}")]
    Input(String),
}
