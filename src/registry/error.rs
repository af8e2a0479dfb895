use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Failed to send list request: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("List failed with status: {0}")]
    Status(StatusCode),
    #[error("Failed to parse file list: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to read file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to send upload request: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Upload failed with status: {0}")]
    Status(StatusCode),
}

#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("Failed to send delete request: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to delete with status: {0}")]
    Status(StatusCode),
}
