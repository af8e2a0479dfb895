//! Client side of the backend's file registry.
//!
//! The reconciler only sees [`FileRegistry`]; [`HttpRegistry`] is the
//! implementation that talks to the real backend.

mod client;
mod error;
mod types;

pub use client::HttpRegistry;
pub use error::{DeleteError, ListError, UploadError};
pub use types::{FileDescriptor, LocalFile};

/// The three operations the backend exposes.
#[async_trait::async_trait]
pub trait FileRegistry: Send + Sync {
    /// Fetches the full list of stored files in backend order.
    async fn list_files(&self) -> Result<Vec<FileDescriptor>, ListError>;

    /// Uploads one local file.
    async fn upload_file(&self, file: &LocalFile) -> Result<(), UploadError>;

    /// Removes a stored file by name.
    async fn delete_file(&self, filename: &str) -> Result<(), DeleteError>;
}
