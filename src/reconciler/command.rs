use super::in_flight::InFlightKey;
use crate::registry::{
    DeleteError, FileDescriptor, FileRegistry, ListError, LocalFile, UploadError,
};

/// Network work requested by the reconciler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Upload(LocalFile),
    Delete(String),
}

/// Result of a [`Command`], fed back into the reconciler.
#[derive(Debug)]
pub enum Outcome {
    Listed(Result<Vec<FileDescriptor>, ListError>),
    Uploaded {
        file: LocalFile,
        result: Result<(), UploadError>,
    },
    Deleted {
        filename: String,
        result: Result<(), DeleteError>,
    },
}

impl Command {
    pub fn key(&self) -> InFlightKey {
        match self {
            Command::List => InFlightKey::list(),
            Command::Upload(file) => InFlightKey::upload(&file.path),
            Command::Delete(filename) => InFlightKey::delete(filename),
        }
    }

    pub async fn execute<R>(self, registry: &R) -> Outcome
    where
        R: FileRegistry + ?Sized,
    {
        match self {
            Command::List => Outcome::Listed(registry.list_files().await),
            Command::Upload(file) => {
                let result = registry.upload_file(&file).await;
                Outcome::Uploaded { file, result }
            }
            Command::Delete(filename) => {
                let result = registry.delete_file(&filename).await;
                Outcome::Deleted { filename, result }
            }
        }
    }
}

impl Outcome {
    pub fn key(&self) -> InFlightKey {
        match self {
            Outcome::Listed(_) => InFlightKey::list(),
            Outcome::Uploaded { file, .. } => InFlightKey::upload(&file.path),
            Outcome::Deleted { filename, .. } => InFlightKey::delete(filename),
        }
    }
}
