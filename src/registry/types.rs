use serde::Deserialize;
use std::path::PathBuf;

/// A file stored on the backend, as returned by `GET /files`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileDescriptor {
    pub filename: String,
    pub url: String,
}

/// A file picked on this machine but not uploaded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl LocalFile {
    /// Builds a selection from a path handed back by the file picker.
    pub fn from_path(path: PathBuf) -> std::io::Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name")
            })?;
        let size = std::fs::metadata(&path)?.len();
        Ok(Self { name, path, size })
    }
}
