use super::error::{DeleteError, ListError, UploadError};
use super::types::{FileDescriptor, LocalFile};
use super::FileRegistry;
use crate::config::BackendConfig;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

/// Multipart field the backend reads the uploaded file from.
const UPLOAD_FIELD: &str = "file";

#[derive(Clone)]
pub struct HttpRegistry {
    config: BackendConfig,
    client: reqwest::Client,
}

impl HttpRegistry {
    pub fn new(config: BackendConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { config, client })
    }
}

#[async_trait::async_trait]
impl FileRegistry for HttpRegistry {
    async fn list_files(&self) -> Result<Vec<FileDescriptor>, ListError> {
        let url = self.config.endpoint(&["files"]);
        debug!("Listing files from {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ListError::Status(status));
        }

        let body = response.bytes().await?;
        // The backend answers `null` when nothing has been uploaded yet.
        let files: Option<Vec<FileDescriptor>> = serde_json::from_slice(&body)?;
        let files = files.unwrap_or_default();
        debug!("Backend returned {} files", files.len());
        Ok(files)
    }

    async fn upload_file(&self, file: &LocalFile) -> Result<(), UploadError> {
        let content = tokio::fs::read(&file.path).await?;
        info!("Uploading '{}' ({} bytes)", file.name, content.len());

        let part = Part::bytes(content).file_name(file.name.clone());
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(self.config.endpoint(&["upload"]))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Successfully uploaded '{}'", file.name);
            Ok(())
        } else {
            Err(UploadError::Status(status))
        }
    }

    async fn delete_file(&self, filename: &str) -> Result<(), DeleteError> {
        let url = self.config.endpoint(&["delete", filename]);
        info!("Attempting to delete '{}'", filename);

        let response = self.client.delete(url).send().await?;
        let status = response.status();
        if status.is_success() {
            info!("Successfully deleted '{}'", filename);
            Ok(())
        } else {
            Err(DeleteError::Status(status))
        }
    }
}
