use async_trait::async_trait;

use super::model::ImageRef;

/// A file received with an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.upload_failed: {0}")]
    UploadFailed(String),
    #[error("storage.misconfigured: {0}")]
    Misconfigured(String),
}

/// Object storage port. Returns one reference per file, in input order.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    async fn store(&self, files: Vec<ImageUpload>) -> Result<Vec<ImageRef>, StorageError>;
}
