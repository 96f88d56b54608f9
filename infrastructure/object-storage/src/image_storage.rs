use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use uuid::Uuid;

use business::domain::product::model::ImageRef;
use business::domain::product::storage::{ImageStorage, ImageUpload, StorageError};

use crate::client::StorageClient;

const KEY_PREFIX: &str = "images";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

static EXTENSION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\.([A-Za-z0-9]{1,8})$").ok());

pub struct S3ImageStorage {
    client: StorageClient,
}

impl S3ImageStorage {
    pub fn new(client: StorageClient) -> Self {
        Self { client }
    }

    /// Lowercased extension of the uploaded file name, dot included.
    fn extension(file_name: Option<&str>) -> String {
        file_name
            .zip(EXTENSION.as_ref())
            .and_then(|(name, re)| re.captures(name))
            .and_then(|caps| caps.get(1))
            .map(|ext| format!(".{}", ext.as_str().to_lowercase()))
            .unwrap_or_default()
    }

    fn object_key(id: Uuid, file_name: Option<&str>) -> String {
        format!("{}/{}{}", KEY_PREFIX, id, Self::extension(file_name))
    }

    async fn put(&self, key: &str, upload: ImageUpload) -> Result<(), StorageError> {
        let content_type = upload
            .content_type
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        let response = self
            .client
            .client
            .put(self.client.signed_put_url(key))
            .header("Content-Type", content_type)
            .body(upload.bytes)
            .send()
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::UploadFailed(format!(
                "{} answered {}",
                key,
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ImageStorage for S3ImageStorage {
    async fn store(&self, files: Vec<ImageUpload>) -> Result<Vec<ImageRef>, StorageError> {
        let mut stored = Vec::with_capacity(files.len());
        for upload in files {
            let key = Self::object_key(Uuid::new_v4(), upload.file_name.as_deref());
            self.put(&key, upload).await?;
            stored.push(ImageRef::new(self.client.public_object_url(&key)));
        }
        Ok(stored)
    }
}
