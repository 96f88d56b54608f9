use std::{env, time::Duration};

use object_storage::StorageSettings;

use super::env_or;

/// Object storage configuration for product images
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub endpoint: String,
    pub bucket: String,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub public_url: Option<String>,
    pub timeout: Duration,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - STORAGE_ENDPOINT: S3-compatible endpoint (default: "http://localhost:9000")
    /// - STORAGE_BUCKET: bucket receiving the images (default: "products")
    /// - STORAGE_REGION: signing region (default: "us-east-1")
    /// - STORAGE_ACCESS_KEY_ID / STORAGE_SECRET_ACCESS_KEY: signing key pair (optional, set both)
    /// - STORAGE_PUBLIC_URL: base URL for reading stored images (optional)
    /// - STORAGE_TIMEOUT_SECS: per-request timeout (default: 30)
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("STORAGE_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:9000".to_string()),
            bucket: env::var("STORAGE_BUCKET").unwrap_or_else(|_| "products".to_string()),
            region: non_empty(env::var("STORAGE_REGION").ok())
                .unwrap_or_else(|| "us-east-1".to_string()),
            access_key_id: non_empty(env::var("STORAGE_ACCESS_KEY_ID").ok()),
            secret_access_key: non_empty(env::var("STORAGE_SECRET_ACCESS_KEY").ok()),
            public_url: non_empty(env::var("STORAGE_PUBLIC_URL").ok()),
            timeout: Duration::from_secs(env_or("STORAGE_TIMEOUT_SECS", 30)),
        }
    }

    pub fn settings(&self) -> StorageSettings {
        StorageSettings {
            endpoint: self.endpoint.clone(),
            bucket: self.bucket.clone(),
            region: self.region.clone(),
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
            public_url: self.public_url.clone(),
            timeout: self.timeout,
        }
    }
}
