use std::time::Duration;

use reqwest::Client;
use rusty_s3::{Bucket, Credentials, S3Action, UrlStyle};
use url::Url;

use business::domain::product::storage::StorageError;

/// Lifetime of a presigned upload URL.
const SIGNATURE_TTL: Duration = Duration::from_secs(300);

/// Connection settings for an S3-compatible bucket.
#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub endpoint: String,
    pub bucket: String,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// Base URL under which stored objects are served, when it differs from the endpoint.
    pub public_url: Option<String>,
    pub timeout: Duration,
}

/// Shared HTTP client and signing material for an S3-compatible bucket.
pub struct StorageClient {
    pub client: Client,
    bucket: Bucket,
    credentials: Option<Credentials>,
    public_url: Option<String>,
}

impl StorageClient {
    pub fn new(settings: StorageSettings) -> Result<Self, StorageError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| StorageError::Misconfigured(e.to_string()))?;

        let endpoint = Url::parse(&settings.endpoint)
            .map_err(|e| StorageError::Misconfigured(format!("endpoint {}: {}", settings.endpoint, e)))?;
        let bucket = Bucket::new(endpoint, UrlStyle::Path, settings.bucket, settings.region)
            .map_err(|e| StorageError::Misconfigured(e.to_string()))?;

        // Anonymous uploads only when no key pair is configured.
        let credentials = match (settings.access_key_id, settings.secret_access_key) {
            (Some(key), Some(secret)) => Some(Credentials::new(key, secret)),
            (None, None) => None,
            _ => {
                return Err(StorageError::Misconfigured(
                    "access key id and secret access key must be set together".to_string(),
                ));
            }
        };

        Ok(Self {
            client,
            bucket,
            credentials,
            public_url: settings.public_url.map(|url| url.trim_end_matches('/').to_string()),
        })
    }

    /// Returns the unsigned URL of an object.
    pub fn object_url(&self, key: &str) -> String {
        self.bucket
            .object_url(key)
            .map(String::from)
            .unwrap_or_else(|_| format!("{}{}", self.bucket.base_url(), key))
    }

    /// Returns a SigV4 presigned URL an object can be PUT to.
    pub fn signed_put_url(&self, key: &str) -> Url {
        self.bucket
            .put_object(self.credentials.as_ref(), key)
            .sign(SIGNATURE_TTL)
    }

    /// Returns the URL clients use to read an object.
    pub fn public_object_url(&self, key: &str) -> String {
        match &self.public_url {
            Some(base) => format!("{}/{}", base, key),
            None => self.object_url(key),
        }
    }
}
