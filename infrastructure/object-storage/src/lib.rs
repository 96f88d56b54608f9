mod client;
mod image_storage;

pub use client::{StorageClient, StorageSettings};
pub use image_storage::S3ImageStorage;
