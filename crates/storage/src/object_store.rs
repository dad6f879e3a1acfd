//! Object storage for athlete images.
//!
//! [`SupabaseObjectStore`] talks to the Supabase Storage REST API;
//! [`InMemoryObjectStore`] keeps uploads in process memory for tests.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use tokio::sync::RwLock;

use crate::error::{Result, StorageError};

pub const DEFAULT_BUCKET: &str = "athlete-images";

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `path` without overwriting an existing object.
    /// Returns the stored object's path.
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<String>;

    /// Publicly reachable URL for an object path.
    fn public_url(&self, path: &str) -> String;
}

/// Client for a Supabase Storage bucket
pub struct SupabaseObjectStore {
    client: Client,
    base_url: String,
    api_key: String,
    bucket: String,
}

impl SupabaseObjectStore {
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://xyzcompany.supabase.co")
    /// * `api_key` - Service or anon key sent as bearer token and `apikey` header
    /// * `bucket` - Target bucket name
    pub fn new(base_url: &str, api_key: &str, bucket: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| StorageError::ObjectStore(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            bucket: bucket.to_string(),
        })
    }
}

#[async_trait]
impl ObjectStore for SupabaseObjectStore {
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<String> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, path
        );

        tracing::info!(
            "Uploading {} bytes to bucket {} at {}",
            bytes.len(),
            self.bucket,
            path
        );

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .header("x-upsert", "false")
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| StorageError::ObjectStore(format!("Upload request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&error_text)
                .ok()
                .and_then(|body| body.get("message")?.as_str().map(str::to_string))
                .unwrap_or(error_text);

            return Err(StorageError::ObjectStore(format!(
                "Storage API error ({status}): {message}"
            )));
        }

        Ok(path.to_string())
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

pub struct InMemoryObjectStore {
    public_base: String,
    objects: RwLock<HashMap<String, StoredObject>>,
}

impl InMemoryObjectStore {
    pub fn new(public_base: &str) -> Self {
        Self {
            public_base: public_base.trim_end_matches('/').to_string(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, path: &str) -> Option<StoredObject> {
        self.objects.read().await.get(path).cloned()
    }

    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<String> {
        let mut objects = self.objects.write().await;

        if objects.contains_key(path) {
            return Err(StorageError::ObjectStore(
                "The resource already exists".to_string(),
            ));
        }

        objects.insert(
            path.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );

        Ok(path.to_string())
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supabase_public_url() {
        let store =
            SupabaseObjectStore::new("https://demo.supabase.co/", "key", DEFAULT_BUCKET).unwrap();
        assert_eq!(
            store.public_url("avatar/1-abc.png"),
            "https://demo.supabase.co/storage/v1/object/public/athlete-images/avatar/1-abc.png"
        );
    }

    #[tokio::test]
    async fn test_memory_store_refuses_overwrite() {
        let store = InMemoryObjectStore::new("http://localhost/images");
        store
            .upload("cover/1-a.jpg", vec![1, 2, 3], "image/jpeg")
            .await
            .unwrap();

        let err = store
            .upload("cover/1-a.jpg", vec![4], "image/jpeg")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::ObjectStore(_)));
        assert_eq!(
            store.get("cover/1-a.jpg").await.unwrap().bytes,
            vec![1, 2, 3]
        );
    }
}
