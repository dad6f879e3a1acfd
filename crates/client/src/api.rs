use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use storage::dto::common::ApiResponse;

use crate::error::{ClientError, Result};
use crate::resource::Resource;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote operations a [`crate::ResourceStore`] performs for resource `R`.
#[async_trait]
pub trait ResourceApi<R: Resource>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>>;

    async fn get(&self, key: &R::Key) -> Result<R>;

    async fn create(&self, input: &R::Create) -> Result<R>;

    async fn update(&self, key: &R::Key, input: &R::Update) -> Result<R>;

    async fn delete(&self, key: &R::Key) -> Result<()>;
}

/// [`ResourceApi`] over the directory's JSON envelope API
pub struct HttpResourceApi<R> {
    client: Client,
    collection: Url,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> HttpResourceApi<R> {
    /// # Arguments
    /// * `base_url` - Server root (e.g., "http://localhost:3000")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Build(format!("Failed to build HTTP client: {e}")))?;

        let collection = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), R::PATH))
            .map_err(|e| ClientError::Build(format!("Invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            collection,
            _resource: PhantomData,
        })
    }

    fn item_url(&self, key: &R::Key) -> Result<Url> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Build(format!("'{}' cannot carry a path", self.collection)))?
            .push(&key.to_string());
        Ok(url)
    }
}

/// Unwrap an `ApiResponse` envelope, turning failures into [`ClientError::Api`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
    let status = response.status();
    let body = response.text().await?;

    let envelope = match serde_json::from_str::<ApiResponse<T>>(&body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            return Err(ClientError::Api {
                status,
                message: body,
            });
        }
        Err(e) => return Err(ClientError::Envelope(e.to_string())),
    };

    match envelope.into_result() {
        Ok(data) if status.is_success() => Ok(data),
        Ok(_) => Err(ClientError::Api {
            status,
            message: status.canonical_reason().unwrap_or("Request failed").to_string(),
        }),
        Err(message) => Err(ClientError::Api { status, message }),
    }
}

fn require<T>(data: Option<T>) -> Result<T> {
    data.ok_or_else(|| ClientError::Envelope("response carried no data".to_string()))
}

#[async_trait]
impl<R> ResourceApi<R> for HttpResourceApi<R>
where
    R: Resource + DeserializeOwned,
{
    async fn list(&self) -> Result<Vec<R>> {
        tracing::debug!("GET {}", self.collection);
        let response = self.client.get(self.collection.clone()).send().await?;
        require(decode(response).await?)
    }

    async fn get(&self, key: &R::Key) -> Result<R> {
        let url = self.item_url(key)?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        require(decode(response).await?)
    }

    async fn create(&self, input: &R::Create) -> Result<R> {
        tracing::debug!("POST {}", self.collection);
        let response = self
            .client
            .post(self.collection.clone())
            .json(input)
            .send()
            .await?;
        require(decode(response).await?)
    }

    async fn update(&self, key: &R::Key, input: &R::Update) -> Result<R> {
        let url = self.item_url(key)?;
        tracing::debug!("PUT {}", url);
        let response = self.client.put(url).json(input).send().await?;
        require(decode(response).await?)
    }

    async fn delete(&self, key: &R::Key) -> Result<()> {
        let url = self.item_url(key)?;
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        decode::<serde_json::Value>(response).await?;
        Ok(())
    }
}
