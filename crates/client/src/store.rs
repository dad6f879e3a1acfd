use serde::de::DeserializeOwned;
use storage::models::{Athlete, Gym};

use crate::api::{HttpResourceApi, ResourceApi};
use crate::error::Result;
use crate::resource::Resource;

pub type AthleteStore<A = HttpResourceApi<Athlete>> = ResourceStore<Athlete, A>;
pub type GymStore<A = HttpResourceApi<Gym>> = ResourceStore<Gym, A>;

/// Local cache of one resource collection.
///
/// Every action takes `&mut self`, so at most one action runs against a
/// store at a time. `loading` is true only while an action is awaiting the
/// API. A failed list fetch is recorded in `error` and swallowed; every
/// other failed action records its message and returns the error.
pub struct ResourceStore<R: Resource, A: ResourceApi<R>> {
    api: A,
    items: Vec<R>,
    selected: Option<R>,
    loading: bool,
    error: Option<String>,
}

impl<R: Resource, A: ResourceApi<R>> ResourceStore<R, A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            items: Vec::new(),
            selected: None,
            loading: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn selected(&self) -> Option<&R> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// Cached item with the given key
    pub fn find(&self, key: &R::Key) -> Option<&R> {
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn select(&mut self, item: Option<R>) {
        self.selected = item;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Ends an action: drops the loading flag and records `message` on failure.
    fn settle<T>(&mut self, result: Result<T>, message: String) -> Result<T> {
        self.loading = false;

        if let Err(err) = &result {
            tracing::error!("{}: {}", message, err);
            self.error = Some(message);
        }

        result
    }

    /// Replace the cache with the server's list. Failures leave the cache as
    /// it was and are only visible through [`Self::error`].
    pub async fn fetch_all(&mut self) {
        self.begin();
        let result = self.api.list().await;

        if let Ok(items) = self.settle(result, format!("Failed to fetch {}", R::PLURAL)) {
            self.items = items;
        }
    }

    /// Fetch one item, select it and upsert it into the cache under `key`.
    pub async fn fetch_one(&mut self, key: &R::Key) -> Result<R> {
        self.begin();
        let result = self.api.get(key).await;
        let item = self.settle(result, format!("Failed to fetch {}", R::SINGULAR))?;

        match self.items.iter_mut().find(|cached| cached.key() == key) {
            Some(cached) => *cached = item.clone(),
            None => self.items.push(item.clone()),
        }
        self.selected = Some(item.clone());

        Ok(item)
    }

    pub async fn create(&mut self, input: &R::Create) -> Result<R> {
        self.begin();
        let result = self.api.create(input).await;
        let item = self.settle(result, format!("Failed to create {}", R::SINGULAR))?;

        self.items.push(item.clone());

        Ok(item)
    }

    /// Update the item stored under `key`. Items not already cached are not
    /// inserted.
    pub async fn update(&mut self, key: &R::Key, input: &R::Update) -> Result<R> {
        self.begin();
        let result = self.api.update(key, input).await;
        let item = self.settle(result, format!("Failed to update {}", R::SINGULAR))?;

        if let Some(cached) = self.items.iter_mut().find(|cached| cached.key() == key) {
            *cached = item.clone();
        }
        if self.selected.as_ref().is_some_and(|selected| selected.key() == key) {
            self.selected = Some(item.clone());
        }

        Ok(item)
    }

    pub async fn delete(&mut self, key: &R::Key) -> Result<()> {
        self.begin();
        let result = self.api.delete(key).await;
        self.settle(result, format!("Failed to delete {}", R::SINGULAR))?;

        self.items.retain(|cached| cached.key() != key);
        if self.selected.as_ref().is_some_and(|selected| selected.key() == key) {
            self.selected = None;
        }

        Ok(())
    }
}

impl<R: Resource + DeserializeOwned> ResourceStore<R, HttpResourceApi<R>> {
    /// Store backed by the HTTP API served at `base_url`
    pub fn connect(base_url: &str) -> Result<Self> {
        Ok(Self::new(HttpResourceApi::new(base_url)?))
    }
}
