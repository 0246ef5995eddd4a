//! Client for the remote goal store.
//!
//! Every failure, whether transport, non-2xx status or undecodable body,
//! collapses into one [`RemoteError`] kind.

use crate::calendar::date_key;
use crate::models::{CreateMetaRequest, RemoteMeta, ToggleMetaRequest};
use chrono::NaiveDate;
use reqwest::Client;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("connection error: {message}")]
pub struct RemoteError {
    message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// The four operations the session needs from the goal store.
pub trait RemoteStore: Send + Sync + 'static {
    fn list(&self, date: NaiveDate) -> impl Future<Output = RemoteResult<Vec<RemoteMeta>>> + Send;

    fn create(
        &self,
        request: &CreateMetaRequest,
    ) -> impl Future<Output = RemoteResult<RemoteMeta>> + Send;

    fn set_completed(
        &self,
        id: i64,
        completed: bool,
    ) -> impl Future<Output = RemoteResult<()>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = RemoteResult<()>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpRemoteStore {
    client: Client,
    base_url: String,
}

impl HttpRemoteStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl RemoteStore for HttpRemoteStore {
    async fn list(&self, date: NaiveDate) -> RemoteResult<Vec<RemoteMeta>> {
        let url = format!("{}/metas?data={}", self.base_url, date_key(date));
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn create(&self, request: &CreateMetaRequest) -> RemoteResult<RemoteMeta> {
        let response = self
            .client
            .post(format!("{}/metas", self.base_url))
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn set_completed(&self, id: i64, completed: bool) -> RemoteResult<()> {
        self.client
            .patch(format!("{}/metas/{id}/toggle", self.base_url))
            .json(&ToggleMetaRequest { completed })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> RemoteResult<()> {
        self.client
            .delete(format!("{}/metas/{id}", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
