//! JSON-over-HTTP entity service
//!
//! Resource layout:
//!
//! ```text
//! GET    {base}/{resource}        list
//! GET    {base}/{resource}/{id}   get_by_id
//! POST   {base}/{resource}        create
//! PUT    {base}/{resource}/{id}   update
//! DELETE {base}/{resource}/{id}   delete
//! ```

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::error::EntityError;
use crate::record::{Entity, NewRecord};
use crate::service::EntityService;

/// Error body shape returned by the API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// [`EntityService`] backed by the REST API
#[derive(Debug, Clone)]
pub struct HttpEntityService<T> {
    client: Client,
    base: Url,
    resource: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T: Entity> HttpEntityService<T> {
    /// Service for `T` rooted at `base` (e.g. `http://localhost:3000/api`)
    #[must_use]
    pub fn new(client: Client, base: Url) -> Self {
        Self {
            client,
            base,
            resource: T::KIND.resource(),
            _record: PhantomData,
        }
    }

    /// `{base}/{resource}`
    ///
    /// # Errors
    /// `Transport` when the base URL cannot carry a path
    pub fn collection_url(&self) -> Result<Url, EntityError> {
        self.url_with(&[])
    }

    /// `{base}/{resource}/{id}`, with `id` percent-encoded
    ///
    /// # Errors
    /// `Transport` when the base URL cannot carry a path
    pub fn record_url(&self, id: &str) -> Result<Url, EntityError> {
        self.url_with(&[id])
    }

    fn url_with(&self, extra: &[&str]) -> Result<Url, EntityError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| EntityError::Transport(format!("invalid base url: {}", self.base)))?
            .pop_if_empty()
            .push(self.resource)
            .extend(extra);
        Ok(url)
    }
}

/// Map non-success responses to errors, keeping the server's message
async fn check(response: Response, id: Option<&str>) -> Result<Response, EntityError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
        return Err(EntityError::NotFound(id.to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or(body);
    tracing::warn!(status = status.as_u16(), %message, "entity request failed");
    Err(EntityError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl<T: Entity> EntityService for HttpEntityService<T> {
    type Record = T;

    async fn list(&self) -> Result<Vec<T>, EntityError> {
        let url = self.collection_url()?;
        tracing::debug!(%url, "GET");
        let response = check(self.client.get(url).send().await?, None).await?;
        Ok(response.json().await?)
    }

    async fn get_by_id(&self, id: &str) -> Result<T, EntityError> {
        let url = self.record_url(id)?;
        tracing::debug!(%url, "GET");
        let response = check(self.client.get(url).send().await?, Some(id)).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, record: NewRecord<T>) -> Result<T, EntityError> {
        let url = self.collection_url()?;
        tracing::debug!(%url, "POST");
        let response = check(self.client.post(url).json(&record).send().await?, None).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &str, record: T) -> Result<T, EntityError> {
        let url = self.record_url(id)?;
        tracing::debug!(%url, "PUT");
        let response = check(self.client.put(url).json(&record).send().await?, Some(id)).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: &str) -> Result<(), EntityError> {
        let url = self.record_url(id)?;
        tracing::debug!(%url, "DELETE");
        check(self.client.delete(url).send().await?, Some(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Order};

    fn service<T: Entity>(base: &str) -> HttpEntityService<T> {
        HttpEntityService::new(Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn collection_url_appends_resource() {
        let svc = service::<Category>("http://localhost:3000/api");
        assert_eq!(
            svc.collection_url().unwrap().as_str(),
            "http://localhost:3000/api/categories"
        );
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let svc = service::<Order>("http://localhost:3000/api/");
        assert_eq!(
            svc.record_url("42").unwrap().as_str(),
            "http://localhost:3000/api/orders/42"
        );
    }

    #[test]
    fn record_id_is_encoded() {
        let svc = service::<Category>("http://localhost:3000");
        assert_eq!(
            svc.record_url("a/b").unwrap().as_str(),
            "http://localhost:3000/categories/a%2Fb"
        );
    }

    #[test]
    fn cannot_be_a_base_url_is_rejected() {
        let svc = service::<Category>("mailto:admin@example.com");
        assert!(matches!(
            svc.collection_url(),
            Err(EntityError::Transport(_))
        ));
    }
}
