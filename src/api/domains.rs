//! Sending domain endpoints.

use std::sync::Arc;

use serde::Serialize;

use crate::api::endpoint::{call, segment, to_object};
use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::resource::Value;

#[derive(Clone, Copy, Debug)]
pub struct DomainsApi<'a> {
    client: &'a Arc<HttpClient>,
}

impl<'a> DomainsApi<'a> {
    pub(crate) const fn new(client: &'a Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Lists all sending domains. The endpoint is not paginated.
    ///
    /// # Errors
    ///
    /// Returns whatever the request fails with.
    pub async fn list(&self) -> Result<Value, HttpError> {
        call(self.client, HttpMethod::Get, "domains", None).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `params` is not an object,
    /// otherwise whatever the request fails with.
    pub async fn create(&self, params: impl Serialize + Send) -> Result<Value, HttpError> {
        let params = to_object(params)?;
        call(self.client, HttpMethod::Post, "domains", Some(params)).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty id, otherwise
    /// whatever the request fails with.
    pub async fn delete(&self, domain_id: &str) -> Result<Value, HttpError> {
        let path = format!("domains/{}", segment("domain_id", domain_id)?);
        call(self.client, HttpMethod::Delete, &path, None).await
    }
}
