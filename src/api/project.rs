//! Project endpoints.
//!
//! The project is implied by the API key, so none of these take an id.

use std::sync::Arc;

use serde::Serialize;

use crate::api::endpoint::{call, to_object};
use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::resource::Value;

#[derive(Clone, Copy, Debug)]
pub struct ProjectApi<'a> {
    client: &'a Arc<HttpClient>,
}

impl<'a> ProjectApi<'a> {
    pub(crate) const fn new(client: &'a Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `params` is not an object,
    /// otherwise whatever the request fails with.
    pub async fn create(&self, params: impl Serialize + Send) -> Result<Value, HttpError> {
        let params = to_object(params)?;
        call(self.client, HttpMethod::Post, "project", Some(params)).await
    }

    /// # Errors
    ///
    /// Returns whatever the request fails with.
    pub async fn get(&self) -> Result<Value, HttpError> {
        call(self.client, HttpMethod::Get, "project", None).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `params` is not an object,
    /// otherwise whatever the request fails with.
    pub async fn update(&self, params: impl Serialize + Send) -> Result<Value, HttpError> {
        let params = to_object(params)?;
        call(self.client, HttpMethod::Patch, "project", Some(params)).await
    }

    /// # Errors
    ///
    /// Returns whatever the request fails with.
    pub async fn delete(&self) -> Result<Value, HttpError> {
        call(self.client, HttpMethod::Delete, "project", None).await
    }
}
