//! Messenger endpoints.

use std::sync::Arc;

use serde::Serialize;

use crate::api::endpoint::{call, paginate, segment, to_object, ParamPlacement};
use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::pagination::{PaginationStyle, QueryResult};
use crate::resource::Value;

#[derive(Clone, Copy, Debug)]
pub struct MessengerApi<'a> {
    client: &'a Arc<HttpClient>,
}

impl<'a> MessengerApi<'a> {
    pub(crate) const fn new(client: &'a Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Lists messengers (`GET /messenger`, offset paginated, parameters in
    /// the query string).
    ///
    /// # Errors
    ///
    /// Returns whatever the first page request fails with.
    pub async fn list(&self, params: impl Serialize + Send) -> Result<QueryResult, HttpError> {
        let params = to_object(params)?;
        paginate(
            self.client,
            HttpMethod::Get,
            "messenger",
            ParamPlacement::Query,
            PaginationStyle::Offset,
            params,
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty id, otherwise
    /// whatever the request fails with.
    pub async fn get(&self, messenger_id: &str) -> Result<Value, HttpError> {
        let path = format!("messenger/{}", segment("messenger_id", messenger_id)?);
        call(self.client, HttpMethod::Get, &path, None).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `params` is not an object,
    /// otherwise whatever the request fails with.
    pub async fn create(&self, params: impl Serialize + Send) -> Result<Value, HttpError> {
        let params = to_object(params)?;
        call(self.client, HttpMethod::Post, "messenger", Some(params)).await
    }

    /// Partially updates a messenger (`PATCH /messenger/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty id or non-object
    /// params, otherwise whatever the request fails with.
    pub async fn update(
        &self,
        messenger_id: &str,
        params: impl Serialize + Send,
    ) -> Result<Value, HttpError> {
        let path = format!("messenger/{}", segment("messenger_id", messenger_id)?);
        let params = to_object(params)?;
        call(self.client, HttpMethod::Patch, &path, Some(params)).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty id, otherwise
    /// whatever the request fails with.
    pub async fn delete(&self, messenger_id: &str) -> Result<Value, HttpError> {
        let path = format!("messenger/{}", segment("messenger_id", messenger_id)?);
        call(self.client, HttpMethod::Delete, &path, None).await
    }
}
