//! Contact endpoints.

use std::sync::Arc;

use serde::Serialize;

use crate::api::endpoint::{call, extract, paginate, segment, to_object, ParamPlacement};
use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::pagination::{PaginationStyle, QueryResult};
use crate::resource::Value;

/// Contacts are addressed by email address, which is percent-encoded into
/// the path.
#[derive(Clone, Copy, Debug)]
pub struct ContactsApi<'a> {
    client: &'a Arc<HttpClient>,
}

impl<'a> ContactsApi<'a> {
    pub(crate) const fn new(client: &'a Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Creates or updates a contact (`POST /contacts`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `params` is not an object,
    /// otherwise whatever the request fails with.
    pub async fn create_or_update(&self, params: impl Serialize + Send) -> Result<Value, HttpError> {
        let params = to_object(params)?;
        call(self.client, HttpMethod::Post, "contacts", Some(params)).await
    }

    /// Looks up a contact and returns its `contact` field.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty address, otherwise
    /// whatever the request fails with (404 for unknown contacts).
    pub async fn find(&self, email_address: &str) -> Result<Value, HttpError> {
        let path = format!("contacts/{}", segment("email_address", email_address)?);
        let response = call(self.client, HttpMethod::Get, &path, None).await?;
        Ok(extract(response, "contact"))
    }

    /// Queries contacts (`POST /contacts/query`, offset paginated).
    ///
    /// # Errors
    ///
    /// Returns whatever the first page request fails with.
    pub async fn query(&self, params: impl Serialize + Send) -> Result<QueryResult, HttpError> {
        let params = to_object(params)?;
        paginate(
            self.client,
            HttpMethod::Post,
            "contacts/query",
            ParamPlacement::Body,
            PaginationStyle::Offset,
            params,
        )
        .await
    }

    /// Lists contacts (`GET /contacts`, cursor paginated, parameters in the
    /// query string).
    ///
    /// # Errors
    ///
    /// Returns whatever the first page request fails with.
    pub async fn list(&self, params: impl Serialize + Send) -> Result<QueryResult, HttpError> {
        let params = to_object(params)?;
        paginate(
            self.client,
            HttpMethod::Get,
            "contacts",
            ParamPlacement::Query,
            PaginationStyle::Cursor,
            params,
        )
        .await
    }

    /// Deletes a contact.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty address, otherwise
    /// whatever the request fails with.
    pub async fn delete(&self, email_address: &str) -> Result<Value, HttpError> {
        let path = format!("contacts/{}", segment("email_address", email_address)?);
        call(self.client, HttpMethod::Delete, &path, None).await
    }
}
