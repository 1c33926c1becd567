//! Email endpoints.

use std::sync::Arc;

use serde::Serialize;

use crate::api::endpoint::{call, extract, paginate, segment, to_object, ParamPlacement};
use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::pagination::{PaginationStyle, QueryResult};
use crate::resource::Value;

/// Sending, searching and managing emails.
///
/// Obtained from [`Sidemail::email`](crate::Sidemail::email).
#[derive(Clone, Copy, Debug)]
pub struct EmailApi<'a> {
    client: &'a Arc<HttpClient>,
}

impl<'a> EmailApi<'a> {
    pub(crate) const fn new(client: &'a Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Sends an email (`POST /email/send`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `params` is not an object,
    /// otherwise whatever the request fails with.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = client
    ///     .email()
    ///     .send(json!({
    ///         "toAddress": "user@example.com",
    ///         "fromAddress": "you@example.com",
    ///         "templateName": "Welcome",
    ///         "templateProps": {"firstName": "Ada"},
    ///     }))
    ///     .await?;
    /// println!("queued as {:?}", response.get("id"));
    /// ```
    pub async fn send(&self, params: impl Serialize + Send) -> Result<Value, HttpError> {
        let params = to_object(params)?;
        call(self.client, HttpMethod::Post, "email/send", Some(params)).await
    }

    /// Searches sent emails (`POST /email/search`, cursor paginated).
    ///
    /// `paginationCursorNext` / `paginationCursorPrev` in `params` select the
    /// starting page; `limit` is kept for every page.
    ///
    /// # Errors
    ///
    /// Returns whatever the first page request fails with.
    pub async fn search(&self, params: impl Serialize + Send) -> Result<QueryResult, HttpError> {
        let params = to_object(params)?;
        paginate(
            self.client,
            HttpMethod::Post,
            "email/search",
            ParamPlacement::Body,
            PaginationStyle::Cursor,
            params,
        )
        .await
    }

    /// Fetches one email (`GET /email/{id}`) and returns its `email` field.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty id, otherwise
    /// whatever the request fails with.
    pub async fn get(&self, email_id: &str) -> Result<Value, HttpError> {
        let path = format!("email/{}", segment("email_id", email_id)?);
        let response = call(self.client, HttpMethod::Get, &path, None).await?;
        Ok(extract(response, "email"))
    }

    /// Deletes a scheduled email (`DELETE /email/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty id, otherwise
    /// whatever the request fails with.
    pub async fn delete(&self, email_id: &str) -> Result<Value, HttpError> {
        let path = format!("email/{}", segment("email_id", email_id)?);
        call(self.client, HttpMethod::Delete, &path, None).await
    }
}
