//! Request plumbing shared by the endpoint groups.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Map;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError};
use crate::pagination::{PageFetcher, PageParams, PaginationStyle, QueryResult};
use crate::resource::Value;

/// Where an endpoint expects its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ParamPlacement {
    /// JSON request body.
    Body,
    /// URL query string.
    Query,
}

/// Serializes operation parameters into a JSON object.
///
/// `()` and `None` count as "no parameters".
pub(crate) fn to_object(params: impl Serialize) -> Result<Map<String, serde_json::Value>, HttpError> {
    let value = serde_json::to_value(params).map_err(|e| InvalidHttpRequestError::InvalidParams {
        reason: e.to_string(),
    })?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        serde_json::Value::Null => Ok(Map::new()),
        other => Err(InvalidHttpRequestError::InvalidParams {
            reason: format!("expected an object, got {other}"),
        }
        .into()),
    }
}

/// Percent-encodes a path segment, rejecting empty ones.
pub(crate) fn segment(name: &'static str, value: &str) -> Result<String, HttpError> {
    if value.trim().is_empty() {
        return Err(InvalidHttpRequestError::EmptyPathParam { name }.into());
    }
    Ok(urlencoding::encode(value).into_owned())
}

/// Returns `field` of a wrapped object response.
///
/// A missing field yields [`Value::Null`]; non-object responses are passed
/// through untouched.
pub(crate) fn extract(value: Value, field: &str) -> Value {
    match value {
        Value::Resource(resource) => resource.get(field).cloned().unwrap_or(Value::Null),
        other => other,
    }
}

/// Sends one request, with `params` (if any) as the JSON body.
pub(crate) async fn call(
    client: &HttpClient,
    method: HttpMethod,
    path: &str,
    params: Option<Map<String, serde_json::Value>>,
) -> Result<Value, HttpError> {
    let mut builder = HttpRequest::builder(method, path);
    if let Some(params) = params {
        builder = builder.body(serde_json::Value::Object(params));
    }
    client.send(builder.build()?).await
}

/// A list or search operation bound to its caller-supplied parameters.
///
/// Every page re-sends the same parameters with only the pagination fields
/// substituted.
#[derive(Debug)]
pub(crate) struct EndpointFetcher {
    client: Arc<HttpClient>,
    method: HttpMethod,
    path: &'static str,
    placement: ParamPlacement,
    base: Map<String, serde_json::Value>,
}

#[async_trait]
impl PageFetcher for EndpointFetcher {
    async fn fetch(&self, params: &PageParams) -> Result<serde_json::Value, HttpError> {
        let mut payload = self.base.clone();
        params.apply_to(&mut payload);

        let builder = HttpRequest::builder(self.method, self.path);
        let request = match self.placement {
            ParamPlacement::Body => builder.body(serde_json::Value::Object(payload)),
            ParamPlacement::Query => builder.query_object(&payload),
        }
        .build()?;

        self.client.send_json(request).await
    }
}

/// Runs a paginated operation and wraps its first page.
pub(crate) async fn paginate(
    client: &Arc<HttpClient>,
    method: HttpMethod,
    path: &'static str,
    placement: ParamPlacement,
    style: PaginationStyle,
    params: Map<String, serde_json::Value>,
) -> Result<QueryResult, HttpError> {
    let mut base = params;
    let page_params = PageParams::take_from(style, &mut base);
    let fetcher = Arc::new(EndpointFetcher {
        client: Arc::clone(client),
        method,
        path,
        placement,
        base,
    });
    QueryResult::fetch_first(style, page_params, fetcher).await
}
