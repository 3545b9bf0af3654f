/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Transport and authentication core.
//!
//! [`HttpClient`] owns the normalized endpoint, the `reqwest` client, the
//! authentication strategy and the logging span. Every resource operation
//! goes through [`HttpClient::send_request`], which is the only place that
//! knows how HTTP status codes map to outcomes.

use crate::application::auth::AuthMethod;
use crate::constants::{ACCEPT_HEADER_VALUE, API_ROOT_SUFFIX, JSON_CONTENT_TYPE, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::QueryParams;
use crate::utils::json::to_storage_json;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, Request, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{Instrument, Span, debug, error, info_span};
use url::Url;

/// HTTP core shared by all resource operations
#[derive(Debug, Clone)]
pub struct HttpClient {
    endpoint: Url,
    auth: AuthMethod,
    http_client: Client,
    span: Span,
}

impl HttpClient {
    /// Creates a core for `location` with a fresh transport
    ///
    /// # Arguments
    /// * `location` - Absolute base URL of the wiki, e.g. `https://wiki.example.com/confluence`
    /// * `auth` - Strategy applied to every request
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - No request is sent at construction
    /// * `Err(AppError::InvalidEndpoint)` - If `location` is not an absolute http(s) URL
    pub fn new(location: &str, auth: AuthMethod) -> Result<Self, AppError> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Self::with_http_client(location, auth, http_client)
    }

    /// Creates a core whose transport applies `timeout` to every request
    pub fn with_timeout(
        location: &str,
        auth: AuthMethod,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Self::with_http_client(location, auth, http_client)
    }

    /// Creates a core on top of a caller-provided transport
    pub fn with_http_client(
        location: &str,
        auth: AuthMethod,
        http_client: Client,
    ) -> Result<Self, AppError> {
        let endpoint = normalize_endpoint(location)?;
        let span = info_span!("confluence", endpoint = %endpoint, auth = auth.kind());
        Ok(Self {
            endpoint,
            auth,
            http_client,
            span,
        })
    }

    /// Replaces the span every request is logged in
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Normalized API root, ending in `rest/api`
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Authentication strategy bound to this client
    pub fn auth(&self) -> &AuthMethod {
        &self.auth
    }

    /// Underlying transport
    pub fn inner(&self) -> &Client {
        &self.http_client
    }

    /// Span the dispatch logs are emitted in
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Joins the endpoint with `segments` and encodes `query`
    ///
    /// Segments are percent-encoded, so an id containing `/` stays one segment.
    pub fn url(&self, segments: &[&str], query: Option<&QueryParams>) -> Result<Url, AppError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidEndpoint(format!("{} cannot be a base", self.endpoint)))?
            .extend(segments);
        if let Some(query) = query {
            query.apply_to(&mut url);
        }
        Ok(url)
    }

    /// Starts a request against `url` on the bound transport
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client.request(method, url)
    }

    /// Sends `request` and classifies the response status
    ///
    /// Sets the `Accept` header, applies the authentication strategy and reads
    /// the whole body before looking at the status, so failure variants carry
    /// whatever the server said.
    ///
    /// # Returns
    /// * `Ok(body)` - For 200, 201, 204, 205 and 206
    /// * `Err(AppError)` - Transport, body read or status classification error
    pub async fn send_request(&self, mut request: Request) -> Result<Vec<u8>, AppError> {
        async move {
            request
                .headers_mut()
                .insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER_VALUE));
            self.auth.apply(&mut request);

            let method = request.method().clone();
            let url = request.url().clone();
            debug!("{} {}", method, url);

            let response = self.http_client.execute(request).await.map_err(|e| {
                error!("{} {} failed: {}", method, url, e);
                AppError::Transport(e)
            })?;
            let status = response.status();
            debug!("Response status: {}", status);

            let body = response
                .bytes()
                .await
                .map_err(AppError::BodyRead)?
                .to_vec();

            classify_status(status, body).inspect_err(|e| {
                error!(
                    "{} {} failed: {}: {}",
                    method,
                    url,
                    e,
                    e.body_text().unwrap_or_default()
                )
            })
        }
        .instrument(self.span.clone())
        .await
    }

    /// Sends a GET request and decodes the JSON response into `T`
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        let request = self.request(Method::GET, url).build()?;
        let body = self.send_request(request).await?;
        decode(body)
    }

    /// Sends `body` as JSON with `method` and decodes the response into `T`
    ///
    /// The payload goes through [`to_storage_json`], so `<`, `>` and `&` are sent literally.
    pub async fn send_json<B, T>(&self, method: Method, url: Url, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.send_json_raw(method, url, body).await?;
        decode(body)
    }

    /// Sends `body` as JSON with `method` and returns the raw response body
    pub async fn send_json_raw<B>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<Vec<u8>, AppError>
    where
        B: Serialize + ?Sized,
    {
        let payload = to_storage_json(body)?;
        self.span.in_scope(|| {
            debug!(
                "Sending to {}: {}",
                url,
                String::from_utf8_lossy(&payload)
            )
        });
        let request = self
            .request(method, url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(payload)
            .build()?;
        self.send_request(request).await
    }

    /// Sends a DELETE request and returns the raw body
    pub async fn delete(&self, url: Url) -> Result<Vec<u8>, AppError> {
        let request = self.request(Method::DELETE, url).build()?;
        self.send_request(request).await
    }
}

/// Validates `location` and turns it into the API root
///
/// Query and fragment are dropped, trailing slashes collapse into one and
/// `rest/api` is appended.
///
/// # Errors
/// [`AppError::InvalidEndpoint`] if `location` is not an absolute http(s) URL with a host.
pub fn normalize_endpoint(location: &str) -> Result<Url, AppError> {
    let mut url = Url::parse(location)
        .map_err(|e| AppError::InvalidEndpoint(format!("{location}: {e}")))?;

    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(AppError::InvalidEndpoint(format!(
            "{location}: not an absolute URL"
        )));
    }
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::InvalidEndpoint(format!(
            "{location}: unsupported scheme {}",
            url.scheme()
        )));
    }

    url.set_query(None);
    url.set_fragment(None);
    let path = format!("{}/{}", url.path().trim_end_matches('/'), API_ROOT_SUFFIX);
    url.set_path(&path);
    Ok(url)
}

/// Maps a response status to success or to the matching error, keeping the body
pub fn classify_status(status: StatusCode, body: Vec<u8>) -> Result<Vec<u8>, AppError> {
    match status {
        StatusCode::OK | StatusCode::CREATED | StatusCode::PARTIAL_CONTENT => Ok(body),
        StatusCode::NO_CONTENT | StatusCode::RESET_CONTENT => Ok(body),
        StatusCode::UNAUTHORIZED => Err(AppError::AuthenticationFailed { body }),
        StatusCode::SERVICE_UNAVAILABLE => Err(AppError::ServiceUnavailable {
            status: status.to_string(),
            body,
        }),
        StatusCode::INTERNAL_SERVER_ERROR => Err(AppError::InternalServerError {
            status: status.to_string(),
            body,
        }),
        _ => Err(AppError::UnknownStatus {
            status: status.to_string(),
            body,
        }),
    }
}

/// Decodes a JSON body into `T`
///
/// # Errors
/// [`AppError::Decode`] naming `T` and carrying the body.
pub fn decode<T: DeserializeOwned>(body: Vec<u8>) -> Result<T, AppError> {
    let decoded = serde_json::from_slice::<T>(&body);
    decoded.map_err(|source| AppError::Decode {
        target: short_type_name::<T>(),
        source,
        body,
    })
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    // generic arguments may contain `::` themselves
    let base = full.split('<').next().unwrap_or(full);
    let start = base.rfind("::").map_or(0, |i| i + 2);
    &full[start..]
}
