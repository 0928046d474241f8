//! HTTP transport seam.
//!
//! DESIGN
//! ======
//! The API client only needs "send this request, give me status + body".
//! Keeping that behind a trait lets the browser (`gloo-net`), the CLI
//! (`reqwest`) and tests (scripted responses) share one request pipeline.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::error::RequestError;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully prepared outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status code and the undecoded body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and waits for the whole response. No retries, no
/// timeout: a call is fire-and-wait-once.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`RequestError::Transport`] when no HTTP response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError>;
}

/// JSON content type first, then caller headers; a caller header replaces a
/// default with the same name.
pub(crate) fn merge_headers(extra: &[(&str, String)]) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.to_owned(), JSON_MEDIA_TYPE.to_owned())];
    for (name, value) in extra {
        if let Some(slot) = headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
            slot.1.clone_from(value);
        } else {
            headers.push(((*name).to_owned(), value.clone()));
        }
    }
    headers
}

pub(crate) fn bearer(token: &str) -> (&'static str, String) {
    (AUTHORIZATION, format!("Bearer {token}"))
}
