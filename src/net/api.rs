//! REST API client for the regret service.
//!
//! `call` is the single request pipeline: JSON content type, optional JSON
//! body, lenient JSON response parsing and status-to-error mapping. The
//! typed helpers below it encode the endpoint contract.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a [`RequestError`] whose text is fit to show a user.
//! Unparseable response bodies are read as `{}` rather than failing, so a
//! 500 with an HTML page still yields `"Request failed: 500"`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::RequestError;
use super::transport::{HttpRequest, Method, Transport, bearer, merge_headers};
use super::types::{Credentials, Message, NewMessage, Tone};
use crate::config::normalize_base_url;

pub const TONES_PATH: &str = "/api/tones";
pub const REGISTER_PATH: &str = "/api/register";
pub const LOGIN_PATH: &str = "/api/login";
pub const MESSAGES_PATH: &str = "/api/messages";

pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl AsRef<str>) -> Self {
        Self {
            transport,
            base_url: normalize_base_url(base_url.as_ref()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one request and return the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Fails when the transport fails or the status is not 2xx; the message
    /// is the body's `error` field or `"Request failed: <status>"`.
    pub async fn call(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
        headers: &[(&str, String)],
    ) -> Result<Value, RequestError> {
        let request = HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: merge_headers(headers),
            body: body.map(Value::to_string),
        };
        log::debug!("{} {}", method.as_str(), request.url);
        let response = self.transport.send(request).await?;
        let data = parse_body(&response.body);
        if !response.is_success() {
            let err = RequestError::from_status(response.status, &data);
            log::debug!("{} {path} -> {}: {err}", method.as_str(), response.status);
            return Err(err);
        }
        Ok(data)
    }

    /// `GET /api/tones`. A non-array body means "no tones".
    ///
    /// # Errors
    ///
    /// Fails on transport/status errors or when array elements are not tones.
    pub async fn tones(&self) -> Result<Vec<Tone>, RequestError> {
        let data = self.call(TONES_PATH, Method::Get, None, &[]).await?;
        if !data.is_array() {
            return Ok(Vec::new());
        }
        decode(data)
    }

    /// `POST /api/register`. Returns the server's confirmation message, if any.
    ///
    /// # Errors
    ///
    /// Fails on transport/status errors.
    pub async fn register(&self, credentials: &Credentials) -> Result<Option<String>, RequestError> {
        let body = encode(credentials)?;
        let data = self.call(REGISTER_PATH, Method::Post, Some(&body), &[]).await?;
        Ok(string_field(&data, "message"))
    }

    /// `POST /api/login`. Returns the bearer token.
    ///
    /// # Errors
    ///
    /// Fails on transport/status errors or when the body carries no token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, RequestError> {
        let body = encode(credentials)?;
        let data = self.call(LOGIN_PATH, Method::Post, Some(&body), &[]).await?;
        string_field(&data, "token")
            .ok_or_else(|| RequestError::Decode("Login response did not include a token".to_owned()))
    }

    /// Authenticated `GET /api/messages`.
    ///
    /// # Errors
    ///
    /// Fails on transport/status errors or when the body is not a message list.
    pub async fn messages(&self, token: &str) -> Result<Vec<Message>, RequestError> {
        let data = self.call(MESSAGES_PATH, Method::Get, None, &[bearer(token)]).await?;
        if !data.is_array() {
            return Err(RequestError::Decode("Unexpected messages response".to_owned()));
        }
        decode(data)
    }

    /// Authenticated `POST /api/messages`. The success body is ignored.
    ///
    /// # Errors
    ///
    /// Fails on transport/status errors.
    pub async fn create_message(&self, token: &str, message: &NewMessage) -> Result<(), RequestError> {
        let body = encode(message)?;
        self.call(MESSAGES_PATH, Method::Post, Some(&body), &[bearer(token)])
            .await?;
        Ok(())
    }
}

/// Lenient JSON parse: anything unreadable becomes an empty object.
pub(crate) fn parse_body(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::Object(Map::new()))
}

fn string_field(data: &Value, field: &str) -> Option<String> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

fn encode<B: Serialize>(body: &B) -> Result<Value, RequestError> {
    serde_json::to_value(body).map_err(|e| RequestError::Decode(e.to_string()))
}

fn decode<D: serde::de::DeserializeOwned>(data: Value) -> Result<D, RequestError> {
    serde_json::from_value(data).map_err(|e| RequestError::Decode(e.to_string()))
}
