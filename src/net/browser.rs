//! Browser transport over `gloo-net` (the Fetch API).
//!
//! Client-side (csr): real HTTP calls.
//! Native builds: every call fails, the browser is the only place this
//! transport means anything.

#![allow(clippy::unused_async)]

use super::error::RequestError;
use super::transport::{HttpRequest, HttpResponse, Transport};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::{Method as FetchMethod, RequestBuilder};

            use super::transport::Method;

            let method = match request.method {
                Method::Get => FetchMethod::GET,
                Method::Post => FetchMethod::POST,
            };
            let mut builder = RequestBuilder::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| RequestError::Transport(e.to_string()))?;

            let response = prepared
                .send()
                .await
                .map_err(|e| RequestError::Transport(e.to_string()))?;
            let status = response.status();
            // An unreadable body is parsed as `{}` further up.
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    log::warn!("response body unreadable: {err}");
                    String::new()
                }
            };
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(RequestError::Transport(format!(
                "{} {} is only available in the browser",
                request.method.as_str(),
                request.url
            )))
        }
    }
}
