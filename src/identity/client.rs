//! HTTP client for identity service requests.
//!
//! This module provides a low-level wrapper around `reqwest` that carries the
//! service base URL and the default headers every request is sent with.

use super::IdentityError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Response};
use serde::Serialize;
use std::collections::HashMap;

/// Makes requests to the identity service.
///
pub struct Client {
    base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL, sending the given
    /// headers with every request.
    ///
    pub fn new(base_url: &str, headers: &HashMap<String, String>) -> Result<Self, IdentityError> {
        let mut default_headers = HeaderMap::new();
        for (name, value) in headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| IdentityError::InvalidHeader {
                    name: name.to_owned(),
                    message: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| IdentityError::InvalidHeader {
                    name: name.to_owned(),
                    message: e.to_string(),
                })?;
            default_headers.insert(header_name, header_value);
        }

        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder()
                .default_headers(default_headers)
                .build()?,
        })
    }

    /// Send a JSON body to the path with POST and return the response.
    ///
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, IdentityError> {
        self.call_with_body(Method::POST, path, body).await
    }

    /// Make request with JSON body and return the response or error.
    ///
    async fn call_with_body<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Response, IdentityError> {
        let request_url = self.url(path);
        log::debug!("Sending {} request to {}...", method, request_url);
        Ok(self
            .http_client
            .request(method, &request_url)
            .json(body)
            .send()
            .await?)
    }

    /// Join the base URL and the given path with exactly one separator.
    ///
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
