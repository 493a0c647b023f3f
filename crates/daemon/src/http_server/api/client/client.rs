use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use url::Url;

use super::error::ApiError;
use super::ApiRequest;
use crate::http_server::api::auth::AUTH_HEADER;

#[derive(Debug, Clone)]
pub struct ApiClient {
    pub remote: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(remote: &Url) -> Result<Self, ApiError> {
        Self::build(remote, None)
    }

    /// Client that sends the given bearer token with every request.
    pub fn with_token(remote: &Url, token: &str) -> Result<Self, ApiError> {
        Self::build(remote, Some(token))
    }

    fn build(remote: &Url, token: Option<&str>) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            let value = HeaderValue::from_str(token).map_err(|_| ApiError::InvalidToken)?;
            default_headers.insert(AUTH_HEADER, value);
        }
        let client = Client::builder().default_headers(default_headers).build()?;

        Ok(Self {
            remote: remote.clone(),
            client,
        })
    }

    pub async fn call<T: ApiRequest>(&mut self, request: T) -> Result<T::Response, ApiError> {
        let request_builder = request.build_request(&self.remote, &self.client);
        let response = request_builder.send().await?;

        if response.status().is_success() {
            Ok(response.json::<T::Response>().await?)
        } else {
            Err(ApiError::HttpStatus(
                response.status(),
                response.text().await?,
            ))
        }
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> &Url {
        &self.remote
    }

    /// Get the underlying HTTP client for custom requests
    pub fn http_client(&self) -> &Client {
        &self.client
    }
}
