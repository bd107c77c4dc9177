use reqwest::Url;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::credentials::FastchannelCredentials;
use crate::http::error::FastchannelHttpError;
use crate::http::schemas::{TokenRequestSchema, TokenResponseSchema};

/// Header carrying the personal API subscription key, sent on every call.
const SUBSCRIPTION_KEY_HEADER: &str = "Subscription-Key";

impl From<reqwest::Error> for FastchannelHttpError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => FastchannelHttpError::HttpError {
                status,
                body: error.to_string(),
            },
            None => FastchannelHttpError::UnknownError(error.to_string()),
        }
    }
}

trait ResponseExt {
    fn map_to_fastchannel_err(self) -> Result<reqwest::blocking::Response, FastchannelHttpError>;
}

impl ResponseExt for reqwest::blocking::Response {
    fn map_to_fastchannel_err(self) -> Result<reqwest::blocking::Response, FastchannelHttpError> {
        if self.status().is_success() {
            Ok(self)
        } else {
            Err(FastchannelHttpError::HttpError {
                status: self.status(),
                body: self.text()?,
            })
        }
    }
}

/// A client for making HTTP requests to the Fastchannel Commerce API.
///
/// One client instance makes multiple authenticated requests: the access token
/// is acquired once with [`HttpClient::authenticate`] and reused verbatim on
/// every subsequent call.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: reqwest::blocking::Client,
    base_url: Url,
    subscription_key: String,
    access_token: Option<String>,
}

impl HttpClient {
    /// Create a new HttpClient with the given API base URL and subscription key.
    pub fn new(base_url: Url, subscription_key: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::blocking::Client::new(),
            base_url,
            subscription_key: subscription_key.into(),
            access_token: None,
        }
    }

    /// Perform the OAuth2 client-credentials grant against the given token
    /// endpoint and store the resulting access token.
    pub fn authenticate(
        &mut self,
        token_endpoint: Url,
        credentials: &FastchannelCredentials,
    ) -> Result<(), FastchannelHttpError> {
        let form = TokenRequestSchema::from_credentials(credentials);

        let response = self
            .http_client
            .post(token_endpoint)
            .form(&form)
            .send()?
            .map_to_fastchannel_err()?;

        let token_response = response.json::<TokenResponseSchema>()?;
        log::debug!("Access token acquired from token endpoint");
        self.access_token = Some(token_response.access_token);

        Ok(())
    }

    pub fn get(&self, path: impl AsRef<str>) -> Result<String, FastchannelHttpError> {
        let response = self.req(reqwest::Method::GET, path.as_ref(), None)?;
        Ok(response.text()?)
    }

    pub fn post(
        &self,
        path: impl AsRef<str>,
        body: &str,
    ) -> Result<String, FastchannelHttpError> {
        let response = self.req(reqwest::Method::POST, path.as_ref(), Some(body))?;
        Ok(response.text()?)
    }

    pub fn put(&self, path: impl AsRef<str>, body: &str) -> Result<String, FastchannelHttpError> {
        let response = self.req(reqwest::Method::PUT, path.as_ref(), Some(body))?;
        Ok(response.text()?)
    }

    pub fn patch(
        &self,
        path: impl AsRef<str>,
        body: &str,
    ) -> Result<String, FastchannelHttpError> {
        let response = self.req(reqwest::Method::PATCH, path.as_ref(), Some(body))?;
        Ok(response.text()?)
    }

    pub fn delete(&self, path: impl AsRef<str>) -> Result<String, FastchannelHttpError> {
        let response = self.req(reqwest::Method::DELETE, path.as_ref(), None)?;
        Ok(response.text()?)
    }

    /// Build and send one authenticated API request. The body, when present,
    /// is raw JSON text composed by the caller.
    fn req(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<reqwest::blocking::Response, FastchannelHttpError> {
        let token = self.validate_access_token()?;
        let url = self.join(path);
        log::debug!("{method} {url}");

        let mut request_builder = self
            .http_client
            .request(method, url)
            .bearer_auth(token)
            .header(SUBSCRIPTION_KEY_HEADER, &self.subscription_key)
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            request_builder = request_builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }

        let response = request_builder.send()?.map_to_fastchannel_err()?;

        Ok(response)
    }

    /// Get the access token if it exists.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Join the given path to the base URL.
    fn join(&self, path: &str) -> Url {
        self.base_url
            .join(path)
            .expect("Should be able to join url")
    }

    fn validate_access_token(&self) -> Result<&str, FastchannelHttpError> {
        self.access_token
            .as_deref()
            .ok_or(FastchannelHttpError::MissingAccessToken)
    }
}
