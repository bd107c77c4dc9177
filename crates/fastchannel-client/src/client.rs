use reqwest::Url;

use crate::credentials::FastchannelCredentials;
use crate::error::FastchannelClientError;
use crate::http::HttpClient;

/// Resource prefix of the Stock v1 API.
const STOCK_RESOURCE_PREFIX: &str = "stock-management/v1/stock";

/// Configuration for the FastchannelClient. Can be created using
/// [FastchannelClientConfigBuilder], which is created using the
/// [FastchannelClientConfig::builder] method.
#[derive(Debug, Clone)]
pub struct FastchannelClientConfig {
    /// The base address of the Fastchannel Commerce API
    pub base_api_address: String,
    /// The OAuth2 token endpoint used for the client-credentials grant
    pub token_endpoint: String,
    /// The personal API subscription key, sent on every call
    pub subscription_key: String,
    /// Credentials exchanged for an access token when the client is created
    pub credentials: FastchannelCredentials,
}

impl FastchannelClientConfig {
    /// Create a new [FastchannelClientConfigBuilder] with the given credentials.
    pub fn builder(credentials: FastchannelCredentials) -> FastchannelClientConfigBuilder {
        FastchannelClientConfigBuilder::new(credentials)
    }
}

/// Builder for the FastchannelClientConfig
pub struct FastchannelClientConfigBuilder {
    config: FastchannelClientConfig,
}

impl FastchannelClientConfigBuilder {
    pub(crate) fn new(credentials: FastchannelCredentials) -> FastchannelClientConfigBuilder {
        FastchannelClientConfigBuilder {
            config: FastchannelClientConfig {
                base_api_address: "https://api.commerce.fastchannel.com/".into(),
                token_endpoint:
                    "https://login.microsoftonline.com/fastchannel.com/oauth2/v2.0/token".into(),
                subscription_key: String::new(),
                credentials,
            },
        }
    }

    /// Set the base address of the Fastchannel Commerce API
    pub fn with_base_api_address(
        mut self,
        base_api_address: impl Into<String>,
    ) -> FastchannelClientConfigBuilder {
        self.config.base_api_address = base_api_address.into();
        self
    }

    /// Set the OAuth2 token endpoint
    pub fn with_token_endpoint(
        mut self,
        token_endpoint: impl Into<String>,
    ) -> FastchannelClientConfigBuilder {
        self.config.token_endpoint = token_endpoint.into();
        self
    }

    /// Set the API subscription key
    pub fn with_subscription_key(
        mut self,
        subscription_key: impl Into<String>,
    ) -> FastchannelClientConfigBuilder {
        self.config.subscription_key = subscription_key.into();
        self
    }

    /// Build the FastchannelClientConfig
    pub fn build(self) -> FastchannelClientConfig {
        self.config
    }
}

/// The FastchannelClient is used to interact with the Fastchannel Commerce
/// API. It authenticates once on creation and reuses the same access token on
/// every call.
#[derive(Debug, Clone)]
pub struct FastchannelClient {
    config: FastchannelClientConfig,
    http_client: HttpClient,
}

impl FastchannelClient {
    /// Create a connected client: parse the configured endpoints, perform the
    /// client-credentials grant once, and keep the access token for all
    /// subsequent calls.
    pub fn create(
        config: FastchannelClientConfig,
    ) -> Result<FastchannelClient, FastchannelClientError> {
        let base_url: Url = config
            .base_api_address
            .parse()
            .map_err(|e| FastchannelClientError::InvalidEndpoint(format!("{e}")))?;
        let token_endpoint: Url = config
            .token_endpoint
            .parse()
            .map_err(|e| FastchannelClientError::InvalidEndpoint(format!("{e}")))?;

        let mut http_client = HttpClient::new(base_url, config.subscription_key.clone());
        http_client
            .authenticate(token_endpoint, &config.credentials)
            .map_err(|e| FastchannelClientError::AuthenticationError(e.to_string()))?;
        log::info!("Authenticated against {}", config.token_endpoint);

        Ok(FastchannelClient {
            config,
            http_client,
        })
    }

    /// Get the stock levels of the given product as raw JSON text.
    pub fn get_product_stock(
        &self,
        product_code: &str,
    ) -> Result<String, FastchannelClientError> {
        let body = self
            .http_client
            .get(format!("{STOCK_RESOURCE_PREFIX}/{product_code}"))?;
        Ok(body)
    }

    /// Set the stock of the given product. The request body is raw JSON text
    /// composed by the caller; the response body is returned unparsed.
    pub fn set_product_stock(
        &self,
        product_code: &str,
        request_body: &str,
    ) -> Result<String, FastchannelClientError> {
        let body = self
            .http_client
            .put(format!("{STOCK_RESOURCE_PREFIX}/{product_code}"), request_body)?;
        Ok(body)
    }

    /// The underlying HTTP client, for arbitrary authenticated calls outside
    /// the stock surface.
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    pub fn config(&self) -> &FastchannelClientConfig {
        &self.config
    }
}
