/// Credentials for the OAuth2 client-credentials grant against the
/// Fastchannel token endpoint.
#[derive(Debug, Clone)]
pub struct FastchannelCredentials {
    client_id: String,
    client_secret: String,
    scope: String,
}

impl FastchannelCredentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            scope: scope.into(),
        }
    }

    /// Creates a new instance of `FastchannelCredentials` from environment variables.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self::new(
            std::env::var("FASTCHANNEL_CLIENT_ID")?,
            std::env::var("FASTCHANNEL_CLIENT_SECRET")?,
            std::env::var("FASTCHANNEL_CLIENT_SCOPE")?,
        ))
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}
