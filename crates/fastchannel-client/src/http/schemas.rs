use serde::{Deserialize, Serialize};

use crate::credentials::FastchannelCredentials;

/// Form body posted to the token endpoint. Field order is the order the
/// fields are urlencoded in.
#[derive(Serialize)]
pub struct TokenRequestSchema {
    pub grant_type: String,
    pub scope: String,
    pub client_id: String,
    pub client_secret: String,
}

impl TokenRequestSchema {
    pub fn from_credentials(credentials: &FastchannelCredentials) -> Self {
        Self {
            grant_type: "client_credentials".to_string(),
            scope: credentials.scope().to_string(),
            client_id: credentials.client_id().to_string(),
            client_secret: credentials.client_secret().to_string(),
        }
    }
}

/// Token endpoint response. Only `access_token` is used; the token is never
/// inspected for expiry.
#[derive(Deserialize)]
pub struct TokenResponseSchema {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}
