use thiserror::Error;

use crate::http::error::FastchannelHttpError;

#[derive(Error, Debug)]
pub enum FastchannelClientError {
    #[error("Invalid api endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("Failed to authenticate client: {0}")]
    AuthenticationError(String),

    #[error(transparent)]
    HttpError(#[from] FastchannelHttpError),

    #[error("Unknown Error: {0}")]
    UnknownError(String),
}
