use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FastchannelHttpError {
    #[error("No access token, authenticate first")]
    MissingAccessToken,
    #[error("Http Error {status}: {body}")]
    HttpError { status: StatusCode, body: String },

    #[error("Unknown Error: {0}")]
    UnknownError(String),
}
