use reqwest::StatusCode;
use thiserror::Error;

/// NksError: every failure the client can surface to its caller.
///
/// Configuration variants are raised before any network activity. Transport, API and decoding
/// variants come straight from a single request, nothing is retried.
#[derive(Error, Debug)]
pub enum NksError {
    #[error("Environment variable `{name}` is not set.")]
    MissingEnvVar { name: String },
    #[error("Environment variable `{name}` has an invalid value `{value}`: {raw_error_message}.")]
    InvalidEnvVar {
        name: String,
        value: String,
        raw_error_message: String,
    },
    #[error("Invalid NKS API base url `{url}`: {raw_error_message}.")]
    InvalidBaseUrl { url: String, raw_error_message: String },
    #[error("Invalid NKS API token: {raw_error_message}.")]
    InvalidToken { raw_error_message: String },
    #[error("Cannot build the HTTP client: {raw_error_message}.")]
    HttpClient { raw_error_message: String },
    #[error("Unknown provider `{provider}`.")]
    UnknownProvider { provider: String },
    #[error("Unable to get a response from NKS API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Resource not found at `{url}`.")]
    NotFound { url: String },
    #[error("Unexpected status code {status} received from `{url}`: {message}")]
    Api {
        url: String,
        status: StatusCode,
        message: String,
    },
    #[error("Error while trying to deserialize json received from `{url}`: {raw_error_message}")]
    Decoding { url: String, raw_error_message: String },
}

impl NksError {
    /// Returns true when the error is a configuration problem detected before any request.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            NksError::MissingEnvVar { .. }
                | NksError::InvalidEnvVar { .. }
                | NksError::InvalidBaseUrl { .. }
                | NksError::InvalidToken { .. }
                | NksError::HttpClient { .. }
                | NksError::UnknownProvider { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, NksError::NotFound { .. })
    }
}
