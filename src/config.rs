use std::env;

use derivative::Derivative;
use tracing::debug;
use url::Url;

use crate::constants::{DEFAULT_NKS_API_URL, DEFAULT_REQUEST_TIMEOUT_IN_SECONDS, NKS_API_TOKEN, NKS_BASE_API_URL};
use crate::errors::NksError;

/// ClientConfig: everything a client needs to talk to the NKS API.
///
/// It is built once, either explicitly or from the environment, and handed over to `NksClient`.
/// Nothing in the crate reads the process environment behind the caller's back.
#[derive(Derivative, Clone, PartialEq, Eq)]
#[derivative(Debug)]
pub struct ClientConfig {
    /// token is ignored from any Debug printing
    #[derivative(Debug = "ignore")]
    token: String,
    base_url: Url,
    request_timeout_in_seconds: u64,
}

impl ClientConfig {
    pub fn new(token: &str, base_url: &str) -> Result<Self, NksError> {
        if token.trim().is_empty() {
            return Err(NksError::InvalidToken {
                raw_error_message: "token is empty".to_string(),
            });
        }

        Ok(ClientConfig {
            token: token.to_string(),
            base_url: parse_base_url(base_url)?,
            request_timeout_in_seconds: DEFAULT_REQUEST_TIMEOUT_IN_SECONDS,
        })
    }

    /// Reads `NKS_API_TOKEN` (mandatory) and `NKS_BASE_API_URL` (optional) from the process environment.
    pub fn new_from_env() -> Result<Self, NksError> {
        Self::new_from_lookup(|name| env::var(name).ok())
    }

    /// Same as `new_from_env` but reading variables through `lookup`, so callers can inject their own source.
    pub fn new_from_lookup<F>(lookup: F) -> Result<Self, NksError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(NKS_API_TOKEN)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| NksError::MissingEnvVar {
                name: NKS_API_TOKEN.to_string(),
            })?;

        let base_url = match lookup(NKS_BASE_API_URL).filter(|url| !url.trim().is_empty()) {
            Some(url) => url,
            None => {
                debug!("{} is not set, using {}", NKS_BASE_API_URL, DEFAULT_NKS_API_URL);
                DEFAULT_NKS_API_URL.to_string()
            }
        };

        Self::new(&token, &base_url)
    }

    pub fn with_request_timeout(mut self, request_timeout_in_seconds: u64) -> Self {
        self.request_timeout_in_seconds = request_timeout_in_seconds;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn request_timeout_in_seconds(&self) -> u64 {
        self.request_timeout_in_seconds
    }
}

/// Parses an API root. A trailing slash is enforced so relative paths are joined under it.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, NksError> {
    let normalized = match base_url.trim().ends_with('/') {
        true => base_url.trim().to_string(),
        false => format!("{}/", base_url.trim()),
    };

    let url = Url::parse(&normalized).map_err(|e| NksError::InvalidBaseUrl {
        url: base_url.to_string(),
        raw_error_message: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(NksError::InvalidBaseUrl {
            url: base_url.to_string(),
            raw_error_message: format!("unsupported scheme `{}`", scheme),
        }),
    }
}

/// Reads an identifier (organization, SSH keyset, provider keyset...) from the process environment.
pub fn get_id_from_env(name: &str) -> Result<i64, NksError> {
    get_id_from_lookup(name, |name| env::var(name).ok())
}

pub fn get_id_from_lookup<F>(name: &str, lookup: F) -> Result<i64, NksError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name).ok_or_else(|| NksError::MissingEnvVar { name: name.to_string() })?;

    let id = value.trim().parse::<i64>().map_err(|e| NksError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        raw_error_message: e.to_string(),
    })?;

    match id > 0 {
        true => Ok(id),
        false => Err(NksError::InvalidEnvVar {
            name: name.to_string(),
            value,
            raw_error_message: "identifier must be a positive number".to_string(),
        }),
    }
}
