use reqwest::header;
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue};

// generate the right header for NKS API with token
pub fn get_header_with_bearer(token: &str) -> Result<HeaderMap<HeaderValue>, InvalidHeaderValue> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let mut authorization = HeaderValue::from_str(format!("Bearer {}", token).as_str())?;
    authorization.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, authorization);

    Ok(headers)
}
