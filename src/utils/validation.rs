use crate::utils::error::{FlyoverError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    let invalid = |reason: String| FlyoverError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason,
    };

    if url_str.trim().is_empty() {
        return Err(invalid("URL cannot be empty".to_string()));
    }

    let url = Url::parse(url_str).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(format!("Unsupported URL scheme: {}", scheme))),
    }
}
