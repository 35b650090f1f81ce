use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlyoverError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unexpected response from the {service}: {status}")]
    UnexpectedStatusError {
        service: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Malformed payload: {0}")]
    PayloadError(#[from] serde_json::Error),

    #[error("Geolocation service reported failure: {message}")]
    ServiceError { message: String },

    #[error("Pass service rejected coordinates ({latitude}, {longitude})")]
    InvalidCoordinatesError { latitude: f64, longitude: f64 },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, FlyoverError>;
