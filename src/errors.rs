use derive_more::Display;
use validator::ValidationErrors;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display("Request failed: {}", _0)]
    Request(String),

    #[display("API error ({}): {}", status, message)]
    Api { status: u16, message: String },

    #[display("Failed to decode response: {}", _0)]
    Decode(String),

    #[display("Validation error: {}", _0)]
    Validation(String),

    #[display("Storage error: {}", _0)]
    Storage(String),

    #[display("Configuration error: {}", _0)]
    Config(String),
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Message supplied by the backing store, when the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Text suitable for showing to the operator: the server-provided
    /// message when there is one, the validation message for rejected
    /// input, and `fallback` for everything else.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Api { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let messages = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect::<Vec<_>>()
            .join(", ");

        ApiError::Validation(messages)
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::Config(err.to_string())
    }
}
