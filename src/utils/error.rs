use thiserror::Error;

/// 錯誤分類，對應抓取流程中的失敗階段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Parse,
    Shape,
    Output,
}

#[derive(Error, Debug)]
pub enum IdeaError {
    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Generative API returned {status}: {message}")]
    ServiceError { status: u16, message: String },

    #[error("No content generated by the model")]
    EmptyResponseError,

    #[error("Could not find a JSON payload in the model response")]
    NoPayloadError,

    #[error("Payload is not valid JSON: {0}")]
    PayloadSyntaxError(serde_json::Error),

    #[error("Payload does not match the app idea shape: {0}")]
    ShapeError(serde_json::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IdeaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdeaError::MissingConfigError { .. }
            | IdeaError::InvalidConfigValueError { .. }
            | IdeaError::ConfigError { .. } => ErrorKind::Configuration,
            IdeaError::ApiError(_)
            | IdeaError::ServiceError { .. }
            | IdeaError::EmptyResponseError => ErrorKind::Transport,
            IdeaError::NoPayloadError | IdeaError::PayloadSyntaxError(_) => ErrorKind::Parse,
            IdeaError::ShapeError(_) => ErrorKind::Shape,
            IdeaError::SerializationError(_) | IdeaError::CsvError(_) | IdeaError::IoError(_) => {
                ErrorKind::Output
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            IdeaError::MissingConfigError { .. } => {
                "Set the API_KEY environment variable or pass --api-key"
            }
            IdeaError::InvalidConfigValueError { .. } | IdeaError::ConfigError { .. } => {
                "Check the configuration file and command line flags"
            }
            IdeaError::ApiError(_) | IdeaError::ServiceError { .. } => {
                "Check network connectivity, the endpoint and the API key"
            }
            IdeaError::EmptyResponseError
            | IdeaError::NoPayloadError
            | IdeaError::PayloadSyntaxError(_)
            | IdeaError::ShapeError(_) => "The model answered in an unexpected format; try again",
            IdeaError::SerializationError(_) | IdeaError::CsvError(_) | IdeaError::IoError(_) => {
                "Try another --format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, IdeaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let missing = IdeaError::MissingConfigError {
            field: "API_KEY".to_string(),
        };
        assert_eq!(missing.kind(), ErrorKind::Configuration);

        let service = IdeaError::ServiceError {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(service.kind(), ErrorKind::Transport);
        assert_eq!(IdeaError::EmptyResponseError.kind(), ErrorKind::Transport);
        assert_eq!(IdeaError::NoPayloadError.kind(), ErrorKind::Parse);

        let syntax = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(IdeaError::PayloadSyntaxError(syntax).kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_service_error_message() {
        let err = IdeaError::ServiceError {
            status: 403,
            message: "API key not valid".to_string(),
        };
        assert_eq!(err.to_string(), "Generative API returned 403: API key not valid");
    }
}
