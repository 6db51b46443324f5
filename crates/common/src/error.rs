//! Error types shared across SerialPoint crates.

/// Top-level error type for SerialPoint operations.
#[derive(Debug, thiserror::Error)]
pub enum SerialpointError {
    #[error("Serial error: {message}")]
    Serial { message: String },

    #[error("Cursor actuator error: {message}")]
    Actuator { message: String },

    #[error("Platform error: {message}")]
    Platform { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using SerialpointError.
pub type SerialpointResult<T> = Result<T, SerialpointError>;

impl SerialpointError {
    pub fn serial(msg: impl Into<String>) -> Self {
        Self::Serial {
            message: msg.into(),
        }
    }

    pub fn actuator(msg: impl Into<String>) -> Self {
        Self::Actuator {
            message: msg.into(),
        }
    }

    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = SerialpointError::serial("port /dev/ttyUSB0 vanished");
        assert_eq!(err.to_string(), "Serial error: port /dev/ttyUSB0 vanished");

        let err = SerialpointError::config("alpha must be in (0, 1]");
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_io_errors_convert() {
        fn fails() -> SerialpointResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(SerialpointError::Io(_))));
    }
}
