use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to encode request body: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}

impl ProbeError {
    /// The error message followed by every underlying cause, `: `-separated.
    ///
    /// reqwest keeps the interesting part ("Connection refused", DNS failures)
    /// in the source chain rather than in its own Display.
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        if let ProbeError::Transport(inner) = self {
            // `#[from]` makes the wrapped error our source; don't repeat it.
            source = std::error::Error::source(inner);
        }
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.ends_with(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_describe_without_causes() {
        let err = ProbeError::InvalidPort("abc".to_string());
        assert_eq!(err.describe(), "Invalid port number: abc");
    }

    #[test]
    fn serialization_error_includes_message_once() {
        let inner = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = format!("Failed to encode request body: {}", inner);
        let err = ProbeError::from(inner);
        assert_eq!(err.describe(), expected);
    }
}
