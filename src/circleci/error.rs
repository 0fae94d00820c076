/// Failures talking to the CI provider or interpreting its responses
#[derive(Debug, thiserror::Error)]
pub enum CircleCiError {
    #[error("Non-200 status code received: {code}, {reason}")]
    Status { code: u16, reason: String },
    #[error("0 length response received")]
    EmptyResponse,
    #[error("Invalid JSON response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Request failed: {0}")]
    Transport(reqwest::Error),
    #[error("0 length artifacts response received")]
    NoArtifacts,
    #[error("No previous successful build for project")]
    MissingBuildNumber,
    #[error("Invalid artifact URL: {0:?}")]
    InvalidArtifactUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = CircleCiError::Status {
            code: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Non-200 status code received: 404, Not Found");
    }

    #[test]
    fn test_no_artifacts_display() {
        assert_eq!(
            CircleCiError::NoArtifacts.to_string(),
            "0 length artifacts response received"
        );
    }

    #[test]
    fn test_invalid_artifact_url_display_escapes() {
        let err = CircleCiError::InvalidArtifactUrl("https://x/\u{1}".to_string());
        assert_eq!(err.to_string(), r#"Invalid artifact URL: "https://x/\u{1}""#);
    }
}
