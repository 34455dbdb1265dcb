/// Error type shared by the client and the CLI.
///
/// Every failure propagates to the caller as-is; nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Unexpected HTTP status. The body is kept verbatim.
    #[error("{status}: {body}")]
    Api { status: u16, body: String },
}

impl Error {
    /// HTTP status carried by an [`Error::Api`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_formats_status_and_body() {
        let err = Error::Api {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "403: forbidden");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn non_api_errors_have_no_status() {
        let err = Error::Validation("bad".to_string());
        assert_eq!(err.status(), None);
    }
}
