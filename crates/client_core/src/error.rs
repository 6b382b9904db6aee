use thiserror::Error;

/// Failure while loading the user directory. Any of these aborts the load;
/// there is no partial result.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid {resource} endpoint '{base}' + '{path}': {source}")]
    InvalidEndpoint {
        resource: &'static str,
        base: String,
        path: String,
        source: url::ParseError,
    },
    #[error("failed to fetch {resource}: {source}")]
    Request {
        resource: &'static str,
        source: reqwest::Error,
    },
    #[error("unexpected status {status} while fetching {resource}")]
    Status {
        resource: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("failed to decode {resource} response: {source}")]
    Decode {
        resource: &'static str,
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn resource(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint { resource, .. }
            | Self::Request { resource, .. }
            | Self::Status { resource, .. }
            | Self::Decode { resource, .. } => resource,
        }
    }
}
