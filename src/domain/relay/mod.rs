pub mod disposition;
pub mod error;
pub mod service;

pub use disposition::attachment_disposition;
pub use error::RelayServiceError;
pub use service::{RelayService, RelayServiceApi};

/// Content type used when the upstream does not declare one
pub const DEFAULT_CONTENT_TYPE: &str = "audio/mpeg";

/// A request to relay one remote audio resource as a download
#[derive(Debug, Clone, PartialEq)]
pub struct RelayRequest {
    pub source_url: String,
    pub filename: Option<String>,
}

impl RelayRequest {
    /// Build a request from raw query parameters.
    /// An absent or empty `url` is a `MissingParameter`; an empty `filename` counts as absent.
    pub fn from_params(
        url: Option<String>,
        filename: Option<String>,
    ) -> Result<Self, RelayServiceError> {
        let source_url = url
            .filter(|u| !u.trim().is_empty())
            .ok_or(RelayServiceError::MissingParameter)?;

        Ok(Self {
            source_url,
            filename: filename.filter(|f| !f.is_empty()),
        })
    }
}

/// Audio ready to be sent back to the caller as an attachment
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub body: Vec<u8>,
    /// Header bytes as declared upstream, or `DEFAULT_CONTENT_TYPE`
    pub content_type: Vec<u8>,
    pub content_disposition: String,
}
