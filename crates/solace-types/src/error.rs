use thiserror::Error;

/// Errors from the model gateway call.
///
/// Every variant carries enough detail for the user-facing 502 response.
/// Extraction of an empty reply from a successful response is NOT an error;
/// only transport failures, non-success statuses, and unparseable bodies
/// surface here.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway request failed: {0}")]
    Transport(String),

    #[error("gateway timed out after {0}s")]
    Timeout(u64),

    #[error("gateway returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("gateway returned a malformed body: {0}")]
    MalformedBody(String),
}
