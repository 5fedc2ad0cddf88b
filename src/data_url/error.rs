//! Validation errors for data-URL parsing and construction.

use thiserror::Error;

/// Why a string or field set does not form a valid base64 data URL.
///
/// All variants are caller-input validation failures; none is transient.
#[derive(Debug, Error)]
pub enum DataUrlError {
    /// Input does not start with the `data:` scheme.
    #[error("not a valid data URL")]
    NotADataUrl,
    /// No `,` separating the header from the payload.
    #[error("data URL has no comma separating header and payload")]
    MissingPayloadSeparator,
    /// Header lacks the trailing `;base64` marker (e.g. a legacy
    /// percent-encoded data URL).
    #[error("data URL must be base64 encoded")]
    NotBase64Encoded,
    /// Header has an empty MIME-type segment.
    #[error("MIME type is required")]
    MissingMimeType,
    /// MIME-type string is not in the registry.
    #[error("unknown MIME type: {0}")]
    UnknownMimeType(String),
    /// A `;key=value` segment without exactly one `=`.
    #[error("invalid parameter format: {0}")]
    InvalidParameter(String),
    /// Payload is not valid standard-alphabet base64.
    #[error("payload is not valid base64")]
    Decode(#[from] base64::DecodeError),
}
