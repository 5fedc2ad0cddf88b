//! Grammar parsing for `data:` URL strings.
//!
//! Recognized form: `data:<mime>[;key=value]*;base64,<payload>`. The
//! encoding marker is the final header segment; legacy percent-encoded data
//! URLs (no `;base64`) are rejected, not interpreted.

use super::{DataUrl, DataUrlError};
use crate::mime::MimeType;

/// The data-URL scheme prefix.
pub(crate) const SCHEME: &str = "data:";

impl DataUrl {
    /// True iff `candidate` starts with the literal `data:` scheme.
    pub fn is_data_url(candidate: &str) -> bool {
        candidate.starts_with(SCHEME)
    }

    /// Parses a raw data-URL string.
    ///
    /// Validation order, first failure wins:
    /// missing `data:` prefix, missing `,`, missing trailing `;base64`
    /// marker, empty MIME segment, MIME string not in the registry, then
    /// per-parameter and payload checks from construction. A literal
    /// `base64` segment anywhere but last is an ordinary (and malformed)
    /// parameter.
    pub fn from_url(url: &str) -> Result<Self, DataUrlError> {
        let rest = url.strip_prefix(SCHEME).ok_or(DataUrlError::NotADataUrl)?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or(DataUrlError::MissingPayloadSeparator)?;

        let mut segments = header.split(';');
        // `split` yields at least one item, possibly empty.
        let mime = segments.next().unwrap_or_default();
        let rest: Vec<&str> = segments.collect();
        let parameters = match rest.split_last() {
            Some((&last, parameters)) if last == Self::ENCODING => parameters,
            _ => return Err(DataUrlError::NotBase64Encoded),
        };

        if mime.is_empty() {
            return Err(DataUrlError::MissingMimeType);
        }
        let mime_type =
            MimeType::resolve(mime).ok_or_else(|| DataUrlError::UnknownMimeType(mime.to_string()))?;

        Self::with_parameters(mime_type, payload, parameters)
    }
}
