//! The data-URL value object.
//!
//! A [`DataUrl`] is an immutable, validated decomposition of a base64
//! `data:` URL: MIME type, ordered `key=value` parameters, and the payload
//! kept in its base64 form. Construction always leaves the payload as valid
//! standard-alphabet base64; the encoding indicator is structurally fixed to
//! `base64`, so non-base64 data URLs are unrepresentable.

mod error;
mod parse;
mod ser;

pub use error::DataUrlError;
pub(crate) use parse::SCHEME;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::mime::MimeType;
use crate::storage;

/// An immutable, validated base64 data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime_type: MimeType,
    parameters: Vec<(String, String)>,
    data: String,
}

impl DataUrl {
    /// The only supported encoding indicator.
    pub const ENCODING: &'static str = "base64";

    /// Truncation threshold for [`DataUrl::url_truncated`], in bytes.
    pub const TRUNCATED_URL_MAX: usize = 100;

    /// Builds a data URL from an already base64-encoded payload.
    ///
    /// Fails with [`DataUrlError::Decode`] if `data` is not valid
    /// standard-alphabet base64.
    pub fn new(mime_type: MimeType, data: impl Into<String>) -> Result<Self, DataUrlError> {
        Self::with_parameters(mime_type, data, &[])
    }

    /// Builds a data URL from a base64 payload plus raw `key=value`
    /// parameter segments (e.g. `"charset=utf-8"`).
    ///
    /// Fails with [`DataUrlError::InvalidParameter`] on a segment without
    /// exactly one `=`, or [`DataUrlError::Decode`] on a bad payload.
    pub fn with_parameters(
        mime_type: MimeType,
        data: impl Into<String>,
        parameters: &[&str],
    ) -> Result<Self, DataUrlError> {
        let parameters = split_parameters(parameters)?;
        let data = data.into();
        STANDARD.decode(data.as_bytes())?;
        Ok(DataUrl {
            mime_type,
            parameters,
            data,
        })
    }

    /// Builds a data URL from raw content, encoding it to base64.
    ///
    /// `content` is any byte view; text encodes via its UTF-8 bytes.
    pub fn from_data(mime_type: MimeType, content: impl AsRef<[u8]>) -> Self {
        DataUrl {
            mime_type,
            parameters: Vec::new(),
            data: STANDARD.encode(content.as_ref()),
        }
    }

    /// Like [`DataUrl::from_data`], with raw `key=value` parameter segments.
    pub fn from_data_with_parameters(
        mime_type: MimeType,
        content: impl AsRef<[u8]>,
        parameters: &[&str],
    ) -> Result<Self, DataUrlError> {
        let parameters = split_parameters(parameters)?;
        Ok(DataUrl {
            mime_type,
            parameters,
            data: STANDARD.encode(content.as_ref()),
        })
    }

    /// The MIME type.
    pub fn mime_type(&self) -> MimeType {
        self.mime_type
    }

    /// Parameters in serialization order.
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    /// The payload, base64-encoded.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// The encoding indicator; always `"base64"`.
    pub fn encoding(&self) -> &'static str {
        Self::ENCODING
    }

    /// Canonical URL string:
    /// `data:<mime>[;key=value]*;base64,<payload>`.
    ///
    /// Round-trips byte-for-byte through [`DataUrl::from_url`].
    pub fn url(&self) -> String {
        use fmt::Write;

        let mut url = format!("data:{}", self.mime_type.as_str());
        for (key, value) in &self.parameters {
            // Writing to a String cannot fail.
            let _ = write!(url, ";{}={}", key, value);
        }
        let _ = write!(url, ";{},{}", Self::ENCODING, self.data);
        url
    }

    /// [`DataUrl::url`], shortened for display when longer than `max_len`.
    ///
    /// The result keeps the whole header through `;base64,` and cuts only
    /// the payload tail, appending `...`; it is always strictly shorter than
    /// the full URL when truncation applies.
    pub fn url_truncated_to(&self, max_len: usize) -> String {
        let url = self.url();
        if url.len() <= max_len {
            return url;
        }
        let header_end = url.find(',').map_or(0, |i| i + 1);
        let mut keep = max_len.saturating_sub(3).max(header_end);
        while keep < url.len() && !url.is_char_boundary(keep) {
            keep += 1;
        }
        format!("{}...", &url[..keep])
    }

    /// [`DataUrl::url_truncated_to`] at the default threshold
    /// ([`DataUrl::TRUNCATED_URL_MAX`]).
    pub fn url_truncated(&self) -> String {
        self.url_truncated_to(Self::TRUNCATED_URL_MAX)
    }

    /// The decoded payload bytes.
    ///
    /// Construction already validated the payload, so this re-decode is
    /// defensive; it fails only on an instance whose invariant was broken.
    pub fn decoded_bytes(&self) -> Result<Vec<u8>, DataUrlError> {
        Ok(STANDARD.decode(self.data.as_bytes())?)
    }

    /// The decoded payload as text, or `Ok(None)` when the bytes are not
    /// valid UTF-8. Binary payloads are a normal answer, not an error.
    pub fn decoded_text(&self) -> Result<Option<String>, DataUrlError> {
        Ok(String::from_utf8(self.decoded_bytes()?).ok())
    }

    /// True if the decoded payload is valid UTF-8 text, regardless of the
    /// declared MIME type.
    pub fn is_text_representable(&self) -> bool {
        matches!(self.decoded_text(), Ok(Some(_)))
    }

    /// True for `text/*` MIME types.
    pub fn is_text_content(&self) -> bool {
        self.mime_type.is_text()
    }

    /// True for `image/*` MIME types.
    pub fn is_image_content(&self) -> bool {
        self.mime_type.is_image()
    }

    /// True for `audio/*` MIME types.
    pub fn is_audio_content(&self) -> bool {
        self.mime_type.is_audio()
    }

    /// Lowercase hex MD5 of the decoded payload. A content fingerprint, not
    /// a security property.
    pub fn content_md5(&self) -> Result<String, DataUrlError> {
        Ok(checksum::md5_hex(&self.decoded_bytes()?))
    }

    /// Writes the decoded payload into `dir` and returns the file path.
    ///
    /// The filename is `<md5>.<extension>` with the extension taken from the
    /// MIME registry, so distinct content never collides and saving the same
    /// content twice is a no-op that returns the existing path.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let bytes = self.decoded_bytes().context("decode data URL payload")?;
        let file_name = format!(
            "{}.{}",
            checksum::md5_hex(&bytes),
            self.mime_type.extension()
        );
        storage::write_new(dir, &file_name, &bytes)
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

/// Validates raw `key=value` segments: exactly one `=` each.
fn split_parameters(raw: &[&str]) -> Result<Vec<(String, String)>, DataUrlError> {
    raw.iter()
        .map(|segment| {
            let (key, value) = segment
                .split_once('=')
                .ok_or_else(|| DataUrlError::InvalidParameter(segment.to_string()))?;
            if value.contains('=') {
                return Err(DataUrlError::InvalidParameter(segment.to_string()));
            }
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}
