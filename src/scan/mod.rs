//! Free-text extraction of embedded data URLs.
//!
//! Splits a block of text into an ordered sequence of segments, plain text
//! interleaved with parsed data URLs, covering every input character. Spans
//! that merely look like data URLs stay text; the scanner never fails.

mod matcher;

use serde::Serialize;

use crate::data_url::{DataUrl, SCHEME};

/// One piece of a scanned text: literal text or an embedded data URL.
///
/// Serializes untagged, i.e. as the segment's string content, which is the
/// shape message-building callers consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Segment {
    /// A run of ordinary text between data URLs.
    Text(String),
    /// A successfully parsed data URL.
    Url(DataUrl),
}

impl Segment {
    /// The parsed data URL, if this segment is one.
    pub fn as_data_url(&self) -> Option<&DataUrl> {
        match self {
            Segment::Url(url) => Some(url),
            Segment::Text(_) => None,
        }
    }

    /// The literal text, if this segment is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Segment::Text(text) => Some(text),
            Segment::Url(_) => None,
        }
    }
}

/// Splits `text` into plain-text and data-URL segments, in input order.
///
/// Candidates are found by scanning for `data:` and greedily extending
/// through the grammar alphabets; each candidate span must then parse, and
/// a span that does not (unknown MIME type, missing `;base64` marker, bad
/// payload, ...) is kept as ordinary text. Adjacent text runs coalesce and
/// empty text segments are omitted, so concatenating the segments (URLs via
/// their canonical form) reproduces the input.
pub fn extract_contents(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find(SCHEME) {
        let start = cursor + found;
        let Some(end) = matcher::candidate_end(text, start) else {
            cursor = start + SCHEME.len();
            continue;
        };
        let span = &text[start..end];
        match DataUrl::from_url(span) {
            Ok(url) => {
                if start > text_start {
                    segments.push(Segment::Text(text[text_start..start].to_string()));
                }
                segments.push(Segment::Url(url));
                text_start = end;
                cursor = end;
            }
            Err(error) => {
                tracing::debug!(%error, candidate = span, "span is not a data URL, keeping as text");
                cursor = start + SCHEME.len();
            }
        }
    }

    if text_start < text.len() {
        segments.push(Segment::Text(text[text_start..].to_string()));
    }
    segments
}
