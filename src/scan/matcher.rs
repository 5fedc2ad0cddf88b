//! Greedy candidate-span matching for the free-text scanner.
//!
//! A candidate starts at a literal `data:`, runs through header characters
//! (MIME token, `;key=value` segments, the encoding marker), a mandatory
//! `,`, then standard base64 payload characters. Both alphabets are ASCII,
//! so byte indexing stays on UTF-8 boundaries.

use crate::data_url::SCHEME;

/// Header alphabet: MIME tokens plus `;key=value` segments.
fn is_header_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'/' | b';' | b'=' | b'+' | b'.' | b'-' | b'_')
}

/// Payload alphabet: standard base64 plus `=` padding.
fn is_payload_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')
}

/// Extends a candidate starting at byte `start` (which must point at a
/// `data:` occurrence) as far as the grammar alphabets allow.
///
/// Returns the exclusive end of the span, or `None` when no `,` follows the
/// header run. The span is a candidate only; the parser decides validity.
pub(super) fn candidate_end(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = start + SCHEME.len();
    while i < bytes.len() && is_header_byte(bytes[i]) {
        i += 1;
    }
    if i >= bytes.len() || bytes[i] != b',' {
        return None;
    }
    i += 1;
    while i < bytes.len() && is_payload_byte(bytes[i]) {
        i += 1;
    }
    Some(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_stops_at_first_non_payload_byte() {
        let text = "see data:text/plain;base64,SGVsbG8= and more";
        let start = text.find(SCHEME).unwrap();
        let end = candidate_end(text, start).unwrap();
        assert_eq!(&text[start..end], "data:text/plain;base64,SGVsbG8=");
    }

    #[test]
    fn span_runs_to_end_of_input() {
        let text = "data:image/png;base64,iVBORw==";
        assert_eq!(candidate_end(text, 0), Some(text.len()));
    }

    #[test]
    fn no_comma_means_no_candidate() {
        assert_eq!(candidate_end("data:text/plain;base64", 0), None);
        assert_eq!(candidate_end("data: spaced out", 0), None);
    }

    #[test]
    fn empty_payload_is_still_a_candidate() {
        let text = "data:text/plain;base64, next";
        let end = candidate_end(text, 0).unwrap();
        assert_eq!(&text[..end], "data:text/plain;base64,");
    }
}
