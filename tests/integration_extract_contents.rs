//! Integration test: scan a prompt-like document holding text, an image, an
//! audio clip, and a text attachment as data URLs, then exercise the parsed
//! values end to end (decode, categorize, fingerprint, save, re-serialize).

use durl::{extract_contents, DataUrl, MimeType, Segment};
use tempfile::tempdir;

const PNG_PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

fn raw_content() -> String {
    format!(
        "Can you tell me what is in the image?data:image/png;base64,{PNG_PIXEL}\n\
         \n\
         And how is the sound like?\n\
         data:audio/mpeg;base64,{PNG_PIXEL}\n\
         \n\
         And what is the text say?\n\
         data:text/plain;base64,SGVsbG8sIHdvcmxkIQ=="
    )
}

#[test]
fn mixed_document_splits_into_interleaved_segments() {
    let input = raw_content();
    let segments = extract_contents(&input);
    assert_eq!(segments.len(), 6, "three text runs and three data URLs");

    let urls: Vec<&DataUrl> = segments.iter().filter_map(Segment::as_data_url).collect();
    assert_eq!(urls.len(), 3);
    assert!(urls.iter().any(|u| u.is_image_content()));
    assert!(urls.iter().any(|u| u.is_audio_content()));
    assert!(urls.iter().any(|u| u.is_text_content()));

    for url in &urls {
        assert!(!url.decoded_bytes().unwrap().is_empty());
        if url.is_text_content() {
            assert_eq!(
                url.decoded_text().unwrap().as_deref(),
                Some("Hello, world!")
            );
            assert!(url.is_text_representable());
        } else {
            // The image/audio payloads are binary.
            assert!(!url.is_text_representable());
        }
    }

    // Coverage: concatenating the segments reproduces the input.
    let reassembled: String = segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.clone(),
            Segment::Url(url) => url.url(),
        })
        .collect();
    assert_eq!(reassembled, input);
}

#[test]
fn extracted_urls_round_trip_and_save() {
    let input = raw_content();
    let segments = extract_contents(&input);
    let dir = tempdir().unwrap();

    for url in segments.iter().filter_map(Segment::as_data_url) {
        // Round-trip: the canonical form parses back to an equal value.
        let reparsed = DataUrl::from_url(&url.url()).unwrap();
        assert_eq!(&reparsed, url);

        // Save is content-addressed: md5 plus registry extension.
        let path = url.save(dir.path()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, url.decoded_bytes().unwrap());
        let expected_name = format!(
            "{}.{}",
            url.content_md5().unwrap(),
            url.mime_type().extension()
        );
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), expected_name);
    }

    // Image and audio shared a payload; text differs: three URLs, but only
    // distinct (content, extension) pairs on disk.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);
}

#[test]
fn constructed_urls_match_parsed_urls() {
    let built = DataUrl::from_data(MimeType::PlainText, "Hello, world!");
    let parsed = DataUrl::from_url("data:text/plain;base64,SGVsbG8sIHdvcmxkIQ==").unwrap();
    assert_eq!(built, parsed);
    assert_eq!(built.to_string(), "data:text/plain;base64,SGVsbG8sIHdvcmxkIQ==");
}

#[test]
fn segments_serialize_for_message_building() {
    let segments = extract_contents("look: data:text/plain;base64,SGVsbG8=");
    let json = serde_json::to_value(&segments).unwrap();
    assert_eq!(
        json,
        serde_json::json!(["look: ", "data:text/plain;base64,SGVsbG8="])
    );
}
