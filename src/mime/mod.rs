//! MIME type registry.
//!
//! Closed enumeration of the known MIME types, their canonical strings, and
//! file-extension mappings. Several variants share one canonical string
//! (e.g. [`MimeType::OggAudio`] and [`MimeType::Opus`] are both
//! `audio/ogg`); string resolution picks the first such variant.

mod extension;

use std::fmt;

/// A known MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MimeType {
    /// AAC audio
    Aac,
    /// AbiWord document
    Abiword,
    /// Animated Portable Network Graphics (APNG)
    Apng,
    /// Archive document (multiple files embedded)
    Freearc,
    /// AVIF image
    Avif,
    /// AVI: Audio Video Interleave
    Avi,
    /// Amazon Kindle eBook format
    AmazonEbook,
    /// Any kind of binary data
    OctetStream,
    /// Windows OS/2 Bitmap Graphics
    Bmp,
    /// BZip archive
    Bzip,
    /// BZip2 archive
    Bzip2,
    /// CD audio
    Cda,
    /// C-Shell script
    Csh,
    /// Cascading Style Sheets (CSS)
    Css,
    /// Comma-separated values (CSV)
    Csv,
    /// Microsoft Word
    Doc,
    /// Microsoft Word (OpenXML)
    Docx,
    /// MS Embedded OpenType fonts
    Eot,
    /// Electronic publication (EPUB)
    Epub,
    /// GZip Compressed Archive
    Gzip,
    /// Graphics Interchange Format (GIF)
    Gif,
    /// HyperText Markup Language (HTML)
    Html,
    /// Icon format
    Ico,
    /// iCalendar format
    Ics,
    /// Java Archive (JAR)
    Jar,
    /// JPEG images
    Jpeg,
    /// JavaScript
    Javascript,
    /// JSON format
    Json,
    /// JSON-LD format
    JsonLd,
    /// Markdown
    Markdown,
    /// Musical Instrument Digital Interface (MIDI)
    Midi,
    /// JavaScript module (same essence as [`MimeType::Javascript`])
    JavascriptModule,
    /// MP3 audio
    Mp3,
    /// MP4 video
    Mp4,
    /// MPEG video
    Mpeg,
    /// Apple Installer Package
    AppleInstaller,
    /// OpenDocument presentation document
    Odp,
    /// OpenDocument spreadsheet document
    Ods,
    /// OpenDocument text document
    Odt,
    /// Ogg audio
    OggAudio,
    /// Ogg video
    OggVideo,
    /// Ogg container
    Ogg,
    /// Opus audio in Ogg container (same essence as [`MimeType::OggAudio`])
    Opus,
    /// OpenType font
    Otf,
    /// Portable Network Graphics
    Png,
    /// Adobe Portable Document Format (PDF)
    Pdf,
    /// Hypertext Preprocessor (Personal Home Page)
    Php,
    /// Microsoft PowerPoint
    Ppt,
    /// Microsoft PowerPoint (OpenXML)
    Pptx,
    /// RAR archive
    Rar,
    /// Rich Text Format (RTF)
    Rtf,
    /// Bourne shell script
    Sh,
    /// Scalable Vector Graphics (SVG)
    Svg,
    /// Tape Archive (TAR)
    Tar,
    /// Tagged Image File Format (TIFF)
    Tiff,
    /// MPEG transport stream
    MpegTs,
    /// TrueType Font
    Ttf,
    /// Text, generally ASCII or ISO 8859-n
    PlainText,
    /// Microsoft Visio
    Visio,
    /// Waveform Audio Format
    Wav,
    /// WEBM audio
    WebmAudio,
    /// WEBM video
    WebmVideo,
    /// Web application manifest
    WebManifest,
    /// WEBP image
    Webp,
    /// Web Open Font Format (WOFF)
    Woff,
    /// Web Open Font Format 2 (WOFF2)
    Woff2,
    /// XHTML
    Xhtml,
    /// Microsoft Excel
    Xls,
    /// Microsoft Excel (OpenXML)
    Xlsx,
    /// XML
    Xml,
    /// XUL
    Xul,
    /// ZIP archive
    Zip,
    /// 3GPP audio/video container
    ThreeGp,
    /// 3GPP2 audio/video container
    ThreeG2,
    /// 7-zip archive
    SevenZip,
}

impl MimeType {
    /// Canonical MIME string, e.g. `"image/png"`.
    pub fn as_str(self) -> &'static str {
        match self {
            MimeType::Aac => "audio/aac",
            MimeType::Abiword => "application/x-abiword",
            MimeType::Apng => "image/apng",
            MimeType::Freearc => "application/x-freearc",
            MimeType::Avif => "image/avif",
            MimeType::Avi => "video/x-msvideo",
            MimeType::AmazonEbook => "application/vnd.amazon.ebook",
            MimeType::OctetStream => "application/octet-stream",
            MimeType::Bmp => "image/bmp",
            MimeType::Bzip => "application/x-bzip",
            MimeType::Bzip2 => "application/x-bzip2",
            MimeType::Cda => "application/x-cdf",
            MimeType::Csh => "application/x-csh",
            MimeType::Css => "text/css",
            MimeType::Csv => "text/csv",
            MimeType::Doc => "application/msword",
            MimeType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            MimeType::Eot => "application/vnd.ms-fontobject",
            MimeType::Epub => "application/epub+zip",
            MimeType::Gzip => "application/gzip",
            MimeType::Gif => "image/gif",
            MimeType::Html => "text/html",
            MimeType::Ico => "image/vnd.microsoft.icon",
            MimeType::Ics => "text/calendar",
            MimeType::Jar => "application/java-archive",
            MimeType::Jpeg => "image/jpeg",
            MimeType::Javascript => "text/javascript",
            MimeType::Json => "application/json",
            MimeType::JsonLd => "application/ld+json",
            MimeType::Markdown => "text/markdown",
            MimeType::Midi => "audio/midi",
            MimeType::JavascriptModule => "text/javascript",
            MimeType::Mp3 => "audio/mpeg",
            MimeType::Mp4 => "video/mp4",
            MimeType::Mpeg => "video/mpeg",
            MimeType::AppleInstaller => "application/vnd.apple.installer+xml",
            MimeType::Odp => "application/vnd.oasis.opendocument.presentation",
            MimeType::Ods => "application/vnd.oasis.opendocument.spreadsheet",
            MimeType::Odt => "application/vnd.oasis.opendocument.text",
            MimeType::OggAudio => "audio/ogg",
            MimeType::OggVideo => "video/ogg",
            MimeType::Ogg => "application/ogg",
            MimeType::Opus => "audio/ogg",
            MimeType::Otf => "font/otf",
            MimeType::Png => "image/png",
            MimeType::Pdf => "application/pdf",
            MimeType::Php => "application/x-httpd-php",
            MimeType::Ppt => "application/vnd.ms-powerpoint",
            MimeType::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            MimeType::Rar => "application/vnd.rar",
            MimeType::Rtf => "application/rtf",
            MimeType::Sh => "application/x-sh",
            MimeType::Svg => "image/svg+xml",
            MimeType::Tar => "application/x-tar",
            MimeType::Tiff => "image/tiff",
            MimeType::MpegTs => "video/mp2t",
            MimeType::Ttf => "font/ttf",
            MimeType::PlainText => "text/plain",
            MimeType::Visio => "application/vnd.visio",
            MimeType::Wav => "audio/wav",
            MimeType::WebmAudio => "audio/webm",
            MimeType::WebmVideo => "video/webm",
            MimeType::WebManifest => "application/manifest+json",
            MimeType::Webp => "image/webp",
            MimeType::Woff => "font/woff",
            MimeType::Woff2 => "font/woff2",
            MimeType::Xhtml => "application/xhtml+xml",
            MimeType::Xls => "application/vnd.ms-excel",
            MimeType::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            MimeType::Xml => "application/xml",
            MimeType::Xul => "application/vnd.mozilla.xul+xml",
            MimeType::Zip => "application/zip",
            MimeType::ThreeGp => "video/3gpp",
            MimeType::ThreeG2 => "video/3gpp2",
            MimeType::SevenZip => "application/x-7z-compressed",
        }
    }

    /// Resolves a canonical MIME string to its type.
    ///
    /// Literal, case-sensitive match. Strings shared by several variants
    /// resolve to the first one (`"audio/ogg"` → [`MimeType::OggAudio`],
    /// `"text/javascript"` → [`MimeType::Javascript`]).
    pub fn resolve(s: &str) -> Option<MimeType> {
        let mime = match s {
            "audio/aac" => MimeType::Aac,
            "application/x-abiword" => MimeType::Abiword,
            "image/apng" => MimeType::Apng,
            "application/x-freearc" => MimeType::Freearc,
            "image/avif" => MimeType::Avif,
            "video/x-msvideo" => MimeType::Avi,
            "application/vnd.amazon.ebook" => MimeType::AmazonEbook,
            "application/octet-stream" => MimeType::OctetStream,
            "image/bmp" => MimeType::Bmp,
            "application/x-bzip" => MimeType::Bzip,
            "application/x-bzip2" => MimeType::Bzip2,
            "application/x-cdf" => MimeType::Cda,
            "application/x-csh" => MimeType::Csh,
            "text/css" => MimeType::Css,
            "text/csv" => MimeType::Csv,
            "application/msword" => MimeType::Doc,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                MimeType::Docx
            }
            "application/vnd.ms-fontobject" => MimeType::Eot,
            "application/epub+zip" => MimeType::Epub,
            "application/gzip" => MimeType::Gzip,
            "image/gif" => MimeType::Gif,
            "text/html" => MimeType::Html,
            "image/vnd.microsoft.icon" => MimeType::Ico,
            "text/calendar" => MimeType::Ics,
            "application/java-archive" => MimeType::Jar,
            "image/jpeg" => MimeType::Jpeg,
            "text/javascript" => MimeType::Javascript,
            "application/json" => MimeType::Json,
            "application/ld+json" => MimeType::JsonLd,
            "text/markdown" => MimeType::Markdown,
            "audio/midi" => MimeType::Midi,
            "audio/mpeg" => MimeType::Mp3,
            "video/mp4" => MimeType::Mp4,
            "video/mpeg" => MimeType::Mpeg,
            "application/vnd.apple.installer+xml" => MimeType::AppleInstaller,
            "application/vnd.oasis.opendocument.presentation" => MimeType::Odp,
            "application/vnd.oasis.opendocument.spreadsheet" => MimeType::Ods,
            "application/vnd.oasis.opendocument.text" => MimeType::Odt,
            "audio/ogg" => MimeType::OggAudio,
            "video/ogg" => MimeType::OggVideo,
            "application/ogg" => MimeType::Ogg,
            "font/otf" => MimeType::Otf,
            "image/png" => MimeType::Png,
            "application/pdf" => MimeType::Pdf,
            "application/x-httpd-php" => MimeType::Php,
            "application/vnd.ms-powerpoint" => MimeType::Ppt,
            "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
                MimeType::Pptx
            }
            "application/vnd.rar" => MimeType::Rar,
            "application/rtf" => MimeType::Rtf,
            "application/x-sh" => MimeType::Sh,
            "image/svg+xml" => MimeType::Svg,
            "application/x-tar" => MimeType::Tar,
            "image/tiff" => MimeType::Tiff,
            "video/mp2t" => MimeType::MpegTs,
            "font/ttf" => MimeType::Ttf,
            "text/plain" => MimeType::PlainText,
            "application/vnd.visio" => MimeType::Visio,
            "audio/wav" => MimeType::Wav,
            "audio/webm" => MimeType::WebmAudio,
            "video/webm" => MimeType::WebmVideo,
            "application/manifest+json" => MimeType::WebManifest,
            "image/webp" => MimeType::Webp,
            "font/woff" => MimeType::Woff,
            "font/woff2" => MimeType::Woff2,
            "application/xhtml+xml" => MimeType::Xhtml,
            "application/vnd.ms-excel" => MimeType::Xls,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => MimeType::Xlsx,
            "application/xml" => MimeType::Xml,
            "application/vnd.mozilla.xul+xml" => MimeType::Xul,
            "application/zip" => MimeType::Zip,
            "video/3gpp" => MimeType::ThreeGp,
            "video/3gpp2" => MimeType::ThreeG2,
            "application/x-7z-compressed" => MimeType::SevenZip,
            _ => return None,
        };
        Some(mime)
    }

    /// True if the top-level category is `text`.
    pub fn is_text(self) -> bool {
        self.as_str().starts_with("text/")
    }

    /// True if the top-level category is `image`.
    pub fn is_image(self) -> bool {
        self.as_str().starts_with("image/")
    }

    /// True if the top-level category is `audio`.
    pub fn is_audio(self) -> bool {
        self.as_str().starts_with("audio/")
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
