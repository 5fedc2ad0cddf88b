//! File-extension mappings for the MIME registry.

use super::MimeType;

impl MimeType {
    /// Looks up a MIME type by file extension (lower-case, no leading dot).
    pub fn from_extension(ext: &str) -> Option<MimeType> {
        let mime = match ext {
            "3g2" => MimeType::ThreeG2,
            "3gp" => MimeType::ThreeGp,
            "7z" => MimeType::SevenZip,
            "aac" => MimeType::Aac,
            "abw" => MimeType::Abiword,
            "apng" => MimeType::Apng,
            "arc" => MimeType::Freearc,
            "avif" => MimeType::Avif,
            "avi" => MimeType::Avi,
            "azw" => MimeType::AmazonEbook,
            "bin" => MimeType::OctetStream,
            "bmp" => MimeType::Bmp,
            "bz" => MimeType::Bzip,
            "bz2" => MimeType::Bzip2,
            "cda" => MimeType::Cda,
            "csh" => MimeType::Csh,
            "css" => MimeType::Css,
            "csv" => MimeType::Csv,
            "doc" => MimeType::Doc,
            "docx" => MimeType::Docx,
            "eot" => MimeType::Eot,
            "epub" => MimeType::Epub,
            "gz" => MimeType::Gzip,
            "gif" => MimeType::Gif,
            "htm" | "html" => MimeType::Html,
            "ico" => MimeType::Ico,
            "ics" => MimeType::Ics,
            "jar" => MimeType::Jar,
            "jpeg" | "jpg" => MimeType::Jpeg,
            "js" => MimeType::Javascript,
            "json" => MimeType::Json,
            "jsonld" => MimeType::JsonLd,
            "md" => MimeType::Markdown,
            "mid" | "midi" => MimeType::Midi,
            "mjs" => MimeType::JavascriptModule,
            "mp3" => MimeType::Mp3,
            "mp4" => MimeType::Mp4,
            "mpeg" => MimeType::Mpeg,
            "mpkg" => MimeType::AppleInstaller,
            "odp" => MimeType::Odp,
            "ods" => MimeType::Ods,
            "odt" => MimeType::Odt,
            "oga" => MimeType::OggAudio,
            "ogv" => MimeType::OggVideo,
            "ogx" => MimeType::Ogg,
            "opus" => MimeType::Opus,
            "otf" => MimeType::Otf,
            "png" => MimeType::Png,
            "pdf" => MimeType::Pdf,
            "php" => MimeType::Php,
            "ppt" => MimeType::Ppt,
            "pptx" => MimeType::Pptx,
            "rar" => MimeType::Rar,
            "rtf" => MimeType::Rtf,
            "sh" => MimeType::Sh,
            "svg" => MimeType::Svg,
            "tar" => MimeType::Tar,
            "tif" | "tiff" => MimeType::Tiff,
            "ts" => MimeType::MpegTs,
            "ttf" => MimeType::Ttf,
            "txt" => MimeType::PlainText,
            "vsd" => MimeType::Visio,
            "wav" => MimeType::Wav,
            "weba" => MimeType::WebmAudio,
            "webm" => MimeType::WebmVideo,
            "webmanifest" => MimeType::WebManifest,
            "webp" => MimeType::Webp,
            "woff" => MimeType::Woff,
            "woff2" => MimeType::Woff2,
            "xhtml" => MimeType::Xhtml,
            "xls" => MimeType::Xls,
            "xlsx" => MimeType::Xlsx,
            "xml" => MimeType::Xml,
            "xul" => MimeType::Xul,
            "zip" => MimeType::Zip,
            _ => return None,
        };
        Some(mime)
    }

    /// Preferred file extension for this type (no leading dot).
    ///
    /// Total: every registry member has one. Types with several extensions
    /// (`jpeg`/`jpg`, `htm`/`html`, ...) return the common one.
    pub fn extension(self) -> &'static str {
        match self {
            MimeType::Aac => "aac",
            MimeType::Abiword => "abw",
            MimeType::Apng => "apng",
            MimeType::Freearc => "arc",
            MimeType::Avif => "avif",
            MimeType::Avi => "avi",
            MimeType::AmazonEbook => "azw",
            MimeType::OctetStream => "bin",
            MimeType::Bmp => "bmp",
            MimeType::Bzip => "bz",
            MimeType::Bzip2 => "bz2",
            MimeType::Cda => "cda",
            MimeType::Csh => "csh",
            MimeType::Css => "css",
            MimeType::Csv => "csv",
            MimeType::Doc => "doc",
            MimeType::Docx => "docx",
            MimeType::Eot => "eot",
            MimeType::Epub => "epub",
            MimeType::Gzip => "gz",
            MimeType::Gif => "gif",
            MimeType::Html => "html",
            MimeType::Ico => "ico",
            MimeType::Ics => "ics",
            MimeType::Jar => "jar",
            MimeType::Jpeg => "jpg",
            MimeType::Javascript => "js",
            MimeType::Json => "json",
            MimeType::JsonLd => "jsonld",
            MimeType::Markdown => "md",
            MimeType::Midi => "mid",
            MimeType::JavascriptModule => "mjs",
            MimeType::Mp3 => "mp3",
            MimeType::Mp4 => "mp4",
            MimeType::Mpeg => "mpeg",
            MimeType::AppleInstaller => "mpkg",
            MimeType::Odp => "odp",
            MimeType::Ods => "ods",
            MimeType::Odt => "odt",
            MimeType::OggAudio => "oga",
            MimeType::OggVideo => "ogv",
            MimeType::Ogg => "ogx",
            MimeType::Opus => "opus",
            MimeType::Otf => "otf",
            MimeType::Png => "png",
            MimeType::Pdf => "pdf",
            MimeType::Php => "php",
            MimeType::Ppt => "ppt",
            MimeType::Pptx => "pptx",
            MimeType::Rar => "rar",
            MimeType::Rtf => "rtf",
            MimeType::Sh => "sh",
            MimeType::Svg => "svg",
            MimeType::Tar => "tar",
            MimeType::Tiff => "tiff",
            MimeType::MpegTs => "ts",
            MimeType::Ttf => "ttf",
            MimeType::PlainText => "txt",
            MimeType::Visio => "vsd",
            MimeType::Wav => "wav",
            MimeType::WebmAudio => "weba",
            MimeType::WebmVideo => "webm",
            MimeType::WebManifest => "webmanifest",
            MimeType::Webp => "webp",
            MimeType::Woff => "woff",
            MimeType::Woff2 => "woff2",
            MimeType::Xhtml => "xhtml",
            MimeType::Xls => "xls",
            MimeType::Xlsx => "xlsx",
            MimeType::Xml => "xml",
            MimeType::Xul => "xul",
            MimeType::Zip => "zip",
            MimeType::ThreeGp => "3gp",
            MimeType::ThreeG2 => "3g2",
            MimeType::SevenZip => "7z",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_extension_known() {
        assert_eq!(MimeType::from_extension("png"), Some(MimeType::Png));
        assert_eq!(MimeType::from_extension("txt"), Some(MimeType::PlainText));
        assert_eq!(MimeType::from_extension("jpg"), Some(MimeType::Jpeg));
        assert_eq!(MimeType::from_extension("jpeg"), Some(MimeType::Jpeg));
    }

    #[test]
    fn from_extension_unknown() {
        assert_eq!(MimeType::from_extension("exe"), None);
        assert_eq!(MimeType::from_extension(""), None);
        // No leading dot, no upper case.
        assert_eq!(MimeType::from_extension(".png"), None);
        assert_eq!(MimeType::from_extension("PNG"), None);
    }

    #[test]
    fn aliases_keep_their_own_extensions() {
        assert_eq!(MimeType::from_extension("opus"), Some(MimeType::Opus));
        assert_eq!(MimeType::from_extension("mjs"), Some(MimeType::JavascriptModule));
        assert_eq!(MimeType::Opus.extension(), "opus");
        assert_eq!(MimeType::OggAudio.extension(), "oga");
    }

    #[test]
    fn extension_round_trip() {
        for mime in [
            MimeType::Png,
            MimeType::PlainText,
            MimeType::Mp3,
            MimeType::SevenZip,
            MimeType::Xlsx,
        ] {
            assert_eq!(MimeType::from_extension(mime.extension()), Some(mime));
        }
    }
}
