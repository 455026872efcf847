//! File extension resolution.

use std::path::Path;

/// Preferred extensions for types where `mime_guess` lists several.
const PREFERRED: &[(&str, &str)] = &[
    ("image/jpeg", "jpeg"),
    ("image/pjpeg", "jpeg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("image/avif", "avif"),
    ("image/svg+xml", "svg"),
    ("image/bmp", "bmp"),
    ("image/tiff", "tif"),
    ("image/x-icon", "ico"),
    ("image/vnd.microsoft.icon", "ico"),
    ("image/heic", "heic"),
    ("video/mp4", "mp4"),
    ("video/webm", "webm"),
    ("video/quicktime", "mov"),
    ("audio/mpeg", "mp3"),
    ("application/pdf", "pdf"),
];

/// Map a `Content-Type` header value to a file extension.
///
/// Parameters such as `; charset=binary` are ignored and matching is
/// case-insensitive. Returns `None` for absent or unknown types.
///
/// ```
/// use keepsake_storage::extension_for_content_type;
///
/// assert_eq!(extension_for_content_type(Some("image/PNG; q=1")), Some("png"));
/// assert_eq!(extension_for_content_type(Some("application/x-unknown-thing")), None);
/// assert_eq!(extension_for_content_type(None), None);
/// ```
pub fn extension_for_content_type(content_type: Option<&str>) -> Option<&'static str> {
    let essence = content_type?
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence.is_empty() {
        return None;
    }

    if let Some((_, ext)) = PREFERRED.iter().find(|(mime, _)| *mime == essence) {
        return Some(ext);
    }

    mime_guess::get_mime_extensions_str(&essence).and_then(|exts| exts.first().copied())
}

/// Extension of an uploaded file's original name, case preserved.
///
/// Only the final component is considered. Dotfiles without a further dot
/// have no extension; a trailing dot yields an empty extension.
///
/// ```
/// use keepsake_storage::extension_of_filename;
///
/// assert_eq!(extension_of_filename("photo.JPG"), Some("JPG"));
/// assert_eq!(extension_of_filename("archive.tar.gz"), Some("gz"));
/// assert_eq!(extension_of_filename(".bashrc"), None);
/// assert_eq!(extension_of_filename("README"), None);
/// ```
pub fn extension_of_filename(original_name: &str) -> Option<&str> {
    Path::new(original_name).extension()?.to_str()
}
