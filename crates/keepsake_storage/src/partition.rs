//! Date-partitioned placement of stored assets.
//!
//! Assets live at `{root}/{YYYY}/{MM}/{DD}/{id}{.ext}` and are served at
//! `{base}/uploads/{YYYY}/{MM}/{DD}/{id}{.ext}`.

use chrono::{DateTime, Datelike, Utc};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Public prefix the upload tree is served under.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Generate a fresh 32-character lowercase hex identifier.
///
/// ```
/// let id = keepsake_storage::generate_id();
/// assert_eq!(id.len(), 32);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Where a single asset lands, relative to the storage root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartitionedPath {
    inner_path: String,
    file_name: String,
}

impl PartitionedPath {
    /// Place `id` in the partition for `date`.
    ///
    /// `extension` is appended after a dot when present; an empty extension
    /// still yields a trailing dot, matching the name it was derived from.
    pub fn new(date: DateTime<Utc>, id: &str, extension: Option<&str>) -> Self {
        let inner_path = format!("/{}/{:02}/{:02}", date.year(), date.month(), date.day());
        let file_name = match extension {
            Some(ext) => format!("{}.{}", id, ext),
            None => id.to_string(),
        };
        Self {
            inner_path,
            file_name,
        }
    }

    /// `/{YYYY}/{MM}/{DD}`.
    pub fn inner_path(&self) -> &str {
        &self.inner_path
    }

    /// `{id}{.ext}`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Directory holding the asset under `root`.
    pub fn directory(&self, root: &Path) -> PathBuf {
        self.inner_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(root.to_path_buf(), |dir, segment| dir.join(segment))
    }

    /// Full on-disk path of the asset under `root`.
    pub fn file_path(&self, root: &Path) -> PathBuf {
        self.directory(root).join(&self.file_name)
    }

    /// Public URL of the asset under `base_url`.
    pub fn public_url(&self, base_url: &str) -> String {
        format!(
            "{}{}{}/{}",
            base_url.trim_end_matches('/'),
            PUBLIC_PREFIX,
            self.inner_path,
            self.file_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn may_third() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 3, 23, 59, 59).unwrap()
    }

    #[test]
    fn test_inner_path_is_zero_padded() {
        let placement = PartitionedPath::new(may_third(), "abc", Some("png"));
        assert_eq!(placement.inner_path(), "/2024/05/03");
        assert_eq!(placement.file_name(), "abc.png");
    }

    #[test]
    fn test_file_path_under_root() {
        let placement = PartitionedPath::new(may_third(), "abc", Some("png"));
        let path = placement.file_path(Path::new("/srv/uploads"));
        assert_eq!(path, PathBuf::from("/srv/uploads/2024/05/03/abc.png"));
    }

    #[test]
    fn test_public_url_trims_trailing_slash() {
        let placement = PartitionedPath::new(may_third(), "abc", Some("JPG"));
        assert_eq!(
            placement.public_url("https://app.example.com/"),
            "https://app.example.com/uploads/2024/05/03/abc.JPG"
        );
    }

    #[test]
    fn test_missing_extension_has_no_dot() {
        let placement = PartitionedPath::new(may_third(), "abc", None);
        assert_eq!(placement.file_name(), "abc");
    }

    #[test]
    fn test_generated_ids_differ() {
        let first = generate_id();
        let second = generate_id();
        assert_ne!(first, second);
        assert!(first.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }
}
