//! Naming rules shared by the pelagic seed crates.
//!
//! Media paths in the fixture, asset names in the media library and content-type
//! UIDs all follow small string conventions. They live here so the loader, the
//! stores and the seed engine agree on them. No dependencies.

// ============================================================================
// Media Paths
// ============================================================================

/// Split a fixture media path into `(directory, file)` at the last `/`.
///
/// A path without a separator is a file at the asset root, so the directory
/// is empty.
///
/// # Examples
/// ```
/// use pelagic_naming::split_media_path;
///
/// assert_eq!(split_media_path("hero/hero-01.jpg"), ("hero", "hero-01.jpg"));
/// assert_eq!(split_media_path("a/b/c.png"), ("a/b", "c.png"));
/// assert_eq!(split_media_path("logo.svg"), ("", "logo.svg"));
/// ```
pub fn split_media_path(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}

/// Final extension of a file name, without the dot.
///
/// Returns `None` when the name has no dot, or only a leading one
/// (`.gitkeep`).
pub fn file_extension(file: &str) -> Option<&str> {
    match file.rfind('.') {
        Some(0) | None => None,
        Some(idx) => Some(&file[idx + 1..]),
    }
}

/// Media library name for a file: the file name without its final extension.
///
/// # Examples
/// ```
/// use pelagic_naming::asset_name;
///
/// assert_eq!(asset_name("hero-01.jpg"), "hero-01");
/// assert_eq!(asset_name("archive.tar.gz"), "archive.tar");
/// assert_eq!(asset_name("README"), "README");
/// ```
pub fn asset_name(file: &str) -> &str {
    match file.rfind('.') {
        Some(0) | None => file,
        Some(idx) => &file[..idx],
    }
}

/// Alternative text attached to media uploaded by the seeder.
pub fn upload_alternative_text(name: &str) -> String {
    format!("Uploaded media file: {}", name)
}

/// File name under which an uploaded asset is stored: `{name}{ext}`, where
/// `ext` keeps its leading dot (`.jpg`) or is empty.
pub fn stored_file_name(name: &str, ext: &str) -> String {
    format!("{}{}", name, ext)
}

// ============================================================================
// Content Types
// ============================================================================

/// Content type holding the homepage.
pub const HOME_PAGE: &str = "home-page";
/// Content type holding site-wide metadata.
pub const GLOBAL_SETTING: &str = "global-setting";
/// Collection of journal articles.
pub const JOURNAL_ARTICLE: &str = "journal-article";
/// Journal landing page.
pub const JOURNAL_PAGE: &str = "journal-page";

/// Content types that hold at most one document.
pub const SINGLE_TYPES: &[&str] = &[HOME_PAGE, GLOBAL_SETTING, JOURNAL_PAGE];

/// Build the API UID of a content type.
/// Format: api::{name}.{name}
pub fn content_type_uid(name: &str) -> String {
    format!("api::{}.{}", name, name)
}

/// Recover the content type name from an API UID built by [`content_type_uid`].
///
/// # Examples
/// ```
/// use pelagic_naming::content_type_name;
///
/// assert_eq!(content_type_name("api::home-page.home-page"), Some("home-page"));
/// assert_eq!(content_type_name("plugin::upload.file"), None);
/// ```
pub fn content_type_name(uid: &str) -> Option<&str> {
    let rest = uid.strip_prefix("api::")?;
    let (api, name) = rest.split_once('.')?;
    (api == name && !name.is_empty()).then_some(name)
}

/// Returns true when the UID names a single-document content type.
pub fn is_single_type(uid: &str) -> bool {
    content_type_name(uid).is_some_and(|name| SINGLE_TYPES.contains(&name))
}

/// Build a permission action for a content type controller.
/// Format: api::{content_type}.{content_type}.{action}
pub fn permission_action(content_type: &str, action: &str) -> String {
    format!("{}.{}", content_type_uid(content_type), action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // ========================================================================
    // Media Path Tests
    // ========================================================================

    #[rstest]
    #[case("hero/hero-01.jpg", "hero", "hero-01.jpg")]
    #[case("videos/promo/milan.mp4", "videos/promo", "milan.mp4")]
    #[case("share.png", "", "share.png")]
    #[case("/root.png", "", "root.png")]
    #[case("dir/", "dir", "")]
    fn test_split_media_path(#[case] path: &str, #[case] dir: &str, #[case] file: &str) {
        assert_eq!(split_media_path(path), (dir, file));
    }

    #[test]
    fn test_split_media_path_without_separator_has_empty_dir() {
        for path in ["a.jpg", "README", "no-extension", ""] {
            let (dir, file) = split_media_path(path);
            assert_eq!(dir, "");
            assert_eq!(file, path);
        }
    }

    #[rstest]
    #[case("hero-01.jpg", Some("jpg"))]
    #[case("archive.tar.gz", Some("gz"))]
    #[case("README", None)]
    #[case(".gitkeep", None)]
    #[case("trailing.", Some(""))]
    fn test_file_extension(#[case] file: &str, #[case] expected: Option<&str>) {
        assert_eq!(file_extension(file), expected);
    }

    #[rstest]
    #[case("hero-01.jpg", "hero-01")]
    #[case("archive.tar.gz", "archive.tar")]
    #[case("README", "README")]
    #[case(".gitkeep", ".gitkeep")]
    fn test_asset_name(#[case] file: &str, #[case] expected: &str) {
        assert_eq!(asset_name(file), expected);
    }

    #[test]
    fn test_upload_alternative_text() {
        assert_eq!(
            upload_alternative_text("hero-01"),
            "Uploaded media file: hero-01"
        );
    }

    #[test]
    fn test_stored_file_name() {
        assert_eq!(stored_file_name("hero-01", ".jpg"), "hero-01.jpg");
        assert_eq!(stored_file_name("README", ""), "README");
    }

    // ========================================================================
    // Content Type Tests
    // ========================================================================

    #[test]
    fn test_content_type_uid_round_trips_name() {
        let uid = content_type_uid("journal-article");
        assert_eq!(uid, "api::journal-article.journal-article");
        assert_eq!(content_type_name(&uid), Some("journal-article"));
    }

    #[rstest]
    #[case("plugin::upload.file")]
    #[case("api::home-page.other")]
    #[case("api::home-page")]
    #[case("api::.")]
    fn test_content_type_name_rejects_foreign_uids(#[case] uid: &str) {
        assert_eq!(content_type_name(uid), None);
    }

    #[test]
    fn test_is_single_type() {
        assert!(is_single_type("api::home-page.home-page"));
        assert!(is_single_type("api::global-setting.global-setting"));
        assert!(is_single_type("api::journal-page.journal-page"));
        assert!(!is_single_type("api::journal-article.journal-article"));
        assert!(!is_single_type("home-page"));
    }

    #[test]
    fn test_permission_action() {
        assert_eq!(
            permission_action("home-page", "findOne"),
            "api::home-page.home-page.findOne"
        );
    }
}
