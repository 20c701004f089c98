use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Media reference as written in the fixture: one path, or a list of paths
/// relative to the uploads directory. Null list entries are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum MediaRef {
    One(String),
    Many(Vec<Option<String>>),
}

impl MediaRef {
    /// Usable paths in order, skipping null and empty entries.
    pub fn paths(&self) -> Vec<&str> {
        match self {
            MediaRef::One(path) => [path.as_str()]
                .into_iter()
                .filter(|p| !p.is_empty())
                .collect(),
            MediaRef::Many(paths) => paths
                .iter()
                .filter_map(|p| p.as_deref())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// True for an empty string or an empty list. A list holding only nulls
    /// is not blank.
    pub fn is_blank(&self) -> bool {
        match self {
            MediaRef::One(path) => path.is_empty(),
            MediaRef::Many(paths) => paths.is_empty(),
        }
    }
}

impl From<&str> for MediaRef {
    fn from(path: &str) -> Self {
        MediaRef::One(path.to_string())
    }
}

impl From<Vec<&str>> for MediaRef {
    fn from(paths: Vec<&str>) -> Self {
        MediaRef::Many(paths.into_iter().map(|p| Some(p.to_string())).collect())
    }
}

/// A file persisted in the media library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAsset {
    pub id: u64,
    pub document_id: String,
    /// Library name; the seeder uses it as the asset identity.
    pub name: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    /// Extension with its leading dot, or empty.
    pub ext: String,
    pub mime: String,
    /// Size in bytes.
    pub size: u64,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Media reference after upload: a single asset, or assets in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaValue {
    One(StoredAsset),
    Many(Vec<StoredAsset>),
}

impl MediaValue {
    /// Exactly one asset collapses to [`MediaValue::One`]; anything else stays a list.
    pub fn from_assets(mut assets: Vec<StoredAsset>) -> Self {
        if assets.len() == 1 {
            MediaValue::One(assets.remove(0))
        } else {
            MediaValue::Many(assets)
        }
    }

    pub fn assets(&self) -> &[StoredAsset] {
        match self {
            MediaValue::One(asset) => std::slice::from_ref(asset),
            MediaValue::Many(assets) => assets,
        }
    }
}

/// Metadata sent along with uploaded bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub alternative_text: String,
    pub caption: String,
    pub name: String,
}

/// A local media file resolved from a fixture path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub path: PathBuf,
    pub original_file_name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type, empty when the extension is unknown.
    pub mime: String,
}

impl FileDescriptor {
    /// Extension with its leading dot (`.jpg`), or empty.
    pub fn ext(&self) -> String {
        pelagic_naming::file_extension(&self.original_file_name)
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default()
    }
}

/// One upload request to the media library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUpload {
    pub file: FileDescriptor,
    pub bytes: Vec<u8>,
    pub info: FileInfo,
}
