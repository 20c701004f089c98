use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pelagic_naming::{GLOBAL_SETTING, HOME_PAGE, JOURNAL_ARTICLE, JOURNAL_PAGE};
use serde::{Deserialize, Serialize};

use crate::file_format::FileFormat;
use crate::middleware::MiddlewareStack;

/// File name of the seed configuration at the project root.
pub const CONFIG_FILE_NAME: &str = "pelagic.json";

/// Default public permissions: read access to every content type the
/// front-end renders.
pub fn default_public_permissions() -> BTreeMap<String, Vec<String>> {
    [HOME_PAGE, GLOBAL_SETTING, JOURNAL_ARTICLE, JOURNAL_PAGE]
        .into_iter()
        .map(|ct| (ct.to_string(), vec!["find".to_string(), "findOne".to_string()]))
        .collect()
}

fn default_fixture_path() -> PathBuf {
    PathBuf::from("data/data.json")
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("data/uploads")
}

fn default_store_dir() -> PathBuf {
    PathBuf::from(".pelagic")
}

fn default_environment() -> String {
    "development".to_string()
}

/// Top-level seed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SeedConfig {
    /// Seed fixture document.
    #[serde(default = "default_fixture_path")]
    pub fixture_path: PathBuf,
    /// Fixture format. Guessed from the fixture extension when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture_format: Option<FileFormat>,
    /// Root directory that fixture media paths are relative to.
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,
    /// Directory of the local content store.
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,
    /// Environment name; scopes the run-once flag.
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Content type -> actions granted to the public role.
    #[serde(default = "default_public_permissions")]
    pub public_permissions: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub middleware: MiddlewareStack,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            fixture_path: default_fixture_path(),
            fixture_format: None,
            uploads_dir: default_uploads_dir(),
            store_dir: default_store_dir(),
            environment: default_environment(),
            public_permissions: default_public_permissions(),
            middleware: MiddlewareStack::default(),
        }
    }
}

impl SeedConfig {
    /// Path of the seed fixture.
    pub fn fixture_path(&self) -> &Path {
        &self.fixture_path
    }

    /// Fixture format: explicit setting first, then the file extension, then JSON.
    pub fn fixture_format(&self) -> FileFormat {
        self.fixture_format
            .or_else(|| FileFormat::from_path(&self.fixture_path))
            .unwrap_or_default()
    }

    /// Root of the fixture's media files.
    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    /// Directory of the local content store.
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Environment the run-once flag is scoped to.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Actions granted to the public role, per content type.
    pub fn public_permissions(&self) -> &BTreeMap<String, Vec<String>> {
        &self.public_permissions
    }

    /// HTTP middleware chain.
    pub fn middleware(&self) -> &MiddlewareStack {
        &self.middleware
    }

    /// Copy of this config with relative paths anchored at `root`.
    pub fn rooted_at(&self, root: &Path) -> Self {
        let anchor = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                root.join(p)
            }
        };
        Self {
            fixture_path: anchor(&self.fixture_path),
            uploads_dir: anchor(&self.uploads_dir),
            store_dir: anchor(&self.store_dir),
            ..self.clone()
        }
    }
}
