use std::path::PathBuf;

use pelagic_loader::ResolveError;
use pelagic_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to upload {name}: {source}")]
    Upload {
        name: String,
        #[source]
        source: StoreError,
    },
    #[error("failed to create {uid} entry: {source}")]
    DocumentCreate {
        uid: String,
        #[source]
        source: StoreError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SeedError {
    /// Returns true when the store refused a document because one already
    /// exists. Matched on the message, since stores word it themselves.
    pub fn is_already_exists(&self) -> bool {
        match self {
            SeedError::DocumentCreate { source, .. } => {
                source.to_string().contains("already exists")
            }
            _ => false,
        }
    }
}

impl From<ResolveError> for SeedError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound(path) => SeedError::NotFound { path },
            ResolveError::Io { path, source } => SeedError::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_exists_is_matched_on_message() {
        let err = SeedError::DocumentCreate {
            uid: "api::home-page.home-page".into(),
            source: StoreError::Backend("home page already exists".into()),
        };
        assert!(err.is_already_exists());

        let err = SeedError::DocumentCreate {
            uid: "api::home-page.home-page".into(),
            source: StoreError::Backend("connection refused".into()),
        };
        assert!(!err.is_already_exists());

        let err = SeedError::Store(StoreError::AlreadyExists("x".into()));
        assert!(!err.is_already_exists());
    }

    #[test]
    fn resolve_errors_map_to_seed_errors() {
        let err: SeedError = ResolveError::NotFound(PathBuf::from("/data/uploads/a.jpg")).into();
        assert!(matches!(err, SeedError::NotFound { ref path } if path.ends_with("a.jpg")));
        assert_eq!(err.to_string(), "file not found: /data/uploads/a.jpg");
    }
}
