use std::fs;
use std::path::{Path, PathBuf};

use pelagic_core::FileDescriptor;
use pelagic_naming::{file_extension, split_media_path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("stat {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Extension -> MIME type. Lookup is case-insensitive.
const MIME_TYPES: &[(&str, &str)] = &[
    ("avif", "image/avif"),
    ("bmp", "image/bmp"),
    ("gif", "image/gif"),
    ("ico", "image/vnd.microsoft.icon"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("png", "image/png"),
    ("svg", "image/svg+xml"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("webp", "image/webp"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("mp4", "video/mp4"),
    ("mpeg", "video/mpeg"),
    ("ogv", "video/ogg"),
    ("webm", "video/webm"),
    ("mp3", "audio/mpeg"),
    ("ogg", "audio/ogg"),
    ("wav", "audio/wav"),
    ("csv", "text/csv"),
    ("json", "application/json"),
    ("md", "text/markdown"),
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("zip", "application/zip"),
];

/// MIME type for a file extension; empty for unknown extensions.
pub fn mime_for_extension(ext: &str) -> &'static str {
    MIME_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, mime)| *mime)
        .unwrap_or("")
}

/// Resolves fixture media paths against the uploads directory.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of a fixture path: `<root>/<dir>/<file>`. Does not touch the disk.
    pub fn locate(&self, media_path: &str) -> PathBuf {
        let (dir, file) = split_media_path(media_path);
        let base = if dir.is_empty() {
            self.root.clone()
        } else {
            self.root.join(dir)
        };
        base.join(file)
    }

    /// Resolve a fixture path to a descriptor of the file on disk.
    pub fn resolve(&self, media_path: &str) -> Result<FileDescriptor, ResolveError> {
        let located = self.locate(media_path);
        let path = std::path::absolute(&located).unwrap_or(located);

        let metadata = match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => return Err(ResolveError::NotFound(path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ResolveError::NotFound(path));
            }
            Err(source) => return Err(ResolveError::Io { path, source }),
        };

        let (_, file) = split_media_path(media_path);
        let mime = file_extension(file).map(mime_for_extension).unwrap_or("");

        Ok(FileDescriptor {
            original_file_name: file.to_string(),
            size: metadata.len(),
            mime: mime.to_string(),
            path,
        })
    }
}
