use pelagic_core::{AssetUpload, FileInfo, MediaRef, MediaValue, StoredAsset};
use pelagic_loader::AssetResolver;
use pelagic_naming::{asset_name, split_media_path, upload_alternative_text};
use pelagic_store::{ContentStore, StoreError};

use crate::error::SeedError;

/// Resolve a media reference to stored assets, uploading files the media
/// library does not know yet.
///
/// Entries are handled one at a time in input order, and the result keeps
/// that order. Exactly one asset collapses to [`MediaValue::One`]. The first
/// failure aborts; assets uploaded before it stay in the library.
pub async fn upload_media(
    store: &dyn ContentStore,
    resolver: &AssetResolver,
    media: &MediaRef,
) -> Result<MediaValue, SeedError> {
    let mut assets = Vec::new();
    for path in media.paths() {
        assets.push(find_or_upload(store, resolver, path).await?);
    }
    Ok(MediaValue::from_assets(assets))
}

/// Reuse the asset named after `path`'s file, or upload the file.
///
/// Assets are identified by file name without its final extension, so
/// `hero/a.jpg` and `other/a.png` are the same asset.
pub async fn find_or_upload(
    store: &dyn ContentStore,
    resolver: &AssetResolver,
    path: &str,
) -> Result<StoredAsset, SeedError> {
    let (_, file) = split_media_path(path);
    let name = asset_name(file);

    if let Some(existing) = store.find_asset_by_name(name).await? {
        tracing::info!(file, "file already exists");
        return Ok(existing);
    }

    let descriptor = resolver.resolve(path)?;
    let bytes = tokio::fs::read(&descriptor.path)
        .await
        .map_err(|source| SeedError::Io {
            path: descriptor.path.clone(),
            source,
        })?;

    let upload = AssetUpload {
        file: descriptor,
        bytes,
        info: FileInfo {
            alternative_text: upload_alternative_text(name),
            caption: name.to_string(),
            name: name.to_string(),
        },
    };

    let created = match store.upload(upload).await {
        Ok(created) => created,
        Err(source) => {
            tracing::error!(path, error = %source, "failed to upload");
            return Err(SeedError::Upload {
                name: name.to_string(),
                source,
            });
        }
    };

    match created.into_iter().next() {
        Some(asset) => {
            tracing::info!(file, "uploaded");
            Ok(asset)
        }
        None => Err(SeedError::Upload {
            name: name.to_string(),
            source: StoreError::Backend("upload returned no asset".to_string()),
        }),
    }
}
