use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pelagic_core::{
    AssetUpload, Document, Permission, PermissionGrant, PluginStoreKey, Role, StoredAsset,
};
use pelagic_naming::stored_file_name;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::state::StoreState;
use crate::store::ContentStore;

/// Snapshot file inside the store directory.
pub const STATE_FILE_NAME: &str = "store.json";
/// Directory inside the store directory that receives uploaded bytes.
pub const UPLOADS_DIR_NAME: &str = "uploads";

/// Directory-backed store.
///
/// Layout:
/// ```text
/// {dir}/store.json      documents, assets, roles, permissions, plugin values
/// {dir}/uploads/{name}{ext}
/// ```
/// The snapshot is rewritten after every mutation.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    state: Mutex<StoreState>,
}

impl FileStore {
    /// Open the store at `dir`, creating it with the built-in roles when no
    /// snapshot exists yet.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(dir.join(UPLOADS_DIR_NAME)).await?;

        let state_path = dir.join(STATE_FILE_NAME);
        let state = if tokio::fs::try_exists(&state_path).await? {
            let content = tokio::fs::read(&state_path).await?;
            serde_json::from_slice(&content)?
        } else {
            let state = StoreState::with_default_roles();
            write_snapshot(&dir, &state).await?;
            tracing::info!(dir = %dir.display(), "created content store");
            state
        };

        Ok(Self {
            dir,
            state: Mutex::new(state),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.dir.join(UPLOADS_DIR_NAME)
    }

    /// Counts of stored records, for status reports.
    pub async fn summary(&self) -> StoreSummary {
        let state = self.state.lock().await;
        StoreSummary {
            documents: state.documents.len(),
            assets: state.assets.len(),
            permissions: state.permissions.len(),
        }
    }

    /// Run a mutation on a copy of the state and persist it. The copy
    /// replaces the live state only once its snapshot is on disk, so a failed
    /// mutation or write leaves both unchanged.
    async fn mutate<T>(
        &self,
        f: impl FnOnce(&mut StoreState) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        let out = f(&mut next)?;
        write_snapshot(&self.dir, &next).await?;
        *state = next;
        Ok(out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSummary {
    pub documents: usize,
    pub assets: usize,
    pub permissions: usize,
}

async fn write_snapshot(dir: &Path, state: &StoreState) -> Result<(), StoreError> {
    let content = serde_json::to_vec_pretty(state)?;
    let tmp = dir.join(format!("{}.tmp", STATE_FILE_NAME));
    tokio::fs::write(&tmp, content).await?;
    tokio::fs::rename(&tmp, dir.join(STATE_FILE_NAME)).await?;
    Ok(())
}

#[async_trait]
impl ContentStore for FileStore {
    async fn create_document(&self, uid: &str, data: Value) -> Result<Document, StoreError> {
        let document = self
            .mutate(|state| state.create_document(uid, data))
            .await?;
        tracing::debug!(uid, document_id = %document.document_id, "created document");
        Ok(document)
    }

    async fn find_document(
        &self,
        uid: &str,
        document_id: &str,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self.state.lock().await.find_document(uid, document_id))
    }

    async fn find_asset_by_name(&self, name: &str) -> Result<Option<StoredAsset>, StoreError> {
        Ok(self.state.lock().await.find_asset_by_name(name))
    }

    async fn upload(&self, upload: AssetUpload) -> Result<Vec<StoredAsset>, StoreError> {
        let target = self
            .uploads_dir()
            .join(stored_file_name(&upload.info.name, &upload.file.ext()));
        tokio::fs::write(&target, &upload.bytes).await?;

        let asset = self.mutate(|state| Ok(state.add_asset(&upload))).await?;
        tracing::debug!(name = %asset.name, path = %target.display(), "stored upload");
        Ok(vec![asset])
    }

    async fn find_role(&self, role_type: &str) -> Result<Option<Role>, StoreError> {
        Ok(self.state.lock().await.find_role(role_type))
    }

    async fn create_permission(&self, grant: PermissionGrant) -> Result<Permission, StoreError> {
        self.mutate(|state| state.create_permission(grant)).await
    }

    async fn plugin_get(&self, key: &PluginStoreKey) -> Result<Option<Value>, StoreError> {
        Ok(self.state.lock().await.plugin_get(key))
    }

    async fn plugin_set(&self, key: &PluginStoreKey, value: Value) -> Result<(), StoreError> {
        self.mutate(|state| {
            state.plugin_set(key, value);
            Ok(())
        })
        .await
    }

    async fn plugin_swap(
        &self,
        key: &PluginStoreKey,
        value: Value,
    ) -> Result<Option<Value>, StoreError> {
        self.mutate(|state| Ok(state.plugin_set(key, value))).await
    }
}
