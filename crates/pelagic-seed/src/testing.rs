//! Store wrappers and file helpers for the seed tests.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pelagic_core::{
    AssetUpload, Document, Permission, PermissionGrant, PluginStoreKey, Role, StoredAsset,
};
use pelagic_store::{ContentStore, MemoryStore, StoreError};
use serde_json::Value;

/// Write `bytes` to `root/path`, creating parent directories.
pub(crate) fn write_upload(root: &Path, path: &str, bytes: &[u8]) {
    let target = root.join(path);
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(target, bytes).unwrap();
}

/// A [`MemoryStore`] that counts calls and fails on demand.
#[derive(Debug, Default)]
pub(crate) struct CountingStore {
    pub(crate) inner: MemoryStore,
    uploads: AtomicUsize,
    permission_calls: AtomicUsize,
    fail_uploads: bool,
    create_error: Option<String>,
    failing_action: Option<String>,
}

impl CountingStore {
    pub(crate) fn with_inner(inner: MemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub(crate) fn failing_uploads() -> Self {
        Self {
            fail_uploads: true,
            ..Self::default()
        }
    }

    /// Every document creation fails with `message`.
    pub(crate) fn failing_create(message: &str) -> Self {
        Self {
            create_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Permission creation fails for grants with this action.
    pub(crate) fn failing_action(action: &str) -> Self {
        Self {
            failing_action: Some(action.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn uploads(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }

    pub(crate) fn permission_calls(&self) -> usize {
        self.permission_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for CountingStore {
    async fn create_document(&self, uid: &str, data: Value) -> Result<Document, StoreError> {
        if let Some(message) = &self.create_error {
            return Err(StoreError::Backend(message.clone()));
        }
        self.inner.create_document(uid, data).await
    }

    async fn find_document(
        &self,
        uid: &str,
        document_id: &str,
    ) -> Result<Option<Document>, StoreError> {
        self.inner.find_document(uid, document_id).await
    }

    async fn find_asset_by_name(&self, name: &str) -> Result<Option<StoredAsset>, StoreError> {
        self.inner.find_asset_by_name(name).await
    }

    async fn upload(&self, upload: AssetUpload) -> Result<Vec<StoredAsset>, StoreError> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        if self.fail_uploads {
            return Err(StoreError::Backend("upload rejected".to_string()));
        }
        self.inner.upload(upload).await
    }

    async fn find_role(&self, role_type: &str) -> Result<Option<Role>, StoreError> {
        self.inner.find_role(role_type).await
    }

    async fn create_permission(&self, grant: PermissionGrant) -> Result<Permission, StoreError> {
        self.permission_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_action.as_deref() == Some(grant.action.as_str()) {
            return Err(StoreError::Backend(format!("cannot grant {}", grant.action)));
        }
        self.inner.create_permission(grant).await
    }

    async fn plugin_get(&self, key: &PluginStoreKey) -> Result<Option<Value>, StoreError> {
        self.inner.plugin_get(key).await
    }

    async fn plugin_set(&self, key: &PluginStoreKey, value: Value) -> Result<(), StoreError> {
        self.inner.plugin_set(key, value).await
    }

    async fn plugin_swap(
        &self,
        key: &PluginStoreKey,
        value: Value,
    ) -> Result<Option<Value>, StoreError> {
        self.inner.plugin_swap(key, value).await
    }
}
