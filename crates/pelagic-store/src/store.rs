use async_trait::async_trait;
use pelagic_core::{
    AssetUpload, Document, Permission, PermissionGrant, PluginStoreKey, Role, StoredAsset,
};
use serde_json::Value;

use crate::error::StoreError;

/// Capabilities of the content platform the seeder talks to.
///
/// The seeder never reaches the platform any other way, so tests and dry
/// runs swap in [`crate::MemoryStore`].
#[async_trait]
pub trait ContentStore: Send + Sync {
    // ── Documents ──

    /// Create a document of a content type. Single types that already hold a
    /// document fail with [`StoreError::AlreadyExists`].
    async fn create_document(&self, uid: &str, data: Value) -> Result<Document, StoreError>;
    async fn find_document(
        &self,
        uid: &str,
        document_id: &str,
    ) -> Result<Option<Document>, StoreError>;

    // ── Media library ──

    async fn find_asset_by_name(&self, name: &str) -> Result<Option<StoredAsset>, StoreError>;
    /// Store uploaded bytes. Returns the created assets.
    async fn upload(&self, upload: AssetUpload) -> Result<Vec<StoredAsset>, StoreError>;

    // ── Roles and permissions ──

    async fn find_role(&self, role_type: &str) -> Result<Option<Role>, StoreError>;
    /// Create a grant. Identical grants are not deduplicated.
    async fn create_permission(&self, grant: PermissionGrant) -> Result<Permission, StoreError>;

    // ── Plugin key-value store ──

    async fn plugin_get(&self, key: &PluginStoreKey) -> Result<Option<Value>, StoreError>;
    async fn plugin_set(&self, key: &PluginStoreKey, value: Value) -> Result<(), StoreError>;

    /// Write `value` and return what was stored before.
    ///
    /// The default is a read followed by a write, so two callers can both
    /// observe the old value. Stores that can do better override it.
    async fn plugin_swap(
        &self,
        key: &PluginStoreKey,
        value: Value,
    ) -> Result<Option<Value>, StoreError> {
        let previous = self.plugin_get(key).await?;
        self.plugin_set(key, value).await?;
        Ok(previous)
    }
}
