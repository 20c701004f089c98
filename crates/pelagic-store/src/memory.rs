use async_trait::async_trait;
use pelagic_core::{
    AssetUpload, Document, Permission, PermissionGrant, PluginStoreKey, Role, StoredAsset,
};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::state::StoreState;
use crate::store::ContentStore;

/// In-process store for tests and dry runs. Nothing outlives the value.
#[derive(Debug)]
pub struct MemoryStore {
    state: Mutex<StoreState>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty store with the built-in `authenticated` and `public` roles.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState::with_default_roles()),
        }
    }

    /// Empty store without any roles.
    pub fn without_roles() -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
        }
    }

    pub async fn documents(&self) -> Vec<Document> {
        self.state.lock().await.documents.clone()
    }

    pub async fn assets(&self) -> Vec<StoredAsset> {
        self.state.lock().await.assets.clone()
    }

    pub async fn permissions(&self) -> Vec<Permission> {
        self.state.lock().await.permissions.clone()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn create_document(&self, uid: &str, data: Value) -> Result<Document, StoreError> {
        self.state.lock().await.create_document(uid, data)
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
        Ok(vec![self.state.lock().await.add_asset(&upload)])
    }

    async fn find_role(&self, role_type: &str) -> Result<Option<Role>, StoreError> {
        Ok(self.state.lock().await.find_role(role_type))
    }

    async fn create_permission(&self, grant: PermissionGrant) -> Result<Permission, StoreError> {
        self.state.lock().await.create_permission(grant)
    }

    async fn plugin_get(&self, key: &PluginStoreKey) -> Result<Option<Value>, StoreError> {
        Ok(self.state.lock().await.plugin_get(key))
    }

    async fn plugin_set(&self, key: &PluginStoreKey, value: Value) -> Result<(), StoreError> {
        self.state.lock().await.plugin_set(key, value);
        Ok(())
    }

    async fn plugin_swap(
        &self,
        key: &PluginStoreKey,
        value: Value,
    ) -> Result<Option<Value>, StoreError> {
        Ok(self.state.lock().await.plugin_set(key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pelagic_core::{FileDescriptor, FileInfo, PUBLIC_ROLE};
    use serde_json::json;
    use std::path::PathBuf;

    fn upload(name: &str, file: &str, bytes: &[u8]) -> AssetUpload {
        AssetUpload {
            file: FileDescriptor {
                path: PathBuf::from("/tmp").join(file),
                original_file_name: file.to_string(),
                size: bytes.len() as u64,
                mime: "image/jpeg".into(),
            },
            bytes: bytes.to_vec(),
            info: FileInfo {
                alternative_text: format!("Uploaded media file: {}", name),
                caption: name.to_string(),
                name: name.to_string(),
            },
        }
    }

    #[tokio::test]
    async fn single_type_rejects_second_document() {
        let store = MemoryStore::new();
        let uid = "api::home-page.home-page";

        store.create_document(uid, json!({ "a": 1 })).await.unwrap();
        let err = store.create_document(uid, json!({ "a": 2 })).await.unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(store.documents().await.len(), 1);
    }

    #[tokio::test]
    async fn collection_type_accepts_many_documents() {
        let store = MemoryStore::new();
        let uid = "api::journal-article.journal-article";

        let first = store.create_document(uid, json!({ "slug": "a" })).await.unwrap();
        let second = store.create_document(uid, json!({ "slug": "b" })).await.unwrap();

        assert_ne!(first.document_id, second.document_id);
        let found = store.find_document(uid, &second.document_id).await.unwrap().unwrap();
        assert_eq!(found.attribute("slug"), Some("b"));
        assert!(store.find_document(uid, "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upload_then_find_by_name() {
        let store = MemoryStore::new();
        assert!(store.find_asset_by_name("hero-01").await.unwrap().is_none());

        let created = store.upload(upload("hero-01", "hero-01.jpg", b"abc")).await.unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].url, "/uploads/hero-01.jpg");
        assert_eq!(created[0].ext, ".jpg");
        assert_eq!(created[0].size, 3);
        assert_eq!(created[0].caption.as_deref(), Some("hero-01"));

        let found = store.find_asset_by_name("hero-01").await.unwrap().unwrap();
        assert_eq!(found, created[0]);
    }

    #[tokio::test]
    async fn default_roles_and_permissions() {
        let store = MemoryStore::new();
        let public = store.find_role(PUBLIC_ROLE).await.unwrap().unwrap();

        let grant = PermissionGrant::new("home-page", "find", public.id);
        store.create_permission(grant.clone()).await.unwrap();
        store.create_permission(grant).await.unwrap();

        let permissions = store.permissions().await;
        assert_eq!(permissions.len(), 2);
        assert!(permissions.iter().all(|p| p.action == "api::home-page.home-page.find"));
    }

    #[tokio::test]
    async fn permission_for_unknown_role_fails() {
        let store = MemoryStore::without_roles();
        assert!(store.find_role(PUBLIC_ROLE).await.unwrap().is_none());

        let err = store
            .create_permission(PermissionGrant::new("home-page", "find", 99))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::RoleNotFound(99)));
    }

    #[tokio::test]
    async fn plugin_swap_returns_previous_value() {
        let store = MemoryStore::new();
        let key = PluginStoreKey::new("test", "type", "setup", "initHasRun");

        assert_eq!(store.plugin_swap(&key, json!(true)).await.unwrap(), None);
        assert_eq!(store.plugin_swap(&key, json!(true)).await.unwrap(), Some(json!(true)));
        assert_eq!(store.plugin_get(&key).await.unwrap(), Some(json!(true)));
    }
}
