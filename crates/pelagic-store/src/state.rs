use std::collections::BTreeMap;

use chrono::Utc;
use pelagic_core::{
    AUTHENTICATED_ROLE, AssetUpload, Document, PUBLIC_ROLE, Permission, PermissionGrant,
    PluginStoreKey, Role, StoredAsset,
};
use pelagic_naming::{is_single_type, stored_file_name};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::StoreError;

/// Everything a bundled store persists. Both stores run the same operations
/// on it under their own lock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoreState {
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    pub(crate) documents: Vec<Document>,
    #[serde(default)]
    pub(crate) assets: Vec<StoredAsset>,
    #[serde(default)]
    pub(crate) roles: Vec<Role>,
    #[serde(default)]
    pub(crate) permissions: Vec<Permission>,
    #[serde(default)]
    pub(crate) plugin: BTreeMap<String, Value>,
}

impl StoreState {
    /// Fresh state with the platform's built-in roles.
    pub(crate) fn with_default_roles() -> Self {
        let mut state = Self::default();
        for (name, role_type) in [
            ("Authenticated", AUTHENTICATED_ROLE),
            ("Public", PUBLIC_ROLE),
        ] {
            let id = state.allocate_id();
            state.roles.push(Role {
                id,
                name: name.to_string(),
                role_type: role_type.to_string(),
            });
        }
        state
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub(crate) fn create_document(
        &mut self,
        uid: &str,
        data: Value,
    ) -> Result<Document, StoreError> {
        if is_single_type(uid) && self.documents.iter().any(|d| d.uid == uid) {
            return Err(StoreError::AlreadyExists(uid.to_string()));
        }
        let document = Document {
            id: self.allocate_id(),
            document_id: Uuid::new_v4().simple().to_string(),
            uid: uid.to_string(),
            data,
            created_at: Utc::now(),
        };
        self.documents.push(document.clone());
        Ok(document)
    }

    pub(crate) fn find_document(&self, uid: &str, document_id: &str) -> Option<Document> {
        self.documents
            .iter()
            .find(|d| d.uid == uid && d.document_id == document_id)
            .cloned()
    }

    pub(crate) fn find_asset_by_name(&self, name: &str) -> Option<StoredAsset> {
        self.assets.iter().find(|a| a.name == name).cloned()
    }

    /// Record an uploaded file. The caller stores the bytes, if at all.
    pub(crate) fn add_asset(&mut self, upload: &AssetUpload) -> StoredAsset {
        let ext = upload.file.ext();
        let asset = StoredAsset {
            id: self.allocate_id(),
            document_id: Uuid::new_v4().simple().to_string(),
            name: upload.info.name.clone(),
            alternative_text: Some(upload.info.alternative_text.clone()),
            caption: Some(upload.info.caption.clone()),
            url: format!("/uploads/{}", stored_file_name(&upload.info.name, &ext)),
            ext,
            mime: upload.file.mime.clone(),
            size: upload.bytes.len() as u64,
            created_at: Utc::now(),
        };
        self.assets.push(asset.clone());
        asset
    }

    pub(crate) fn find_role(&self, role_type: &str) -> Option<Role> {
        self.roles.iter().find(|r| r.role_type == role_type).cloned()
    }

    pub(crate) fn create_permission(
        &mut self,
        grant: PermissionGrant,
    ) -> Result<Permission, StoreError> {
        if !self.roles.iter().any(|r| r.id == grant.role) {
            return Err(StoreError::RoleNotFound(grant.role));
        }
        let permission = Permission {
            id: self.allocate_id(),
            action: grant.action,
            role: grant.role,
            created_at: Utc::now(),
        };
        self.permissions.push(permission.clone());
        Ok(permission)
    }

    pub(crate) fn plugin_get(&self, key: &PluginStoreKey) -> Option<Value> {
        self.plugin.get(&key.flat()).cloned()
    }

    pub(crate) fn plugin_set(&mut self, key: &PluginStoreKey, value: Value) -> Option<Value> {
        self.plugin.insert(key.flat(), value)
    }
}
