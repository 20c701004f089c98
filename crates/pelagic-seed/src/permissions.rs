use std::collections::BTreeMap;

use futures::future::join_all;
use pelagic_core::{PUBLIC_ROLE, Permission, PermissionGrant};
use pelagic_store::ContentStore;

use crate::error::SeedError;

#[derive(Debug, Clone, PartialEq)]
pub enum PermissionOutcome {
    /// No public role exists; nothing was granted.
    Skipped,
    Granted(Vec<Permission>),
}

/// Grant the public role every `content type -> actions` pair.
///
/// All grants are issued at once and each runs to completion. The first
/// failure, in grant order, is returned afterwards; grants that succeeded
/// stay. Existing grants are not checked, so running this twice duplicates
/// them.
pub async fn set_public_permissions(
    store: &dyn ContentStore,
    permissions: &BTreeMap<String, Vec<String>>,
) -> Result<PermissionOutcome, SeedError> {
    let Some(public) = store.find_role(PUBLIC_ROLE).await? else {
        tracing::warn!("public role not found, skipping permissions setup");
        return Ok(PermissionOutcome::Skipped);
    };

    let grants = permissions.iter().flat_map(|(content_type, actions)| {
        actions
            .iter()
            .map(move |action| PermissionGrant::new(content_type, action, public.id))
    });

    let results = join_all(grants.map(|grant| store.create_permission(grant))).await;

    let mut created = Vec::with_capacity(results.len());
    for result in results {
        created.push(result?);
    }

    tracing::info!(count = created.len(), "public permissions configured");
    Ok(PermissionOutcome::Granted(created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingStore;
    use pelagic_config::default_public_permissions;
    use pelagic_store::MemoryStore;

    #[tokio::test]
    async fn grants_find_and_find_one_on_default_types() {
        let store = MemoryStore::new();

        let outcome = set_public_permissions(&store, &default_public_permissions())
            .await
            .unwrap();

        let PermissionOutcome::Granted(granted) = outcome else {
            panic!("expected grants");
        };
        assert_eq!(granted.len(), 8);

        let mut actions: Vec<_> = store
            .permissions()
            .await
            .into_iter()
            .map(|p| p.action)
            .collect();
        actions.sort();
        assert_eq!(
            actions,
            vec![
                "api::global-setting.global-setting.find",
                "api::global-setting.global-setting.findOne",
                "api::home-page.home-page.find",
                "api::home-page.home-page.findOne",
                "api::journal-article.journal-article.find",
                "api::journal-article.journal-article.findOne",
                "api::journal-page.journal-page.find",
                "api::journal-page.journal-page.findOne",
            ]
        );
    }

    #[tokio::test]
    async fn missing_public_role_skips() {
        let store = CountingStore::with_inner(MemoryStore::without_roles());

        let outcome = set_public_permissions(&store, &default_public_permissions())
            .await
            .unwrap();

        assert_eq!(outcome, PermissionOutcome::Skipped);
        assert_eq!(store.permission_calls(), 0);
    }

    #[tokio::test]
    async fn failure_is_reported_after_all_grants_ran() {
        let store = CountingStore::failing_action("api::home-page.home-page.find");

        let err = set_public_permissions(&store, &default_public_permissions())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("api::home-page.home-page.find"));
        assert_eq!(store.permission_calls(), 8);
        assert_eq!(store.inner.permissions().await.len(), 7);
    }

    #[tokio::test]
    async fn running_twice_duplicates_grants() {
        let store = MemoryStore::new();
        let mut permissions = BTreeMap::new();
        permissions.insert("home-page".to_string(), vec!["find".to_string()]);

        set_public_permissions(&store, &permissions).await.unwrap();
        set_public_permissions(&store, &permissions).await.unwrap();

        assert_eq!(store.permissions().await.len(), 2);
    }
}
