use pelagic_config::{PreviewConfig, preview_pathname};
use pelagic_store::ContentStore;

/// Draft-preview link for a document, as the admin panel asks for it.
///
/// Returns `None` when previews are disabled, the document does not exist,
/// or its content type has no page. Lookup and URL errors are logged and
/// also give `None`.
pub async fn preview_url(
    store: &dyn ContentStore,
    preview: &PreviewConfig,
    uid: &str,
    document_id: &str,
) -> Option<String> {
    if !preview.enabled {
        return None;
    }

    let document = match store.find_document(uid, document_id).await {
        Ok(Some(document)) => document,
        Ok(None) => return None,
        Err(err) => {
            tracing::error!(uid, error = %err, "preview handler error");
            return None;
        }
    };

    let pathname = preview_pathname(uid, document.attribute("slug"))?;
    match preview.draft_url(&pathname) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::error!(uid, error = %err, "preview handler error");
            None
        }
    }
}
