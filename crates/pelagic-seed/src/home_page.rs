use pelagic_core::{Document, FixtureHomePage, HomePageDocument, Raw, Seo};
use pelagic_loader::AssetResolver;
use pelagic_naming::{HOME_PAGE, content_type_uid};
use pelagic_store::{ContentStore, StoreError};

use crate::error::SeedError;
use crate::section::{process_section, replace_media};

const SHARE_IMAGE_KEY: &str = "shareImage";

#[derive(Debug, Clone, PartialEq)]
pub enum HomePageOutcome {
    Created(Document),
    /// The store already held a homepage; nothing was written.
    AlreadyExists,
}

/// Upload the homepage's media and build the document to persist.
///
/// SEO first, then sections one by one in fixture order.
pub async fn prepare_home_page(
    store: &dyn ContentStore,
    resolver: &AssetResolver,
    home: &FixtureHomePage,
) -> Result<HomePageDocument, SeedError> {
    let seo = match &home.seo {
        Some(seo) => {
            tracing::info!("processing seo");
            let mut fields = seo.fields().clone();
            let share_image =
                replace_media(store, resolver, &mut fields, SHARE_IMAGE_KEY, &seo.share_image)
                    .await?;
            if share_image.is_none() {
                fields.remove(SHARE_IMAGE_KEY);
            }
            let view = Seo {
                meta_title: seo.meta_title.clone(),
                meta_description: seo.meta_description.clone(),
                share_image,
            };
            Some(Raw::from_parts(view, fields))
        }
        None => None,
    };

    let total = home.sections.len();
    tracing::info!(total, "processing sections");
    let mut sections = Vec::with_capacity(total);
    for (index, section) in home.sections.iter().enumerate() {
        tracing::info!(
            index = index + 1,
            total,
            component = section.component(),
            "processing section"
        );
        sections.push(process_section(store, resolver, section).await?);
    }

    Ok(HomePageDocument { seo, sections })
}

/// Import the homepage: upload its media, then create the single
/// `api::home-page.home-page` document.
///
/// A store that reports the homepage "already exists" is not an error.
pub async fn import_home_page(
    store: &dyn ContentStore,
    resolver: &AssetResolver,
    home: &FixtureHomePage,
) -> Result<HomePageOutcome, SeedError> {
    tracing::info!("importing home page");
    let document = prepare_home_page(store, resolver, home).await?;

    let uid = content_type_uid(HOME_PAGE);
    let data = serde_json::to_value(&document).map_err(|e| SeedError::DocumentCreate {
        uid: uid.clone(),
        source: StoreError::Encoding(e),
    })?;

    match store.create_document(&uid, data).await {
        Ok(created) => {
            tracing::info!(document_id = %created.document_id, "home page created");
            Ok(HomePageOutcome::Created(created))
        }
        Err(source) => {
            let err = SeedError::DocumentCreate { uid, source };
            if err.is_already_exists() {
                tracing::warn!("home page entry already exists, clear the store to reimport");
                Ok(HomePageOutcome::AlreadyExists)
            } else {
                tracing::error!(error = %err, "failed to import home page");
                Err(err)
            }
        }
    }
}
