use pelagic_core::{HeroSection, MediaRef, MediaValue, PromoSection, Raw, Section};
use pelagic_loader::AssetResolver;
use pelagic_store::{ContentStore, StoreError};
use serde_json::{Map, Value};

use crate::error::SeedError;
use crate::uploader::upload_media;

/// Build the persisted form of one fixture section.
///
/// Hero and promo sections are copied with each present media field replaced
/// by its uploaded assets; every other key is kept as written. All other
/// sections, unknown ones included, are copied as is. The input is never
/// modified.
pub async fn process_section(
    store: &dyn ContentStore,
    resolver: &AssetResolver,
    section: &Section<MediaRef>,
) -> Result<Section<MediaValue>, SeedError> {
    let processed = match section {
        Section::Hero(hero) => {
            tracing::info!("processing hero section");
            let mut fields = hero.fields().clone();
            let view = HeroSection {
                hero_copy: hero.hero_copy.clone(),
                desktop_hero_image: replace_media(
                    store,
                    resolver,
                    &mut fields,
                    "desktopHeroImage",
                    &hero.desktop_hero_image,
                )
                .await?,
                desktop_support_images: replace_media(
                    store,
                    resolver,
                    &mut fields,
                    "desktopSupportImages",
                    &hero.desktop_support_images,
                )
                .await?,
                mobile_hero_image: replace_media(
                    store,
                    resolver,
                    &mut fields,
                    "mobileHeroImage",
                    &hero.mobile_hero_image,
                )
                .await?,
                mobile_support_images: replace_media(
                    store,
                    resolver,
                    &mut fields,
                    "mobileSupportImages",
                    &hero.mobile_support_images,
                )
                .await?,
            };
            Section::Hero(Raw::from_parts(view, fields))
        }
        Section::Promo(promo) => {
            tracing::info!("processing promo section");
            let mut fields = promo.fields().clone();
            let view = PromoSection {
                title: promo.title.clone(),
                button_label: promo.button_label.clone(),
                button_url: promo.button_url.clone(),
                description: promo.description.clone(),
                video: replace_media(store, resolver, &mut fields, "video", &promo.video).await?,
                thumbnail: replace_media(
                    store,
                    resolver,
                    &mut fields,
                    "thumbnail",
                    &promo.thumbnail,
                )
                .await?,
            };
            Section::Promo(Raw::from_parts(view, fields))
        }
        Section::FaqSet(faqs) => Section::FaqSet(faqs.clone()),
        Section::Mission(mission) => Section::Mission(mission.clone()),
        Section::Impact(impact) => Section::Impact(impact.clone()),
        Section::Overview(overview) => Section::Overview(overview.clone()),
        Section::Product(product) => Section::Product(product.clone()),
        Section::Gallery(gallery) => Section::Gallery(gallery.clone()),
        Section::Applications(applications) => Section::Applications(applications.clone()),
        Section::Contact(contact) => Section::Contact(contact.clone()),
        Section::Unknown(fields) => Section::Unknown(fields.clone()),
    };
    Ok(processed)
}

/// Upload a media field. Absent and blank fields stay absent.
async fn media_field(
    store: &dyn ContentStore,
    resolver: &AssetResolver,
    media: &Option<MediaRef>,
) -> Result<Option<MediaValue>, SeedError> {
    match media {
        Some(media) if !media.is_blank() => Ok(Some(upload_media(store, resolver, media).await?)),
        _ => Ok(None),
    }
}

/// Upload a media field and write the result over `key`. Fields that were
/// not uploaded keep their written value.
pub(crate) async fn replace_media(
    store: &dyn ContentStore,
    resolver: &AssetResolver,
    fields: &mut Map<String, Value>,
    key: &str,
    media: &Option<MediaRef>,
) -> Result<Option<MediaValue>, SeedError> {
    let uploaded = media_field(store, resolver, media).await?;
    if let Some(value) = &uploaded {
        let value = serde_json::to_value(value).map_err(StoreError::Encoding)?;
        fields.insert(key.to_string(), value);
    }
    Ok(uploaded)
}
