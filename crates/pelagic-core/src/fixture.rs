use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::media::MediaRef;
use crate::raw::Raw;
use crate::section::{Section, diagnose_section};

/// The seed fixture document: `{ "homePage": { "seo": ..., "sections": [...] } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SeedFixture {
    pub home_page: HomePage<MediaRef>,
}

/// Homepage content. `M` follows [`Section`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "M: DeserializeOwned")
)]
pub struct HomePage<M> {
    pub seo: Option<Raw<Seo<M>>>,
    #[serde(default)]
    pub sections: Vec<Section<M>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Seo<M> {
    pub meta_title: String,
    pub meta_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_image: Option<M>,
}

impl SeedFixture {
    /// Check what serde cannot: section tags, known sections that failed to
    /// parse, and media paths that would leave the uploads directory.
    pub fn validate(&self) -> Result<(), CoreError> {
        let home = &self.home_page;

        if let Some(media) = home.seo.as_ref().and_then(|seo| seo.share_image.as_ref()) {
            validate_media("homePage.seo.shareImage", media)?;
        }

        for (index, section) in home.sections.iter().enumerate() {
            match section {
                Section::Hero(hero) => {
                    for (name, media) in hero.media_fields() {
                        if let Some(media) = media {
                            validate_media(&section_field(index, name), media)?;
                        }
                    }
                }
                Section::Promo(promo) => {
                    for (name, media) in promo.media_fields() {
                        if let Some(media) = media {
                            validate_media(&section_field(index, name), media)?;
                        }
                    }
                }
                Section::Unknown(fields) => {
                    let component = section.component();
                    if component.is_empty() {
                        return Err(CoreError::MissingComponentTag { index });
                    }
                    if let Some(reason) = diagnose_section(component, fields) {
                        return Err(CoreError::MalformedSection {
                            index,
                            component: component.to_string(),
                            reason,
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Every usable media path in fixture order, with duplicates.
    pub fn media_paths(&self) -> Vec<&str> {
        let home = &self.home_page;
        let mut paths = Vec::new();
        if let Some(media) = home.seo.as_ref().and_then(|seo| seo.share_image.as_ref()) {
            paths.extend(media.paths());
        }
        for section in &home.sections {
            match section {
                Section::Hero(hero) => {
                    for media in hero.media_fields().into_iter().filter_map(|(_, m)| m) {
                        paths.extend(media.paths());
                    }
                }
                Section::Promo(promo) => {
                    for media in promo.media_fields().into_iter().filter_map(|(_, m)| m) {
                        paths.extend(media.paths());
                    }
                }
                _ => {}
            }
        }
        paths
    }
}

fn section_field(index: usize, name: &str) -> String {
    format!("homePage.sections[{}].{}", index, name)
}

fn validate_media(field: &str, media: &MediaRef) -> Result<(), CoreError> {
    for path in media.paths() {
        let reason = if path.starts_with('/') || path.starts_with('\\') {
            Some("must be relative to the uploads directory")
        } else if path.split(['/', '\\']).any(|segment| segment == "..") {
            Some("must not leave the uploads directory")
        } else if path.ends_with('/') {
            Some("has no file name")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(CoreError::InvalidMediaPath {
                field: field.to_string(),
                path: path.to_string(),
                reason,
            });
        }
    }
    Ok(())
}
