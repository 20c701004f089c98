use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::components::{
    ApplicationCard, ButtonAction, ContactBlock, FaqItem, OverviewItem, ResponsiveImage,
};
use crate::media::MediaRef;
use crate::raw::Raw;

/// Key holding the component tag of a section.
pub const COMPONENT_KEY: &str = "__component";

/// Component tags of the known section kinds.
pub mod component {
    pub const HERO: &str = "sections.hero";
    pub const PROMO: &str = "sections.milan-design-week";
    pub const FAQS: &str = "sections.faqs";
    pub const MISSION: &str = "sections.mission";
    pub const IMPACT: &str = "sections.impact";
    pub const OVERVIEW: &str = "sections.overview";
    pub const PRODUCT: &str = "sections.product";
    pub const GALLERY: &str = "sections.small-gallery";
    pub const APPLICATIONS: &str = "sections.applications";
    pub const CONTACT: &str = "sections.contact";

    pub const KNOWN: &[&str] = &[
        HERO,
        PROMO,
        FAQS,
        MISSION,
        IMPACT,
        OVERVIEW,
        PRODUCT,
        GALLERY,
        APPLICATIONS,
        CONTACT,
    ];
}

/// One homepage block, tagged by `__component`.
///
/// `M` is the media representation: [`MediaRef`] paths in the fixture,
/// [`crate::MediaValue`] assets once uploaded. Known sections keep the object
/// they were read from (see [`Raw`]). Tags outside the known set deserialize
/// into [`Section::Unknown`] with the whole object kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "__component", bound(deserialize = "M: DeserializeOwned"))]
pub enum Section<M> {
    #[serde(rename = "sections.hero")]
    Hero(Raw<HeroSection<M>>),
    #[serde(rename = "sections.milan-design-week")]
    Promo(Raw<PromoSection<M>>),
    #[serde(rename = "sections.faqs")]
    FaqSet(Raw<FaqSection>),
    #[serde(rename = "sections.mission")]
    Mission(Raw<MissionSection>),
    #[serde(rename = "sections.impact")]
    Impact(Raw<ImpactSection>),
    #[serde(rename = "sections.overview")]
    Overview(Raw<OverviewSection>),
    #[serde(rename = "sections.product")]
    Product(Raw<ProductSection>),
    #[serde(rename = "sections.small-gallery")]
    Gallery(Raw<GallerySection>),
    #[serde(rename = "sections.applications")]
    Applications(Raw<ApplicationsSection>),
    #[serde(rename = "sections.contact")]
    Contact(Raw<ContactSection>),
    #[serde(untagged)]
    Unknown(Map<String, Value>),
}

impl<M> Section<M> {
    /// The `__component` tag. Unknown sections without a string tag give "".
    pub fn component(&self) -> &str {
        match self {
            Section::Hero(_) => component::HERO,
            Section::Promo(_) => component::PROMO,
            Section::FaqSet(_) => component::FAQS,
            Section::Mission(_) => component::MISSION,
            Section::Impact(_) => component::IMPACT,
            Section::Overview(_) => component::OVERVIEW,
            Section::Product(_) => component::PRODUCT,
            Section::Gallery(_) => component::GALLERY,
            Section::Applications(_) => component::APPLICATIONS,
            Section::Contact(_) => component::CONTACT,
            Section::Unknown(fields) => fields
                .get(COMPONENT_KEY)
                .and_then(Value::as_str)
                .unwrap_or_default(),
        }
    }

    /// Returns true for sections whose own fields reference media.
    pub fn has_media_fields(&self) -> bool {
        matches!(self, Section::Hero(_) | Section::Promo(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct HeroSection<M> {
    pub hero_copy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop_hero_image: Option<M>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop_support_images: Option<M>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_hero_image: Option<M>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_support_images: Option<M>,
}

impl<M> HeroSection<M> {
    /// Media fields with their fixture names, in declaration order.
    pub fn media_fields(&self) -> [(&'static str, Option<&M>); 4] {
        [
            ("desktopHeroImage", self.desktop_hero_image.as_ref()),
            ("desktopSupportImages", self.desktop_support_images.as_ref()),
            ("mobileHeroImage", self.mobile_hero_image.as_ref()),
            ("mobileSupportImages", self.mobile_support_images.as_ref()),
        ]
    }
}

/// Promotional block with a video and its thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PromoSection<M> {
    pub title: String,
    pub button_label: String,
    pub button_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<M>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<M>,
}

impl<M> PromoSection<M> {
    pub fn media_fields(&self) -> [(&'static str, Option<&M>); 2] {
        [
            ("video", self.video.as_ref()),
            ("thumbnail", self.thumbnail.as_ref()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FaqSection {
    pub title: String,
    #[serde(default)]
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct MissionSection {
    pub tagline_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ImpactSection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callout_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callout_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial_quote: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct OverviewSection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<OverviewItem>,
}

/// Product call-to-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProductSection {
    pub title: String,
    pub button_label: String,
    pub button_action: ButtonAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// Relation to a journal article, passed to the store as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_link: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct GallerySection {
    #[serde(default)]
    pub items: Vec<ResponsiveImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ApplicationsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub applications: Vec<ApplicationCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContactSection {
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<ContactBlock>,
}

/// Why an object tagged with a known component failed to parse as that
/// component. `None` for unknown tags.
pub fn diagnose_section(component: &str, fields: &Map<String, Value>) -> Option<String> {
    let value = Value::Object(fields.clone());
    let parsed = match component {
        component::HERO => serde_json::from_value::<HeroSection<MediaRef>>(value).map(drop),
        component::PROMO => serde_json::from_value::<PromoSection<MediaRef>>(value).map(drop),
        component::FAQS => serde_json::from_value::<FaqSection>(value).map(drop),
        component::MISSION => serde_json::from_value::<MissionSection>(value).map(drop),
        component::IMPACT => serde_json::from_value::<ImpactSection>(value).map(drop),
        component::OVERVIEW => serde_json::from_value::<OverviewSection>(value).map(drop),
        component::PRODUCT => serde_json::from_value::<ProductSection>(value).map(drop),
        component::GALLERY => serde_json::from_value::<GallerySection>(value).map(drop),
        component::APPLICATIONS => {
            serde_json::from_value::<ApplicationsSection>(value).map(drop)
        }
        component::CONTACT => serde_json::from_value::<ContactSection>(value).map(drop),
        _ => return None,
    };
    Some(match parsed {
        Err(e) => e.to_string(),
        Ok(()) => "fields do not match the component schema".to_string(),
    })
}
