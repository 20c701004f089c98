//! Repeatable components nested inside sections.
//!
//! Media inside these components is not resolved by the seeder, so it is kept
//! as raw JSON and passed through as written.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct OverviewItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_image: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_image: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCard {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
    #[serde(default = "default_open_in_new_tab")]
    pub open_in_new_tab: bool,
}

fn default_open_in_new_tab() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContactBlock {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<ExternalLink>,
}

/// What the product call-to-action button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum ButtonAction {
    OpenModal,
    InternalLink,
    ExternalLink,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_link_opens_in_new_tab_by_default() {
        let link: ExternalLink =
            serde_json::from_str(r#"{"label":"Site","url":"https://pelagic.earth"}"#).unwrap();
        assert!(link.open_in_new_tab);
    }

    #[test]
    fn button_action_uses_camel_case() {
        let action: ButtonAction = serde_json::from_str(r#""openModal""#).unwrap();
        assert_eq!(action, ButtonAction::OpenModal);
        assert_eq!(
            serde_json::to_string(&ButtonAction::ExternalLink).unwrap(),
            r#""externalLink""#
        );
    }
}
