use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pelagic_config::{FileFormat, SeedConfig};
use pelagic_core::SeedFixture;

/// Load and validate the seed fixture named by the config.
pub fn load_fixture(config: &SeedConfig) -> Result<SeedFixture> {
    load_fixture_from_path(config.fixture_path(), config.fixture_format())
}

/// Load and validate a seed fixture file in the given format.
pub fn load_fixture_from_path(path: &Path, format: FileFormat) -> Result<SeedFixture> {
    if !path.exists() {
        anyhow::bail!("seed fixture not found: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("read seed fixture: {}", path.display()))?;

    let fixture: SeedFixture = if format.is_yaml() {
        serde_yaml::from_str(&content)
            .with_context(|| format!("parse YAML fixture: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("parse JSON fixture: {}", path.display()))?
    };

    fixture
        .validate()
        .with_context(|| format!("invalid seed fixture: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        sections = fixture.home_page.sections.len(),
        "loaded seed fixture"
    );
    Ok(fixture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pelagic_core::Section;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const FIXTURE_JSON: &str = r#"{
        "homePage": {
            "seo": { "metaTitle": "Pelagic", "metaDescription": "Sea materials" },
            "sections": [
                { "__component": "sections.hero", "heroCopy": "Hello", "desktopHeroImage": "hero/hero-01.jpg" },
                { "__component": "sections.faqs", "title": "FAQ", "items": [{ "question": "Why?" }] }
            ]
        }
    }"#;

    const FIXTURE_YAML: &str = r#"
homePage:
  sections:
    - __component: sections.mission
      taglineText: Restore the ocean
    - __component: sections.contact
      title: Contact
      blocks:
        - label: Press
          email: press@pelagic.earth
"#;

    #[test]
    fn loads_json_fixture_from_config() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("data.json");
        fs::write(&path, FIXTURE_JSON).unwrap();
        let config = SeedConfig {
            fixture_path: path,
            ..Default::default()
        };

        let fixture = load_fixture(&config).unwrap();
        assert_eq!(fixture.home_page.sections.len(), 2);
        assert!(matches!(fixture.home_page.sections[0], Section::Hero(_)));
        assert!(matches!(fixture.home_page.sections[1], Section::FaqSet(_)));
    }

    #[test]
    fn loads_yaml_fixture() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("data.yaml");
        fs::write(&path, FIXTURE_YAML).unwrap();

        let fixture = load_fixture_from_path(&path, FileFormat::Yaml).unwrap();
        assert!(fixture.home_page.seo.is_none());
        assert_eq!(fixture.home_page.sections[0].component(), "sections.mission");
        assert_eq!(fixture.home_page.sections[1].component(), "sections.contact");
    }

    #[test]
    fn missing_fixture_is_an_error() {
        let err = load_fixture_from_path(&PathBuf::from("/nonexistent/data.json"), FileFormat::Json)
            .unwrap_err();
        assert!(err.to_string().contains("seed fixture not found"));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("data.json");
        fs::write(&path, r#"{ "homePage": { "seo": { "metaTitle": 3 } } }"#).unwrap();

        let err = load_fixture_from_path(&path, FileFormat::Json).unwrap_err();
        assert!(err.to_string().contains("parse JSON fixture"));
    }

    #[test]
    fn validation_errors_fail_fast() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("data.json");
        fs::write(
            &path,
            r#"{ "homePage": { "sections": [ { "__component": "sections.hero" } ] } }"#,
        )
        .unwrap();

        let err = load_fixture_from_path(&path, FileFormat::Json).unwrap_err();
        assert!(err.to_string().contains("invalid seed fixture"));
        let chain = format!("{:#}", err);
        assert!(chain.contains("sections.hero"), "{}", chain);
    }
}
