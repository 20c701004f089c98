use anyhow::Result;
use colored::Colorize;
use pelagic_config::AdminConfig;
use pelagic_core::is_truthy;
use pelagic_loader::load_fixture;
use pelagic_seed::run_guard_key;
use pelagic_store::ContentStore;

use crate::utils::{load_project_config, open_existing_store};

pub async fn cmd_status() -> Result<()> {
    let config = load_project_config()?;

    println!("{}", "Configuration:".bright_cyan().bold());
    println!(
        "  {} {}",
        "Fixture:".cyan(),
        config.fixture_path().display().to_string().bright_white()
    );
    println!("  {} {:?}", "Fixture format:".cyan(), config.fixture_format());
    println!(
        "  {} {}",
        "Uploads directory:".cyan(),
        config.uploads_dir().display().to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Store directory:".cyan(),
        config.store_dir().display().to_string().bright_white()
    );
    println!("  {} {}", "Environment:".cyan(), config.environment().bright_white());
    println!();

    match load_fixture(&config) {
        Ok(fixture) => {
            println!(
                "{} {}",
                "Fixture sections:".bright_cyan().bold(),
                fixture.home_page.sections.len().to_string().bright_yellow()
            );
            for section in &fixture.home_page.sections {
                println!("  {} {}", "-".bright_white(), section.component().bright_green());
            }
            println!(
                "  {} {}",
                "Media references:".cyan(),
                fixture.media_paths().len().to_string().bright_blue()
            );
        }
        Err(err) => {
            println!("{} {}", "Fixture:".bright_cyan().bold(), format!("{:#}", err).red());
        }
    }
    println!();

    match open_existing_store(&config).await? {
        Some(store) => {
            let summary = store.summary().await;
            let seeded = store
                .plugin_get(&run_guard_key(config.environment()))
                .await?;
            println!("{}", "Content store:".bright_cyan().bold());
            println!(
                "  {} {}",
                "Seeded:".cyan(),
                if is_truthy(seeded.as_ref()) {
                    "yes".bright_green()
                } else {
                    "no".yellow()
                }
            );
            println!(
                "  {} {}",
                "Documents:".cyan(),
                summary.documents.to_string().bright_yellow()
            );
            println!(
                "  {} {}",
                "Assets:".cyan(),
                summary.assets.to_string().bright_yellow()
            );
            println!(
                "  {} {}",
                "Permissions:".cyan(),
                summary.permissions.to_string().bright_yellow()
            );
        }
        None => {
            println!(
                "{} {}",
                "Content store:".bright_cyan().bold(),
                "not created yet. Run 'pelagic seed'.".yellow()
            );
        }
    }
    println!();

    let admin = AdminConfig::from_env();
    println!("{}", "Admin:".bright_cyan().bold());
    let missing = admin.missing_secrets();
    if missing.is_empty() {
        println!("  {} {}", "Secrets:".cyan(), "set".bright_green());
    } else {
        println!("  {} {}", "Missing secrets:".cyan(), missing.join(", ").red());
    }
    println!(
        "  {} {}",
        "Preview client:".cyan(),
        admin.preview.client_url.bright_white()
    );
    if admin.preview.uses_default_secret() {
        println!(
            "  {} {}",
            "warning:".yellow(),
            "PREVIEW_SECRET still uses the placeholder value"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::{env, path::PathBuf};
    use tempfile::tempdir;

    struct CwdGuard {
        original: PathBuf,
    }

    impl CwdGuard {
        fn new(dir: &PathBuf) -> Self {
            let original = env::current_dir().unwrap();
            env::set_current_dir(dir).unwrap();
            Self { original }
        }
    }

    impl Drop for CwdGuard {
        fn drop(&mut self) {
            let _ = env::set_current_dir(&self.original);
        }
    }

    #[tokio::test]
    #[serial]
    async fn status_without_project_does_not_create_store() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(&tmp.path().to_path_buf());

        cmd_status().await.unwrap();

        assert!(!tmp.path().join(".pelagic").exists());
    }
}
