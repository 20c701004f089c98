use anyhow::Result;
use colored::Colorize;
use pelagic_config::AdminConfig;
use pelagic_seed::preview_url;

use crate::utils::{load_project_config, open_existing_store};

pub async fn cmd_preview(uid: &str, document_id: &str) -> Result<()> {
    let config = load_project_config()?;
    let admin = AdminConfig::from_env();

    let url = match open_existing_store(&config).await? {
        Some(store) => preview_url(&store, &admin.preview, uid, document_id).await,
        None => None,
    };

    match url {
        Some(url) => println!("{}", url),
        None => println!("{}", "No preview available.".yellow()),
    }
    Ok(())
}
