use anyhow::{Context, Result};
use pelagic_config::SeedConfig;
use pelagic_loader::load_config_or_default;
use pelagic_store::{FileStore, file::STATE_FILE_NAME};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` wins unless `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    // A second install (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// pelagic.json from the current directory, or defaults when there is none.
pub fn load_project_config() -> Result<SeedConfig> {
    let root = std::env::current_dir().context("resolve current directory")?;
    let config = load_config_or_default(Some(root.clone()))?;
    Ok(config.rooted_at(&root))
}

/// Open the store named by the config.
pub async fn open_store(config: &SeedConfig) -> Result<FileStore> {
    FileStore::open(config.store_dir())
        .await
        .with_context(|| format!("open content store: {}", config.store_dir().display()))
}

/// Open the store only if it was created before.
pub async fn open_existing_store(config: &SeedConfig) -> Result<Option<FileStore>> {
    if !config.store_dir().join(STATE_FILE_NAME).exists() {
        return Ok(None);
    }
    open_store(config).await.map(Some)
}
