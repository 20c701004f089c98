use pelagic_core::{PluginStoreKey, is_truthy};
use pelagic_store::ContentStore;
use serde_json::Value;

use crate::error::SeedError;

pub const SETUP_STORE_TYPE: &str = "type";
pub const SETUP_STORE_NAME: &str = "setup";
pub const INIT_HAS_RUN_KEY: &str = "initHasRun";

/// Plugin store key of the run-once flag for an environment.
pub fn run_guard_key(environment: &str) -> PluginStoreKey {
    PluginStoreKey::new(
        environment,
        SETUP_STORE_TYPE,
        SETUP_STORE_NAME,
        INIT_HAS_RUN_KEY,
    )
}

/// Mark the seed as run and report whether this call is the first.
///
/// The flag is written whether or not the import that follows succeeds.
pub async fn is_first_run(store: &dyn ContentStore, environment: &str) -> Result<bool, SeedError> {
    let previous = store
        .plugin_swap(&run_guard_key(environment), Value::Bool(true))
        .await?;
    Ok(!is_truthy(previous.as_ref()))
}
