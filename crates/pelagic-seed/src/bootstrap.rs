use std::collections::BTreeMap;

use pelagic_config::SeedConfig;
use pelagic_core::SeedFixture;
use pelagic_loader::AssetResolver;
use pelagic_store::ContentStore;

use crate::error::SeedError;
use crate::guard::is_first_run;
use crate::home_page::{HomePageOutcome, import_home_page};
use crate::permissions::{PermissionOutcome, set_public_permissions};

/// Everything a seed run needs besides the fixture.
pub struct SeedContext<'a> {
    pub store: &'a dyn ContentStore,
    pub resolver: AssetResolver,
    /// Scopes the run-once flag.
    pub environment: String,
    /// Content type -> actions granted to the public role.
    pub public_permissions: BTreeMap<String, Vec<String>>,
}

impl<'a> SeedContext<'a> {
    /// Context for `config`, with media resolved under its uploads directory.
    pub fn new(store: &'a dyn ContentStore, config: &SeedConfig) -> Self {
        Self {
            store,
            resolver: AssetResolver::new(config.uploads_dir()),
            environment: config.environment().to_string(),
            public_permissions: config.public_permissions().clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapOutcome {
    /// The seed already ran against this store.
    Skipped,
    Imported {
        permissions: PermissionOutcome,
        home_page: HomePageOutcome,
    },
}

/// Run the seed once per store: run guard, public permissions, homepage.
///
/// The run guard is set before anything is imported, so a failed import is
/// not retried by the next call.
pub async fn run_bootstrap(
    ctx: &SeedContext<'_>,
    fixture: &SeedFixture,
) -> Result<BootstrapOutcome, SeedError> {
    if !is_first_run(ctx.store, &ctx.environment).await? {
        tracing::info!("seed data has already been imported, clear the store to reimport");
        return Ok(BootstrapOutcome::Skipped);
    }

    tracing::info!(environment = %ctx.environment, "starting seed data import");
    let permissions = set_public_permissions(ctx.store, &ctx.public_permissions).await?;
    let home_page = import_home_page(ctx.store, &ctx.resolver, &fixture.home_page).await?;
    tracing::info!("seed data import complete");

    Ok(BootstrapOutcome::Imported {
        permissions,
        home_page,
    })
}

/// In-process startup hook. Same as [`run_bootstrap`], but failures are
/// logged and swallowed so the host keeps starting.
pub async fn bootstrap(ctx: &SeedContext<'_>, fixture: &SeedFixture) -> Option<BootstrapOutcome> {
    match run_bootstrap(ctx, fixture).await {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            tracing::error!(error = %err, "could not import seed data");
            None
        }
    }
}
