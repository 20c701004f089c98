use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use pelagic_config::{FileFormat, SeedConfig};
use pelagic_core::SeedFixture;
use pelagic_loader::load_fixture;
use pelagic_seed::{
    BootstrapOutcome, HomePageOutcome, PermissionOutcome, SeedContext, run_bootstrap,
};
use pelagic_store::{ContentStore, MemoryStore};

use crate::utils::{load_project_config, open_store};

#[derive(Debug, Default)]
pub struct SeedArgs {
    pub dry_run: bool,
    pub fixture: Option<PathBuf>,
    pub format: Option<FileFormat>,
}

pub async fn cmd_seed(args: SeedArgs) -> Result<()> {
    let mut config = load_project_config()?;
    if let Some(fixture) = args.fixture {
        config.fixture_path = fixture;
    }
    if let Some(format) = args.format {
        config.fixture_format = Some(format);
    }

    let fixture = load_fixture(&config)?;
    println!("{}", "Starting pelagic seed...".bright_cyan().bold());

    let outcome = if args.dry_run {
        seed_into(&MemoryStore::new(), &config, &fixture).await?
    } else {
        let store = open_store(&config).await?;
        seed_into(&store, &config, &fixture).await?
    };

    print_outcome(&outcome);
    if args.dry_run {
        println!("{}", "Dry run: nothing was written.".bright_black());
    }
    Ok(())
}

async fn seed_into(
    store: &dyn ContentStore,
    config: &SeedConfig,
    fixture: &SeedFixture,
) -> Result<BootstrapOutcome> {
    let ctx = SeedContext::new(store, config);
    run_bootstrap(&ctx, fixture)
        .await
        .context("seed script failed")
}

fn print_outcome(outcome: &BootstrapOutcome) {
    let BootstrapOutcome::Imported {
        permissions,
        home_page,
    } = outcome
    else {
        println!(
            "{}",
            "Seed data has already been imported. Clear the store to reimport.".yellow()
        );
        return;
    };

    match permissions {
        PermissionOutcome::Granted(granted) => println!(
            "  {} {}",
            "Public permissions:".cyan(),
            granted.len().to_string().bright_yellow()
        ),
        PermissionOutcome::Skipped => println!(
            "  {} {}",
            "Public permissions:".cyan(),
            "skipped (no public role)".yellow()
        ),
    }
    match home_page {
        HomePageOutcome::Created(document) => println!(
            "  {} {}",
            "Home page:".cyan(),
            document.document_id.bright_white()
        ),
        HomePageOutcome::AlreadyExists => println!(
            "  {} {}",
            "Home page:".cyan(),
            "already exists".yellow()
        ),
    }
    println!("{}", "Seed data import complete.".bright_green().bold());
}
