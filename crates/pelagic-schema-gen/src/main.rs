use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use pelagic_config::SeedConfig;
use pelagic_core::SeedFixture;
use schemars::{Schema, schema_for};

#[derive(Debug, Parser)]
#[command(
    name = "pelagic-schema-gen",
    about = "Emit JSON Schemas for the pelagic seed fixture and configuration."
)]
struct Args {
    /// Output directory for schema files.
    #[arg(short = 'o', long = "out", default_value = "schemas")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(args.out)
}

fn run(out: PathBuf) -> Result<()> {
    if !out.exists() {
        fs::create_dir_all(&out).with_context(|| format!("create dir {}", out.display()))?;
    }

    let fixture_path = out.join("fixture.schema.json");
    let config_path = out.join("config.schema.json");

    write_schema(&fixture_path, &schema_for!(SeedFixture), "fixture")?;
    write_schema(&config_path, &schema_for!(SeedConfig), "config")?;

    println!("Wrote schemas:");
    println!("  {}", fixture_path.display());
    println!("  {}", config_path.display());
    Ok(())
}

fn write_schema(path: &Path, schema: &Schema, what: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(schema)
        .with_context(|| format!("serialize {} schema", what))?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))
}
