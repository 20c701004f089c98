pub mod assets;
pub mod config;
pub mod fixture;

pub use assets::{AssetResolver, ResolveError, mime_for_extension};
pub use config::{load_config, load_config_from_path, load_config_or_default};
pub use fixture::{load_fixture, load_fixture_from_path};
