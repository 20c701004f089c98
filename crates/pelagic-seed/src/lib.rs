pub mod bootstrap;
pub mod error;
pub mod guard;
pub mod home_page;
pub mod permissions;
pub mod preview;
pub mod section;
pub mod uploader;

#[cfg(test)]
mod testing;

pub use bootstrap::{BootstrapOutcome, SeedContext, bootstrap, run_bootstrap};
pub use error::SeedError;
pub use guard::{is_first_run, run_guard_key};
pub use home_page::{HomePageOutcome, import_home_page, prepare_home_page};
pub use permissions::{PermissionOutcome, set_public_permissions};
pub use preview::preview_url;
pub use section::process_section;
pub use uploader::{find_or_upload, upload_media};
