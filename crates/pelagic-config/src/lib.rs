pub mod admin;
pub mod config;
pub mod error;
pub mod file_format;
pub mod middleware;
pub mod preview;

pub use admin::{AdminConfig, AdminFlags};
pub use config::{CONFIG_FILE_NAME, SeedConfig, default_public_permissions};
pub use error::ConfigError;
pub use file_format::FileFormat;
pub use middleware::{ContentSecurityPolicy, CspDirective, Middleware, MiddlewareStack};
pub use preview::{PreviewConfig, preview_pathname};
