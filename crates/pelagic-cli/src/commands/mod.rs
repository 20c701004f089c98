pub mod init;
pub mod middleware;
pub mod preview;
pub mod seed;
pub mod status;

pub use init::cmd_init;
pub use middleware::cmd_middleware;
pub use preview::cmd_preview;
pub use seed::{SeedArgs, cmd_seed};
pub use status::cmd_status;
