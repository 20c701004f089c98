pub mod components;
pub mod document;
pub mod error;
pub mod fixture;
pub mod media;
pub mod permission;
pub mod raw;
pub mod section;

pub use document::{Document, PluginStoreKey, is_truthy};
pub use error::CoreError;
pub use fixture::{HomePage, SeedFixture, Seo};
pub use media::{AssetUpload, FileDescriptor, FileInfo, MediaRef, MediaValue, StoredAsset};
pub use permission::{AUTHENTICATED_ROLE, PUBLIC_ROLE, Permission, PermissionGrant, Role};
pub use raw::Raw;
pub use section::{COMPONENT_KEY, HeroSection, PromoSection, Section, component};

/// Homepage as written in the fixture.
pub type FixtureHomePage = HomePage<MediaRef>;
/// Homepage with media replaced by stored assets, ready to persist.
pub type HomePageDocument = HomePage<MediaValue>;
