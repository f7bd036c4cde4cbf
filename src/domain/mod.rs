// Domain model for the SDK catalog

pub mod error;
pub mod identity;
pub mod platform;
pub mod sdk;
pub mod version;

pub use error::DomainError;
#[allow(unused_imports)]
pub use identity::{ProgrammingLanguage, SdkName, SdkTag};
pub use platform::{Platform, PlatformVersion};
pub use sdk::{Sdk, SdkVersion};
#[allow(unused_imports)]
pub use version::{ReleaseDate, VersionNumber};
