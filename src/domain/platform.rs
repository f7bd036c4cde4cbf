// Platform enumeration and per-platform minimum version requirement

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

/// Target runtime for a mobile SDK. Closed set: catalog data naming any
/// other platform is rejected at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "Android")]
    Android,
}

impl Platform {
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Minimum platform version required by an SDK release, e.g. iOS 15.0.
///
/// The version string is free-form (Android API levels are plain integers)
/// and compared exactly, case included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformVersion {
    platform: Platform,
    version: String,
}

impl PlatformVersion {
    pub fn new(platform: Platform, version: impl Into<String>) -> Result<Self, DomainError> {
        let version = version.into();
        if version.trim().is_empty() {
            return Err(DomainError::EmptyPlatformVersion);
        }
        Ok(Self { platform, version })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}+", self.platform, self.version)
    }
}
