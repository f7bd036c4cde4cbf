// Validation errors raised when constructing domain values

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Platform version cannot be empty")]
    EmptyPlatformVersion,

    #[error("Version number cannot be empty")]
    EmptyVersionNumber,

    #[error("Invalid release date: {0}")]
    InvalidReleaseDate(String),

    #[error("Release date cannot be in the future")]
    FutureReleaseDate,

    #[error("SDK name cannot be empty")]
    EmptyName,

    #[error("SDK name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("SDK tag cannot be empty")]
    EmptyTag,

    #[error("SDK tag cannot exceed {0} characters")]
    TagTooLong(usize),

    #[error("Programming language cannot be empty")]
    EmptyLanguage,

    #[error("SDK must have at least one version")]
    NoVersions,
}
