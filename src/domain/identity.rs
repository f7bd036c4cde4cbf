// Identifier value objects for the SDK aggregate

use std::fmt;

use crate::domain::error::DomainError;

const MAX_NAME_LEN: usize = 100;
const MAX_TAG_LEN: usize = 50;

/// SDK display name. Compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkName(String);

impl SdkName {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        if value.len() > MAX_NAME_LEN {
            return Err(DomainError::NameTooLong(MAX_NAME_LEN));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SdkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category tag attached to an SDK. Tag order is display order, so
/// duplicates are kept as given. Compared case-insensitively.
#[derive(Debug, Clone)]
pub struct SdkTag(String);

impl SdkTag {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyTag);
        }
        if value.len() > MAX_TAG_LEN {
            return Err(DomainError::TagTooLong(MAX_TAG_LEN));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for SdkTag {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for SdkTag {}

impl fmt::Display for SdkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Implementation language of an SDK. Compared case-insensitively.
#[derive(Debug, Clone)]
pub struct ProgrammingLanguage(String);

impl ProgrammingLanguage {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyLanguage);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for ProgrammingLanguage {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for ProgrammingLanguage {}

impl fmt::Display for ProgrammingLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
