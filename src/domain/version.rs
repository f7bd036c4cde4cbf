// Release version number and release date value objects

use chrono::{Local, NaiveDate};
use std::fmt;

use crate::domain::error::DomainError;

/// Version label of an SDK release. Free-form (not parsed as semver),
/// compared by exact string match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionNumber(String);

impl VersionNumber {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyVersionNumber);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar date an SDK release shipped. Must not lie in the future;
/// today is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReleaseDate(NaiveDate);

impl ReleaseDate {
    pub fn new(date: NaiveDate) -> Result<Self, DomainError> {
        if date > Local::now().date_naive() {
            return Err(DomainError::FutureReleaseDate);
        }
        Ok(Self(date))
    }

    /// Parse a `YYYY-MM-DD` string into a release date.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| DomainError::InvalidReleaseDate(value.to_string()))?;
        Self::new(date)
    }

    /// ISO `YYYY-MM-DD` form for display and serialization.
    pub fn to_iso_string(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_version_number_rejects_blank() {
        assert_eq!(VersionNumber::new(""), Err(DomainError::EmptyVersionNumber));
        assert_eq!(
            VersionNumber::new("   "),
            Err(DomainError::EmptyVersionNumber)
        );
        assert_eq!(VersionNumber::new("1.2.3").unwrap().as_str(), "1.2.3");
    }

    #[test]
    fn test_version_number_equality_is_exact() {
        assert_eq!(
            VersionNumber::new("1.2.3").unwrap(),
            VersionNumber::new("1.2.3").unwrap()
        );
        assert_ne!(
            VersionNumber::new("1.2.3").unwrap(),
            VersionNumber::new("1.2.4").unwrap()
        );
    }

    #[test]
    fn test_parse_valid_date() {
        let date = ReleaseDate::parse("2023-01-15").unwrap();
        assert_eq!(date.to_iso_string(), "2023-01-15");
    }

    #[test]
    fn test_parse_invalid_date() {
        assert!(matches!(
            ReleaseDate::parse("not-a-date"),
            Err(DomainError::InvalidReleaseDate(_))
        ));
        assert!(matches!(
            ReleaseDate::parse("2023-13-40"),
            Err(DomainError::InvalidReleaseDate(_))
        ));
    }

    #[test]
    fn test_rejects_future_date() {
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        assert_eq!(
            ReleaseDate::new(tomorrow),
            Err(DomainError::FutureReleaseDate)
        );
    }

    #[test]
    fn test_accepts_today() {
        let today = Local::now().date_naive();
        assert!(ReleaseDate::new(today).is_ok());
    }
}
