// SDK aggregate and its release entries

use std::collections::BTreeSet;

use crate::domain::error::DomainError;
use crate::domain::identity::{ProgrammingLanguage, SdkName, SdkTag};
use crate::domain::platform::{Platform, PlatformVersion};
use crate::domain::version::{ReleaseDate, VersionNumber};

/// One release of an SDK. The platform requirement list holds only what
/// this release declares itself; releases that changed nothing carry an
/// empty list and inherit through the analysis layer.
#[derive(Debug, Clone)]
pub struct SdkVersion {
    version: VersionNumber,
    release_date: ReleaseDate,
    platform_versions: Vec<PlatformVersion>,
}

impl SdkVersion {
    pub fn new(
        version: VersionNumber,
        release_date: ReleaseDate,
        platform_versions: Vec<PlatformVersion>,
    ) -> Self {
        Self {
            version,
            release_date,
            platform_versions,
        }
    }

    /// Build a release from raw strings, validating each piece.
    pub fn create(
        version: &str,
        release_date: &str,
        platform_versions: Vec<PlatformVersion>,
    ) -> Result<Self, DomainError> {
        Ok(Self::new(
            VersionNumber::new(version)?,
            ReleaseDate::parse(release_date)?,
            platform_versions,
        ))
    }

    pub fn version(&self) -> &VersionNumber {
        &self.version
    }

    pub fn release_date(&self) -> &ReleaseDate {
        &self.release_date
    }

    pub fn platform_versions(&self) -> &[PlatformVersion] {
        &self.platform_versions
    }

    pub fn has_requirements(&self) -> bool {
        !self.platform_versions.is_empty()
    }

    /// First declared requirement for the given platform, if any.
    /// Releases are expected to declare at most one entry per platform.
    #[allow(dead_code)] // part of the release lookup surface
    pub fn requirement_for(&self, platform: Platform) -> Option<&PlatformVersion> {
        self.platform_versions
            .iter()
            .find(|pv| pv.platform() == platform)
    }
}

/// An SDK with its identity metadata and full release history.
///
/// `versions` is ordered most-recent-first. That ordering is established
/// by the catalog loader and trusted here; the requirement carry-forward
/// scan in the analysis module depends on it.
#[derive(Debug, Clone)]
pub struct Sdk {
    name: SdkName,
    tags: Vec<SdkTag>,
    language: ProgrammingLanguage,
    versions: Vec<SdkVersion>,
}

impl Sdk {
    pub fn new(
        name: SdkName,
        tags: Vec<SdkTag>,
        language: ProgrammingLanguage,
        versions: Vec<SdkVersion>,
    ) -> Result<Self, DomainError> {
        if versions.is_empty() {
            return Err(DomainError::NoVersions);
        }
        Ok(Self {
            name,
            tags,
            language,
            versions,
        })
    }

    /// Build an SDK from raw strings, validating each piece.
    pub fn create<T: AsRef<str>>(
        name: &str,
        tags: &[T],
        language: &str,
        versions: Vec<SdkVersion>,
    ) -> Result<Self, DomainError> {
        let tags = tags
            .iter()
            .map(|tag| SdkTag::new(tag.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(
            SdkName::new(name)?,
            tags,
            ProgrammingLanguage::new(language)?,
            versions,
        )
    }

    pub fn name(&self) -> &SdkName {
        &self.name
    }

    pub fn tags(&self) -> &[SdkTag] {
        &self.tags
    }

    pub fn language(&self) -> &ProgrammingLanguage {
        &self.language
    }

    pub fn versions(&self) -> &[SdkVersion] {
        &self.versions
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.as_str().eq_ignore_ascii_case(tag))
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.language.as_str().eq_ignore_ascii_case(language)
    }

    /// Case-insensitive substring match against the name. An empty term
    /// matches every SDK.
    pub fn matches_search_term(&self, term: &str) -> bool {
        self.name
            .as_str()
            .to_lowercase()
            .contains(&term.to_lowercase())
    }

    /// The `count` most recent releases, or all of them if fewer exist.
    pub fn recent_versions(&self, count: usize) -> &[SdkVersion] {
        &self.versions[..count.min(self.versions.len())]
    }

    /// The most recent release. The non-empty constructor invariant makes
    /// this total.
    pub fn recent_version(&self) -> &SdkVersion {
        &self.versions[0]
    }

    /// Releases that declare their own requirements, in history order.
    pub fn versions_with_requirements(&self) -> Vec<&SdkVersion> {
        self.versions
            .iter()
            .filter(|v| v.has_requirements())
            .collect()
    }

    /// Distinct platforms named anywhere in this SDK's own declarations
    /// (not the carried-forward view), sorted by display name.
    pub fn available_platforms(&self) -> Vec<&'static str> {
        let platforms: BTreeSet<&'static str> = self
            .versions
            .iter()
            .flat_map(|v| v.platform_versions())
            .map(|pv| pv.platform().display_name())
            .collect();
        platforms.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_versions() -> Vec<SdkVersion> {
        vec![
            SdkVersion::create(
                "2.0.0",
                "2023-02-01",
                vec![
                    PlatformVersion::new(Platform::Ios, "15.0").unwrap(),
                    PlatformVersion::new(Platform::Android, "23").unwrap(),
                ],
            )
            .unwrap(),
            SdkVersion::create(
                "1.5.0",
                "2023-01-15",
                vec![PlatformVersion::new(Platform::Ios, "14.0").unwrap()],
            )
            .unwrap(),
            SdkVersion::create("1.0.0", "2022-12-01", vec![]).unwrap(),
        ]
    }

    fn sample_sdk() -> Sdk {
        Sdk::create(
            "React Native",
            &["framework", "cross-platform"],
            "JavaScript",
            sample_versions(),
        )
        .unwrap()
    }

    #[test]
    fn test_create_requires_at_least_one_version() {
        let err = Sdk::create::<&str>("Test SDK", &[], "JavaScript", vec![]).unwrap_err();
        assert_eq!(err, DomainError::NoVersions);
        assert_eq!(err.to_string(), "SDK must have at least one version");
    }

    #[test]
    fn test_create_propagates_value_errors() {
        assert_eq!(
            Sdk::create::<&str>("", &[], "JavaScript", sample_versions()).unwrap_err(),
            DomainError::EmptyName
        );
        assert_eq!(
            Sdk::create("Test SDK", &[" "], "JavaScript", sample_versions()).unwrap_err(),
            DomainError::EmptyTag
        );
    }

    #[test]
    fn test_has_tag_is_case_insensitive() {
        let sdk = sample_sdk();
        assert!(sdk.has_tag("framework"));
        assert!(sdk.has_tag("Framework"));
        assert!(sdk.has_tag("FRAMEWORK"));
        assert!(!sdk.has_tag("library"));
    }

    #[test]
    fn test_has_language_is_case_insensitive() {
        let sdk = sample_sdk();
        assert!(sdk.has_language("javascript"));
        assert!(sdk.has_language("JavaScript"));
        assert!(!sdk.has_language("Kotlin"));
    }

    #[test]
    fn test_matches_search_term() {
        let sdk = sample_sdk();
        assert!(sdk.matches_search_term("react"));
        assert!(sdk.matches_search_term("NATIVE"));
        assert!(sdk.matches_search_term(""));
        assert!(!sdk.matches_search_term("flutter"));
    }

    #[test]
    fn test_recent_versions_clamps_to_length() {
        let sdk = sample_sdk();
        assert_eq!(sdk.recent_versions(2).len(), 2);
        assert_eq!(sdk.recent_versions(2)[0].version().as_str(), "2.0.0");
        assert_eq!(sdk.recent_versions(10).len(), 3);
    }

    #[test]
    fn test_recent_version_is_first_entry() {
        assert_eq!(sample_sdk().recent_version().version().as_str(), "2.0.0");
    }

    #[test]
    fn test_versions_with_requirements_preserves_order() {
        let sdk = sample_sdk();
        let with_reqs = sdk.versions_with_requirements();
        assert_eq!(with_reqs.len(), 2);
        assert_eq!(with_reqs[0].version().as_str(), "2.0.0");
        assert_eq!(with_reqs[1].version().as_str(), "1.5.0");
    }

    #[test]
    fn test_available_platforms_sorted_alphabetically() {
        let sdk = sample_sdk();
        assert_eq!(sdk.available_platforms(), vec!["Android", "iOS"]);

        let bare = Sdk::create::<&str>(
            "Bare SDK",
            &[],
            "Swift",
            vec![SdkVersion::create("1.0.0", "2023-01-01", vec![]).unwrap()],
        )
        .unwrap();
        assert!(bare.available_platforms().is_empty());
    }

    #[test]
    fn test_requirement_for_returns_first_match() {
        let version = SdkVersion::create(
            "1.0.0",
            "2023-01-01",
            vec![
                PlatformVersion::new(Platform::Ios, "14.0").unwrap(),
                PlatformVersion::new(Platform::Ios, "15.0").unwrap(),
            ],
        )
        .unwrap();
        assert_eq!(
            version.requirement_for(Platform::Ios).unwrap().version(),
            "14.0"
        );
        assert!(version.requirement_for(Platform::Android).is_none());
    }
}
