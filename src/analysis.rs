// Requirement carry-forward and change classification
//
// Platform requirements are only recorded on the release where they
// change. These functions resolve what actually applies to any release
// and label how it moved relative to the release before it.

use std::fmt;

use crate::domain::{PlatformVersion, Sdk};

/// How a release's platform requirements relate to the prior release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStatus {
    NoData,
    InitialRequirements,
    NoRequirements,
    SameAsPrevious,
    RequirementsAdded,
    RequirementsChanged,
}

impl VersionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VersionStatus::NoData => "No data",
            VersionStatus::InitialRequirements => "Initial requirements",
            VersionStatus::NoRequirements => "No requirements",
            VersionStatus::SameAsPrevious => "Same as previous",
            VersionStatus::RequirementsAdded => "Requirements added",
            VersionStatus::RequirementsChanged => "Requirements changed",
        }
    }
}

impl fmt::Display for VersionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Effective requirements for the release at `index` in the SDK's
/// most-recent-first history.
///
/// A release that declares its own requirements keeps them verbatim. One
/// that declares nothing inherits from the nearest release at a lower
/// index (the next more recent one) with a declaration. Out-of-bounds
/// indices and SDKs with no declarations at all resolve to empty.
pub fn current_requirements(sdk: &Sdk, index: usize) -> &[PlatformVersion] {
    let versions = sdk.versions();
    let Some(version) = versions.get(index) else {
        return &[];
    };

    if version.has_requirements() {
        return version.platform_versions();
    }

    versions[..index]
        .iter()
        .rev()
        .find(|v| v.has_requirements())
        .map(|v| v.platform_versions())
        .unwrap_or(&[])
}

/// Classify the release at `index` against the effective requirements of
/// the release displayed before it.
pub fn version_status(sdk: &Sdk, index: usize) -> VersionStatus {
    let versions = sdk.versions();
    let Some(version) = versions.get(index) else {
        return VersionStatus::NoData;
    };

    let has_own = version.has_requirements();

    if index == 0 {
        return if has_own {
            VersionStatus::InitialRequirements
        } else {
            VersionStatus::NoRequirements
        };
    }

    if !has_own {
        return VersionStatus::SameAsPrevious;
    }

    let current = version.platform_versions();
    let previous = current_requirements(sdk, index - 1);

    if previous.is_empty() {
        return VersionStatus::RequirementsAdded;
    }

    if requirements_differ(current, previous) {
        VersionStatus::RequirementsChanged
    } else {
        VersionStatus::SameAsPrevious
    }
}

/// Distinct platforms the SDK has ever declared requirements for.
pub fn available_platforms(sdk: &Sdk) -> Vec<&'static str> {
    sdk.available_platforms()
}

/// Set comparison keyed by platform: a platform added, dropped, or
/// re-versioned counts as a difference; entry order does not.
fn requirements_differ(current: &[PlatformVersion], previous: &[PlatformVersion]) -> bool {
    let changed_or_added = current.iter().any(|cur| {
        match previous.iter().find(|prev| prev.platform() == cur.platform()) {
            Some(prev) => prev.version() != cur.version(),
            None => true,
        }
    });

    let dropped = previous
        .iter()
        .any(|prev| !current.iter().any(|cur| cur.platform() == prev.platform()));

    changed_or_added || dropped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Platform, SdkVersion};

    fn pv(platform: Platform, version: &str) -> PlatformVersion {
        PlatformVersion::new(platform, version).unwrap()
    }

    fn sample_sdk() -> Sdk {
        let versions = vec![
            SdkVersion::create(
                "3.0.0",
                "2023-03-01",
                vec![pv(Platform::Ios, "16.0"), pv(Platform::Android, "24")],
            )
            .unwrap(),
            SdkVersion::create(
                "2.5.0",
                "2023-02-15",
                vec![pv(Platform::Ios, "15.0"), pv(Platform::Android, "23")],
            )
            .unwrap(),
            SdkVersion::create(
                "2.0.0",
                "2023-01-01",
                vec![pv(Platform::Ios, "15.0"), pv(Platform::Android, "23")],
            )
            .unwrap(),
            SdkVersion::create("1.5.0", "2022-12-01", vec![]).unwrap(),
            SdkVersion::create(
                "1.0.0",
                "2022-11-01",
                vec![pv(Platform::Ios, "14.0"), pv(Platform::Android, "21")],
            )
            .unwrap(),
        ];
        Sdk::create("Test SDK", &["framework"], "JavaScript", versions).unwrap()
    }

    #[test]
    fn test_own_requirements_returned_verbatim() {
        let sdk = sample_sdk();
        let reqs = current_requirements(&sdk, 0);
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0], pv(Platform::Ios, "16.0"));
        assert_eq!(reqs[1], pv(Platform::Android, "24"));
    }

    #[test]
    fn test_inherits_from_nearest_more_recent_declaration() {
        let sdk = sample_sdk();
        // 1.5.0 declares nothing; 2.0.0 is the nearest more recent
        // release with a declaration.
        let reqs = current_requirements(&sdk, 3);
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0], pv(Platform::Ios, "15.0"));
        assert_eq!(reqs[1], pv(Platform::Android, "23"));
    }

    #[test]
    fn test_carry_forward_prefers_nearer_record() {
        // [v0(R0), v1(empty), v2(R2)]: index 1 must resolve to R0, not R2.
        let versions = vec![
            SdkVersion::create("3.0.0", "2023-03-01", vec![pv(Platform::Ios, "16.0")]).unwrap(),
            SdkVersion::create("2.0.0", "2023-02-01", vec![]).unwrap(),
            SdkVersion::create("1.0.0", "2023-01-01", vec![pv(Platform::Ios, "13.0")]).unwrap(),
        ];
        let sdk = Sdk::create::<&str>("Test SDK", &[], "Swift", versions).unwrap();
        let reqs = current_requirements(&sdk, 1);
        assert_eq!(reqs, &[pv(Platform::Ios, "16.0")]);
    }

    #[test]
    fn test_out_of_bounds_resolves_empty() {
        let sdk = sample_sdk();
        assert!(current_requirements(&sdk, 10).is_empty());
    }

    #[test]
    fn test_no_declarations_resolve_empty() {
        let versions = vec![
            SdkVersion::create("1.0.0", "2023-01-01", vec![]).unwrap(),
            SdkVersion::create("0.9.0", "2022-12-01", vec![]).unwrap(),
        ];
        let sdk = Sdk::create::<&str>("Test SDK", &[], "JavaScript", versions).unwrap();
        assert!(current_requirements(&sdk, 0).is_empty());
        assert!(current_requirements(&sdk, 1).is_empty());
    }

    #[test]
    fn test_status_initial_requirements() {
        let versions =
            vec![SdkVersion::create("1.0.0", "2023-01-01", vec![pv(Platform::Ios, "14.0")]).unwrap()];
        let sdk = Sdk::create::<&str>("Test SDK", &[], "JavaScript", versions).unwrap();
        assert_eq!(version_status(&sdk, 0), VersionStatus::InitialRequirements);
    }

    #[test]
    fn test_status_no_requirements() {
        let versions = vec![SdkVersion::create("1.0.0", "2023-01-01", vec![]).unwrap()];
        let sdk = Sdk::create::<&str>("Test SDK", &[], "JavaScript", versions).unwrap();
        assert_eq!(version_status(&sdk, 0), VersionStatus::NoRequirements);
    }

    #[test]
    fn test_status_no_data_out_of_bounds() {
        let sdk = sample_sdk();
        assert_eq!(version_status(&sdk, 10), VersionStatus::NoData);
        assert_eq!(version_status(&sdk, 5), VersionStatus::NoData);
    }

    #[test]
    fn test_full_history_classification() {
        let sdk = sample_sdk();
        // 3.0.0 sits at the boundary position with nothing to compare to.
        assert_eq!(version_status(&sdk, 0), VersionStatus::InitialRequirements);
        // 2.5.0's set differs from the effective set at index 0.
        assert_eq!(version_status(&sdk, 1), VersionStatus::RequirementsChanged);
        // 2.0.0 re-declares exactly what 2.5.0 declares.
        assert_eq!(version_status(&sdk, 2), VersionStatus::SameAsPrevious);
        // 1.5.0 declares nothing and inherits silently.
        assert_eq!(version_status(&sdk, 3), VersionStatus::SameAsPrevious);
        // 1.0.0's set differs from the effective set at index 3 (carried
        // forward from 2.0.0).
        assert_eq!(version_status(&sdk, 4), VersionStatus::RequirementsChanged);
    }

    #[test]
    fn test_status_requirements_added_after_none() {
        // The entry above declares nothing, so the effective set at index 0
        // is empty and index 1's declaration counts as added.
        let versions = vec![
            SdkVersion::create("2.0.0", "2023-02-01", vec![]).unwrap(),
            SdkVersion::create("1.0.0", "2023-01-01", vec![pv(Platform::Ios, "15.0")]).unwrap(),
        ];
        let sdk = Sdk::create::<&str>("Test SDK", &[], "Swift", versions).unwrap();
        assert_eq!(version_status(&sdk, 1), VersionStatus::RequirementsAdded);
    }

    #[test]
    fn test_identical_set_in_different_order_is_same() {
        let versions = vec![
            SdkVersion::create(
                "2.0.0",
                "2023-02-01",
                vec![pv(Platform::Android, "23"), pv(Platform::Ios, "15.0")],
            )
            .unwrap(),
            SdkVersion::create(
                "1.0.0",
                "2023-01-01",
                vec![pv(Platform::Ios, "15.0"), pv(Platform::Android, "23")],
            )
            .unwrap(),
        ];
        let sdk = Sdk::create::<&str>("Test SDK", &[], "Kotlin", versions).unwrap();
        assert_eq!(version_status(&sdk, 1), VersionStatus::SameAsPrevious);
    }

    #[test]
    fn test_version_bump_on_one_platform_is_changed() {
        let versions = vec![
            SdkVersion::create(
                "2.0.0",
                "2023-02-01",
                vec![pv(Platform::Ios, "16.0"), pv(Platform::Android, "23")],
            )
            .unwrap(),
            SdkVersion::create(
                "1.0.0",
                "2023-01-01",
                vec![pv(Platform::Ios, "15.0"), pv(Platform::Android, "23")],
            )
            .unwrap(),
        ];
        let sdk = Sdk::create::<&str>("Test SDK", &[], "Kotlin", versions).unwrap();
        assert_eq!(version_status(&sdk, 1), VersionStatus::RequirementsChanged);
    }

    #[test]
    fn test_added_platform_is_changed() {
        let versions = vec![
            SdkVersion::create(
                "2.0.0",
                "2023-02-01",
                vec![pv(Platform::Ios, "15.0"), pv(Platform::Android, "23")],
            )
            .unwrap(),
            SdkVersion::create("1.0.0", "2023-01-01", vec![pv(Platform::Ios, "15.0")]).unwrap(),
        ];
        let sdk = Sdk::create::<&str>("Test SDK", &[], "Kotlin", versions).unwrap();
        assert_eq!(version_status(&sdk, 1), VersionStatus::RequirementsChanged);
    }

    #[test]
    fn test_dropped_platform_is_changed() {
        let versions = vec![
            SdkVersion::create(
                "2.0.0",
                "2023-02-01",
                vec![pv(Platform::Ios, "15.0"), pv(Platform::Android, "23")],
            )
            .unwrap(),
            SdkVersion::create("1.0.0", "2023-01-01", vec![pv(Platform::Android, "23")]).unwrap(),
        ];
        let sdk = Sdk::create::<&str>("Test SDK", &[], "Kotlin", versions).unwrap();
        assert_eq!(version_status(&sdk, 1), VersionStatus::RequirementsChanged);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(VersionStatus::NoData.label(), "No data");
        assert_eq!(
            VersionStatus::InitialRequirements.label(),
            "Initial requirements"
        );
        assert_eq!(VersionStatus::NoRequirements.label(), "No requirements");
        assert_eq!(VersionStatus::SameAsPrevious.label(), "Same as previous");
        assert_eq!(
            VersionStatus::RequirementsAdded.label(),
            "Requirements added"
        );
        assert_eq!(
            VersionStatus::RequirementsChanged.to_string(),
            "Requirements changed"
        );
    }

    #[test]
    fn test_available_platforms_delegates_to_sdk() {
        let sdk = sample_sdk();
        assert_eq!(available_platforms(&sdk), vec!["Android", "iOS"]);
    }
}
