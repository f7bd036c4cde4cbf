// Display formatting for platforms, requirements, and status labels

use console::Style;

use crate::analysis::VersionStatus;
use crate::domain::{Platform, PlatformVersion, SdkTag};

/// Badge style per platform. Every platform gets an explicit arm; a new
/// platform variant will not silently render unstyled.
pub fn platform_style(platform: Platform) -> Style {
    match platform {
        Platform::Ios => Style::new().white().bold(),
        Platform::Android => Style::new().green(),
    }
}

pub fn styled_platform(pv: &PlatformVersion) -> String {
    platform_style(pv.platform())
        .apply_to(pv.to_string())
        .to_string()
}

/// Plain rendering of a requirement set, e.g. "iOS 15.0+, Android 23+".
pub fn format_requirements(requirements: &[PlatformVersion]) -> String {
    if requirements.is_empty() {
        return "-".to_string();
    }
    requirements
        .iter()
        .map(|pv| pv.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Card-style tag summary: first tag plus a count of the rest.
pub fn format_tags(tags: &[SdkTag]) -> String {
    match tags {
        [] => String::new(),
        [only] => only.as_str().to_string(),
        [first, rest @ ..] => format!("{} +{} more", first.as_str(), rest.len()),
    }
}

pub fn status_style(status: VersionStatus) -> Style {
    match status {
        VersionStatus::NoData => Style::new().dim(),
        VersionStatus::InitialRequirements => Style::new().cyan(),
        VersionStatus::NoRequirements => Style::new().dim(),
        VersionStatus::SameAsPrevious => Style::new().dim(),
        VersionStatus::RequirementsAdded => Style::new().green(),
        VersionStatus::RequirementsChanged => Style::new().yellow(),
    }
}
