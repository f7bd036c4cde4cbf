// Show command for one SDK's version history and requirement changes

use console::style;
use serde::Serialize;

use crate::analysis;
use crate::catalog::Catalog;
use crate::config;
use crate::display;
use crate::domain::{PlatformVersion, Sdk};
use crate::ui;

#[derive(Debug, Serialize)]
struct RequirementRow {
    platform: &'static str,
    version: String,
}

#[derive(Debug, Serialize)]
struct VersionRow {
    version: String,
    release_date: String,
    status: &'static str,
    /// Effective requirements after carry-forward resolution.
    requirements: Vec<RequirementRow>,
    /// Whether this release declared the requirements itself.
    declared: bool,
}

#[derive(Debug, Serialize)]
struct SdkDetail {
    name: String,
    language: String,
    tags: Vec<String>,
    platforms: Vec<&'static str>,
    total_versions: usize,
    versions: Vec<VersionRow>,
}

fn requirement_rows(requirements: &[PlatformVersion]) -> Vec<RequirementRow> {
    requirements
        .iter()
        .map(|pv| RequirementRow {
            platform: pv.platform().display_name(),
            version: pv.version().to_string(),
        })
        .collect()
}

fn detail(sdk: &Sdk, count: usize) -> SdkDetail {
    let versions = sdk
        .recent_versions(count)
        .iter()
        .enumerate()
        .map(|(index, version)| VersionRow {
            version: version.version().as_str().to_string(),
            release_date: version.release_date().to_iso_string(),
            status: analysis::version_status(sdk, index).label(),
            requirements: requirement_rows(analysis::current_requirements(sdk, index)),
            declared: version.has_requirements(),
        })
        .collect();

    SdkDetail {
        name: sdk.name().as_str().to_string(),
        language: sdk.language().as_str().to_string(),
        tags: sdk.tags().iter().map(|t| t.as_str().to_string()).collect(),
        platforms: analysis::available_platforms(sdk),
        total_versions: sdk.versions().len(),
        versions,
    }
}

pub fn show(name: &str, count: usize, all: bool, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::load(&config::catalog_path())?;
    let Some(sdk) = catalog.find_by_name(name) else {
        anyhow::bail!("SDK '{}' not found in catalog", name);
    };

    let count = if all { sdk.versions().len() } else { count };

    if json {
        ui::line(&serde_json::to_string_pretty(&detail(sdk, count))?);
        return Ok(());
    }

    ui::header(&format!("{} ({})", sdk.name(), sdk.language()));
    if !sdk.tags().is_empty() {
        let tags: Vec<&str> = sdk.tags().iter().map(|t| t.as_str()).collect();
        ui::dim(&format!("tags: {}", tags.join(", ")));
    }
    let platforms = analysis::available_platforms(sdk);
    if !platforms.is_empty() {
        ui::dim(&format!("platforms: {}", platforms.join(", ")));
    }
    ui::dim(&format!(
        "{} of {} version(s) declare requirements",
        sdk.versions_with_requirements().len(),
        sdk.versions().len()
    ));
    ui::line("");

    let shown = sdk.recent_versions(count);
    let version_width = shown
        .iter()
        .map(|v| v.version().as_str().len())
        .max()
        .unwrap_or(0)
        .max("VERSION".len());

    ui::line(&format!(
        "{:<version_width$}  {:<10}  {:<24}  STATUS",
        "VERSION", "RELEASED", "REQUIREMENTS"
    ));

    for (index, version) in shown.iter().enumerate() {
        let status = analysis::version_status(sdk, index);
        let requirements = analysis::current_requirements(sdk, index);
        let formatted = display::format_requirements(requirements);
        // Inherited requirements render dim so declared changes stand out.
        let requirement_cell = if version.has_requirements() {
            format!("{:<24}", formatted)
        } else {
            style(format!("{:<24}", formatted)).dim().to_string()
        };

        ui::line(&format!(
            "{:<version_width$}  {:<10}  {}  {}",
            version.version().as_str(),
            version.release_date().to_iso_string(),
            requirement_cell,
            display::status_style(status).apply_to(status.label()),
        ));
    }

    if count < sdk.versions().len() {
        ui::dim(&format!(
            "{} older version(s) not shown (use --all)",
            sdk.versions().len() - count
        ));
    }

    Ok(())
}
