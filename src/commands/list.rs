// List command for browsing the filtered catalog

use console::style;
use serde::Serialize;

use crate::analysis;
use crate::catalog::Catalog;
use crate::config;
use crate::display;
use crate::domain::Sdk;
use crate::filter::{self, FilterCriteria};
use crate::ui;

#[derive(Debug, Serialize)]
struct SdkSummary {
    name: String,
    language: String,
    tags: Vec<String>,
    latest_version: String,
    latest_release_date: String,
    platforms: Vec<&'static str>,
}

fn summarize(sdk: &Sdk) -> SdkSummary {
    let latest = sdk.recent_version();
    SdkSummary {
        name: sdk.name().as_str().to_string(),
        language: sdk.language().as_str().to_string(),
        tags: sdk.tags().iter().map(|t| t.as_str().to_string()).collect(),
        latest_version: latest.version().as_str().to_string(),
        latest_release_date: latest.release_date().to_iso_string(),
        platforms: sdk.available_platforms(),
    }
}

pub fn list(criteria: FilterCriteria, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::load(&config::catalog_path())?;
    let filtered = filter::filter_sdks(catalog.sdks(), &criteria);

    if json {
        let summaries: Vec<SdkSummary> = filtered.iter().map(|sdk| summarize(sdk)).collect();
        ui::line(&serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if filtered.is_empty() {
        if criteria.is_empty() {
            ui::dim("The catalog is empty.");
        } else {
            ui::dim("No SDKs match the given filters.");
        }
        return Ok(());
    }

    for sdk in &filtered {
        let latest = sdk.recent_version();
        let mut card = format!(
            "{} {}",
            style(sdk.name().as_str()).bold(),
            style(sdk.language().as_str()).cyan()
        );
        let tags = display::format_tags(sdk.tags());
        if !tags.is_empty() {
            card.push_str(&format!("  {}", style(tags).dim()));
        }
        ui::line(&card);
        ui::line(&format!(
            "  latest {} ({})",
            latest.version(),
            latest.release_date()
        ));
        // Badges mirror what currently applies, carried forward if the
        // latest release declared nothing itself.
        let requirements = analysis::current_requirements(sdk, 0);
        if !requirements.is_empty() {
            let badges: Vec<String> = requirements.iter().map(display::styled_platform).collect();
            ui::line(&format!("  requires: {}", badges.join(", ")));
        }
    }
    ui::dim(&format!("{} SDK(s)", filtered.len()));

    Ok(())
}
