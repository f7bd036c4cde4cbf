// Options command for listing the available filter values

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config;
use crate::filter;
use crate::ui;

#[derive(Debug, Serialize)]
struct FilterOptions {
    tags: Vec<String>,
    languages: Vec<String>,
}

pub fn options(json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::load(&config::catalog_path())?;
    let options = FilterOptions {
        tags: filter::all_tags(catalog.sdks()),
        languages: filter::all_languages(catalog.sdks()),
    };

    if json {
        ui::line(&serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    ui::header("Tags");
    if options.tags.is_empty() {
        ui::dim("  (none)");
    }
    for tag in &options.tags {
        ui::line(&format!("  {}", tag));
    }

    ui::header("Languages");
    if options.languages.is_empty() {
        ui::dim("  (none)");
    }
    for language in &options.languages {
        ui::line(&format!("  {}", language));
    }

    Ok(())
}
