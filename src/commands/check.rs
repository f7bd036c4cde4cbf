// Check command for catalog health reporting

use serde::Serialize;
use std::path::Path;

use crate::catalog::Catalog;
use crate::config;
use crate::constants;
use crate::ui;

#[derive(Debug, Serialize)]
struct Issue {
    severity: String,
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<usize>,
}

#[derive(Debug, Serialize)]
struct CatalogInfo {
    present: bool,
    valid: bool,
    path: String,
    loaded: usize,
    dropped: usize,
}

#[derive(Debug, Serialize)]
struct CheckOutput {
    schema_version: u32,
    status: String,
    exit_code: i32,
    catalog: CatalogInfo,
    issues: Vec<Issue>,
}

pub fn check_catalog(json: bool) -> anyhow::Result<i32> {
    let path = config::catalog_path();
    let mut issues = Vec::new();

    let present = Path::new(&path).exists();
    let mut valid = false;
    let mut loaded = 0;
    let mut dropped = 0;

    if !present {
        issues.push(Issue {
            severity: "error".to_string(),
            code: "CATALOG_MISSING".to_string(),
            message: "Catalog file not found".to_string(),
            record: None,
        });
    } else {
        match Catalog::load(&path) {
            Ok(catalog) => {
                valid = true;
                loaded = catalog.len();
                dropped = catalog.dropped().len();

                for record in catalog.dropped() {
                    issues.push(Issue {
                        severity: "warning".to_string(),
                        code: "RECORD_MALFORMED".to_string(),
                        message: format!(
                            "Record {} ({}) dropped: {}",
                            record.index,
                            record.name.as_deref().unwrap_or("unnamed"),
                            record.reason
                        ),
                        record: Some(record.index),
                    });
                }

                if catalog.is_empty() {
                    issues.push(Issue {
                        severity: "warning".to_string(),
                        code: "CATALOG_EMPTY".to_string(),
                        message: "Catalog contains no usable SDK records".to_string(),
                        record: None,
                    });
                }
            }
            Err(e) => {
                issues.push(Issue {
                    severity: "error".to_string(),
                    code: "CATALOG_INVALID".to_string(),
                    message: format!("Catalog file is invalid: {:#}", e),
                    record: None,
                });
            }
        }
    }

    // Sort issues deterministically by code, then message
    issues.sort_by(|a, b| a.code.cmp(&b.code).then_with(|| a.message.cmp(&b.message)));

    let has_errors = issues.iter().any(|i| i.severity == "error");
    let has_warnings = issues.iter().any(|i| i.severity == "warning");

    let (status, exit_code) = if has_errors {
        ("error".to_string(), 2)
    } else if has_warnings {
        ("warning".to_string(), 1)
    } else {
        ("ok".to_string(), 0)
    };

    let output = CheckOutput {
        schema_version: constants::SCHEMA_VERSION,
        status,
        exit_code,
        catalog: CatalogInfo {
            present,
            valid,
            path: path.display().to_string(),
            loaded,
            dropped,
        },
        issues,
    };

    if json {
        ui::line(&serde_json::to_string_pretty(&output)?);
    } else {
        output_human_readable(&output);
    }

    Ok(exit_code)
}

fn output_human_readable(output: &CheckOutput) {
    ui::status("Catalog", &output.catalog.path);
    if output.catalog.valid {
        ui::line(&format!(
            "  {} SDK(s) loaded, {} record(s) dropped",
            output.catalog.loaded, output.catalog.dropped
        ));
    }

    for issue in &output.issues {
        match issue.severity.as_str() {
            "error" => ui::error(&issue.message),
            _ => ui::warning(&issue.message),
        }
    }

    match output.status.as_str() {
        "ok" => ui::success("Catalog is healthy"),
        "warning" => ui::warning("Catalog has warnings"),
        _ => ui::error("Catalog has errors"),
    }
}
