// Catalog repository backed by a read-only JSON snapshot
//
// The snapshot is loaded once per invocation and never mutated. Records
// the loader cannot turn into a valid SDK are dropped (and remembered for
// the check command) instead of failing the whole catalog.

use anyhow::Context;
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::{DomainError, Platform, PlatformVersion, Sdk, SdkVersion};

#[derive(Debug, Deserialize)]
struct SdkRecord {
    name: String,
    tags: Vec<String>,
    language: String,
    versions: Vec<VersionRecord>,
}

#[derive(Debug, Deserialize)]
struct VersionRecord {
    version: String,
    #[serde(rename = "releaseDate")]
    release_date: String,
    #[serde(rename = "platformVersions", default)]
    platform_versions: Vec<PlatformRecord>,
}

#[derive(Debug, Deserialize)]
struct PlatformRecord {
    platform: Platform,
    version: String,
}

/// A record the loader refused, with the position it held in the file.
#[derive(Debug, Clone)]
pub struct DroppedRecord {
    pub index: usize,
    pub name: Option<String>,
    pub reason: String,
}

/// The in-memory SDK snapshot. Version order inside each record is kept
/// exactly as the file gives it (most-recent-first by contract); the
/// loader never reorders.
#[derive(Debug)]
pub struct Catalog {
    sdks: Vec<Sdk>,
    dropped: Vec<DroppedRecord>,
}

impl Catalog {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file '{}'", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Failed to parse catalog file '{}'", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let records: Vec<serde_json::Value> =
            serde_json::from_str(text).context("Catalog document must be a JSON array")?;

        let mut sdks = Vec::with_capacity(records.len());
        let mut dropped = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            let name = record
                .get("name")
                .and_then(|n| n.as_str())
                .map(str::to_string);

            match map_record(record) {
                Ok(sdk) => sdks.push(sdk),
                Err(reason) => {
                    warn!(
                        "Dropping malformed catalog record {} ({}): {}",
                        index,
                        name.as_deref().unwrap_or("unnamed"),
                        reason
                    );
                    dropped.push(DroppedRecord {
                        index,
                        name,
                        reason,
                    });
                }
            }
        }

        debug!(
            "Loaded catalog: {} SDK(s), {} record(s) dropped",
            sdks.len(),
            dropped.len()
        );

        Ok(Self { sdks, dropped })
    }

    pub fn sdks(&self) -> &[Sdk] {
        &self.sdks
    }

    pub fn len(&self) -> usize {
        self.sdks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sdks.is_empty()
    }

    pub fn dropped(&self) -> &[DroppedRecord] {
        &self.dropped
    }

    /// Exact-name lookup, case-sensitive.
    pub fn find_by_name(&self, name: &str) -> Option<&Sdk> {
        self.sdks.iter().find(|sdk| sdk.name().as_str() == name)
    }

    #[allow(dead_code)] // part of the repository lookup surface
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Sdk> {
        self.sdks.iter().filter(|sdk| sdk.has_tag(tag)).collect()
    }

    #[allow(dead_code)] // part of the repository lookup surface
    pub fn find_by_language(&self, language: &str) -> Vec<&Sdk> {
        self.sdks
            .iter()
            .filter(|sdk| sdk.has_language(language))
            .collect()
    }
}

fn map_record(record: serde_json::Value) -> Result<Sdk, String> {
    let record: SdkRecord = serde_json::from_value(record)
        .map_err(|e| format!("missing or malformed fields: {}", e))?;

    let versions = record
        .versions
        .into_iter()
        .map(map_version)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;

    Sdk::create(&record.name, &record.tags, &record.language, versions)
        .map_err(|e| e.to_string())
}

fn map_version(record: VersionRecord) -> Result<SdkVersion, DomainError> {
    let platform_versions = record
        .platform_versions
        .into_iter()
        .map(|pv| PlatformVersion::new(pv.platform, pv.version))
        .collect::<Result<Vec<_>, _>>()?;

    SdkVersion::create(&record.version, &record.release_date, platform_versions)
}
