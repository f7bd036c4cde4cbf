// Catalog narrowing by tag, language, and name search

use std::collections::BTreeSet;

use crate::constants;
use crate::domain::Sdk;

/// Criteria applied to the catalog. Absent fields, the `"All"` sentinel
/// (for tag and language), and blank search terms skip their filter.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub tag: Option<String>,
    pub language: Option<String>,
    pub search_term: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.active_tag().is_none()
            && self.active_language().is_none()
            && self.active_search_term().is_none()
    }

    fn active_tag(&self) -> Option<&str> {
        self.tag
            .as_deref()
            .filter(|t| !t.is_empty() && *t != constants::ALL_FILTER)
    }

    fn active_language(&self) -> Option<&str> {
        self.language
            .as_deref()
            .filter(|l| !l.is_empty() && *l != constants::ALL_FILTER)
    }

    fn active_search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Narrow `sdks` to those matching every active criterion. The filters
/// are independent predicates, so application order does not matter.
pub fn filter_sdks<'a>(sdks: &'a [Sdk], criteria: &FilterCriteria) -> Vec<&'a Sdk> {
    let mut filtered: Vec<&Sdk> = sdks.iter().collect();

    if let Some(tag) = criteria.active_tag() {
        filtered.retain(|sdk| sdk.has_tag(tag));
    }

    if let Some(language) = criteria.active_language() {
        filtered.retain(|sdk| sdk.has_language(language));
    }

    if let Some(term) = criteria.active_search_term() {
        filtered.retain(|sdk| sdk.matches_search_term(term));
    }

    filtered
}

/// Distinct tag strings across the catalog, sorted.
///
/// Dedup is by exact string, even though tag membership tests are
/// case-insensitive, so "UI" and "ui" both appear here. Long-standing
/// behavior that downstream option lists rely on.
pub fn all_tags(sdks: &[Sdk]) -> Vec<String> {
    let tags: BTreeSet<String> = sdks
        .iter()
        .flat_map(|sdk| sdk.tags())
        .map(|tag| tag.as_str().to_string())
        .collect();
    tags.into_iter().collect()
}

/// Distinct language strings across the catalog, sorted.
pub fn all_languages(sdks: &[Sdk]) -> Vec<String> {
    let languages: BTreeSet<String> = sdks
        .iter()
        .map(|sdk| sdk.language().as_str().to_string())
        .collect();
    languages.into_iter().collect()
}
