// Constants module for shared string constants

pub const CATALOG_FILE: &str = "sdks.json";

/// Sentinel accepted by tag/language filters meaning "do not filter".
pub const ALL_FILTER: &str = "All";

/// How many releases `show` prints when no depth is requested.
pub const RECENT_VERSION_COUNT: usize = 5;

/// Schema version for the check --json output format.
/// Increment only on breaking changes to ensure future integrations can safely evolve.
pub const SCHEMA_VERSION: u32 = 1;
