// Config module for shared configuration utilities

use std::path::PathBuf;

use crate::constants;

pub fn data_dir() -> String {
    std::env::var("SDKCAT_DIR").unwrap_or_else(|_| ".".to_string())
}

pub fn catalog_path() -> PathBuf {
    PathBuf::from(data_dir()).join(constants::CATALOG_FILE)
}
