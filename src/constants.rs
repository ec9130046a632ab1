//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default API base URL (the backend's local dev address)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Environment variable overriding the configured base URL
pub const BASE_URL_ENV: &str = "PROFILEZ_BASE_URL";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Records per page
pub const PAGE_SIZE: u32 = 20;

/// Newest first
pub const DEFAULT_SORT: &str = "createdAt,desc";

/// Banner text for a failed page fetch
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch candidates";

/// Banner text for a failed create
pub const CREATE_ERROR_MESSAGE: &str = "Failed to create candidate";

/// Longest accepted minimum-experience filter, in digits
pub const MAX_EXPERIENCE_DIGITS: usize = 3;

/// Directory under $HOME holding config and logs
pub const CONFIG_DIR_NAME: &str = ".profilez";

pub const CONFIG_FILE_NAME: &str = "config.yaml";

pub const LOG_FILE_NAME: &str = "profilez.log";

/// Application name
pub const APP_NAME: &str = "Profilez";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
