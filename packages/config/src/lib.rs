//! Configuration and environment variable management for Storekeep
//!
//! Centralizes every environment variable the console reads, along with
//! the defaults used when a variable is unset or malformed.

pub mod constants;

use std::path::PathBuf;

/// Default backend base URL when `STOREKEEP_API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Default HTTP request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default number of rows per list page
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Default toast auto-dismiss duration in milliseconds
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Default UI language code
pub const DEFAULT_LANG: &str = "en";

/// Directory under the user's home where session and settings files live
pub const CONFIG_DIR_NAME: &str = ".storekeep";

/// Get the backend base URL, trimming any trailing slash
pub fn api_url() -> String {
    let url = std::env::var(constants::STOREKEEP_API_URL)
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    url.trim_end_matches('/').to_string()
}

/// Get the HTTP request timeout in seconds
pub fn http_timeout_secs() -> u64 {
    parsed_or_default(
        constants::STOREKEEP_HTTP_TIMEOUT_SECS,
        DEFAULT_HTTP_TIMEOUT_SECS,
    )
}

/// Get the list page size
pub fn page_size() -> u32 {
    parsed_or_default(constants::STOREKEEP_PAGE_SIZE, DEFAULT_PAGE_SIZE)
}

/// Get the toast auto-dismiss duration in milliseconds
pub fn toast_duration_ms() -> u64 {
    parsed_or_default(
        constants::STOREKEEP_TOAST_DURATION_MS,
        DEFAULT_TOAST_DURATION_MS,
    )
}

/// Get the configured language code (two letters, lowercased)
pub fn lang() -> String {
    std::env::var(constants::STOREKEEP_LANG)
        .map(|code| code.trim().to_lowercase())
        .unwrap_or_else(|_| DEFAULT_LANG.to_string())
}

/// Get the Storekeep config directory under the user's home
///
/// Falls back to a relative `.storekeep` directory when no home directory
/// can be determined (containers, stripped-down CI environments).
pub fn config_dir() -> PathBuf {
    let home = std::env::var(constants::HOME)
        .or_else(|_| std::env::var(constants::USERPROFILE))
        .map(PathBuf::from);

    match home {
        Ok(home) => home.join(CONFIG_DIR_NAME),
        Err(_) => {
            tracing::warn!("could not determine home directory, using relative config dir");
            PathBuf::from(CONFIG_DIR_NAME)
        }
    }
}

fn parsed_or_default<T: std::str::FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("invalid value for {}: {:?}, using default {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Defaults apply when nothing is exported
        assert_eq!(DEFAULT_PAGE_SIZE, 5);
        assert_eq!(DEFAULT_TOAST_DURATION_MS, 3000);
        assert_eq!(DEFAULT_LANG, "en");
    }

    #[test]
    fn test_api_url_trims_trailing_slash() {
        std::env::set_var(constants::STOREKEEP_API_URL, "http://api.example.com/");
        assert_eq!(api_url(), "http://api.example.com");
        std::env::remove_var(constants::STOREKEEP_API_URL);
    }

    #[test]
    fn test_malformed_numeric_falls_back() {
        std::env::set_var(constants::STOREKEEP_PAGE_SIZE, "not-a-number");
        assert_eq!(page_size(), DEFAULT_PAGE_SIZE);
        std::env::remove_var(constants::STOREKEEP_PAGE_SIZE);
    }
}
