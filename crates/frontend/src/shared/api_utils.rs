//! API utilities for talking to the data service
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Resolves against the current window location, so the app talks to
/// whichever origin served it.
///
/// # Returns
/// - API base URL like "http://localhost:8080" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    location.origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The resource path (should start with "/")
///
/// # Example
/// ```no_run
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/customers");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
