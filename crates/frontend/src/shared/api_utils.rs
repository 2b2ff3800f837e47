//! API utilities for talking to the extraction service
//!
//! The service runs next to the page on its own port; a `?api=` query
//! parameter points the page somewhere else.

use serde::Deserialize;

/// Port of the extraction service when no override is given
pub const DEFAULT_API_PORT: u16 = 5000;

#[derive(Debug, Default, Deserialize)]
struct ApiQuery {
    api: Option<String>,
}

/// Get the base URL for API requests
///
/// # Returns
/// - the `api` query parameter when present, e.g. "http://10.0.0.5:8000"
/// - otherwise the page host on [`DEFAULT_API_PORT`], e.g. "http://localhost:5000"
/// - empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();

    let search = location.search().unwrap_or_default();
    if let Some(base) = api_override(&search) {
        return base;
    }

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/extract");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Base URL taken from a location search string (`?api=...`)
pub fn api_override(search: &str) -> Option<String> {
    let query: ApiQuery = serde_qs::from_str(search.trim_start_matches('?')).ok()?;
    query
        .api
        .map(|base| base.trim().trim_end_matches('/').to_string())
        .filter(|base| !base.is_empty())
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_override() {
        assert_eq!(
            api_override("?api=http://10.0.0.5:8000"),
            Some("http://10.0.0.5:8000".to_string())
        );
        assert_eq!(
            api_override("?api=https%3A%2F%2Fextract.example.com%2F"),
            Some("https://extract.example.com".to_string())
        );
        assert_eq!(api_override("?tab=products"), None);
        assert_eq!(api_override("?api="), None);
        assert_eq!(api_override(""), None);
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:5000", "/api/extract"),
            "http://localhost:5000/api/extract"
        );
        assert_eq!(
            join_url("http://localhost:5000/", "/api/extract"),
            "http://localhost:5000/api/extract"
        );
    }
}
