//! Uploads endpoint resolution and download-link helpers.
//!
//! The backend serves uploaded files under `<root>/uploads`, while the
//! configured API base URL normally points at the versioned API root
//! (`<root>/api/V1`). Resolution rewrites one into the other, falling back
//! to the hosted backend when nothing is configured.

mod link;

pub use link::{file_url, filename_from_url};

/// Uploads base URL used when no API base URL is configured.
pub const FALLBACK_UPLOADS_BASE_URL: &str =
    "https://sahaja-krushi-backend-h0t1.onrender.com/uploads";

/// Versioned API suffix recognized at the end of a configured base URL.
const API_V1_SUFFIX: &str = "/api/V1";

/// Path under which the backend serves uploaded files.
const UPLOADS_SUFFIX: &str = "/uploads";

/// Resolves the base URL under which uploaded files are served.
///
/// A configured, non-empty API base URL has a trailing `/api/V1` stripped
/// (exact, case-sensitive match at the end of the string only) and
/// `/uploads` appended. An absent or empty value resolves to
/// [`FALLBACK_UPLOADS_BASE_URL`]. Always returns a non-empty string; the
/// configured value is otherwise used verbatim, so a base URL on another API
/// version comes back as e.g. `.../api/V2/uploads`.
///
/// # Examples
///
/// - `resolve_base_url(Some("https://api.example.com/api/V1"))` → `"https://api.example.com/uploads"`
/// - `resolve_base_url(Some("https://api.example.com"))` → `"https://api.example.com/uploads"`
/// - `resolve_base_url(None)` → [`FALLBACK_UPLOADS_BASE_URL`]
pub fn resolve_base_url(api_base_url: Option<&str>) -> String {
    match api_base_url {
        Some(base) if !base.is_empty() => {
            let root = base.strip_suffix(API_V1_SUFFIX).unwrap_or(base);
            format!("{root}{UPLOADS_SUFFIX}")
        }
        _ => FALLBACK_UPLOADS_BASE_URL.to_string(),
    }
}
