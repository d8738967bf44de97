//! Download-link construction and display names for uploaded files.

use url::Url;

/// Builds a download link for an uploaded file.
///
/// `path` is normally relative to `base` (for example `crop-images/leaf.jpg`)
/// and the two are joined with exactly one `/` between them; leading slashes
/// on `path` and trailing slashes on `base` are collapsed. A `path` that is
/// already an absolute `http`/`https` URL is returned unchanged, so records
/// that store full URLs keep working. An empty `path` returns `base` as-is.
pub fn file_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let relative = path.trim_start_matches('/');
    if relative.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), relative)
}

/// Display name for a download link: the last path segment of `url`.
///
/// Returns `None` when the URL does not parse, the path is empty or root,
/// or the last segment is `.`/`..`. Query strings do not leak into the name.
pub fn filename_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).next_back()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
