/// Turns the `photograph_path` stored by the HR API into a URL the browser
/// can load. Absolute URLs pass through; relative paths are served from the
/// HR API's origin.
pub fn normalize_photo_url(path: &str, hr_origin: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }
    let relative = path.trim_start_matches('/');
    Some(format!("{}/{}", hr_origin.trim_end_matches('/'), relative))
}
