use crate::config::constants::DEFAULT_FILE_NAME;
use std::path::Path;

/// Takes the last component of `path` and makes it safe to carry inside a
/// `Content-Disposition` header.
pub fn sanitize_filename(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let clean: String = name
        .chars()
        .map(|c| match c {
            '"' | '\\' | '/' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if clean.trim().is_empty() {
        DEFAULT_FILE_NAME.to_string()
    } else {
        clean
    }
}

pub fn guess_media_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
