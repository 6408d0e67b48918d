use crate::utils::io::{guess_media_type, sanitize_filename};
use bytes::Bytes;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: String, media_type: String, bytes: Bytes) -> SelectedFile {
        SelectedFile {
            name,
            media_type,
            bytes,
        }
    }

    /// Builds a file the way a browser file input describes it: the bare
    /// file name plus a media type guessed from the extension.
    pub fn from_path(path: &Path, bytes: Bytes) -> SelectedFile {
        SelectedFile::new(sanitize_filename(path), guess_media_type(path), bytes)
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
