use crate::models::selected_file_dao::SelectedFile;
use bytes::Bytes;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("No file selected")]
    NoFileSelected,
    #[error("Failed to read file: {0}")]
    ReadFailed(#[from] std::io::Error),
}

// Where the file to upload comes from
pub trait FileInput {
    async fn selected(&self) -> Result<SelectedFile, InputError>;
}

/// Holds at most one chosen path. Nothing is read until `selected` is called.
#[derive(Debug, Clone, Default)]
pub struct FileChooser {
    path: Option<PathBuf>,
}

impl FileChooser {
    pub fn new(path: Option<PathBuf>) -> FileChooser {
        FileChooser { path }
    }
}

impl FileInput for FileChooser {
    async fn selected(&self) -> Result<SelectedFile, InputError> {
        let path = self.path.as_ref().ok_or(InputError::NoFileSelected)?;
        let bytes = tokio::fs::read(path).await?;
        debug!("read {} bytes from {:?}", bytes.len(), path);

        Ok(SelectedFile::from_path(path, Bytes::from(bytes)))
    }
}
