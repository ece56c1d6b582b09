//! Local image files picked for diagnosis

use crate::error::{KisanError, Result};
use kisan_common::{PreviewHandle, SelectedImage};
use std::path::{Path, PathBuf};

/// An image read from disk, type detected from its contents
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Preview of a file on disk; nothing to revoke
///
/// Keeps the bytes that were sniffed at selection so the upload sends
/// exactly what was checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    path: PathBuf,
    url: String,
    bytes: Vec<u8>,
}

impl FilePreview {
    pub fn new(path: &Path, bytes: Vec<u8>) -> Self {
        Self {
            path: path.to_path_buf(),
            url: format!("file://{}", path.display()),
            bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl PreviewHandle for FilePreview {
    fn url(&self) -> &str {
        &self.url
    }
}

/// MIME type from magic bytes, `None` for anything that is not an image
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes).ok().map(|f| f.to_mime_type())
}

pub async fn read_image(path: &Path) -> Result<ImageFile> {
    if !path.is_file() {
        return Err(KisanError::FileNotFound(path.display().to_string()));
    }

    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let mime_type = sniff_mime(&bytes)
        .ok_or_else(|| KisanError::UnsupportedImage(file_name.clone()))?;

    Ok(ImageFile {
        path: path.to_path_buf(),
        file_name,
        mime_type: mime_type.to_string(),
        bytes,
    })
}

impl ImageFile {
    pub fn selection(&self) -> SelectedImage {
        SelectedImage::new(&self.file_name, &self.mime_type, self.bytes.len() as u64)
    }

    pub fn preview(&self) -> FilePreview {
        FilePreview::new(&self.path, self.bytes.clone())
    }

    /// Selection metadata and the preview owning the bytes
    pub fn into_selection(self) -> (SelectedImage, FilePreview) {
        let selection = self.selection();
        (selection, FilePreview::new(&self.path, self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sniff_png() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        assert_eq!(sniff_mime(&png), Some("image/png"));
    }

    #[test]
    fn test_sniff_jpeg() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10, b'J', b'F', b'I', b'F'];
        assert_eq!(sniff_mime(&jpeg), Some("image/jpeg"));
    }

    #[test]
    fn test_sniff_text() {
        assert_eq!(sniff_mime(b"just some notes about my tomatoes"), None);
    }

    #[tokio::test]
    async fn test_read_image() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("leaf.png");
        image::RgbImage::new(4, 4).save(&path).unwrap();

        let file = read_image(&path).await.unwrap();
        assert_eq!(file.file_name, "leaf.png");
        assert_eq!(file.mime_type, "image/png");
        assert!(file.selection().is_image());
        assert!(file.preview().url().starts_with("file://"));

        let len = file.bytes.len();
        let (selection, preview) = file.into_selection();
        assert_eq!(selection.size, len as u64);
        assert_eq!(preview.bytes().len(), len);
        assert_eq!(sniff_mime(preview.bytes()), Some("image/png"));
    }

    #[tokio::test]
    async fn test_read_non_image() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("leaf.jpg");
        std::fs::write(&path, "not really a jpeg").unwrap();

        let err = read_image(&path).await.unwrap_err();
        assert!(matches!(err, KisanError::UnsupportedImage(name) if name == "leaf.jpg"));
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let err = read_image(Path::new("/nonexistent/leaf.png")).await.unwrap_err();
        assert!(matches!(err, KisanError::FileNotFound(_)));
    }
}
