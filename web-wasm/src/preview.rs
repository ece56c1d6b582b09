//! Browser preview handle for a selected image
//!
//! Owns the picked `File` and an object URL pointing at it. Dropping the
//! handle revokes the URL.

use gloo::file::ObjectUrl;
use kisan_common::{PreviewHandle, SelectedImage};
use web_sys::File;

pub struct BrowserPreview {
    file: File,
    url: ObjectUrl,
}

impl BrowserPreview {
    pub fn new(file: File) -> Self {
        let url = ObjectUrl::from(gloo::file::File::from(file.clone()));
        Self { file, url }
    }

    /// Metadata for the upload state machine
    pub fn selection(&self) -> SelectedImage {
        SelectedImage::new(self.file.name(), self.file.type_(), self.file.size() as u64)
    }

    pub fn file(&self) -> &File {
        &self.file
    }
}

impl PreviewHandle for BrowserPreview {
    fn url(&self) -> &str {
        &self.url
    }
}
