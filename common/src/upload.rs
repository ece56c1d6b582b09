//! Upload-and-diagnose state
//!
//! Holds at most one selected image together with its preview handle, the
//! diagnosis for that image and the in-flight flag. Preview handles release
//! their resource on `Drop`, so replacing or clearing a selection is all it
//! takes to free the previous one.

use crate::diagnosis::Diagnosis;
use crate::error::{Error, Result};

/// A locally created, revocable reference used to display an image
pub trait PreviewHandle {
    fn url(&self) -> &str;
}

/// Metadata of the file the user picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
}

impl SelectedImage {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Empty,
    Selected,
    Uploading,
    Diagnosed,
}

impl UploadPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadPhase::Empty => "empty",
            UploadPhase::Selected => "selected",
            UploadPhase::Uploading => "uploading",
            UploadPhase::Diagnosed => "diagnosed",
        }
    }
}

struct Selection<P> {
    image: SelectedImage,
    preview: P,
}

pub struct UploadState<P> {
    selection: Option<Selection<P>>,
    diagnosis: Option<Diagnosis>,
    in_flight: bool,
}

impl<P> Default for UploadState<P> {
    fn default() -> Self {
        Self {
            selection: None,
            diagnosis: None,
            in_flight: false,
        }
    }
}

impl<P: PreviewHandle> UploadState<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current selection
    ///
    /// The previous preview is dropped and a diagnosis of the previous image
    /// is discarded. Rejected selections drop the offered preview as well.
    pub fn select(&mut self, image: SelectedImage, preview: P) -> Result<()> {
        if self.in_flight {
            return Err(Error::RequestInFlight);
        }
        if !image.is_image() {
            return Err(Error::NotAnImage(image.file_name));
        }
        self.selection = Some(Selection { image, preview });
        self.diagnosis = None;
        Ok(())
    }

    /// Mark the selected image as being uploaded
    pub fn begin_upload(&mut self) -> Result<&SelectedImage> {
        if self.in_flight {
            return Err(Error::RequestInFlight);
        }
        let selection = self.selection.as_ref().ok_or(Error::NoFileSelected)?;
        self.in_flight = true;
        Ok(&selection.image)
    }

    /// Apply the outcome of the outstanding upload
    ///
    /// Failures are handed back for the caller to report. An outcome that
    /// arrives after `clear` no longer has a request to belong to and is
    /// discarded.
    pub fn finish_upload(&mut self, outcome: Result<Diagnosis>) -> Result<()> {
        if !self.in_flight {
            return Ok(());
        }
        self.in_flight = false;
        self.diagnosis = Some(outcome?);
        Ok(())
    }

    /// Drop the selection, its preview and any diagnosis
    pub fn clear(&mut self) {
        self.selection = None;
        self.diagnosis = None;
        self.in_flight = false;
    }

    pub fn phase(&self) -> UploadPhase {
        match (&self.selection, &self.diagnosis, self.in_flight) {
            (_, _, true) => UploadPhase::Uploading,
            (_, Some(_), false) => UploadPhase::Diagnosed,
            (Some(_), None, false) => UploadPhase::Selected,
            (None, None, false) => UploadPhase::Empty,
        }
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selection.as_ref().map(|s| &s.image)
    }

    pub fn preview(&self) -> Option<&P> {
        self.selection.as_ref().map(|s| &s.preview)
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview().map(|p| p.url())
    }

    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        self.diagnosis.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.in_flight
    }
}
