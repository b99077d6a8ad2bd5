//! Upload gatekeeping: what a picked or dropped file looks like, which files
//! are accepted, and the file currently staged for analysis.

use crate::config::ScannerConfig;
use crate::error::UploadError;
use serde::{Deserialize, Serialize};

/// Metadata of a file handle offered by the picker or a drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCandidate {
    pub name: String,
    /// MIME type as reported by the browser; empty when unknown.
    pub mime_type: String,
    pub size_bytes: u64,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    /// Lowercased extension of the file name, if any.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    pub fn is_image(&self) -> bool {
        self.mime_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("image/")
    }

    pub fn is_dicom(&self) -> bool {
        self.extension().as_deref() == Some("dcm")
    }
}

/// Acceptance rules for uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_upload_bytes: u64,
    pub accept_dicom_extension: bool,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::from_config(&ScannerConfig::default())
    }
}

impl UploadPolicy {
    pub fn from_config(config: &ScannerConfig) -> Self {
        Self {
            max_upload_bytes: config.max_upload_bytes,
            accept_dicom_extension: config.accept_dicom_extension,
        }
    }

    /// Type is checked before size, so an oversized PDF reports
    /// `InvalidType`.
    pub fn validate(&self, candidate: &FileCandidate) -> Result<(), UploadError> {
        let dicom_allowed = self.accept_dicom_extension && candidate.is_dicom();
        if !candidate.is_image() && !dicom_allowed {
            return Err(UploadError::InvalidType {
                mime_type: candidate.mime_type.clone(),
            });
        }

        if candidate.size_bytes > self.max_upload_bytes {
            return Err(UploadError::FileTooLarge {
                size_bytes: candidate.size_bytes,
                max_bytes: self.max_upload_bytes,
            });
        }

        Ok(())
    }
}

/// The one file staged for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedFile {
    raw: FileCandidate,
    preview_data_url: Option<String>,
}

impl SelectedFile {
    pub(crate) fn new(raw: FileCandidate) -> Self {
        Self {
            raw,
            preview_data_url: None,
        }
    }

    pub fn raw(&self) -> &FileCandidate {
        &self.raw
    }

    pub fn name(&self) -> &str {
        &self.raw.name
    }

    /// `None` until the preview has been read.
    pub fn preview_data_url(&self) -> Option<&str> {
        self.preview_data_url.as_deref()
    }

    pub(crate) fn set_preview(&mut self, data_url: String) {
        self.preview_data_url = Some(data_url);
    }

    /// Size label shown next to the file name, e.g. `2.00 MB`.
    pub fn size_label(&self) -> String {
        format_megabytes(self.raw.size_bytes)
    }
}

pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}
