//! Error types.

use std::path::PathBuf;
use thiserror::Error;

const MIB: u64 = 1024 * 1024;

/// Upload rejections. All are shown to the user and recovered by picking
/// another file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please upload an image file (JPEG, PNG, or DICOM)")]
    InvalidType { mime_type: String },

    #[error("File size should be less than {}MB", .max_bytes / MIB)]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },

    /// The browser accepted the file but reading its bytes failed.
    #[error("Could not read the selected file. Please try again.")]
    Unreadable { name: String },
}

/// Failures reading `.neurascan/config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid scanner config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_messages_match_the_form_copy() {
        let invalid = UploadError::InvalidType {
            mime_type: "application/pdf".into(),
        };
        assert_eq!(
            invalid.to_string(),
            "Please upload an image file (JPEG, PNG, or DICOM)"
        );

        let too_large = UploadError::FileTooLarge {
            size_bytes: 11 * MIB,
            max_bytes: 10 * MIB,
        };
        assert_eq!(too_large.to_string(), "File size should be less than 10MB");

        let unreadable = UploadError::Unreadable {
            name: "scan.jpg".into(),
        };
        assert_eq!(
            unreadable.to_string(),
            "Could not read the selected file. Please try again."
        );
    }
}
