//! Scanner configuration.
//!
//! Loads optional `.neurascan/config.toml` from a site root. Every key is
//! optional; missing keys keep the product defaults below.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Largest accepted upload (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
/// Fixed delay before a mock analysis resolves.
pub const SIMULATED_LATENCY_MS: u64 = 3000;
/// Share of analyses that report a finding.
pub const DETECTION_PROBABILITY: f64 = 0.7;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Uploads above this size are rejected with `FileTooLarge`.
    pub max_upload_bytes: u64,
    /// Delay of the simulated analysis in milliseconds.
    pub simulated_latency_ms: u64,
    /// Probability in [0, 1] that a run reports a detected tumor.
    pub detection_probability: f64,
    /// Let files named `*.dcm` through even when the browser reports no
    /// image MIME type. Off by default.
    pub accept_dicom_extension: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: MAX_UPLOAD_BYTES,
            simulated_latency_ms: SIMULATED_LATENCY_MS,
            detection_probability: DETECTION_PROBABILITY,
            accept_dicom_extension: false,
        }
    }
}

impl ScannerConfig {
    /// Load config from `.neurascan/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".neurascan").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}; using default scanner config", e);
                Self::default()
            }
        }
    }

    /// Strict variant of [`ScannerConfig::load_from_path`].
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: Path::new("<inline>").to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the scanner cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.detection_probability) {
            return Err(ConfigError::Invalid(format!(
                "detection_probability must be within [0, 1], got {}",
                self.detection_probability
            )));
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_upload_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ScannerConfig::default();
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.simulated_latency_ms, 3000);
        assert_eq!(config.detection_probability, 0.7);
        assert!(!config.accept_dicom_extension);
        assert_eq!(config.simulated_latency(), Duration::from_secs(3));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = ScannerConfig::load(temp.path());
        assert_eq!(config, ScannerConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let dir = temp.path().join(".neurascan");
        std::fs::create_dir_all(&dir).expect("create .neurascan");

        let mut file = std::fs::File::create(dir.join("config.toml")).expect("create config");
        writeln!(
            file,
            r#"
max_upload_bytes = 5242880
simulated_latency_ms = 500
accept_dicom_extension = true
"#
        )
        .expect("write config");

        let config = ScannerConfig::load(temp.path());
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(config.simulated_latency_ms, 500);
        assert_eq!(config.detection_probability, DETECTION_PROBABILITY);
        assert!(config.accept_dicom_extension);
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().expect("temp dir");
        let dir = temp.path().join(".neurascan");
        std::fs::create_dir_all(&dir).expect("create .neurascan");
        std::fs::File::create(dir.join("config.toml")).expect("create empty config");

        let config = ScannerConfig::load(temp.path());
        assert_eq!(config, ScannerConfig::default());
    }

    #[test]
    fn test_invalid_probability_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "detection_probability = 1.5\n").expect("write config");

        assert!(matches!(
            ScannerConfig::read(&path),
            Err(ConfigError::Invalid(_))
        ));
        assert_eq!(ScannerConfig::load_from_path(&path), ScannerConfig::default());
    }

    #[test]
    fn test_from_toml_str_rejects_garbage() {
        let err = ScannerConfig::from_toml_str("max_upload_bytes = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let err = ScannerConfig::from_toml_str("max_upload_bytes = 0").unwrap_err();
        assert!(err.to_string().contains("max_upload_bytes"));
    }
}
