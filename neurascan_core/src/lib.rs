//! # neurascan-core
//!
//! State and logic behind the NeuraScan demo scanner: a user picks a brain scan
//! image, the upload is validated, a preview is derived, and after a fixed delay
//! a randomly generated "analysis" is shown.
//!
//! Nothing here looks at pixels. The analysis is a mock driven by an injected
//! random source, which keeps the whole flow deterministic under a seeded RNG.
//!
//! ## Modules
//!
//! - [`config`] - named limits and the optional `.neurascan/config.toml`
//! - [`upload`] - file candidates, validation policy, the selected file
//! - [`preview`] - base64 data URLs and MIME guessing
//! - [`analysis`] - the mock analysis engine and its result record
//! - [`presenter`] - confidence tiers and the display model of a result
//! - [`session`] - the scanner state machine with selection generations
//! - `runner` - tokio driver with cancellation (feature `runtime`)
//!
//! ## Quick Start
//!
//! ```rust
//! use neurascan_core::{FileCandidate, ScanSession, ScannerConfig, MockAnalysisEngine};
//! use neurascan_core::preview::encode_data_url;
//! use rand::SeedableRng;
//!
//! let config = ScannerConfig::default();
//! let mut session = ScanSession::new(&config);
//! let engine = MockAnalysisEngine::new(&config);
//!
//! let bytes = vec![0xFF, 0xD8, 0xFF];
//! let candidate = FileCandidate::new("scan.jpg", "image/jpeg", bytes.len() as u64);
//! let generation = session.select_file(candidate).unwrap();
//! session.attach_preview(generation, encode_data_url("image/jpeg", &bytes));
//!
//! let ticket = session.begin_analysis().unwrap();
//! // ...wait engine.latency()...
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let result = engine.generate(ticket.preview_data_url(), &mut rng);
//! assert!(session.complete_analysis(&ticket, result));
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod presenter;
pub mod preview;
#[cfg(feature = "runtime")]
pub mod runner;
pub mod session;
pub mod upload;

pub use analysis::{AnalysisResult, MockAnalysisEngine};
pub use config::ScannerConfig;
pub use error::{ConfigError, UploadError};
pub use presenter::{ConfidenceTier, DetailRow, ImageView, ResultView};
#[cfg(feature = "runtime")]
pub use runner::{AnalysisOutcome, PendingAnalysis, Scanner, Upload};
pub use session::{AnalysisTicket, Generation, ScanSession, ScanStatus};
pub use upload::{FileCandidate, SelectedFile, UploadPolicy};
