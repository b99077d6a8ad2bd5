//! Scanner session state.
//!
//! One session owns one mutable "current selection" slot. Every new selection
//! or clear bumps the [`Generation`]; asynchronous work (preview reads,
//! analyses) carries the generation it started under and is dropped on
//! arrival if the session has moved on.

use crate::analysis::AnalysisResult;
use crate::config::ScannerConfig;
use crate::error::UploadError;
use crate::upload::{FileCandidate, SelectedFile, UploadPolicy};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

/// Monotonic selection counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coarse phase of the scanner page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanStatus {
    Idle,
    FileSelected,
    Processing,
    Complete,
    Error,
}

/// Handed out by [`ScanSession::begin_analysis`]; proves which selection an
/// analysis belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: Generation,
    preview_data_url: String,
}

impl AnalysisTicket {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn preview_data_url(&self) -> &str {
        &self.preview_data_url
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanSession {
    policy: UploadPolicy,
    generation: Generation,
    selection: Option<SelectedFile>,
    processing: bool,
    result: Option<AnalysisResult>,
    error: Option<UploadError>,
    dragging: bool,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new(&ScannerConfig::default())
    }
}

impl ScanSession {
    pub fn new(config: &ScannerConfig) -> Self {
        Self::with_policy(UploadPolicy::from_config(config))
    }

    pub fn with_policy(policy: UploadPolicy) -> Self {
        Self {
            policy,
            generation: Generation::default(),
            selection: None,
            processing: false,
            result: None,
            error: None,
            dragging: false,
        }
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn selection(&self) -> Option<&SelectedFile> {
        self.selection.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&UploadError> {
        self.error.as_ref()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn status(&self) -> ScanStatus {
        if self.processing {
            ScanStatus::Processing
        } else if self.result.is_some() {
            ScanStatus::Complete
        } else if self.error.is_some() {
            ScanStatus::Error
        } else if self.selection.is_some() {
            ScanStatus::FileSelected
        } else {
            ScanStatus::Idle
        }
    }

    /// The "Analyze Scan" button is offered only for an idle selection.
    pub fn can_analyze(&self) -> bool {
        !self.processing
            && self.result.is_none()
            && self
                .selection
                .as_ref()
                .is_some_and(|s| s.preview_data_url().is_some())
    }

    /// Validate and stage a file. A rejected file leaves the current
    /// selection and result in place and only records the error.
    pub fn select_file(&mut self, candidate: FileCandidate) -> Result<Generation, UploadError> {
        if let Err(err) = self.policy.validate(&candidate) {
            debug!("Rejected upload {:?}: {}", candidate.name, err);
            self.error = Some(err.clone());
            return Err(err);
        }

        self.generation = self.generation.next();
        if self.processing {
            debug!("Selection {} supersedes the running analysis", self.generation);
        }
        debug!(
            "Selected {:?} ({} bytes) as {}",
            candidate.name, candidate.size_bytes, self.generation
        );

        self.selection = Some(SelectedFile::new(candidate));
        self.processing = false;
        self.result = None;
        self.error = None;
        Ok(self.generation)
    }

    /// Store the preview read for `generation`. Returns `false` when that
    /// selection is gone.
    pub fn attach_preview(&mut self, generation: Generation, data_url: String) -> bool {
        if generation != self.generation {
            warn!(
                "Dropping preview for {} (current {})",
                generation, self.generation
            );
            return false;
        }
        match self.selection.as_mut() {
            Some(selection) => {
                selection.set_preview(data_url);
                true
            }
            None => false,
        }
    }

    /// Reading the bytes for `generation` failed. The selection can never
    /// get a preview, so it is dropped and the error shown instead.
    pub fn fail_preview(&mut self, generation: Generation) -> bool {
        if generation != self.generation {
            return false;
        }
        let Some(selection) = self.selection.take() else {
            return false;
        };
        warn!("Could not read {:?} for {}", selection.name(), generation);
        self.error = Some(UploadError::Unreadable {
            name: selection.name().to_string(),
        });
        true
    }

    pub fn drag_enter(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// A drop is a selection that also ends the drag highlight.
    pub fn drop_file(&mut self, candidate: FileCandidate) -> Result<Generation, UploadError> {
        self.dragging = false;
        self.select_file(candidate)
    }

    /// Start an analysis of the current selection.
    ///
    /// `None` when nothing with a preview is selected or an analysis is
    /// already running; the session is left unchanged in that case.
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        if self.processing {
            return None;
        }
        let preview = self.selection.as_ref()?.preview_data_url()?.to_string();

        self.processing = true;
        self.error = None;
        self.result = None;
        debug!("Analysis started for {}", self.generation);

        Some(AnalysisTicket {
            generation: self.generation,
            preview_data_url: preview,
        })
    }

    /// Apply a finished analysis. Stale tickets are dropped and `false` is
    /// returned.
    pub fn complete_analysis(&mut self, ticket: &AnalysisTicket, result: AnalysisResult) -> bool {
        if ticket.generation != self.generation || !self.processing {
            debug!(
                "Discarding stale analysis for {} (current {})",
                ticket.generation, self.generation
            );
            return false;
        }

        info!(
            "Analysis for {} complete: detected={} confidence={:.3}",
            ticket.generation, result.tumor_detected, result.confidence
        );
        self.processing = false;
        self.result = Some(result);
        true
    }

    /// Give up on an analysis that will never complete. The selection stays
    /// and can be analyzed again. No-op for stale tickets.
    pub fn abandon_analysis(&mut self, ticket: &AnalysisTicket) -> bool {
        if ticket.generation != self.generation || !self.processing {
            return false;
        }
        debug!("Analysis for {} abandoned", ticket.generation);
        self.processing = false;
        true
    }

    /// Forget the selection, preview, result and error. Safe to call
    /// repeatedly.
    pub fn clear(&mut self) {
        self.generation = self.generation.next();
        self.selection = None;
        self.processing = false;
        self.result = None;
        self.error = None;
        self.dragging = false;
    }
}
