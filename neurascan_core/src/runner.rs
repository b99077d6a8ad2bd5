//! Tokio driver for a [`ScanSession`].
//!
//! The session itself is synchronous. This module adds the asynchronous
//! edges: reading the preview, waiting out the simulated latency, and
//! cancelling a pending analysis when the selection generation moves on.

use crate::analysis::{AnalysisResult, MockAnalysisEngine};
use crate::config::ScannerConfig;
use crate::error::UploadError;
use crate::preview;
use crate::session::{AnalysisTicket, Generation, ScanSession};
use crate::upload::FileCandidate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tracing::debug;

/// An upload with its bytes in memory.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// MIME type guessed from the file name, like a browser would.
    pub fn from_name(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime_type = preview::guess_mime_type(&name);
        Self::new(name, mime_type, bytes)
    }

    pub fn candidate(&self) -> FileCandidate {
        FileCandidate::new(self.name.clone(), self.mime_type.clone(), self.bytes.len() as u64)
    }
}

/// How a pending analysis ended.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Applied(AnalysisResult),
    /// The selection changed or was cleared first; nothing was shown.
    Superseded,
}

impl AnalysisOutcome {
    pub fn applied(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisOutcome::Applied(result) => Some(result),
            AnalysisOutcome::Superseded => None,
        }
    }
}

/// Shared handle to a scanner session. Clones drive the same session.
pub struct Scanner<R = StdRng> {
    session: Arc<Mutex<ScanSession>>,
    rng: Arc<Mutex<R>>,
    engine: MockAnalysisEngine,
    generation_tx: Arc<watch::Sender<Generation>>,
}

impl<R> Clone for Scanner<R> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            rng: Arc::clone(&self.rng),
            engine: self.engine,
            generation_tx: Arc::clone(&self.generation_tx),
        }
    }
}

impl Scanner<StdRng> {
    /// Deterministic scanner for a given seed.
    pub fn with_seed(config: &ScannerConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send + 'static> Scanner<R> {
    pub fn new(config: &ScannerConfig, rng: R) -> Self {
        let session = ScanSession::new(config);
        let (generation_tx, _) = watch::channel(session.generation());
        Self {
            session: Arc::new(Mutex::new(session)),
            rng: Arc::new(Mutex::new(rng)),
            engine: MockAnalysisEngine::new(config),
            generation_tx: Arc::new(generation_tx),
        }
    }

    pub fn engine(&self) -> &MockAnalysisEngine {
        &self.engine
    }

    /// Copy of the current session state.
    pub async fn snapshot(&self) -> ScanSession {
        self.session.lock().await.clone()
    }

    /// Validate and stage an upload, then derive its preview.
    pub async fn select_upload(&self, upload: Upload) -> Result<Generation, UploadError> {
        let generation = {
            let mut session = self.session.lock().await;
            let generation = session.select_file(upload.candidate())?;
            self.generation_tx.send_replace(generation);
            generation
        };

        let data_url = preview::encode_data_url(&upload.mime_type, &upload.bytes);
        self.session.lock().await.attach_preview(generation, data_url);
        Ok(generation)
    }

    /// Same as [`Scanner::select_upload`], ending any drag highlight.
    pub async fn drop_upload(&self, upload: Upload) -> Result<Generation, UploadError> {
        self.session.lock().await.drag_leave();
        self.select_upload(upload).await
    }

    pub async fn clear(&self) {
        let mut session = self.session.lock().await;
        session.clear();
        self.generation_tx.send_replace(session.generation());
    }

    /// Begin an analysis of the current selection. `None` when there is no
    /// previewed selection or one is already running.
    pub async fn start_analysis(&self) -> Option<PendingAnalysis<R>> {
        let mut session = self.session.lock().await;
        let ticket = session.begin_analysis()?;
        Some(PendingAnalysis {
            ticket,
            generation_rx: self.generation_tx.subscribe(),
            scanner: self.clone(),
            settled: false,
        })
    }

    /// Start and await an analysis in one go.
    pub async fn analyze(&self) -> Option<AnalysisOutcome> {
        let pending = self.start_analysis().await?;
        Some(pending.outcome().await)
    }
}

/// An analysis that has started but not resolved. Carries the generation
/// it belongs to; a generation change cancels it.
///
/// Dropping it unresolved (or dropping the [`PendingAnalysis::outcome`]
/// future) abandons the analysis, so the selection can be analyzed again.
pub struct PendingAnalysis<R = StdRng> {
    ticket: AnalysisTicket,
    generation_rx: watch::Receiver<Generation>,
    scanner: Scanner<R>,
    settled: bool,
}

impl<R: Rng + Send + 'static> PendingAnalysis<R> {
    pub fn generation(&self) -> Generation {
        self.ticket.generation()
    }

    /// Wait out the simulated latency and apply the result, unless the
    /// selection changes first.
    pub async fn outcome(mut self) -> AnalysisOutcome {
        let generation = self.ticket.generation();

        tokio::select! {
            _ = tokio::time::sleep(self.scanner.engine.latency()) => {}
            _ = superseded(self.generation_rx.clone(), generation) => {
                debug!("Analysis for {} cancelled", generation);
                self.settled = true;
                return AnalysisOutcome::Superseded;
            }
        }

        let result = {
            let mut rng = self.scanner.rng.lock().await;
            self.scanner
                .engine
                .generate(self.ticket.preview_data_url(), &mut *rng)
        };

        let applied = self
            .scanner
            .session
            .lock()
            .await
            .complete_analysis(&self.ticket, result.clone());
        self.settled = true;

        if applied {
            AnalysisOutcome::Applied(result)
        } else {
            AnalysisOutcome::Superseded
        }
    }
}

impl<R> Drop for PendingAnalysis<R> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if let Ok(mut session) = self.scanner.session.try_lock() {
            session.abandon_analysis(&self.ticket);
            return;
        }
        // Lock busy: finish on the runtime.
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let session = Arc::clone(&self.scanner.session);
            let ticket = self.ticket.clone();
            handle.spawn(async move {
                session.lock().await.abandon_analysis(&ticket);
            });
        }
    }
}

/// Resolves once the published generation differs from `ticket`.
async fn superseded(mut rx: watch::Receiver<Generation>, ticket: Generation) {
    while *rx.borrow_and_update() == ticket {
        if rx.changed().await.is_err() {
            // Sender gone: nothing can supersede us any more.
            std::future::pending::<()>().await;
        }
    }
}
