//! Leptos UI components for analysis results.
//!
//! The same components mount in the browser (`csr` feature) and render to
//! static HTML (`ssr` feature).
//!
//! # Component Hierarchy
//!
//! ```text
//! ReportDocument
//! └── ScanResultPanel
//!     ├── StatusBadge
//!     ├── image view toggle + Detected Region overlay
//!     ├── AnalysisDetails
//!     ├── FindingAlert (positive results only)
//!     └── AboutAnalysisNote
//! ```

mod details;
mod document;
mod icons;
mod result_panel;

pub use details::{AboutAnalysisNote, AnalysisDetails, FindingAlert, StatusBadge};
pub use document::ReportDocument;
pub use icons::*;
pub use result_panel::ScanResultPanel;
