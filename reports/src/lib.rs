//! # neurascan-report
//!
//! Leptos components for presenting a NeuraScan analysis result.
//!
//! The components mount in the browser through the site crate (`csr`
//! feature) and render to static HTML for saved reports (`ssr` feature,
//! the default). What the panel shows is decided by
//! [`neurascan_core::ResultView`]; this crate only lays it out.
//!
//! ## Quick Start
//!
//! ```rust
//! use neurascan_core::MockAnalysisEngine;
//! use neurascan_report::render_scan_report;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = MockAnalysisEngine::default().generate("data:image/png;base64,AAAA", &mut rng);
//!
//! let html = render_scan_report(&result, "scan.png");
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! Static output goes through Leptos 0.8's `RenderHtml` trait inside a
//! throwaway reactive owner:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html: String = Owner::new().with(|| view! { <MyComponent /> }.to_html());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;

#[cfg(feature = "ssr")]
use components::{ReportDocument, ScanResultPanel};
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::reactive::owner::Owner;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;
#[cfg(feature = "ssr")]
use neurascan_core::AnalysisResult;

/// Render just the result panel as an HTML fragment.
///
/// The fragment carries no styles; pair it with [`styles::RESULT_CSS`].
#[cfg(feature = "ssr")]
pub fn render_result_panel(result: &AnalysisResult) -> String {
    let result = result.clone();
    Owner::new().with(move || view! { <ScanResultPanel result=result /> }.to_html())
}

/// Render a complete, self-contained HTML report for one result.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
/// Styles and the image toggle script are inlined; the scan images are the
/// result's data URLs, so the file works offline.
///
/// # Example
///
/// ```rust
/// use neurascan_core::AnalysisResult;
/// use neurascan_report::render_scan_report;
///
/// let result = AnalysisResult {
///     original_image: "data:image/png;base64,AAAA".into(),
///     processed_image: "data:image/png;base64,AAAA".into(),
///     tumor_detected: false,
///     confidence: 0.2,
///     tumor_size_label: "0 cm²".into(),
///     tumor_location_label: "N/A".into(),
///     processing_time_label: "1.1s".into(),
///     tumor_type: None,
///     recommendation: "Regular follow-up scans recommended as per standard protocol.".into(),
/// };
///
/// let html = render_scan_report(&result, "scan.png");
/// assert!(html.contains("No Tumor Detected"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_scan_report(result: &AnalysisResult, file_name: &str) -> String {
    let result = result.clone();
    let file_name = file_name.to_string();
    let html = Owner::new().with(move || {
        view! { <ReportDocument result=result file_name=file_name /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
