//! CSS for the result components and the standalone report.
//!
//! [`RESULT_CSS`] styles the components themselves and is injected by both
//! the site and [`crate::render_scan_report`]. [`REPORT_CSS`] only lays out
//! the report page around them.
//!
//! ```rust
//! use neurascan_report::styles::RESULT_CSS;
//!
//! let my_css = ".ns-result { max-width: 40rem; }";
//! let combined = format!("{}\n{}", RESULT_CSS, my_css);
//! assert!(combined.contains(".ns-badge"));
//! ```

/// Styles for [`crate::components::ScanResultPanel`] and its children.
pub const RESULT_CSS: &str = r#"
.ns-result {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  color: #111827;
  font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

.ns-result-title {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin: 0;
  font-size: 1.25rem;
  font-weight: 600;
}

/* Status badge */
.ns-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.125rem 0.625rem;
  border-radius: 9999px;
  font-size: 0.75rem;
  font-weight: 500;
}
.ns-badge-alert { background: #fee2e2; color: #991b1b; }
.ns-badge-clear { background: #dcfce7; color: #166534; }

/* Image frame and view toggle */
.ns-image-frame {
  position: relative;
  overflow: hidden;
  border-radius: 0.5rem;
  background: #f3f4f6;
}
.ns-toggle {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  z-index: 2;
  display: flex;
  border-radius: 0.375rem;
  background: rgba(31, 41, 55, 0.5);
  font-size: 0.75rem;
}
.ns-toggle-btn {
  padding: 0.25rem 0.75rem;
  border: 0;
  background: transparent;
  color: #fff;
  cursor: pointer;
  transition: background-color 0.2s, color 0.2s;
}
.ns-toggle-btn:first-child { border-radius: 0.375rem 0 0 0.375rem; }
.ns-toggle-btn:last-child { border-radius: 0 0.375rem 0.375rem 0; }
.ns-toggle-btn.active { background: #fff; color: #1f2937; }

.ns-image-wrap {
  position: relative;
  display: flex;
  justify-content: center;
  width: fit-content;
  margin: 0 auto;
  padding: 1rem;
}
.ns-scan-image {
  max-height: 16rem;
  border-radius: 0.5rem;
  object-fit: contain;
  transition: opacity 0.3s;
}
.ns-region-overlay {
  position: absolute;
  inset: 1rem;
  border-radius: 0.5rem;
  background: rgba(239, 68, 68, 0.2);
  opacity: 0;
  transition: opacity 0.3s;
}
.ns-region-overlay[hidden] { display: none; }
.ns-image-wrap:hover .ns-region-overlay { opacity: 1; }
.ns-region-label {
  position: absolute;
  top: 0.5rem;
  left: 0.5rem;
  padding: 0.25rem 0.5rem;
  border-radius: 0.25rem;
  background: #fee2e2;
  color: #991b1b;
  font-size: 0.75rem;
}

/* Details grid */
.ns-details {
  padding: 1.5rem;
  border-radius: 0.5rem;
  background: #f9fafb;
}
.ns-details-title { margin: 0 0 1rem; font-size: 1rem; font-weight: 500; }
.ns-detail-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1.5rem;
  margin: 0;
}
.ns-detail dt, .ns-detail dd { margin: 0; }
.ns-detail-label { margin: 0; font-size: 0.875rem; color: #6b7280; }
.ns-detail-value { font-size: 1.125rem; font-weight: 500; }
.ns-recommendation {
  margin-top: 1.5rem;
  padding-top: 1.5rem;
  border-top: 1px solid #e5e7eb;
}
.ns-recommendation-text { margin: 0.5rem 0 0; color: #374151; }

/* Confidence tiers */
.text-green-600 { color: #16a34a; }
.text-yellow-600 { color: #ca8a04; }
.text-red-600 { color: #dc2626; }

/* Notices */
.ns-notice {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
  padding: 1rem;
  border-radius: 0.5rem;
  font-size: 0.875rem;
}
.ns-notice p { margin: 0; }
.ns-notice-title { font-weight: 500; margin-bottom: 0.25rem !important; }
.ns-notice-icon { flex-shrink: 0; margin-top: 0.125rem; }
.ns-notice-alert { background: #fef2f2; color: #b91c1c; }
.ns-notice-alert .ns-notice-icon { color: #ef4444; }
.ns-notice-info { background: #eff6ff; color: #1d4ed8; }
.ns-notice-info .ns-notice-icon { color: #3b82f6; }
"#;

/// Page layout for the standalone report document.
pub const REPORT_CSS: &str = r#"
* { box-sizing: border-box; }
body {
  margin: 0;
  background: #f9fafb;
}
.report-page {
  max-width: 48rem;
  margin: 2rem auto;
  padding: 1.5rem;
  border-radius: 0.75rem;
  background: #fff;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}
.report-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1.5rem;
  font-family: ui-sans-serif, system-ui, sans-serif;
}
.report-brand { font-size: 1.25rem; font-weight: 700; color: #2563eb; }
.report-source {
  display: flex;
  align-items: center;
  gap: 0.375rem;
  margin: 0;
  color: #6b7280;
  font-size: 0.875rem;
}
.report-footer {
  margin-top: 1.5rem;
  color: #9ca3af;
  font-family: ui-sans-serif, system-ui, sans-serif;
  font-size: 0.75rem;
  text-align: center;
}

@media print {
  body { background: #fff; }
  .report-page { margin: 0; box-shadow: none; }
  .ns-toggle { display: none; }
}
"#;

/// Content-Security-Policy for the standalone report. Scan images are inline
/// data URLs; nothing is fetched.
pub const CSP: &str = "default-src 'none'; img-src data:; style-src 'unsafe-inline'; script-src 'unsafe-inline';";
