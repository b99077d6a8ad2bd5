//! Standalone HTML document for one analysis result.

use super::{ICON_IMAGE, Icon, ScanResultPanel};
use crate::styles::{CSP, REPORT_CSS, RESULT_CSS};
use leptos::prelude::*;
use neurascan_core::{AnalysisResult, ResultView};

/// The complete HTML document for a saved scan report.
#[component]
pub fn ReportDocument(
    result: AnalysisResult,
    /// Name of the uploaded file the result belongs to
    #[prop(into)]
    file_name: String,
) -> impl IntoView {
    let title = format!("NeuraScan Report: {}", ResultView::new(&result).status_label());

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{RESULT_CSS}</style>
                <style>{REPORT_CSS}</style>
            </head>
            <body>
                <main class="report-page">
                    <header class="report-header">
                        <div class="report-brand">"NeuraScan"</div>
                        <p class="report-source">
                            <Icon path=ICON_IMAGE size="16" />
                            <span>"Source file: "</span>
                            <code>{file_name}</code>
                        </p>
                    </header>
                    <ScanResultPanel result=result />
                    <footer class="report-footer">
                        "This report is generated by a simulated analysis for educational purposes only. It is not a medical diagnosis."
                    </footer>
                </main>
                <script>{TOGGLE_SCRIPT}</script>
            </body>
        </html>
    }
}

// Static reports have no Wasm runtime; this swaps the image view by hand.
const TOGGLE_SCRIPT: &str = r#"
(() => {
  document.querySelectorAll('.ns-result').forEach(panel => {
    const img = panel.querySelector('.ns-scan-image');
    const overlay = panel.querySelector('.ns-region-overlay');
    const buttons = panel.querySelectorAll('.ns-toggle-btn[data-view]');
    if (!img) return;
    buttons.forEach(btn => {
      btn.addEventListener('click', () => {
        const view = btn.dataset.view;
        const processed = view === 'Processed';
        img.src = processed ? img.dataset.processed : img.dataset.original;
        img.alt = processed ? 'Processed brain scan' : 'Original brain scan';
        buttons.forEach(b => b.classList.toggle('active', b === btn));
        if (overlay) overlay.hidden = !processed;
      });
    });
  });
})();
"#;
