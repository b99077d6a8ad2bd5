//! The interactive result panel.
//!
//! Holds its own image view toggle. Every new result mounts a fresh panel, so
//! the toggle starts on the processed image each time.

use super::{AboutAnalysisNote, AnalysisDetails, FindingAlert, StatusBadge};
use leptos::prelude::*;
use neurascan_core::{AnalysisResult, ImageView, ResultView};

/// Result panel: title with status badge, image with view toggle and region
/// overlay, details grid, and the notices.
#[component]
pub fn ScanResultPanel(
    result: AnalysisResult,
    /// Image shown first. Processed unless told otherwise.
    #[prop(optional)]
    initial_view: Option<ImageView>,
) -> impl IntoView {
    let (image_view, set_image_view) = signal(initial_view.unwrap_or_default());

    let summary = ResultView::new(&result);
    let detected = result.tumor_detected;
    let status = summary.status_label();
    let show_alert = summary.shows_finding_alert();
    let details = result.clone();
    let original_src = result.original_image.clone();
    let processed_src = result.processed_image.clone();
    let result = StoredValue::new(result);

    let image_src = move || {
        result.with_value(|r| ResultView::new(r).image_for(image_view.get()).to_string())
    };
    let image_alt = move || image_view.get().alt_text();
    let show_overlay =
        move || result.with_value(|r| ResultView::new(r).shows_region_overlay(image_view.get()));

    let toggle_button = move |view: ImageView| {
        view! {
            <button
                type="button"
                class=move || {
                    if image_view.get() == view { "ns-toggle-btn active" } else { "ns-toggle-btn" }
                }
                data-view=view.as_label()
                on:click=move |_| set_image_view.set(view)
            >
                {view.as_label()}
            </button>
        }
    };

    view! {
        <div class="ns-result">
            <h2 class="ns-result-title">
                "Analysis Results"
                <StatusBadge detected=detected label=status />
            </h2>

            <div class="ns-image-frame">
                <div class="ns-toggle" role="group" aria-label="Image view">
                    {toggle_button(ImageView::Original)}
                    {toggle_button(ImageView::Processed)}
                </div>
                <div class="ns-image-wrap">
                    <img
                        class="ns-scan-image"
                        src=image_src
                        alt=image_alt
                        data-original=original_src
                        data-processed=processed_src
                    />
                    {move || show_overlay().then(|| view! {
                        <div class="ns-region-overlay">
                            <span class="ns-region-label">"Detected Region"</span>
                        </div>
                    })}
                </div>
            </div>

            <AnalysisDetails result=details />

            {show_alert.then(|| view! { <FindingAlert /> })}
            <AboutAnalysisNote />
        </div>
    }
}
