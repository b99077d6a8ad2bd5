//! Analysis details grid, status badge and notices.

use super::{ICON_CHECK_CIRCLE, ICON_INFO, ICON_WARNING, Icon};
use leptos::prelude::*;
use neurascan_core::{AnalysisResult, ResultView};

const FINDING_TITLE: &str = "Potential tumor detected";
const FINDING_BODY: &str = "This analysis suggests the presence of abnormal tissue. Please consult with a medical professional for proper diagnosis and treatment planning.";
const ABOUT_TITLE: &str = "About Digital Image Processing Analysis";
const ABOUT_BODY: &str = "This analysis uses advanced image processing techniques including contrast enhancement, segmentation, and feature extraction to identify potential tumor regions. The results are based on pattern recognition algorithms trained on medical imaging datasets.";

/// Pill next to the panel title.
#[component]
pub fn StatusBadge(detected: bool, label: &'static str) -> impl IntoView {
    if detected {
        view! {
            <span class="ns-badge ns-badge-alert">
                <Icon path=ICON_WARNING size="12" />
                {label}
            </span>
        }
        .into_any()
    } else {
        view! {
            <span class="ns-badge ns-badge-clear">
                <Icon path=ICON_CHECK_CIRCLE size="12" />
                {label}
            </span>
        }
        .into_any()
    }
}

/// The "Analysis Details" grid with the optional recommendation below it.
#[component]
pub fn AnalysisDetails(result: AnalysisResult) -> impl IntoView {
    let view_model = ResultView::new(&result);
    let rows = view_model.detail_rows();
    let recommendation = view_model.recommendation().map(str::to_owned);

    view! {
        <section class="ns-details">
            <h3 class="ns-details-title">"Analysis Details"</h3>
            <dl class="ns-detail-grid">
                {rows
                    .into_iter()
                    .map(|row| {
                        let value_class = match row.tier {
                            Some(tier) => format!("ns-detail-value {}", tier.text_class()),
                            None => "ns-detail-value".to_string(),
                        };
                        view! {
                            <div class="ns-detail">
                                <dt class="ns-detail-label">{row.label}</dt>
                                <dd class=value_class>{row.value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
            {recommendation.map(|text| view! {
                <div class="ns-recommendation">
                    <p class="ns-detail-label">"Recommendations"</p>
                    <p class="ns-recommendation-text">{text}</p>
                </div>
            })}
        </section>
    }
}

/// Red notice shown under a positive result.
#[component]
pub fn FindingAlert() -> impl IntoView {
    view! {
        <div class="ns-notice ns-notice-alert" role="alert">
            <Icon path=ICON_WARNING class="ns-notice-icon" />
            <div>
                <p class="ns-notice-title">{FINDING_TITLE}</p>
                <p>{FINDING_BODY}</p>
            </div>
        </div>
    }
}

/// Blue note explaining the method. Always shown.
#[component]
pub fn AboutAnalysisNote() -> impl IntoView {
    view! {
        <div class="ns-notice ns-notice-info">
            <Icon path=ICON_INFO class="ns-notice-icon" />
            <div>
                <p class="ns-notice-title">{ABOUT_TITLE}</p>
                <p>{ABOUT_BODY}</p>
            </div>
        </div>
    }
}
