//! Display model for an [`AnalysisResult`].
//!
//! Pure functions of the result and the selected image view; the Leptos
//! components in `neurascan-report` render whatever this module decides.

use crate::analysis::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Styling bucket for the confidence figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceTier {
    /// >= 0.8
    High,
    /// >= 0.6
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.8 {
            ConfidenceTier::High
        } else if confidence >= 0.6 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }

    /// Text color class used by the result panel.
    pub fn text_class(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "text-green-600",
            ConfidenceTier::Medium => "text-yellow-600",
            ConfidenceTier::Low => "text-red-600",
        }
    }
}

/// Which of the two result images is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageView {
    Original,
    #[default]
    Processed,
}

impl ImageView {
    pub fn toggled(self) -> Self {
        match self {
            ImageView::Original => ImageView::Processed,
            ImageView::Processed => ImageView::Original,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            ImageView::Original => "Original",
            ImageView::Processed => "Processed",
        }
    }

    pub fn alt_text(&self) -> &'static str {
        match self {
            ImageView::Original => "Original brain scan",
            ImageView::Processed => "Processed brain scan",
        }
    }
}

/// One labelled figure in the "Analysis Details" grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
    /// Set on the confidence row only; drives its text color.
    pub tier: Option<ConfidenceTier>,
}

impl DetailRow {
    fn plain(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            tier: None,
        }
    }
}

/// Everything the result panel shows, derived from one result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView<'a> {
    result: &'a AnalysisResult,
}

impl<'a> ResultView<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self { result }
    }

    pub fn result(&self) -> &'a AnalysisResult {
        self.result
    }

    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.result.confidence)
    }

    /// `92.3%`
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.result.confidence * 100.0)
    }

    pub fn status_label(&self) -> &'static str {
        if self.result.tumor_detected {
            "Tumor Detected"
        } else {
            "No Tumor Detected"
        }
    }

    pub fn image_for(&self, view: ImageView) -> &'a str {
        match view {
            ImageView::Original => &self.result.original_image,
            ImageView::Processed => &self.result.processed_image,
        }
    }

    /// The "Detected Region" hover overlay only decorates the processed image.
    pub fn shows_region_overlay(&self, view: ImageView) -> bool {
        view == ImageView::Processed && self.result.tumor_detected
    }

    pub fn shows_finding_alert(&self) -> bool {
        self.result.tumor_detected
    }

    pub fn detail_rows(&self) -> Vec<DetailRow> {
        let mut rows = vec![DetailRow {
            label: "Confidence Level",
            value: self.confidence_percent(),
            tier: Some(self.tier()),
        }];

        if self.result.tumor_detected {
            rows.push(DetailRow::plain(
                "Estimated Size",
                self.result.tumor_size_label.clone(),
            ));
            rows.push(DetailRow::plain(
                "Location",
                self.result.tumor_location_label.clone(),
            ));
            if let Some(kind) = &self.result.tumor_type {
                rows.push(DetailRow::plain("Suspected Type", kind.clone()));
            }
        }

        rows.push(DetailRow::plain(
            "Processing Time",
            self.result.processing_time_label.clone(),
        ));
        rows
    }

    pub fn recommendation(&self) -> Option<&'a str> {
        let text = self.result.recommendation.trim();
        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(detected: bool, confidence: f64) -> AnalysisResult {
        AnalysisResult {
            original_image: "data:image/png;base64,AAAA".into(),
            processed_image: "data:image/png;base64,AAAA".into(),
            tumor_detected: detected,
            confidence,
            tumor_size_label: if detected { "2.4 cm²" } else { "0 cm²" }.into(),
            tumor_location_label: if detected { "Temporal Lobe" } else { "N/A" }.into(),
            processing_time_label: "1.2s".into(),
            tumor_type: detected.then(|| "Glioblastoma".to_string()),
            recommendation: "See a specialist.".into(),
        }
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(ConfidenceTier::from_confidence(0.95), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(0.8), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(0.7999), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(0.6), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(0.5999), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_confidence(0.15), ConfidenceTier::Low);
    }

    #[test]
    fn tier_classes() {
        assert_eq!(ConfidenceTier::High.text_class(), "text-green-600");
        assert_eq!(ConfidenceTier::Medium.as_label(), "medium");
        assert_eq!(ConfidenceTier::Low.text_class(), "text-red-600");
    }

    #[test]
    fn image_view_defaults_to_processed() {
        assert_eq!(ImageView::default(), ImageView::Processed);
        assert_eq!(ImageView::Processed.toggled(), ImageView::Original);
        assert_eq!(ImageView::Original.toggled().as_label(), "Processed");
    }

    #[test]
    fn detected_rows_include_tumor_fields() {
        let r = result(true, 0.923);
        let view = ResultView::new(&r);
        let labels: Vec<_> = view.detail_rows().iter().map(|row| row.label).collect();
        assert_eq!(
            labels,
            vec![
                "Confidence Level",
                "Estimated Size",
                "Location",
                "Suspected Type",
                "Processing Time"
            ]
        );
        assert_eq!(view.confidence_percent(), "92.3%");
        assert_eq!(view.status_label(), "Tumor Detected");
        assert!(view.shows_finding_alert());
    }

    #[test]
    fn clear_rows_skip_tumor_fields() {
        let r = result(false, 0.2);
        let view = ResultView::new(&r);
        let rows = view.detail_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value, "20.0%");
        assert_eq!(rows[0].tier, Some(ConfidenceTier::Low));
        assert_eq!(rows[1].tier, None);
        assert_eq!(rows[1].value, "1.2s");
        assert_eq!(view.tier(), ConfidenceTier::Low);
        assert_eq!(view.status_label(), "No Tumor Detected");
    }

    #[test]
    fn overlay_only_on_processed_positive() {
        let positive = result(true, 0.9);
        let negative = result(false, 0.2);
        assert!(ResultView::new(&positive).shows_region_overlay(ImageView::Processed));
        assert!(!ResultView::new(&positive).shows_region_overlay(ImageView::Original));
        assert!(!ResultView::new(&negative).shows_region_overlay(ImageView::Processed));
    }

    #[test]
    fn blank_recommendation_is_hidden() {
        let mut r = result(false, 0.2);
        r.recommendation = "  ".into();
        assert_eq!(ResultView::new(&r).recommendation(), None);
    }
}
