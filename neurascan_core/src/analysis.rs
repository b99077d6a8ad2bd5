//! Mock analysis engine.
//!
//! Produces a plausible looking detection report from nothing but random
//! draws. The uploaded image only travels through as the preview URL.

use crate::config::ScannerConfig;
use rand::Rng;
use rand::distributions::{Distribution, Standard};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DETECTED_LOCATION: &str = "Temporal Lobe";
pub const DETECTED_TYPE: &str = "Glioblastoma";
pub const NO_LOCATION: &str = "N/A";
pub const NO_SIZE: &str = "0 cm²";
pub const DETECTED_RECOMMENDATION: &str = "Immediate consultation with a neurologist is recommended. Further MRI with contrast enhancement may be needed.";
pub const CLEAR_RECOMMENDATION: &str =
    "Regular follow-up scans recommended as per standard protocol.";

/// Outcome of one mock analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub original_image: String,
    /// Same data URL as `original_image`; nothing is transformed.
    pub processed_image: String,
    pub tumor_detected: bool,
    /// In [0.85, 1.0) when detected, [0.15, 0.30) otherwise.
    pub confidence: f64,
    #[serde(rename = "tumorSize")]
    pub tumor_size_label: String,
    #[serde(rename = "tumorLocation")]
    pub tumor_location_label: String,
    #[serde(rename = "processingTime")]
    pub processing_time_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tumor_type: Option<String>,
    #[serde(rename = "recommendations")]
    pub recommendation: String,
}

/// Generates fake analysis results after a fixed simulated latency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockAnalysisEngine {
    detection_probability: f64,
    latency: Duration,
}

impl Default for MockAnalysisEngine {
    fn default() -> Self {
        Self::new(&ScannerConfig::default())
    }
}

impl MockAnalysisEngine {
    pub fn new(config: &ScannerConfig) -> Self {
        Self {
            detection_probability: config.detection_probability.clamp(0.0, 1.0),
            latency: config.simulated_latency(),
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn detection_probability(&self) -> f64 {
        self.detection_probability
    }

    /// Draws at or below this read as negative. `1 - p` rounded to 15
    /// decimals, so the default 0.7 gives exactly 0.3.
    pub fn negative_threshold(&self) -> f64 {
        ((1.0 - self.detection_probability) * 1e15).round() / 1e15
    }

    /// Draw a result. Draw order: detection, confidence, size (only when
    /// detected), processing time.
    pub fn generate<R: Rng + ?Sized>(&self, preview_data_url: &str, rng: &mut R) -> AnalysisResult {
        let tumor_detected = unit(rng) > self.negative_threshold();

        let confidence = if tumor_detected {
            half_open(0.85, 0.15, unit(rng))
        } else {
            half_open(0.15, 0.15, unit(rng))
        };

        let (size, location, tumor_type, recommendation) = if tumor_detected {
            let area = unit(rng) * 3.0 + 1.0;
            (
                format!("{} cm²", one_decimal(area)),
                DETECTED_LOCATION,
                Some(DETECTED_TYPE.to_string()),
                DETECTED_RECOMMENDATION,
            )
        } else {
            (NO_SIZE.to_string(), NO_LOCATION, None, CLEAR_RECOMMENDATION)
        };

        let seconds = unit(rng) * 1.5 + 0.5;

        AnalysisResult {
            original_image: preview_data_url.to_string(),
            processed_image: preview_data_url.to_string(),
            tumor_detected,
            confidence,
            tumor_size_label: size,
            tumor_location_label: location.to_string(),
            processing_time_label: format!("{}s", one_decimal(seconds)),
            tumor_type,
            recommendation: recommendation.to_string(),
        }
    }
}

/// `base + u * span`, kept strictly below `base + span` when rounding would
/// land on the bound.
fn half_open(base: f64, span: f64, u: f64) -> f64 {
    let upper = base + span;
    let value = base + u * span;
    if value < upper {
        value
    } else {
        f64::from_bits(upper.to_bits() - 1)
    }
}

/// One decimal place with exact ties rounded up. Only odd multiples of 0.25
/// are exact ties in binary; everything else formats as is.
fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0 {
        format!("{:.1}", value + 0.05)
    } else {
        format!("{:.1}", value)
    }
}

/// Uniform draw in [0, 1).
fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    Standard.sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    const PREVIEW: &str = "data:image/png;base64,iVBORw==";

    #[test]
    fn lowest_draws_report_no_tumor() {
        let mut rng = StepRng::new(0, 0);
        let result = MockAnalysisEngine::default().generate(PREVIEW, &mut rng);

        assert!(!result.tumor_detected);
        assert_eq!(result.confidence, 0.15);
        assert_eq!(result.tumor_size_label, "0 cm²");
        assert_eq!(result.tumor_location_label, "N/A");
        assert_eq!(result.tumor_type, None);
        assert_eq!(result.processing_time_label, "0.5s");
        assert_eq!(result.recommendation, CLEAR_RECOMMENDATION);
    }

    #[test]
    fn highest_draws_report_a_tumor() {
        let mut rng = StepRng::new(u64::MAX, 0);
        let result = MockAnalysisEngine::default().generate(PREVIEW, &mut rng);

        assert!(result.tumor_detected);
        // 0.85 + 0.15 * (1 - 2^-53) rounds up to 1.0 before the clamp.
        assert!(result.confidence < 1.0 && result.confidence > 0.99);
        assert_eq!(result.tumor_size_label, "4.0 cm²");
        assert_eq!(result.tumor_location_label, "Temporal Lobe");
        assert_eq!(result.tumor_type.as_deref(), Some("Glioblastoma"));
        assert_eq!(result.processing_time_label, "2.0s");
        assert_eq!(result.recommendation, DETECTED_RECOMMENDATION);
    }

    #[test]
    fn draw_just_above_three_tenths_is_positive() {
        // 0.30000000000000004 as a 53-bit draw: the value `1.0 - 0.7` lands on.
        let mut rng = StepRng::new(2_702_159_776_422_298 << 11, 0);
        let engine = MockAnalysisEngine::default();

        assert_eq!(engine.negative_threshold(), 0.3);
        assert!(engine.generate(PREVIEW, &mut rng).tumor_detected);
    }

    #[test]
    fn halfway_labels_round_up() {
        // u = 0.5: area 2.5, processing time exactly 1.25s.
        let mut rng = StepRng::new(1 << 63, 0);
        let result = MockAnalysisEngine::default().generate(PREVIEW, &mut rng);
        assert_eq!(result.tumor_size_label, "2.5 cm²");
        assert_eq!(result.processing_time_label, "1.3s");

        // u = 0.75: area exactly 3.25.
        let mut rng = StepRng::new(3 << 62, 0);
        let result = MockAnalysisEngine::default().generate(PREVIEW, &mut rng);
        assert_eq!(result.tumor_size_label, "3.3 cm²");
        assert_eq!(result.processing_time_label, "1.6s");
    }

    #[test]
    fn one_decimal_only_bumps_exact_ties() {
        assert_eq!(one_decimal(1.25), "1.3");
        assert_eq!(one_decimal(0.75), "0.8");
        assert_eq!(one_decimal(1.15), "1.1");
        assert_eq!(one_decimal(2.0), "2.0");
        assert_eq!(one_decimal(1.9000000000000001), "1.9");
    }

    #[test]
    fn images_pass_through_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = MockAnalysisEngine::default().generate(PREVIEW, &mut rng);
        assert_eq!(result.original_image, PREVIEW);
        assert_eq!(result.processed_image, PREVIEW);
    }

    #[test]
    fn confidence_ranges_follow_the_branch() {
        let engine = MockAnalysisEngine::default();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut detected = 0;

        for _ in 0..2000 {
            let result = engine.generate(PREVIEW, &mut rng);
            if result.tumor_detected {
                detected += 1;
                assert!((0.85..1.0).contains(&result.confidence), "{}", result.confidence);
                assert!(result.tumor_type.is_some());
            } else {
                assert!((0.15..0.30).contains(&result.confidence), "{}", result.confidence);
                assert!(result.tumor_type.is_none());
                assert_eq!(result.tumor_size_label, NO_SIZE);
            }
        }

        // ~70% positives; wide band keeps the seeded run stable.
        assert!((1200..1600).contains(&detected), "detected {detected}");
    }

    #[test]
    fn labels_are_rounded_to_one_decimal() {
        let engine = MockAnalysisEngine::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let result = engine.generate(PREVIEW, &mut rng);
            let digits = result
                .processing_time_label
                .strip_suffix('s')
                .expect("processing time label");
            let seconds: f64 = digits.parse().expect("seconds");
            assert!((0.5..=2.0).contains(&seconds));
            assert_eq!(digits.split('.').nth(1).map(str::len), Some(1));

            if result.tumor_detected {
                let area: f64 = result
                    .tumor_size_label
                    .strip_suffix(" cm²")
                    .and_then(|s| s.parse().ok())
                    .expect("size label");
                assert!((1.0..=4.0).contains(&area));
            }
        }
    }

    #[test]
    fn probability_extremes() {
        let never = MockAnalysisEngine::new(&ScannerConfig {
            detection_probability: 0.0,
            ..ScannerConfig::default()
        });
        let always = MockAnalysisEngine::new(&ScannerConfig {
            detection_probability: 1.0,
            ..ScannerConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            assert!(!never.generate(PREVIEW, &mut rng).tumor_detected);
        }
        // r > 0.0 fails only for an exact zero draw.
        let mut rng = StepRng::new(1 << 11, 1 << 11);
        for _ in 0..10 {
            assert!(always.generate(PREVIEW, &mut rng).tumor_detected);
        }
    }

    #[test]
    fn serializes_with_the_page_field_names() {
        let mut rng = StepRng::new(0, 0);
        let result = MockAnalysisEngine::default().generate(PREVIEW, &mut rng);
        let json = serde_json::to_value(&result).expect("serialize");

        assert_eq!(json["originalImage"], PREVIEW);
        assert_eq!(json["tumorDetected"], false);
        assert_eq!(json["tumorSize"], "0 cm²");
        assert_eq!(json["processingTime"], "0.5s");
        assert!(json.get("tumorType").is_none());
        assert_eq!(json["recommendations"], CLEAR_RECOMMENDATION);

        let back: AnalysisResult = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, result);
    }
}
