//! Render a seeded mock result to a standalone HTML report.
//!
//! Run with: `cargo run -p neurascan-report --example scan_report`

use neurascan_core::MockAnalysisEngine;
use neurascan_core::preview::encode_data_url;
use neurascan_report::render_scan_report;
use rand::SeedableRng;
use rand::rngs::StdRng;

// 1x1 transparent PNG
const PIXEL: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2024);
    let mut rng = StdRng::seed_from_u64(seed);

    let preview = encode_data_url("image/png", PIXEL);
    let result = MockAnalysisEngine::default().generate(&preview, &mut rng);
    let html = render_scan_report(&result, "pixel.png");

    let output_path = "scan_report.html";
    std::fs::write(output_path, &html).expect("Failed to write report");

    println!("Report written to: {}", output_path);
    println!("Tumor detected: {}", result.tumor_detected);
    println!("HTML size: {} bytes", html.len());
}
