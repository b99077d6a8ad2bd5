use neurascan_core::preview::encode_data_url;
use neurascan_core::{
    AnalysisOutcome, ScanStatus, Scanner, ScannerConfig, Upload, UploadError,
};
use std::time::Duration;
use tokio::time::Instant;

const MIB: usize = 1024 * 1024;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn scanner() -> Scanner {
    init_tracing();
    Scanner::with_seed(&ScannerConfig::default(), 2024)
}

fn jpeg(name: &str, size: usize) -> Upload {
    let mut bytes = vec![0u8; size];
    bytes[..3].copy_from_slice(&[0xFF, 0xD8, 0xFF]);
    Upload::new(name, "image/jpeg", bytes)
}

#[tokio::test(start_paused = true)]
async fn two_megabyte_jpeg_round_trip() {
    let scanner = scanner();
    let upload = jpeg("scan.jpg", 2 * MIB);
    let expected_preview = encode_data_url("image/jpeg", &upload.bytes);

    scanner.select_upload(upload).await.expect("valid upload");
    let snapshot = scanner.snapshot().await;
    assert_eq!(snapshot.status(), ScanStatus::FileSelected);
    assert_eq!(
        snapshot.selection().and_then(|s| s.preview_data_url()),
        Some(expected_preview.as_str())
    );

    let started = Instant::now();
    let outcome = scanner.analyze().await.expect("analysis starts");
    assert!(started.elapsed() >= Duration::from_millis(3000));

    let result = outcome.applied().expect("applied").clone();
    assert_eq!(result.original_image, expected_preview);
    assert_eq!(result.processed_image, expected_preview);
    assert_eq!(result.tumor_type.is_some(), result.tumor_detected);

    let snapshot = scanner.snapshot().await;
    assert_eq!(snapshot.status(), ScanStatus::Complete);
    assert_eq!(snapshot.result(), Some(&result));
}

#[tokio::test]
async fn eleven_megabyte_png_is_rejected() {
    let scanner = scanner();
    let upload = Upload::new("big.png", "image/png", vec![0u8; 11 * MIB]);

    let err = scanner.select_upload(upload).await.unwrap_err();
    assert!(matches!(err, UploadError::FileTooLarge { .. }));
    assert_eq!(err.to_string(), "File size should be less than 10MB");
    assert_eq!(scanner.snapshot().await.status(), ScanStatus::Error);
}

#[tokio::test]
async fn non_image_leaves_the_previous_selection() {
    let scanner = scanner();
    scanner.select_upload(jpeg("keep.jpg", 64)).await.expect("valid");

    let err = scanner
        .select_upload(Upload::from_name("notes.txt", b"hello".to_vec()))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        UploadError::InvalidType {
            mime_type: "text/plain".into()
        }
    );

    let snapshot = scanner.snapshot().await;
    assert_eq!(snapshot.selection().map(|s| s.name()), Some("keep.jpg"));
    assert_eq!(snapshot.error(), Some(&err));
}

#[tokio::test(start_paused = true)]
async fn new_selection_cancels_pending_analysis() {
    let scanner = scanner();
    scanner.select_upload(jpeg("first.jpg", 64)).await.expect("valid");

    let pending = scanner.start_analysis().await.expect("ready");
    let first_generation = pending.generation();
    let task = tokio::spawn(pending.outcome());

    tokio::time::sleep(Duration::from_millis(1000)).await;
    let second = scanner.select_upload(jpeg("second.jpg", 64)).await.expect("valid");
    assert_ne!(second, first_generation);

    let outcome = task.await.expect("task joined");
    assert_eq!(outcome, AnalysisOutcome::Superseded);

    let snapshot = scanner.snapshot().await;
    assert!(snapshot.result().is_none());
    assert!(!snapshot.is_processing());
    assert_eq!(snapshot.selection().map(|s| s.name()), Some("second.jpg"));
}

#[tokio::test(start_paused = true)]
async fn awaiting_a_stale_analysis_never_sets_the_result() {
    let scanner = scanner();
    scanner.select_upload(jpeg("old.jpg", 64)).await.expect("valid");
    let pending = scanner.start_analysis().await.expect("ready");

    scanner.select_upload(jpeg("new.jpg", 64)).await.expect("valid");
    assert_eq!(pending.outcome().await, AnalysisOutcome::Superseded);
    assert!(scanner.snapshot().await.result().is_none());

    let outcome = scanner.analyze().await.expect("new selection analyzable");
    assert!(outcome.applied().is_some());
}

#[tokio::test(start_paused = true)]
async fn clear_cancels_pending_analysis() {
    let scanner = scanner();
    scanner.select_upload(jpeg("scan.jpg", 64)).await.expect("valid");
    let pending = scanner.start_analysis().await.expect("ready");

    scanner.clear().await;
    assert_eq!(pending.outcome().await, AnalysisOutcome::Superseded);

    let snapshot = scanner.snapshot().await;
    assert_eq!(snapshot.status(), ScanStatus::Idle);
    assert!(scanner.analyze().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn second_start_while_processing_is_refused() {
    let scanner = scanner();
    scanner.select_upload(jpeg("scan.jpg", 64)).await.expect("valid");

    let pending = scanner.start_analysis().await.expect("first");
    assert!(scanner.start_analysis().await.is_none());
    assert!(matches!(pending.outcome().await, AnalysisOutcome::Applied(_)));
}

#[tokio::test]
async fn analyze_without_selection_is_a_no_op() {
    let scanner = scanner();
    assert!(scanner.analyze().await.is_none());
    assert_eq!(scanner.snapshot().await.status(), ScanStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn seeded_scanners_agree() {
    let a = scanner();
    let b = scanner();
    for s in [&a, &b] {
        s.select_upload(jpeg("same.jpg", 64)).await.expect("valid");
    }
    let ra = a.analyze().await.and_then(|o| o.applied().cloned());
    let rb = b.analyze().await.and_then(|o| o.applied().cloned());
    assert!(ra.is_some());
    assert_eq!(ra, rb);
}

#[tokio::test(start_paused = true)]
async fn dicom_flag_admits_dcm_uploads() {
    init_tracing();
    let config = ScannerConfig {
        accept_dicom_extension: true,
        simulated_latency_ms: 10,
        ..ScannerConfig::default()
    };
    let scanner = Scanner::with_seed(&config, 1);

    scanner
        .drop_upload(Upload::from_name("slice.dcm", vec![0u8; 128]))
        .await
        .expect("dcm accepted");
    let outcome = scanner.analyze().await.expect("ready");
    let result = outcome.applied().expect("applied");
    assert!(result.original_image.starts_with("data:application/dicom;base64,"));

    let strict = Scanner::with_seed(&ScannerConfig::default(), 1);
    assert!(
        strict
            .select_upload(Upload::from_name("slice.dcm", vec![0u8; 128]))
            .await
            .is_err()
    );
}

#[tokio::test(start_paused = true)]
async fn timed_out_analysis_can_be_restarted() {
    let scanner = scanner();
    scanner.select_upload(jpeg("scan.jpg", 64)).await.expect("valid");

    let early = tokio::time::timeout(Duration::from_millis(10), scanner.analyze()).await;
    assert!(early.is_err());

    tokio::time::sleep(Duration::from_secs(10)).await;
    let snapshot = scanner.snapshot().await;
    assert_eq!(snapshot.status(), ScanStatus::FileSelected);
    assert!(snapshot.result().is_none());

    let outcome = scanner.analyze().await.expect("restart allowed");
    assert!(outcome.applied().is_some());
}

#[tokio::test(start_paused = true)]
async fn dropping_a_pending_analysis_releases_the_session() {
    let scanner = scanner();
    scanner.select_upload(jpeg("scan.jpg", 64)).await.expect("valid");

    let pending = scanner.start_analysis().await.expect("ready");
    assert!(scanner.snapshot().await.is_processing());
    drop(pending);

    assert!(!scanner.snapshot().await.is_processing());
    assert!(scanner.start_analysis().await.is_some());
}

#[tokio::test(start_paused = true)]
async fn aborted_analysis_task_releases_the_session() {
    let scanner = scanner();
    scanner.select_upload(jpeg("scan.jpg", 64)).await.expect("valid");

    let pending = scanner.start_analysis().await.expect("ready");
    let task = tokio::spawn(pending.outcome());
    tokio::time::sleep(Duration::from_millis(500)).await;
    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());

    assert_eq!(scanner.snapshot().await.status(), ScanStatus::FileSelected);
}
