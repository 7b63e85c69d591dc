use mhs_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;

#[test]
fn file_layer_creates_log_files() {
    let tmp_dir = tempfile::tempdir().expect("tempdir");
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("test-app")
        .console(false)
        .path(&log_dir)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!("hello world");
    // Give the background worker a moment, then drop the guard to force a flush.
    std::thread::sleep(Duration::from_millis(20));
    logger.flush();
    drop(logger);

    assert!(log_dir.exists(), "log directory should be created by logger init");

    let has_log = fs::read_dir(&log_dir)
        .expect("read log dir")
        .flatten()
        .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"));

    assert!(has_log, "at least one log file should be created");
}
