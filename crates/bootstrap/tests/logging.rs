use tempfile::TempDir;
use world_bootstrap::{BootstrapConfig, init_logging};
use world_store::StoreConfig;

#[test]
fn invalid_filter_is_rejected() {
    let mut config = BootstrapConfig::new(StoreConfig::new("."));
    config.log_filter = "world_store=loud".to_string();

    assert!(init_logging(&config).is_err());
}

#[test]
fn file_layer_writes_log_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");

    let mut config = BootstrapConfig::new(StoreConfig::new(temp_dir.path()));
    config.log_dir = Some(log_dir.clone());

    let guard = init_logging(&config).unwrap();
    tracing::info!("hello from the logging test");
    drop(guard);

    let contents = std::fs::read_to_string(log_dir.join("world-store.log")).unwrap();
    assert!(contents.contains("hello from the logging test"));
}
