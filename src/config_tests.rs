use crate::config::Config;
use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::time::Duration;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

fn clear_env() {
    for key in [
        "HOST",
        "PORT",
        "MONGO_URI",
        "MONGO_DB",
        "MONGO_COLLECTION",
        "MONGO_TIMEOUT_SECS",
        "MODEL_PATH",
        "MODEL_URL",
    ] {
        unsafe { env::remove_var(key) };
    }
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:5000");
    assert!(config.mongo_uri.is_none());
    assert_eq!(config.mongo_db, "student_performance");
    assert_eq!(config.mongo_collection, "daily_performance");
    assert_eq!(config.mongo_timeout, Duration::from_secs(3));
    assert_eq!(config.model_path.to_str().unwrap(), "model.json");
}

#[test]
fn test_config_reads_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    unsafe {
        env::set_var("HOST", "0.0.0.0");
        env::set_var("PORT", "8080");
        env::set_var("MONGO_URI", "mongodb://localhost:27017");
        env::set_var("MONGO_TIMEOUT_SECS", "10");
        env::set_var("MODEL_PATH", "/data/model.json");
    }

    let config = Config::from_env().unwrap();

    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(
        config.mongo_uri.as_deref(),
        Some("mongodb://localhost:27017")
    );
    assert_eq!(config.mongo_timeout, Duration::from_secs(10));
    assert_eq!(config.model_path.to_str().unwrap(), "/data/model.json");

    clear_env();
}

#[test]
fn test_config_empty_mongo_uri_means_disabled() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    unsafe { env::set_var("MONGO_URI", "") };

    let config = Config::from_env().unwrap();
    assert!(config.mongo_uri.is_none());

    clear_env();
}

#[test]
fn test_config_rejects_bad_port() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    unsafe { env::set_var("PORT", "not-a-port") };

    assert!(Config::from_env().is_err());

    clear_env();
}
