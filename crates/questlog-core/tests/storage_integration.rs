//! Integration test for file-backed storage and configuration.

use questlog_core::{Config, NewTask, TaskDb};

/// Opening the store and config against a scratch home directory creates
/// the data directory, the database file, and a default config on demand.
#[test]
fn test_file_backed_store_and_config_bootstrap() {
    let home = tempfile::tempdir().unwrap();
    std::env::set_var("HOME", home.path());
    std::env::set_var("QUESTLOG_ENV", "dev");

    let db = TaskDb::open().unwrap();
    let task = db
        .create_task(
            "user-1",
            NewTask {
                title: "Persisted task".into(),
                ..NewTask::default()
            },
        )
        .unwrap();

    // A second open sees the same data on disk
    drop(db);
    let reopened = TaskDb::open().unwrap();
    let fetched = reopened.get_task(&task.id).unwrap();
    assert_eq!(fetched.title, "Persisted task");

    let data_dir = home.path().join(".config").join("questlog-dev");
    assert!(data_dir.join("questlog.db").exists());

    // First config load writes defaults next to the database
    let config = Config::load().unwrap();
    assert_eq!(config.profile.owner, "default");
    assert!(data_dir.join("config.toml").exists());
}
