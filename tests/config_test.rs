use sartdl::config;

// XDG_DATA_HOME redirects the data directory, and dotenv writes into the
// process environment, so the phases run in order inside a single test in
// its own binary.
#[tokio::test]
async fn test_load_env_tolerates_missing_and_broken_files() {
    let home = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var("XDG_DATA_HOME", home.path()) };

    // No .env yet: defaults stay in force
    config::load_env().await.unwrap();
    assert_eq!(config::download_timeout_secs(), 60);

    // A file that does not parse is reported, not fatal
    let env_path = home.path().join("sartdl/.env");
    std::fs::write(&env_path, "THIS LINE HAS NO EQUALS SIGN\n").unwrap();
    config::load_env().await.unwrap();
    assert_eq!(config::download_timeout_secs(), 60);

    // A valid file overrides the default
    std::fs::write(&env_path, "DOWNLOAD_TIMEOUT_SECONDS=77\n").unwrap();
    config::load_env().await.unwrap();
    assert_eq!(config::download_timeout_secs(), 77);
}
