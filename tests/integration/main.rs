//! Integration tests for favcache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn favcache() -> Command {
        cargo_bin_cmd!("favcache")
    }

    // Point both the cache root and the config file into the temp dir so
    // tests never observe the invoking user's real configuration.
    fn in_dir(dir: &TempDir, args: &[&str]) -> Command {
        let mut cmd = favcache();
        cmd.args(args)
            .arg("--cache-dir")
            .arg(dir.path())
            .arg("--config")
            .arg(dir.path().join("config.toml"));
        cmd
    }

    #[test]
    fn help_displays() {
        favcache()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Local favicon cache"));
    }

    #[test]
    fn version_displays() {
        favcache()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("favcache"));
    }

    #[test]
    fn status_creates_empty_index() {
        let dir = TempDir::new().unwrap();

        in_dir(&dir, &["status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Total:   0"));

        let index = dir.path().join("images").join("index.json");
        assert_eq!(std::fs::read_to_string(index).unwrap(), "[]");
    }

    #[test]
    fn register_then_status() {
        let dir = TempDir::new().unwrap();

        in_dir(&dir, &["register", "e1", "--fav", "app.example.com"])
            .assert()
            .success()
            .stdout(predicate::str::contains("registered e1"));

        in_dir(&dir, &["status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Total:   1"))
            .stdout(predicate::str::contains("Pending: 1"));
    }

    #[test]
    fn register_extracts_key_from_payload() {
        let dir = TempDir::new().unwrap();

        in_dir(
            &dir,
            &[
                "register",
                "e1",
                "--payload",
                r#"{"fav":"x.y","title":"ignored"}"#,
            ],
        )
        .assert()
        .success();

        let index = dir.path().join("images").join("index.json");
        let content = std::fs::read_to_string(index).unwrap();
        assert!(content.contains(r#""fav":"x.y""#));
    }

    #[test]
    fn register_rejects_path_like_ids() {
        let dir = TempDir::new().unwrap();

        in_dir(&dir, &["register", "../evil", "--fav", "x.y"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid entry id"));
    }

    #[test]
    fn register_requires_a_key_source() {
        let dir = TempDir::new().unwrap();

        in_dir(&dir, &["register", "e1"]).assert().failure();
    }

    #[test]
    fn resolve_uncached_fails() {
        let dir = TempDir::new().unwrap();

        in_dir(&dir, &["resolve", "e1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No cached icon"));
    }

    #[test]
    fn resolve_uncached_prints_fallback() {
        let dir = TempDir::new().unwrap();

        in_dir(&dir, &["resolve", "e1", "--fallback", "/icons/default.png"])
            .assert()
            .success()
            .stdout(predicate::str::contains("/icons/default.png"));
    }

    #[test]
    fn resolve_prints_cached_path() {
        let dir = TempDir::new().unwrap();
        let images = dir.path().join("images");
        std::fs::create_dir_all(&images).unwrap();
        std::fs::write(
            images.join("index.json"),
            r#"[{"itemId":"e1","status":"exist","fav":"x.y"}]"#,
        )
        .unwrap();
        std::fs::write(images.join("e1.png"), b"png bytes").unwrap();

        in_dir(&dir, &["resolve", "e1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("e1.png"));
    }

    #[test]
    fn update_with_nothing_pending() {
        let dir = TempDir::new().unwrap();

        in_dir(&dir, &["update"])
            .assert()
            .success()
            .stdout(predicate::str::contains("0 pending"));
    }

    #[test]
    fn update_respects_held_lock() {
        let dir = TempDir::new().unwrap();
        let images = dir.path().join("images");
        std::fs::create_dir_all(&images).unwrap();
        std::fs::write(images.join("update.lock"), "999").unwrap();

        in_dir(&dir, &["update"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already running"));
    }

    #[test]
    fn config_path() {
        let dir = TempDir::new().unwrap();

        in_dir(&dir, &["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_defaults() {
        let dir = TempDir::new().unwrap();

        in_dir(&dir, &["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[provider]"))
            .stdout(predicate::str::contains("favicon.enpass.io"));
    }

    #[test]
    fn config_show_reads_overrides() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[provider]\nsize = \"64x64\"\n",
        )
        .unwrap();

        in_dir(&dir, &["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("64x64"));
    }
}
