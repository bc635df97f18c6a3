//! Integration tests for tzmemo

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    /// Isolated from the user's config and pinned to the bundled database.
    fn tzmemo(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("tzmemo");
        cmd.env("TZMEMO_CONFIG", temp.path().join("config.toml"))
            .env_remove("RUST_LOG")
            .args(["--tzdb", "bundled"]);
        cmd
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        tzmemo(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Memoizing time zone resolver"));
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        tzmemo(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("tzmemo"));
    }

    #[test]
    fn resolve_repeat_hits_cache() {
        let temp = TempDir::new().unwrap();
        tzmemo(&temp)
            .args(["resolve", "UTC", "--repeat", "3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("UTC [miss]"))
            .stdout(predicate::str::contains("UTC [hit]"))
            .stdout(predicate::str::contains("hits: 2"))
            .stdout(predicate::str::contains("misses: 1"))
            .stdout(predicate::str::contains("entries: 1"));
    }

    #[test]
    fn resolve_reports_local_time() {
        let temp = TempDir::new().unwrap();
        // 2022-06-04T05:00:00Z
        tzmemo(&temp)
            .args(["resolve", "America/Chicago", "--at", "1654318800", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"local_time\": \"2022-06-04T00:00:00\""))
            .stdout(predicate::str::contains("\"offset_seconds\": -18000"))
            .stdout(predicate::str::contains("\"outcome\": \"miss\""));
    }

    #[test]
    fn resolve_unknown_zone_fails() {
        let temp = TempDir::new().unwrap();
        tzmemo(&temp)
            .args(["resolve", "pizza", "--repeat", "2"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("[FAIL] pizza"))
            .stdout(predicate::str::contains("parse failures: 2"))
            .stdout(predicate::str::contains("entries: 0"))
            .stderr(predicate::str::contains("2 of 2 lookups failed"));
    }

    #[test]
    fn resolve_mixed_keeps_good_entries() {
        let temp = TempDir::new().unwrap();
        tzmemo(&temp)
            .args(["resolve", "Asia/Tokyo", "../etc/passwd", "--json"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("\"entries\": 1"))
            .stdout(predicate::str::contains("invalid identifier"))
            .stderr(predicate::str::contains("1 of 2 lookups failed"));
    }

    #[test]
    fn list_filters() {
        let temp = TempDir::new().unwrap();
        tzmemo(&temp)
            .args(["list", "--filter", "new_york"])
            .assert()
            .success()
            .stdout(predicate::str::contains("America/New_York"));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        tzmemo(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        tzmemo(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[cache]"))
            .stdout(predicate::str::contains("initial_capacity = 16"));
    }

    #[test]
    fn config_set_then_show() {
        let temp = TempDir::new().unwrap();
        tzmemo(&temp)
            .args(["config", "set", "cache.initial_capacity", "64"])
            .assert()
            .success();

        tzmemo(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("initial_capacity = 64"));
    }

    #[test]
    fn invalid_config_is_reported() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.toml"), "[tzdb]\nsource = \"cloud\"\n").unwrap();

        tzmemo(&temp)
            .args(["resolve", "UTC"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"))
            .stderr(predicate::str::contains("config init --force"));
    }

    #[test]
    fn directory_source_without_path_fails() {
        let temp = TempDir::new().unwrap();
        let mut cmd = cargo_bin_cmd!("tzmemo");
        cmd.env("TZMEMO_CONFIG", temp.path().join("config.toml"))
            .args(["--tzdb", "directory", "resolve", "UTC"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("tzdb.directory is not set"));
    }
}

mod resolver_tests {
    use std::sync::Arc;
    use tzmemo::tzdb::{open_database, DatabaseSource, JiffParser, TzResolver};
    use tzmemo::{Outcome, ParseErrorCode};

    #[test]
    fn resolves_through_public_api() {
        let db = open_database(DatabaseSource::Bundled, None).unwrap();
        let resolver = TzResolver::with_capacity(JiffParser, 2);

        let utc = resolver.lookup("UTC", &db).unwrap();
        let new_york = resolver.lookup("America/New_York", &db).unwrap();
        let utc_again = resolver.lookup("UTC", &db).unwrap();

        assert_eq!(utc.outcome, Outcome::Miss);
        assert_eq!(new_york.outcome, Outcome::Miss);
        assert_eq!(utc_again.outcome, Outcome::Hit);
        assert!(Arc::ptr_eq(&utc.descriptor, &utc_again.descriptor));

        let stats = resolver.stats();
        assert_eq!((stats.hits, stats.misses, stats.entries), (1, 2, 2));
    }

    #[test]
    fn failed_lookup_does_not_poison_later_ones() {
        let db = open_database(DatabaseSource::Bundled, None).unwrap();
        let resolver = TzResolver::new(JiffParser);

        let err = resolver.resolve("Nowhere/Special", &db).unwrap_err();
        assert_eq!(err.parse_code(), Some(ParseErrorCode::UnknownIdentifier));
        assert!(err.is_retryable());

        let tz = resolver.resolve("Europe/London", &db).unwrap();
        assert_eq!(tz.iana_name(), Some("Europe/London"));
        assert_eq!(resolver.len(), 1);
    }
}
