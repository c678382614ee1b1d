//! Tests for the run module.

use super::*;

mod run_error {
    use super::*;

    #[test]
    fn exhausted_displays_attempt_count() {
        let error = RunError::Exhausted { attempts: 10 };
        assert_eq!(error.to_string(), "Fetch failed after 10 attempt(s)");
    }

    #[test]
    fn debug_format_works() {
        let error = RunError::Exhausted { attempts: 3 };
        let debug_str = format!("{error:?}");
        assert!(debug_str.contains("Exhausted"));
    }
}

mod build_cycle {
    use super::*;
    use tempfile::TempDir;
    use zonefeed::config::Cli;

    fn make_test_config(dir: &TempDir) -> ValidatedConfig {
        let output = dir.path().join("blocklist.conf");
        let cli = Cli::parse_from_iter([
            "zonefeed",
            "--source",
            "https://example.com/blocklist.txt",
            "--output-file",
            output.to_str().unwrap(),
            "--retry-max",
            "5",
            "--retry-delay",
            "2",
        ]);
        ValidatedConfig::from_raw(&cli, None).unwrap()
    }

    #[test]
    fn uses_configured_source() {
        let dir = TempDir::new().unwrap();
        let cycle = build_cycle(&make_test_config(&dir));

        assert_eq!(cycle.source().as_str(), "https://example.com/blocklist.txt");
    }

    #[test]
    fn uses_configured_retry_policy() {
        let dir = TempDir::new().unwrap();
        let cycle = build_cycle(&make_test_config(&dir));

        assert_eq!(cycle.retry_policy().max_attempts, 5);
        assert_eq!(
            cycle.retry_policy().delay,
            std::time::Duration::from_secs(2)
        );
    }
}

mod finish {
    use super::*;

    #[test]
    fn completed_cycle_succeeds() {
        let result = finish(CycleOutcome::Completed { processed: 42 });

        assert!(result.is_ok());
    }

    #[test]
    fn exhausted_cycle_fails_with_attempt_count() {
        match finish(CycleOutcome::Exhausted { attempts: 10 }) {
            Err(RunError::Exhausted { attempts }) => assert_eq!(attempts, 10),
            other => panic!("expected exhaustion error, got {other:?}"),
        }
    }
}
