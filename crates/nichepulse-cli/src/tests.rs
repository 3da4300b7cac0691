use super::*;

#[test]
fn parses_score_command() {
    let cli = Cli::try_parse_from(["nichepulse", "score", "--signals", "week.json"])
        .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Score { signals }) => assert_eq!(signals, PathBuf::from("week.json")),
        other => panic!("unexpected command: {other:?}"),
    }
    assert!(cli.scoring.is_none());
}

#[test]
fn score_requires_signals_path() {
    assert!(Cli::try_parse_from(["nichepulse", "score"]).is_err());
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["nichepulse"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn scoring_flag_is_global() {
    let cli = Cli::try_parse_from([
        "nichepulse",
        "batch",
        "--dir",
        "signals",
        "--scoring",
        "caps.yaml",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.scoring, Some(PathBuf::from("caps.yaml")));
    assert!(matches!(
        cli.command,
        Some(Commands::Batch {
            concurrency: None,
            ..
        })
    ));
}

#[test]
fn batch_with_concurrency() {
    let cli = Cli::try_parse_from([
        "nichepulse",
        "batch",
        "--dir",
        "signals",
        "--concurrency",
        "8",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Batch {
            concurrency: Some(8),
            ..
        })
    ));
}

#[test]
fn batch_rejects_non_numeric_concurrency() {
    let result = Cli::try_parse_from([
        "nichepulse",
        "batch",
        "--dir",
        "signals",
        "--concurrency",
        "lots",
    ]);
    assert!(result.is_err());
}

#[test]
fn diff_requires_all_three_paths() {
    let result = Cli::try_parse_from([
        "nichepulse",
        "diff",
        "--competitor",
        "c.json",
        "--previous",
        "a.json",
    ]);
    assert!(result.is_err());

    let cli = Cli::try_parse_from([
        "nichepulse",
        "diff",
        "--competitor",
        "c.json",
        "--previous",
        "a.json",
        "--current",
        "b.json",
    ])
    .expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Diff { .. })));
}

#[test]
fn mock_defaults() {
    let cli = Cli::try_parse_from(["nichepulse", "mock"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Mock { seed: 42, count: 1 })
    ));
}

#[test]
fn mock_with_seed_and_count() {
    let cli = Cli::try_parse_from(["nichepulse", "mock", "--seed", "7", "--count", "3"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Mock { seed: 7, count: 3 })
    ));
}

#[test]
fn report_takes_niche_and_history() {
    let cli = Cli::try_parse_from([
        "nichepulse",
        "report",
        "--niche",
        "invoicing",
        "--history",
        "history.json",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Report { niche, history }) => {
            assert_eq!(niche, "invoicing");
            assert_eq!(history, PathBuf::from("history.json"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn gaps_and_posts_parse() {
    let cli = Cli::try_parse_from(["nichepulse", "gaps", "--input", "gaps.json"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Gaps { .. })));

    let cli = Cli::try_parse_from(["nichepulse", "posts", "--input", "posts.json"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Posts { top: 10, .. })));
}

#[test]
fn build_scorer_without_path_uses_defaults() {
    let config = AppConfig {
        env: nichepulse_core::Environment::Test,
        log_level: "info".to_owned(),
        scoring_path: None,
        batch_concurrency: 4,
    };
    let scorer = build_scorer(&config, None).expect("default scorer");
    assert_eq!(scorer.config(), &ScoringConfig::default());
}

#[test]
fn build_scorer_reports_missing_file() {
    let config = AppConfig {
        env: nichepulse_core::Environment::Test,
        log_level: "info".to_owned(),
        scoring_path: None,
        batch_concurrency: 4,
    };
    let missing = Path::new("/nonexistent/nichepulse/scoring.yaml");
    assert!(build_scorer(&config, Some(missing)).is_err());
}

#[test]
fn help_is_answered_by_the_parser() {
    let err = Cli::try_parse_from(["nichepulse", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
