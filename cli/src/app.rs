use std::sync::Arc;

use robotrun_core::api::{
    build_run_arguments, run_acceptance, AppConfig, CliError, CommandLineOverrides, ConsoleSink,
    RunSummary,
};
use robotrun_core::config;
use robotrun_plugins::services;

use crate::commands::cli::Args;

/// Fold command-line values into the loaded configuration.
///
/// Flags only ever switch options on; list options are kept as overrides so
/// the argument builder can apply replace/append precedence.
pub fn apply_args(cfg: &mut AppConfig, args: &Args) {
    let run = &mut cfg.run;
    if let Some(dir) = &args.test_cases_directory {
        run.test_cases_directory = dir.clone();
    }
    run.rerun_failed |= args.rerun_failed;
    run.skip_tests |= args.skip_tests;
    run.skip_ats |= args.skip_ats;
    run.skip_its |= args.skip_its;
    run.skip |= args.skip;

    run.overrides = CommandLineOverrides {
        tests: args.tests.clone(),
        tasks: args.tasks.clone(),
        suites: args.suites.clone(),
        includes: args.includes.clone(),
        excludes: args.excludes.clone(),
        variables: args.variables.clone(),
    };
}

pub async fn run_app(args: Args) -> Result<i32, CliError> {
    let mut cfg = config::load(args.config.as_deref())?;
    apply_args(&mut cfg, &args);

    if args.print_args {
        config::validate(&cfg)?;
        let run_args = build_run_arguments(&cfg.run);
        for token in &run_args.tokens {
            println!("{token}");
        }
        return Ok(0);
    }

    let ctx = services::build_context(&cfg, Arc::new(ConsoleSink));
    match run_acceptance(&cfg, &ctx).await? {
        RunSummary::Skipped => {}
        RunSummary::Completed {
            exit_code,
            outcome,
            fallback_report,
        } => {
            tracing::info!(
                target: "robotrun.cli",
                exit_code,
                outcome = %outcome,
                fallback_report = ?fallback_report,
                "robot framework run finished"
            );
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("robotrun").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn comma_lists_become_overrides() {
        let args = parse(&["--tests", "Login,Logout", "--variables", "env:ci"]);
        let mut cfg = AppConfig::default();
        apply_args(&mut cfg, &args);

        assert_eq!(
            cfg.run.overrides.tests,
            Some(vec!["Login".to_string(), "Logout".to_string()])
        );
        assert_eq!(cfg.run.overrides.variables, Some(vec!["env:ci".to_string()]));
        assert_eq!(cfg.run.overrides.suites, None);
    }

    #[test]
    fn flags_do_not_clear_configured_values() {
        let args = parse(&[]);
        let mut cfg = AppConfig::default();
        cfg.run.rerun_failed = true;
        cfg.run.skip_its = true;
        apply_args(&mut cfg, &args);

        assert!(cfg.run.rerun_failed);
        assert!(cfg.run.should_skip());
    }

    #[test]
    fn test_cases_directory_replaces_config() {
        let args = parse(&["--test-cases-directory", "atest/smoke", "--skip"]);
        let mut cfg = AppConfig::default();
        apply_args(&mut cfg, &args);

        assert_eq!(cfg.run.test_cases_directory, PathBuf::from("atest/smoke"));
        assert!(cfg.run.skip);
    }

    #[test]
    fn override_replaces_list_in_built_arguments() {
        let args = parse(&["--includes", "smoke"]);
        let mut cfg = AppConfig::default();
        cfg.run.includes = vec!["slow".into()];
        apply_args(&mut cfg, &args);

        let tokens = build_run_arguments(&cfg.run).tokens;
        assert!(tokens.windows(2).any(|w| w == ["-i", "smoke"]));
        assert!(!tokens.iter().any(|t| t == "slow"));
    }

    #[tokio::test]
    async fn skipped_run_exits_zero() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg_path = tmp.path().join("robotrun.toml");
        std::fs::write(&cfg_path, "[run]\nskip = true\n").unwrap();

        let args = parse(&["--config", cfg_path.to_str().unwrap()]);
        assert_eq!(run_app(args).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn missing_explicit_config_is_an_error() {
        let args = parse(&["--config", "/no/such/robotrun.toml"]);
        assert!(matches!(run_app(args).await, Err(CliError::Config(_))));
    }
}
