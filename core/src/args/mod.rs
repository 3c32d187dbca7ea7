//! Translation of a [`RunConfig`] into the engine's command line.

mod builder;
mod naming;

use std::path::PathBuf;

pub use builder::Arguments;
pub use naming::{default_xunit_file, suite_name};
pub(crate) use naming::final_component;

use crate::config::RunConfig;
use crate::report::result_path;

/// Always appended: non-critical failures do not count in the xunit summary.
pub const XUNIT_SKIP_NONCRITICAL: &str = "--xunitskipnoncritical";

/// Engine arguments for one run plus the xunit file they point the engine at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArguments {
    pub tokens: Vec<String>,
    pub xunit_file: PathBuf,
}

/// Override list if given on the command line, the configured list otherwise.
fn effective<'a>(base: &'a [String], cli: Option<&'a Vec<String>>) -> &'a [String] {
    cli.map(Vec::as_slice).unwrap_or(base)
}

/// Build the engine command line. The test case path is always the last token.
pub fn build_run_arguments(run: &RunConfig) -> RunArguments {
    let ov = &run.overrides;
    let mut args = Arguments::new();

    args.add_path(Some(run.output_directory.as_path()), "-d")
        .add_path(run.output.as_deref(), "-o")
        .add_path(run.log.as_deref(), "-l")
        .add_path(run.report.as_deref(), "-r")
        .add_path(run.debug_file.as_deref(), "-b")
        .add_path(run.argument_file.as_deref(), "-A");

    args.add_non_empty(run.console.as_deref(), "--console")
        .add_non_empty(run.name.as_deref(), "-N")
        .add_non_empty(run.document.as_deref(), "-D")
        .add_non_empty(run.run_mode.as_deref(), "--runmode")
        .add_flag(run.rpa, "--rpa")
        .add_flag(run.dryrun, "--dryrun")
        .add_flag(run.exit_on_failure, "--exitonfailure")
        .add_flag(run.skip_teardown_on_exit, "--skipteardownonexit")
        .add_non_empty(run.randomize.as_deref(), "--randomize")
        .add_non_empty(run.split_outputs.as_deref(), "--splitoutputs")
        .add_non_empty(run.log_title.as_deref(), "--logtitle")
        .add_non_empty(run.report_title.as_deref(), "--reporttitle")
        .add_non_empty(run.report_background.as_deref(), "--reportbackground")
        .add_non_empty(run.summary_title.as_deref(), "--summarytitle")
        .add_non_empty(run.log_level.as_deref(), "-L")
        .add_non_empty(run.suite_stat_level.as_deref(), "--suitestatlevel")
        .add_non_empty(run.console_width.as_deref(), "--consolewidth")
        .add_non_empty(run.console_colors.as_deref(), "--consolecolors")
        .add_non_empty(run.listener.as_deref(), "--listener")
        .add_flag(run.run_empty_suite, "--runemptysuite")
        .add_flag(run.no_status_return_code, "--nostatusrc")
        .add_flag(run.timestamp_outputs, "-T")
        .add_flag(run.warn_on_skipped_files, "--warnonskippedfiles");

    args.add_list(&run.metadata, "-M")
        .add_list(&run.tags, "-G")
        .add_list(&run.remove_keywords, "--removekeywords")
        .add_list(&run.flatten_keywords, "--flattenkeywords")
        .add_list(effective(&run.tests, ov.tests.as_ref()), "-t")
        .add_list(effective(&run.tasks, ov.tasks.as_ref()), "--task")
        .add_list(effective(&run.suites, ov.suites.as_ref()), "-s")
        .add_list(effective(&run.includes, ov.includes.as_ref()), "-i")
        .add_list(effective(&run.excludes, ov.excludes.as_ref()), "-e")
        .add_list(&run.critical_tags, "-c")
        .add_list(&run.non_critical_tags, "-n");

    // Command-line variables come after the configured ones so they win on
    // name collision.
    args.add_list(&run.variables, "-v");
    if let Some(extra) = &ov.variables {
        args.add_list(extra, "-v");
    }

    args.add_list(&run.variable_files, "-V")
        .add_list(&run.tag_stat_includes, "--tagstatinclude")
        .add_list(&run.tag_stat_excludes, "--tagstatexclude")
        .add_list(&run.combined_tag_stats, "--tagstatcombine")
        .add_list(&run.tag_docs, "--tagdoc")
        .add_list(&run.tag_stat_links, "--tagstatlink")
        .add_list(&run.listeners, "--listener");

    match &run.extra_path_directories {
        Some(dirs) => args.add_path_list(dirs, "-P"),
        None => args.add_path(Some(run.default_extra_path.as_path()), "-P"),
    };

    let xunit_file = run
        .xunit_file
        .clone()
        .unwrap_or_else(|| default_xunit_file(&run.test_cases_directory));
    args.add_path(Some(xunit_file.as_path()), "-x")
        .add_flag(true, XUNIT_SKIP_NONCRITICAL);

    if run.rerun_failed {
        // Output files are written relative to `-d`, but this one is read
        // relative to the working directory.
        let previous = run.output.as_deref().unwrap_or(xunit_file.as_path());
        let previous = result_path(&run.output_directory, previous);
        args.add_path(Some(previous.as_path()), "--rerunfailed");
    }

    args.add(run.test_cases_directory.to_string_lossy().into_owned());

    RunArguments {
        tokens: args.into_vec(),
        xunit_file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommandLineOverrides;
    use pretty_assertions::assert_eq;

    fn count_flag(tokens: &[String], flag: &str) -> usize {
        tokens.iter().filter(|t| t.as_str() == flag).count()
    }

    fn in_default_output(file: &str) -> String {
        PathBuf::from("target/robotframework-reports")
            .join(file)
            .to_string_lossy()
            .into_owned()
    }

    fn values_of(tokens: &[String], flag: &str) -> Vec<String> {
        tokens
            .windows(2)
            .filter(|w| w[0] == flag)
            .map(|w| w[1].clone())
            .collect()
    }

    fn base() -> RunConfig {
        RunConfig {
            test_cases_directory: PathBuf::from("src/test/robotframework/acceptance"),
            ..RunConfig::default()
        }
    }

    #[test]
    fn default_config_produces_minimal_command_line() {
        let out = build_run_arguments(&base());
        assert_eq!(
            out.tokens,
            vec![
                "-d",
                "target/robotframework-reports",
                "--console",
                "verbose",
                "-P",
                "src/test/resources/robotframework/libraries",
                "-x",
                "TEST-acceptance.xml",
                "--xunitskipnoncritical",
                "src/test/robotframework/acceptance",
            ]
        );
        assert_eq!(out.xunit_file, PathBuf::from("TEST-acceptance.xml"));
    }

    #[test]
    fn test_cases_path_is_always_last() {
        let mut run = base();
        run.rerun_failed = true;
        run.output = Some(PathBuf::from("output.xml"));
        run.tests = vec!["a".into()];
        run.listeners = vec!["Listener".into()];
        let out = build_run_arguments(&run);
        assert_eq!(
            out.tokens.last().map(String::as_str),
            Some("src/test/robotframework/acceptance")
        );
        assert_eq!(
            values_of(&out.tokens, "--rerunfailed"),
            vec![in_default_output("output.xml")]
        );
    }

    #[test]
    fn boolean_flags_appear_once_when_true() {
        let mut run = base();
        run.dryrun = true;
        run.rpa = true;
        let out = build_run_arguments(&run);
        assert_eq!(count_flag(&out.tokens, "--dryrun"), 1);
        assert_eq!(count_flag(&out.tokens, "--rpa"), 1);
        assert_eq!(count_flag(&out.tokens, "--exitonfailure"), 0);
        assert_eq!(count_flag(&out.tokens, "--nostatusrc"), 0);
        assert_eq!(count_flag(&out.tokens, "--xunitskipnoncritical"), 1);
    }

    #[test]
    fn list_options_repeat_the_flag_in_order() {
        let mut run = base();
        run.includes = vec!["smoke".into(), "regression".into(), "slow".into()];
        let out = build_run_arguments(&run);
        assert_eq!(count_flag(&out.tokens, "-i"), 3);
        assert_eq!(values_of(&out.tokens, "-i"), vec!["smoke", "regression", "slow"]);
        assert_eq!(count_flag(&out.tokens, "-e"), 0);
    }

    #[test]
    fn command_line_override_replaces_configured_list() {
        let mut run = base();
        run.tests = vec!["from-file".into()];
        run.suites = vec!["kept".into()];
        run.overrides = CommandLineOverrides {
            tests: Some(vec!["foo".into(), "successful*".into()]),
            ..CommandLineOverrides::default()
        };
        let out = build_run_arguments(&run);
        assert_eq!(values_of(&out.tokens, "-t"), vec!["foo", "successful*"]);
        assert_eq!(values_of(&out.tokens, "-s"), vec!["kept"]);
    }

    #[test]
    fn command_line_variables_are_appended() {
        let mut run = base();
        run.variables = vec!["A:file".into(), "B:file".into()];
        run.overrides.variables = Some(vec!["A:prompt".into()]);
        let out = build_run_arguments(&run);
        assert_eq!(values_of(&out.tokens, "-v"), vec!["A:file", "B:file", "A:prompt"]);
    }

    #[test]
    fn explicit_extra_paths_replace_default() {
        let mut run = base();
        run.extra_path_directories = Some(vec![PathBuf::from("libs"), PathBuf::from("jars")]);
        let out = build_run_arguments(&run);
        assert_eq!(values_of(&out.tokens, "-P"), vec!["libs", "jars"]);
    }

    #[test]
    fn explicit_xunit_file_is_used() {
        let mut run = base();
        run.xunit_file = Some(PathBuf::from("custom.xml"));
        let out = build_run_arguments(&run);
        assert_eq!(values_of(&out.tokens, "-x"), vec!["custom.xml"]);
        assert_eq!(out.xunit_file, PathBuf::from("custom.xml"));
    }

    #[test]
    fn rerun_without_output_reads_result_file() {
        let mut run = base();
        run.test_cases_directory = PathBuf::from("atest/my suite");
        run.rerun_failed = true;
        let out = build_run_arguments(&run);
        assert_eq!(
            values_of(&out.tokens, "--rerunfailed"),
            vec![in_default_output("TEST-my_suite.xml")]
        );
    }

    #[test]
    fn rerun_reads_the_file_the_fallback_writer_targets() {
        let mut run = base();
        run.rerun_failed = true;
        let out = build_run_arguments(&run);
        let written = result_path(&run.output_directory, &out.xunit_file);
        assert_eq!(
            values_of(&out.tokens, "--rerunfailed"),
            vec![written.to_string_lossy().into_owned()]
        );
        assert_eq!(values_of(&out.tokens, "-x"), vec!["TEST-acceptance.xml"]);
    }

    #[test]
    fn absolute_output_is_read_back_unchanged() {
        let mut run = base();
        run.rerun_failed = true;
        let previous = std::env::temp_dir().join("output.xml");
        run.output = Some(previous.clone());
        let out = build_run_arguments(&run);
        assert_eq!(
            values_of(&out.tokens, "--rerunfailed"),
            vec![previous.to_string_lossy().into_owned()]
        );
    }

    #[test]
    fn single_listener_and_listener_list_both_emit() {
        let mut run = base();
        run.listener = Some("One".into());
        run.listeners = vec!["Two".into()];
        let out = build_run_arguments(&run);
        assert_eq!(values_of(&out.tokens, "--listener"), vec!["One", "Two"]);
    }
}
