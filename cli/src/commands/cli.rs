use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Run Robot Framework acceptance tests")]
pub struct Args {
    /// Configuration file (defaults to ./robotrun.toml when present).
    #[arg(long, env = "ROBOTRUN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Test case file or directory; replaces the configured one.
    #[arg(long)]
    pub test_cases_directory: Option<PathBuf>,

    /// Comma-separated test names; replaces the configured list.
    #[arg(long, value_delimiter = ',')]
    pub tests: Option<Vec<String>>,

    #[arg(long, value_delimiter = ',')]
    pub tasks: Option<Vec<String>>,

    #[arg(long, value_delimiter = ',')]
    pub suites: Option<Vec<String>>,

    #[arg(long, value_delimiter = ',')]
    pub includes: Option<Vec<String>>,

    #[arg(long, value_delimiter = ',')]
    pub excludes: Option<Vec<String>>,

    /// Comma-separated `name:value` pairs, appended after the configured variables.
    #[arg(long, value_delimiter = ',')]
    pub variables: Option<Vec<String>>,

    /// Re-execute only the tests that failed in the previous run.
    #[arg(long, default_value_t = false)]
    pub rerun_failed: bool,

    #[arg(long, default_value_t = false)]
    pub skip_tests: bool,

    #[arg(long, default_value_t = false)]
    pub skip_ats: bool,

    #[arg(long, default_value_t = false)]
    pub skip_its: bool,

    #[arg(long, default_value_t = false)]
    pub skip: bool,

    /// Print the generated engine arguments and exit without running.
    #[arg(long, default_value_t = false)]
    pub print_args: bool,
}
