//! Engine exit status taxonomy.
//!
//! | code    | meaning                                   |
//! |---------|-------------------------------------------|
//! | 0       | all critical tests passed                 |
//! | 1-249   | that many critical tests failed           |
//! | 250     | 250 or more critical failures             |
//! | 251     | help or version printed, nothing executed |
//! | 252     | invalid test data or command line options |
//! | 253     | execution stopped by user                 |
//! | 255     | unexpected internal error                 |
//!
//! These numbers are the engine's own contract and must not be renumbered.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeCode {
    AllPassed,
    CriticalFailures(u8),
    TooManyFailures,
    HelpOrVersion,
    InvalidData,
    StoppedByUser,
    InternalError,
    Unrecognized(i32),
}

impl OutcomeCode {
    pub fn from_exit(code: i32) -> Self {
        match code {
            0 => OutcomeCode::AllPassed,
            1..=249 => OutcomeCode::CriticalFailures(code as u8),
            250 => OutcomeCode::TooManyFailures,
            251 => OutcomeCode::HelpOrVersion,
            252 => OutcomeCode::InvalidData,
            253 => OutcomeCode::StoppedByUser,
            255 => OutcomeCode::InternalError,
            other => OutcomeCode::Unrecognized(other),
        }
    }

    /// Message for a synthesized xunit file, when the engine's own report
    /// cannot be relied on.
    ///
    /// Only 252 and 255 produce one. 250, 251 and 253 are deliberately left
    /// to whatever the engine wrote.
    pub fn fallback_message(&self) -> Option<&'static str> {
        match self {
            OutcomeCode::InvalidData => {
                Some("Invalid test data or command line options (Returncode 252).")
            }
            OutcomeCode::InternalError => Some("Unexpected internal error (Returncode 255)."),
            _ => None,
        }
    }
}

impl fmt::Display for OutcomeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeCode::AllPassed => write!(f, "all critical tests passed"),
            OutcomeCode::CriticalFailures(n) => write!(f, "{n} critical test(s) failed"),
            OutcomeCode::TooManyFailures => write!(f, "250 or more critical tests failed"),
            OutcomeCode::HelpOrVersion => write!(f, "help or version information printed"),
            OutcomeCode::InvalidData => write!(f, "invalid test data or command line options"),
            OutcomeCode::StoppedByUser => write!(f, "test execution stopped by user"),
            OutcomeCode::InternalError => write!(f, "unexpected internal error"),
            OutcomeCode::Unrecognized(code) => write!(f, "unrecognized exit status {code}"),
        }
    }
}
