use std::process::ExitStatus;

/// Engine exit status of a finished child.
///
/// The engine reports through its exit code. A child that got no exit code
/// (killed by a signal) is reported as `128 + signal`, or `1` where signals
/// do not exist.
pub fn normalize_exit(status: ExitStatus) -> i32 {
    status
        .code()
        .or_else(|| terminating_signal(status).map(|sig| 128 + sig))
        .unwrap_or(1)
}

#[cfg(unix)]
fn terminating_signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: ExitStatus) -> Option<i32> {
    None
}
