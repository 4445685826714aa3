//! Host shell invocation.

use std::io;
use std::process::Command;

/// Exit code reported when the child was terminated by a signal.
pub const SIGNALED: i32 = -1;

/// Run `command` through `sh -c` and wait for it to finish.
///
/// The command line is handed to the shell as-is, so chaining and
/// substitution operators take effect. Output is inherited from the server.
pub fn system(command: &str) -> io::Result<i32> {
    let status = Command::new("sh").arg("-c").arg(command).status()?;
    Ok(status.code().unwrap_or(SIGNALED))
}
