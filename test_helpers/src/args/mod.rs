//! Shell-style argument splitting.
//!
//! Lets tests write a command line the way a user would type it, quotes
//! included, instead of building argument vectors by hand.

use anyhow::{Result, anyhow};

/// Splits `command` into arguments using POSIX shell quoting rules.
///
/// # Errors
///
/// Returns an error when the command contains unbalanced quotes or a
/// trailing escape.
///
/// # Examples
///
/// ```
/// use autoflags_test_helpers::args::split;
///
/// let args = split("-name 'Jane Roe' -age=29").unwrap();
/// assert_eq!(args, ["-name", "Jane Roe", "-age=29"]);
/// ```
pub fn split(command: &str) -> Result<Vec<String>> {
    shlex::split(command).ok_or_else(|| anyhow!("unbalanced quoting in {command:?}"))
}
