//! CLI-specific error formatting for user-facing messages.

use crate::error::SweepError;

/// Map a [`SweepError`] to a user-facing help string with actionable guidance.
pub fn format_error_help(err: &SweepError) -> String {
    match err {
        _ if err.is_permission_denied() => {
            format!("{err}. Check the permissions of your agent directories, or rerun with access to them")
        }
        SweepError::Prompt(msg) => {
            format!("Prompt failed: {msg}. skill-sweep needs an interactive terminal")
        }
        other => format!("{other}"),
    }
}
