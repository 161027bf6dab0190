//! Subcommand implementations.
//!
//! Each command takes the resolved [`Settings`](crate::config::Settings) and
//! writes its report to the given writer; logs go to stderr.

pub mod check;
pub mod generate;
pub mod theme;
pub mod themes;

/// Outcome of a successful command run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    /// The stylesheet on disk differs from the generated one.
    Drift,
}

impl Status {
    /// Process exit code. Errors exit with 1 and are handled by the binary.
    pub fn code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Drift => 2,
        }
    }
}
