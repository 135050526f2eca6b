//! Status returned from each session step.

/// Outcome of a single `Session::step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// More steps remain.
    Running,
    /// The user declined another curve; the display has been cleared.
    Finished,
}
