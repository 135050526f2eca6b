//! Maps `Box<dyn Error>` from collaborator boundaries to typed `DigitizerError`.
//!
//! The traits in `digitizer_traits` use `Box<dyn Error + Send + Sync>` so any
//! front-end can plug in; this module converts those to our typed error enum,
//! with an optional feature-gated path for `digitizer_terminal::TerminalError`.

use digitizer_traits::BoxError;

use crate::error::DigitizerError;

/// Map a collaborator error to a typed `DigitizerError`.
///
/// Attempts to downcast known front-end error types first, then falls back
/// to string-based heuristics.
pub fn map_ui_error(e: &(dyn std::error::Error + 'static)) -> DigitizerError {
    #[cfg(feature = "terminal-errors")]
    {
        use digitizer_terminal::TerminalError;
        if let Some(te) = e.downcast_ref::<TerminalError>() {
            return match te {
                TerminalError::InputClosed => DigitizerError::InputClosed,
                TerminalError::Image(msg) => DigitizerError::Image(msg.clone()),
                TerminalError::Io(io) => DigitizerError::Io(io.to_string()),
            };
        }
    }

    if let Some(io) = e.downcast_ref::<std::io::Error>() {
        return if io.kind() == std::io::ErrorKind::UnexpectedEof {
            DigitizerError::InputClosed
        } else {
            DigitizerError::Io(io.to_string())
        };
    }

    // Fallback: string-based detection
    let s = e.to_string();
    let lower = s.to_lowercase();
    if lower.contains("closed") || lower.contains("eof") {
        DigitizerError::InputClosed
    } else if lower.contains("image") {
        DigitizerError::Image(s)
    } else {
        DigitizerError::Ui(s)
    }
}

impl From<BoxError> for DigitizerError {
    fn from(e: BoxError) -> Self {
        map_ui_error(e.as_ref())
    }
}
