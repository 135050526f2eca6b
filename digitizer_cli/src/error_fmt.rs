//! Human-readable error descriptions and structured JSON error formatting.

use digitizer_core::error::{BuildError, CalibrationError, DigitizerError, InterpolationError};

/// Stable name for the JSON `reason` field.
pub fn reason_name(err: &eyre::Report) -> &'static str {
    if let Some(de) = err.downcast_ref::<DigitizerError>() {
        return match de {
            DigitizerError::Ui(_) => "Ui",
            DigitizerError::InputClosed => "InputClosed",
            DigitizerError::Image(_) => "Image",
            DigitizerError::Io(_) => "Io",
            DigitizerError::Config(_) => "Config",
            DigitizerError::Calibration(_) => "Calibration",
            DigitizerError::Interpolation(_) => "Interpolation",
        };
    }
    if err.downcast_ref::<BuildError>().is_some() {
        return "Build";
    }
    "Error"
}

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    // Typed matches first
    if let Some(be) = err.downcast_ref::<BuildError>() {
        return match be {
            BuildError::MissingCalibration => {
                "What happened: The session was started without a calibration.\nLikely causes: Calibration was skipped and no [calibration] table was configured.\nHow to fix: Run the interactive calibration or add a [calibration] table to the config.".to_string()
            }
            BuildError::InvalidConfig(msg) => format!(
                "What happened: Invalid output configuration ({msg}).\nLikely causes: An empty or clashing [output] name setting.\nHow to fix: Edit the [output] section of the config, then rerun."
            ),
        };
    }

    if let Some(de) = err.downcast_ref::<DigitizerError>() {
        return match de {
            DigitizerError::InputClosed => {
                "What happened: Input ended before the session finished.\nLikely causes: stdin was closed (end of a piped script or Ctrl-D).\nHow to fix: Provide answers for every prompt, ending with 'n' at \"Digitize another curve?\".".to_string()
            }
            DigitizerError::Image(msg) => format!(
                "What happened: The image could not be opened ({msg}).\nLikely causes: Wrong path, or a file that is not a PNG/JPEG image.\nHow to fix: Check the path passed to --image or typed at the prompt."
            ),
            DigitizerError::Io(msg) => format!(
                "What happened: A file could not be written ({msg}).\nLikely causes: The target directory does not exist or is not writable.\nHow to fix: Choose a save path in an existing, writable directory."
            ),
            DigitizerError::Config(msg) => format!(
                "What happened: Invalid configuration ({msg}).\nLikely causes: A mistyped key or out-of-range value in the TOML.\nHow to fix: Edit the config file, then rerun `digitizer check-config`."
            ),
            DigitizerError::Calibration(ce) => humanize_calibration(ce),
            DigitizerError::Interpolation(ie) => humanize_interpolation(ie),
            DigitizerError::Ui(msg) => format!(
                "What happened: The user interface failed ({msg}).\nLikely causes: The terminal went away.\nHow to fix: Re-run with --log-level=debug for more detail."
            ),
        };
    }

    // Generic fallback
    let msg = err.to_string();
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

fn humanize_calibration(ce: &CalibrationError) -> String {
    format!(
        "What happened: The calibration is unusable ({ce}).\nLikely causes: A persisted [calibration] table with a zero or non-finite scale.\nHow to fix: Fix or remove the [calibration] table and calibrate interactively."
    )
}

fn humanize_interpolation(ie: &InterpolationError) -> String {
    format!(
        "What happened: The curve could not be resampled ({ie}).\nLikely causes: A bin that is too small for the curve's y range.\nHow to fix: Use a larger interpolation bin."
    )
}

/// Stable exit codes: 2 config, 3 input closed, 4 I/O, 5 image, 1 anything else.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    if let Some(de) = err.downcast_ref::<DigitizerError>() {
        return match de {
            DigitizerError::Config(_) => 2,
            DigitizerError::InputClosed => 3,
            DigitizerError::Io(_) => 4,
            DigitizerError::Image(_) => 5,
            _ => 1,
        };
    }
    if let Some(BuildError::InvalidConfig(_)) = err.downcast_ref::<BuildError>() {
        return 2;
    }
    1
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;
    json!({
        "reason": reason_name(err),
        "code": exit_code_for_error(err),
        "message": humanize(err),
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::WrapErr;

    #[test]
    fn exit_codes_follow_error_kind() {
        let cases = [
            (DigitizerError::Config("x".into()), 2),
            (DigitizerError::InputClosed, 3),
            (DigitizerError::Io("x".into()), 4),
            (DigitizerError::Image("x".into()), 5),
            (DigitizerError::Ui("x".into()), 1),
        ];
        for (e, code) in cases {
            assert_eq!(exit_code_for_error(&eyre::Report::new(e)), code);
        }
        assert_eq!(exit_code_for_error(&eyre::eyre!("plain")), 1);
    }

    #[test]
    fn wrapped_errors_keep_their_code() {
        let r: Result<(), DigitizerError> = Err(DigitizerError::Image("bad".into()));
        let err = r.wrap_err("show image chart.png").unwrap_err();
        assert_eq!(exit_code_for_error(&err), 5);
        assert!(humanize(&err).contains("could not be opened"));
    }

    #[test]
    fn json_has_reason_and_code() {
        let err = eyre::Report::new(DigitizerError::InputClosed);
        let v: serde_json::Value = serde_json::from_str(&format_error_json(&err)).unwrap();
        assert_eq!(v["reason"], "InputClosed");
        assert_eq!(v["code"], 3);
        assert!(v["message"].as_str().unwrap().contains("Input ended"));
    }
}
