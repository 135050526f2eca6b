use digitizer_core::error::BuildError;
use digitizer_core::mocks::ScriptedUi;
use digitizer_core::{CalibrationFrame, OutputCfg, RealPoint, Session};
use digitizer_traits::PixelPoint;
use rstest::rstest;

fn frame() -> CalibrationFrame {
    CalibrationFrame::new(PixelPoint::new(0.0, 0.0), RealPoint::new(0.0, 0.0), 1.0, 1.0).unwrap()
}

#[rstest]
fn builder_missing_calibration_yields_typed_build_error() {
    let mut ui = ScriptedUi::new();
    let err = match Session::builder(&mut ui).build() {
        Err(e) => e,
        Ok(_) => panic!("should fail with MissingCalibration"),
    };
    match err.downcast_ref::<BuildError>() {
        Some(BuildError::MissingCalibration) => {}
        other => panic!("expected MissingCalibration, got: {other:?}"),
    }
}

#[rstest]
#[case("", "_interp")]
#[case("CSV", "_interp")]
#[case("txt", "")]
fn builder_rejects_unusable_output_names(#[case] ext: &str, #[case] suffix: &str) {
    let mut ui = ScriptedUi::new();
    let cfg = OutputCfg {
        raw_extension: ext.to_string(),
        interp_suffix: suffix.to_string(),
        ..OutputCfg::default()
    };
    let err = match Session::builder(&mut ui).calibration(frame()).output(cfg).build() {
        Err(e) => e,
        Ok(_) => panic!("should reject ext={ext:?} suffix={suffix:?}"),
    };
    assert!(matches!(
        err.downcast_ref::<BuildError>(),
        Some(BuildError::InvalidConfig(_))
    ));
}

#[rstest]
fn builder_starts_awaiting_a_curve() {
    let mut ui = ScriptedUi::new();
    let session = match Session::builder(&mut ui).calibration(frame()).build() {
        Ok(s) => s,
        Err(e) => panic!("valid builder failed: {e}"),
    };
    assert_eq!(session.state_name(), "awaiting_curve");
    assert!(session.reports().is_empty());
}
