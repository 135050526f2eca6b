use digitizer_core::calibration::{calibrate, select_origin, select_reference_length};
use digitizer_core::mocks::ScriptedUi;
use digitizer_core::{CalibrationError, DigitizerError, RealPoint, scale_factor};
use digitizer_traits::{Axis, PixelPoint};
use rstest::rstest;

#[rstest]
#[case(Axis::X, (100.0, 0.0), (200.0, 0.0), 10.0, 0.1)]
#[case(Axis::Y, (0.0, 100.0), (0.0, 0.0), 10.0, -0.1)]
#[case(Axis::X, (200.0, 5.0), (100.0, 9.0), 10.0, -0.1)]
#[case(Axis::Y, (0.0, 0.0), (0.0, 50.0), -5.0, -0.1)]
fn scale_factor_table(
    #[case] axis: Axis,
    #[case] p1: (f64, f64),
    #[case] p2: (f64, f64),
    #[case] length: f64,
    #[case] expected: f64,
) {
    let (p1, p2) = (PixelPoint::new(p1.0, p1.1), PixelPoint::new(p2.0, p2.1));
    let f = scale_factor(p1, p2, axis, length).unwrap();
    assert!((f - expected).abs() < 1e-12, "{f} != {expected}");
}

#[rstest]
#[case(10.0, 10.0, 5.0, CalibrationError::ZeroPixelDelta { axis: Axis::Y })]
#[case(10.0, 20.0, 0.0, CalibrationError::ZeroLength { axis: Axis::Y })]
fn scale_factor_rejections(
    #[case] y1: f64,
    #[case] y2: f64,
    #[case] length: f64,
    #[case] expected: CalibrationError,
) {
    let err = scale_factor(
        PixelPoint::new(0.0, y1),
        PixelPoint::new(0.0, y2),
        Axis::Y,
        length,
    )
    .unwrap_err();
    assert_eq!(err, expected);
}

#[test]
fn full_calibration_maps_known_points() {
    let mut ui = ScriptedUi::new()
        // origin
        .click(100.0, 100.0)
        .float(0.0)
        .float(0.0)
        .yes()
        // x reference
        .click(100.0, 100.0)
        .click(200.0, 100.0)
        .float(10.0)
        .yes()
        // y reference
        .click(100.0, 100.0)
        .click(100.0, 0.0)
        .float(10.0)
        .yes();

    let frame = calibrate(&mut ui).unwrap();
    assert_eq!(frame.origin_pixel(), PixelPoint::new(100.0, 100.0));
    assert!((frame.x_scale() - 0.1).abs() < 1e-12);
    assert!((frame.y_scale() + 0.1).abs() < 1e-12);
    assert_eq!(frame.to_real(PixelPoint::new(100.0, 100.0)), RealPoint::new(0.0, 0.0));

    let p = frame.to_real(PixelPoint::new(150.0, 100.0));
    assert!((p.x - 5.0).abs() < 1e-12 && p.y.abs() < 1e-12);
    assert!(ui.exhausted());
}

#[test]
fn rejected_origin_repeats_the_step() {
    let mut ui = ScriptedUi::new()
        .click(1.0, 1.0)
        .float(0.0)
        .float(0.0)
        .no()
        .click(2.0, 3.0)
        .float(4.0)
        .float(5.0)
        .yes();
    let (origin, x, y) = select_origin(&mut ui).unwrap();
    assert_eq!(origin, PixelPoint::new(2.0, 3.0));
    assert_eq!((x, y), (4.0, 5.0));
    assert_eq!(ui.questions.len(), 2);
}

#[test]
fn invalid_origin_value_asks_both_again() {
    let mut ui = ScriptedUi::new()
        .click(1.0, 1.0)
        .no_float()
        .float(7.0)
        .float(f64::INFINITY)
        .float(7.0)
        .float(1.0)
        .float(2.0)
        .yes();
    let (_, x, y) = select_origin(&mut ui).unwrap();
    assert_eq!((x, y), (1.0, 2.0));
    assert_eq!(ui.errors.len(), 2);
    assert!(ui.exhausted());
}

#[test]
fn finishing_without_origin_click_restarts() {
    let mut ui = ScriptedUi::new()
        .finish()
        .click(5.0, 5.0)
        .float(0.0)
        .float(0.0)
        .yes();
    let (origin, _, _) = select_origin(&mut ui).unwrap();
    assert_eq!(origin, PixelPoint::new(5.0, 5.0));
    assert_eq!(ui.errors.len(), 1);
}

#[test]
fn zero_pixel_delta_is_rejected_and_retried() {
    let mut ui = ScriptedUi::new()
        // same x twice
        .click(50.0, 10.0)
        .click(50.0, 90.0)
        .float(10.0)
        // retry
        .click(50.0, 10.0)
        .click(150.0, 10.0)
        .float(10.0)
        .yes();
    let factor = select_reference_length(&mut ui, Axis::X).unwrap();
    assert!((factor - 0.1).abs() < 1e-12);
    assert_eq!(ui.errors.len(), 1);
    assert!(ui.errors[0].1.contains("zero pixel distance"));
    // no confirmation was asked for the rejected reference
    assert_eq!(ui.questions.len(), 1);
}

#[test]
fn rejected_reference_length_repeats_the_step() {
    let mut ui = ScriptedUi::new()
        .click(0.0, 0.0)
        .click(100.0, 0.0)
        .float(10.0)
        .no()
        // second measurement
        .click(0.0, 0.0)
        .click(200.0, 0.0)
        .float(10.0)
        .yes();
    let factor = select_reference_length(&mut ui, Axis::X).unwrap();
    assert!((factor - 0.05).abs() < 1e-12, "{factor}");
    assert_eq!(ui.questions.len(), 2);
    assert!(ui.errors.is_empty());
    assert!(ui.exhausted());
}

#[test]
fn single_reference_click_restarts() {
    let mut ui = ScriptedUi::new()
        .click(0.0, 0.0)
        .finish()
        .click(0.0, 0.0)
        .click(100.0, 0.0)
        .float(10.0)
        .yes();
    let factor = select_reference_length(&mut ui, Axis::X).unwrap();
    assert!((factor - 0.1).abs() < 1e-12, "{factor}");
    assert_eq!(ui.errors.len(), 1);
    assert!(ui.errors[0].1.contains("Two points are needed"));
    assert_eq!(ui.questions.len(), 1);
}

#[test]
fn confirmation_shows_pixels_and_length() {
    let mut ui = ScriptedUi::new()
        .click(0.0, 0.0)
        .click(0.0, 250.0)
        .float(2.5)
        .yes();
    select_reference_length(&mut ui, Axis::Y).unwrap();
    assert_eq!(
        ui.questions[0],
        "You selected  250 pixels in y direction corresponding to 2.5000 units. Is this correct?"
    );
}

#[test]
fn closed_input_aborts_calibration() {
    let mut ui = ScriptedUi::new().click(1.0, 1.0);
    let err = calibrate(&mut ui).unwrap_err();
    assert!(matches!(err, DigitizerError::InputClosed));
}
