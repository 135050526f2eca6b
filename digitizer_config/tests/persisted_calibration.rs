use std::fs;

use digitizer_config::{PersistedCalibration, load_config_file};
use rstest::rstest;
use tempfile::tempdir;

fn frame(x_scale: f64, y_scale: f64) -> PersistedCalibration {
    PersistedCalibration {
        origin_px: 100.0,
        origin_py: 100.0,
        origin_x: 0.0,
        origin_y: 0.0,
        x_scale,
        y_scale,
    }
}

#[rstest]
#[case(0.0, -0.1, "x_scale must be non-zero")]
#[case(0.1, 0.0, "y_scale must be non-zero")]
#[case(f64::INFINITY, 0.1, "x_scale must be finite")]
#[case(0.1, f64::NAN, "y_scale must be finite")]
fn rejects_degenerate_scales(#[case] xs: f64, #[case] ys: f64, #[case] needle: &str) {
    let err = frame(xs, ys).validate().expect_err("degenerate scale");
    assert!(format!("{err}").contains(needle), "got: {err}");
}

#[rstest]
fn origin_values_default_to_zero() {
    let toml = r#"
[calibration]
origin_px = 12.0
origin_py = 340.0
x_scale = 0.5
y_scale = -0.5
"#;
    let cfg = digitizer_config::load_toml(toml).unwrap();
    let cal = cfg.calibration.unwrap();
    assert_eq!(cal.origin_x, 0.0);
    assert_eq!(cal.origin_y, 0.0);
    cal.validate().unwrap();
}

#[rstest]
fn saved_calibration_loads_back_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calibration.toml");
    let cal = frame(0.1, -0.1);
    fs::write(&path, cal.to_toml_string().unwrap()).unwrap();

    let cfg = load_config_file(&path).expect("saved calibration is a valid config");
    assert_eq!(cfg.calibration, Some(cal));
}

#[rstest]
fn load_config_file_reports_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_config_file(&dir.path().join("absent.toml")).expect_err("missing file");
    assert!(format!("{err}").contains("read config"));
}

#[rstest]
fn load_config_file_runs_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[calibration]\norigin_px = 1.0\norigin_py = 1.0\nx_scale = 0.0\ny_scale = 1.0\n").unwrap();
    let err = load_config_file(&path).expect_err("zero scale");
    assert!(format!("{err}").contains("x_scale must be non-zero"));
}
