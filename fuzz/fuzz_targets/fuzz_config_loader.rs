#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parse errors and validation errors are both fine; panics are not.
    let Ok(cfg) = digitizer_config::load_toml(data) else {
        return;
    };
    if cfg.validate().is_err() {
        return;
    }
    // A valid persisted calibration must survive a write/read cycle.
    if let Some(cal) = cfg.calibration {
        if let Ok(text) = cal.to_toml_string() {
            let back = digitizer_config::load_toml(&text).expect("re-parse saved calibration");
            assert_eq!(back.calibration, Some(cal));
        }
    }
});
