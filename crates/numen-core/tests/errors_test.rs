use numen_core::errors::*;

#[test]
fn malformed_date_carries_input_and_reason() {
    let err = InputError::MalformedDate {
        input: "1990-07-16".into(),
        reason: "expected MM/DD/YYYY".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("1990-07-16"));
    assert!(msg.contains("MM/DD/YYYY"));
}

#[test]
fn invalid_component_carries_component_and_value() {
    let err = InputError::InvalidDateComponent {
        input: "13/01/1990".into(),
        component: "month",
        value: 13,
    };
    let msg = err.to_string();
    assert!(msg.contains("month"));
    assert!(msg.contains("13"));
}

#[test]
fn input_errors_convert_into_top_level_error() {
    let err: NumerologyError = InputError::NoLetters { input: "123".into() }.into();
    assert!(matches!(err, NumerologyError::Input(InputError::NoLetters { .. })));
    assert!(err.to_string().contains("123"));
}

#[test]
fn error_codes_are_stable_per_subsystem() {
    let input: NumerologyError = InputError::NoConsonants { input: "Aoi".into() }.into();
    let config: NumerologyError = ConfigError::FileNotFound {
        path: "numen.toml".into(),
    }
    .into();
    assert_eq!(input.error_code(), "INPUT_ERROR");
    assert_eq!(config.error_code(), "CONFIG_ERROR");
}
