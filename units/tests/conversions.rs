/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use approx::assert_relative_eq;
use units::{
    convert, convert_with_reference, parse_unit, try_convert, Measurement,
    UnitError,
};

fn conv(value: f64, from: &str, to: &str) -> f64 {
    convert(value, &parse_unit(from), &parse_unit(to))
}

#[test]
fn temperatures() {
    assert_relative_eq!(conv(-40.0, "degC", "degF"), -40.0, epsilon = 1e-12);
    assert_relative_eq!(conv(212.0, "degF", "degC"), 100.0, epsilon = 1e-9);
    assert_relative_eq!(conv(0.0, "degC", "K"), 273.15, epsilon = 1e-9);
    assert_relative_eq!(conv(300.0, "K", "degC"), 26.85, epsilon = 1e-9);
}

#[test]
fn gas_mark() {
    assert_relative_eq!(conv(3.0, "gas mark", "degF"), 325.0, epsilon = 1.0);
    let mark = Measurement::parse("gas mark 3").unwrap();
    let oven = mark.convert_to(&parse_unit("degC")).unwrap();
    assert_relative_eq!(oven.0, 162.78, epsilon = 0.01);
}

#[test]
fn linear() {
    assert_relative_eq!(conv(1.0, "mi", "ft"), 5280.0, epsilon = 1e-9);
    assert_relative_eq!(conv(60.0, "mph", "km/hr"), 96.56064, epsilon = 1e-9);
    assert_relative_eq!(conv(1.0, "kWh", "J"), 3.6e6, epsilon = 1e-6);
    assert_relative_eq!(conv(1.0, "psi", "Pa"), 6894.757293168361, epsilon = 1e-6);
    assert_relative_eq!(conv(1.0, "Hz", "rpm"), 60.0, epsilon = 1e-9);
    assert!(conv(1.0, "m", "s").is_nan());
}

#[test]
fn logarithmic() {
    assert_relative_eq!(conv(30.0, "dBm", "W"), 1.0, epsilon = 1e-12);
    assert_relative_eq!(conv(100.0, "mW", "dBm"), 20.0, epsilon = 1e-9);
    assert_relative_eq!(conv(3.0, "pH", "mol/L"), 1e-3, max_relative = 1e-9);
}

#[test]
fn references() {
    let (psig, psi) = (parse_unit("psig"), parse_unit("psi"));
    assert_relative_eq!(
        convert_with_reference(15.0, &psig, &psi, 14.7),
        29.7,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        convert_with_reference(29.7, &psi, &psig, 14.7),
        15.0,
        epsilon = 1e-9
    );
    let (pu, kw) = (parse_unit("pu"), parse_unit("kW"));
    assert_relative_eq!(
        convert_with_reference(0.8, &pu, &kw, 50.0),
        40.0,
        epsilon = 1e-9
    );
}

#[test]
fn failures() {
    match try_convert(1.0, &parse_unit("m"), &parse_unit("kg")) {
        Err(UnitError::Conversion(from, to)) => {
            assert_eq!(from, "m");
            assert_eq!(to, "kg");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(conv(1.0, "m{gold}", "m{silver}").is_nan());
    assert_relative_eq!(conv(1.0, "kg{gold}", "g{gold}"), 1000.0, epsilon = 1e-9);
}
