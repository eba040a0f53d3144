/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Inputs that once caused panics, hangs or runaway recursion.

use units::{
    convert, parse_measurement, parse_uncertain_measurement, parse_unit,
    parse_unit_bytes, render_unit, ParseOptions, PreciseUnit,
};

/// Either the error unit or a usable unit with a finite multiplier.
fn settled(unit: &PreciseUnit) -> bool {
    unit.is_error() || (unit.is_valid() && unit.multiplier().is_finite())
}

#[test]
fn malformed_brackets() {
    for input in ["((())", "{{{{", "}}", "m)", "([)]", "m{", "[[U"] {
        assert!(parse_unit(input).is_error(), "{:?}", input);
    }
}

#[test]
fn deep_nesting() {
    let deep = format!("{}m{}", "(".repeat(40), ")".repeat(40));
    assert!(parse_unit(&deep).is_error());
    let shallow = format!("{}m{}", "(".repeat(4), ")".repeat(4));
    assert!(parse_unit(&shallow).is_valid());
}

#[test]
fn long_inputs() {
    assert!(parse_unit(&"m*".repeat(3000)).is_error());
    assert!(parse_unit(&"a".repeat(1000)).is_error());
    assert!(settled(&parse_unit(&"kgm".repeat(10))));
    assert!(settled(&parse_unit(&"(m*".repeat(20))));
}

#[test]
fn numbers() {
    assert!(parse_unit("0/0").is_error());
    assert!(parse_unit("m^999").is_error());
    assert!(parse_unit("m^0.3").is_error());
    assert!(parse_unit("-0m").is_valid());
    let two_tower = vec!["2"; 14].join("^");
    for input in ["1e400m", "10^400*m", "m/0m", "m/1e-320", two_tower.as_str()] {
        let unit = parse_unit(input);
        assert!(unit.is_error(), "{:?} gave {:?}", input, unit);
    }
}

#[test]
fn error_units_do_not_convert() {
    let error = PreciseUnit::ERROR;
    assert!(convert(1.0, &error, &error).is_nan());
    assert!(convert(1.0, &parse_unit("m/0m"), &parse_unit("m/0m")).is_nan());
}

#[test]
fn odd_bytes() {
    let options = ParseOptions::default();
    for bytes in [
        &b"\xff\xfe"[..],
        b"\x00",
        b"m\xc3",
        b"\xe2\x81\xbb",
        b"<sup>",
        b"per",
        b"of",
    ] {
        let unit = parse_unit_bytes(bytes, &options);
        assert!(settled(&unit), "{:?}", bytes);
        assert!(!render_unit(&unit).is_empty());
    }
}

#[test]
fn measurements() {
    let options = ParseOptions::default();
    for input in ["", "   ", "3", "three", "(((", "2 m 3", "1/0 m"] {
        let measurement = parse_measurement(input, &options);
        assert!(
            !measurement.is_valid() || measurement.value().is_finite(),
            "{:?}",
            input
        );
    }
    assert!(!parse_measurement("1/0 m", &options).is_valid());
}

#[test]
fn uncertain_measurements() {
    let options = ParseOptions::default();
    for input in [
        "+/-", "\u{b1}\u{b1}", "1(", "1(2", "()", "(5) m", "3 +/- ", "+- m",
        "1.5(12345) m", "2(3)(4) m", "&pm;&pm;", "1 \u{b1} 1/0 m",
    ] {
        let measurement = parse_uncertain_measurement(input, &options);
        assert!(
            !measurement.is_valid()
                || (measurement.value().is_finite()
                    && measurement.uncertainty() >= 0.0),
            "{:?}",
            input
        );
    }
    assert!(!parse_uncertain_measurement("1 +/- 1/0 m", &options).is_valid());
}
