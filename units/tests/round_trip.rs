/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use units::unit_defs::{custom_unit, KG, M, S};
use units::{parse_unit, render_unit, PreciseUnit};

#[test]
fn named_units() {
    assert_eq!(render_unit(&parse_unit("m^2")), "m^2");
    assert_eq!(render_unit(&parse_unit("kg")), "kg");
    assert_eq!(render_unit(&parse_unit("kilometer")), "km");
    assert_eq!(render_unit(&parse_unit("W/m^2")), "W/m^2");
}

#[test]
fn parse_render_parse() {
    for input in [
        "m", "km", "kg*m/s^2", "W/m^2", "mph", "ft^3", "1/s", "kWh", "degF",
        "psig", "dBm", "gas mark", "m{gold}", "{unicorns}", "m^-3", "mol/L",
        "uF", "MiB", "count", "$/hr", "pu", "CXUN[5]", "3.5*m",
    ] {
        let unit = parse_unit(input);
        assert!(unit.is_valid(), "{:?} did not parse", input);
        let rendered = render_unit(&unit);
        assert_eq!(parse_unit(&rendered), unit, "{:?} -> {:?}", input, rendered);
    }
}

#[test]
fn constructed_units() {
    for unit in [
        KG * M / S.pow(2),
        M.scale(0.3048).pow(2),
        S.invert().scale(1e-9),
        KG.scale(1e30),
        custom_unit(17),
        PreciseUnit::ONE.scale(0.001),
    ] {
        let rendered = render_unit(&unit);
        assert_eq!(parse_unit(&rendered), unit, "{:?}", rendered);
    }
}

const PREFIXES: &[&str] = &["", "k", "m", "u", "n", "M", "G"];
const FACTORS: &[&str] = &[
    "m", "g", "s", "N", "Pa", "J", "W", "V", "A", "Hz", "L", "B", "ft", "lb",
    "in", "mi", "hr", "$",
];

fn assert_round_trip(unit: &PreciseUnit) {
    let rendered = render_unit(unit);
    assert_eq!(
        parse_unit(&rendered),
        *unit,
        "{:?} rendered as {:?}",
        unit,
        rendered
    );
}

fn prefixed_factors() -> Vec<PreciseUnit> {
    PREFIXES
        .iter()
        .flat_map(|prefix| FACTORS.iter().map(move |name| format!("{}{}", prefix, name)))
        .map(|text| parse_unit(&text))
        .filter(PreciseUnit::is_valid)
        .collect()
}

#[test]
fn generated_powers() {
    let factors = prefixed_factors();
    assert!(factors.len() > 100, "only {} factors", factors.len());
    for factor in &factors {
        for power in [1, 2, 3, -1, -2] {
            let unit = factor.pow(power);
            if unit.is_valid() {
                assert_round_trip(&unit);
            }
        }
    }
}

#[test]
fn generated_products_and_quotients() {
    let factors = prefixed_factors();
    for a in factors.iter().step_by(6) {
        for b in factors.iter().step_by(7) {
            for unit in [*a * *b, *a / *b, a.pow(2) / *b] {
                if unit.is_valid() {
                    assert_round_trip(&unit);
                }
            }
        }
    }
}

#[test]
fn scaled_constructed_units() {
    for value in [0.125, 3.0, 1.0 / 3.0, 4187212394.8269777, 2.5e-17, -7.0] {
        for unit in [M, KG * M / S, M / S.pow(2), S.invert()] {
            assert_round_trip(&unit.scale(value));
        }
    }
}

#[test]
fn errors_render() {
    assert_eq!(render_unit(&PreciseUnit::ERROR), "ERROR");
    assert!(parse_unit("ERROR").is_error());
}
