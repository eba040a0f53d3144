/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use units::unit_defs::{FT, G, HR, J, KG, M, N, S, W};
use units::PreciseUnit;
use units::{parse_unit, parse_unit_bytes, parse_unit_with, ParseOptions};

#[test]
fn derived_units() {
    let newton = parse_unit("kg*m/s^2");
    assert!(newton.has_same_base(&parse_unit("N")));
    assert_eq!(newton, N);
    assert_eq!(parse_unit("N*m"), J);
    assert_eq!(parse_unit("J/s"), W);
}

#[test]
fn prefixes() {
    assert_eq!(parse_unit("km"), M.scale(1000.0));
    assert_eq!(parse_unit("mg"), G.scale(1e-3));
    assert_eq!(parse_unit("kilometer"), parse_unit("km"));
    assert_eq!(parse_unit("ms"), S.scale(1e-3));
}

#[test]
fn notations() {
    assert_eq!(parse_unit("m\u{b2}"), M.pow(2));
    assert_eq!(parse_unit("m<sup>2</sup>"), M.pow(2));
    assert_eq!(parse_unit("ft**3"), FT.pow(3));
    assert_eq!(parse_unit("N\u{b7}m"), J);
    assert_eq!(parse_unit("N.m"), J);
    assert_eq!(parse_unit("s^-1"), S.invert());
    assert_eq!(parse_unit("m2"), M.pow(2));
    assert_eq!(parse_unit("(m/s)"), M / S);
}

#[test]
fn words() {
    assert_eq!(parse_unit("meters per second"), M / S);
    assert_eq!(parse_unit("square meter"), M.pow(2));
    assert_eq!(parse_unit("meter squared"), M.pow(2));
    assert_eq!(parse_unit("per second"), S.invert());
    assert_eq!(parse_unit("newton meters"), J);
    assert_eq!(parse_unit("gas mark"), parse_unit("gasmark"));
}

#[test]
fn capitalized_words() {
    assert_eq!(parse_unit("Meter"), M);
    assert_eq!(parse_unit("Feet"), FT);
    assert_eq!(parse_unit("Hour"), HR);
    assert_eq!(parse_unit("Seconds"), S);
    assert_eq!(parse_unit("Nm"), J);
    assert_eq!(parse_unit("kNm"), N.scale(1000.0) * M);
}

#[test]
fn plural_suffix_once() {
    assert_eq!(parse_unit("meters"), M);
    assert_eq!(parse_unit("kilometers"), M.scale(1000.0));
    for input in ["ss", "sss", "metersss", "kgsss"] {
        assert!(parse_unit(input).is_error(), "{:?}", input);
    }
    assert!(parse_unit(&"s_".repeat(22)).is_error());
}

#[test]
fn power_words_need_a_unit() {
    assert!(parse_unit("square").is_error());
    assert_eq!(parse_unit("squaremeter"), M.pow(2));
    assert_eq!(parse_unit("sqm"), M.pow(2));
    assert_eq!(parse_unit("cubic feet"), FT.pow(3));
}

#[test]
fn long_flat_expressions() {
    let repeated = "meter per meter ".repeat(20);
    assert_eq!(parse_unit(&repeated), PreciseUnit::ONE);
    let repeated = "newton-meters per joule ".repeat(16);
    assert_eq!(parse_unit(&repeated), PreciseUnit::ONE);
    let product = vec!["m"; 200].join("/m*");
    assert_eq!(parse_unit(&product), M);
}

#[test]
fn numbers() {
    assert_eq!(parse_unit("1000m"), M.scale(1000.0));
    assert_eq!(parse_unit("10^3m"), M.scale(1000.0));
    assert_eq!(parse_unit("twenty m").multiplier(), 20.0);
    assert_eq!(parse_unit("dozen"), parse_unit("12"));
}

#[test]
fn slashes() {
    let default = parse_unit("m/s*kg");
    assert_eq!(default, M / S * KG);
    let single = parse_unit_with("m/s*kg", &ParseOptions {
        single_slash: true,
        ..Default::default()
    });
    assert_eq!(single, M / (S * KG));
}

#[test]
fn case_handling() {
    let options = ParseOptions::case_insensitive();
    assert_eq!(parse_unit_with("METER", &options), M);
    assert_eq!(parse_unit_with("Newton", &options), N);
    assert_eq!(parse_unit("MG"), parse_unit("mg"));
}

#[test]
fn strict_mode() {
    assert!(parse_unit("m(xyzzy)").has_same_base(&M));
    assert_ne!(parse_unit("m(xyzzy)").commodity(), 0);
    assert!(!parse_unit_with("m(xyzzy)", &ParseOptions::strict()).is_valid());
    assert_eq!(parse_unit_with("kg*m/s^2", &ParseOptions::strict()), N);
}

#[test]
fn errors() {
    for input in ["", "   ", "((())", "m^", "*m", "m/", "m^^2", "xyzzy"] {
        assert!(parse_unit(input).is_error(), "{:?}", input);
    }
    assert!(parse_unit_bytes(b"\xffm", &ParseOptions::default()).is_error());
    assert_eq!(parse_unit_bytes(b"kg", &ParseOptions::default()), KG);
}
