/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use approx::assert_relative_eq;
use units::unit_defs::{GAS_MARK, KG, M};
use units::{leading_number, number_words, parse_measurement, Measurement, ParseOptions};

#[test]
fn expressions() {
    assert_eq!(leading_number("3.5m"), (3.5, 3));
    assert_eq!(leading_number("2*10^3m"), (2000.0, 6));
    assert_eq!(leading_number("(1/2)kg"), (0.5, 5));
    assert_eq!(leading_number("-7.5 kg"), (-7.5, 4));
    assert_relative_eq!(leading_number("1.5e-3").0, 1.5e-3);
    assert!(leading_number("kg").0.is_nan());
    assert_eq!(leading_number("kg").1, 0);
}

#[test]
fn spelled_out() {
    assert_eq!(number_words("twenty"), Some((20.0, 6)));
    assert_eq!(number_words("three hundred"), Some((300.0, 13)));
    assert_eq!(number_words("kg"), None);
}

#[test]
fn measurements() {
    let options = ParseOptions::default();
    assert_eq!(parse_measurement("3 kg", &options), Measurement(3.0, KG));
    assert_eq!(parse_measurement("-7.5 kg", &options), Measurement(-7.5, KG));
    assert_eq!(parse_measurement("twenty m", &options), Measurement(20.0, M));
    assert_eq!(parse_measurement("m", &options), Measurement(1.0, M));
    assert_eq!(
        parse_measurement("gas mark 3", &options),
        Measurement(3.0, GAS_MARK)
    );
    assert!(Measurement::parse("5 ((m").is_err());
}
