/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::io::Write;

use units::unit_defs::{IN, KG, S};
use units::{ParseOptions, UnitContext, UnitError};

#[test]
fn defined_units() {
    let ctx = UnitContext::new();
    let options = ParseOptions::default();
    assert_eq!(ctx.define_unit("clog", "3 kg"), Ok(KG.scale(3.0)));
    assert_eq!(ctx.parse_unit("clog", &options), KG.scale(3.0));
    assert_eq!(ctx.parse_unit("clogs", &options), KG.scale(3.0));
    assert_eq!(ctx.parse_unit("clog/s", &options), KG.scale(3.0) / S);
    assert_eq!(ctx.render_unit(&KG.scale(3.0)), "clog");
    assert!(ctx.define_unit("bad", "((kg").is_err());
}

#[test]
fn input_only_units() {
    let ctx = UnitContext::new();
    ctx.define_input_unit("smoot", "67 in").unwrap();
    let smoot = ctx.parse_unit("smoot", &ParseOptions::default());
    assert_eq!(smoot, IN.scale(67.0));
    assert_ne!(ctx.render_unit(&smoot), "smoot");
}

#[test]
fn contexts_are_independent() {
    let ctx = UnitContext::new();
    ctx.define_unit("clog", "3 kg").unwrap();
    let other = UnitContext::new();
    assert!(other
        .parse_unit("clog", &ParseOptions::default())
        .is_error());
}

#[test]
fn disabling() {
    let ctx = UnitContext::new();
    ctx.define_unit("clog", "3 kg").unwrap();
    ctx.user_units().disable();
    assert!(ctx.parse_unit("clog", &ParseOptions::default()).is_error());
    ctx.user_units().enable();
    assert!(ctx.parse_unit("clog", &ParseOptions::default()).is_valid());
    ctx.user_units().clear();
    assert!(ctx.parse_unit("clog", &ParseOptions::default()).is_error());
}

#[test]
fn definition_files() {
    let path = std::env::temp_dir()
        .join(format!("units-definitions-{}.txt", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "# custom units").unwrap();
    writeln!(file, "clog = 3 kg").unwrap();
    writeln!(file, "\"big foot\" = 14 in").unwrap();
    writeln!(file, "smoot => 67 in").unwrap();
    drop(file);

    let ctx = UnitContext::new();
    assert_eq!(ctx.load_definitions_file(&path), Ok(3));
    let options = ParseOptions::default();
    assert_eq!(ctx.parse_unit("big foot", &options), IN.scale(14.0));
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(
        ctx.load_definitions_file(&path),
        Err(UnitError::Io(_))
    ));
    assert!(matches!(
        ctx.load_definitions("clog = 3 kg\nnonsense"),
        Err(UnitError::InvalidDefinition { line: 2, .. })
    ));
}
