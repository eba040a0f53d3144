/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::{env, process};

use clap::Parser;
use units::{
    convert_with_reference, format_number, try_convert, Measurement,
    ParseOptions, UnitContext,
};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Unit Converter
///
/// Converts a measurement such as "3 ft" or "gas mark 4" to another unit.
struct Args {
    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Increase log verbosity.
    verbose: u8,
    #[clap(long, short)]
    /// Reference value for per-unit and gauge conversions, in the units
    /// of the side without the flag.
    reference: Option<f64>,
    #[clap(long, short = 'i')]
    /// Fall back to case-insensitive matching.
    case_insensitive: bool,
    /// The measurement to convert.
    from: String,
    /// The target unit.
    to: String,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = simplelog::TermLogger::init(
        match args.verbose {
            0 => simplelog::LevelFilter::Info,
            1 => simplelog::LevelFilter::Debug,
            2.. => simplelog::LevelFilter::Trace,
        },
        simplelog::ConfigBuilder::new().build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(1);
    }

    let ctx = UnitContext::global();
    let options = ParseOptions {
        case_insensitive: args.case_insensitive,
        ..Default::default()
    };

    let Measurement(value, from) = ctx.parse_measurement(&args.from, &options);
    let to = ctx.parse_unit(&args.to, &options);
    for (text, unit) in [(&args.from, from), (&args.to, to)] {
        if !unit.is_valid() {
            eprintln!("Error: failed to parse unit: {}", text);
            process::exit(1);
        }
    }

    let result = match args.reference {
        Some(reference) => match convert_with_reference(value, &from, &to, reference) {
            v if v.is_nan() => Err(format!(
                "cannot convert {} to {}",
                ctx.render_unit(&from),
                ctx.render_unit(&to)
            )),
            v => Ok(v),
        },
        None => try_convert(value, &from, &to).map_err(|e| e.to_string()),
    };

    match result {
        Ok(v) => println!("{} {}", format_number(v), ctx.render_unit(&to)),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1)
        }
    }
}
