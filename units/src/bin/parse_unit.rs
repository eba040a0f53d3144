/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::PathBuf;
use std::{env, process};

use clap::Parser;
use units::{ParseOptions, UnitContext};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Unit Parser
///
/// Parses human-readable units and prints their canonical form.
struct Args {
    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Increase log verbosity.
    verbose: u8,
    #[clap(long, short)]
    /// Output the unit's base dimensions.
    dimension: bool,
    #[clap(long, short)]
    /// Output a JSON representation.
    json: bool,
    #[clap(long, short = 'i')]
    /// Fall back to case-insensitive matching.
    case_insensitive: bool,
    #[clap(long)]
    /// Treat everything after the first '/' as the denominator.
    single_slash: bool,
    #[clap(long)]
    /// Disable heuristic fallbacks.
    strict: bool,
    #[clap(long)]
    /// Parser options as a JSON object; overrides the option flags.
    options: Option<String>,
    #[clap(long)]
    /// Load unit definitions from a file.
    definitions: Option<PathBuf>,
    /// The unit to parse.
    unit: Vec<String>,
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let ctx = UnitContext::global();
    if let Some(path) = &args.definitions {
        if let Err(e) = ctx.load_definitions_file(path) {
            eprintln!("Error: {}: {}", path.display(), e);
            process::exit(1);
        }
    }

    let options = match &args.options {
        Some(json) => match ParseOptions::from_json(json) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Error: invalid options: {}", e);
                process::exit(1);
            }
        },
        None => ParseOptions {
            case_insensitive: args.case_insensitive,
            single_slash: args.single_slash,
            strict: args.strict,
            skip_partitioning: false,
        },
    };

    let mut failed = false;
    for text in &args.unit {
        let unit = ctx.parse_unit(text, &options);
        if !unit.is_valid() {
            eprintln!("Error: failed to parse unit: {}", text);
            failed = true;
            continue;
        }
        let output = match (args.dimension, args.json) {
            (true, true) => serde_json::to_string(&unit.base()),
            (false, true) => serde_json::to_string(&unit),
            (true, false) => Ok(unit.base().to_string()),
            (false, false) => Ok(ctx.render_unit(&unit)),
        };
        match output {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error: serialization failed: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1)
    }
}

fn init_logger(verbosity: u8) {
    if let Err(e) = simplelog::TermLogger::init(
        match verbosity {
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
}
