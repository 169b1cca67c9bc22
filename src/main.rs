//! Command line demo: parse coordinates given as arguments, or a few samples

use clap::Parser as _;
use geocomb::ascii::{double, int};
use geocomb::utf8::literal;
use geocomb::{Cursor, HemispherePolicy, ParseConfig, Parser, parse_coordinate_with};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const SAMPLES: [&str; 3] = [
    "40.6782° N, 73.9442° W",
    "40.6782° S, 73.9442° W",
    "abc.6782° S, 73.9442° W",
];

#[derive(clap::Parser)]
#[command(name = "geocomb", about = "Parse coordinates like \"40.6782° N, 73.9442° W\"")]
struct Cli {
    /// "strict" rejects unknown hemisphere letters, "lenient" reads them as south/west
    #[arg(long, value_name = "POLICY", default_value_t = HemispherePolicy::Strict)]
    hemisphere: HemispherePolicy,

    /// Coordinates to parse; sample inputs are used when none are given
    #[arg(value_name = "COORDINATE")]
    inputs: Vec<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn cursor_walk() {
    let mut cursor = Cursor::new("100.1.2str");
    println!("cursor walk over {:?}", cursor.remaining());
    println!("  int      -> {:?}, left {:?}", int().parse(&mut cursor), cursor.remaining());
    println!("  double   -> {:?}, left {:?}", double().parse(&mut cursor), cursor.remaining());
    println!(
        "  literal  -> {:?}, left {:?}",
        literal(".2").parse(&mut cursor),
        cursor.remaining()
    );
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let config = ParseConfig::new().with_hemisphere(cli.hemisphere);

    let inputs: Vec<&str> = if cli.inputs.is_empty() {
        SAMPLES.to_vec()
    } else {
        cli.inputs.iter().map(String::as_str).collect()
    };

    let mut failures = 0;
    for input in &inputs {
        match parse_coordinate_with(input, &config) {
            Some(coordinate) => println!(
                "{input:?} -> latitude {}, longitude {}",
                coordinate.latitude(),
                coordinate.longitude()
            ),
            None => {
                failures += 1;
                println!("{input:?} -> no coordinate");
            }
        }
    }

    if cli.inputs.is_empty() {
        cursor_walk();
        return ExitCode::SUCCESS;
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
