use std::io;
use std::process;

use clap::Parser;
use cronstate::{
    capitalize_first, increasing_sequence, options_for, CronState, IntervalKind, TimeUnit,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cronstate",
    about = "Render cron expressions from JSON field state",
    version
)]
struct Cli {
    /// State as JSON (e.g., '{"minute": [{"interval": "every", "value": 5}]}'); `-` or omitted reads stdin
    state: Option<String>,

    /// Use the default state (second 0, minutes 1-15, every hour)
    #[arg(long, conflicts_with = "state")]
    default: bool,

    /// Print the resolved state as JSON instead of the cron expression
    #[arg(long)]
    show_state: bool,

    /// Validate the state without rendering it
    #[arg(long)]
    check: bool,

    /// Print picker options for a time unit and interval kind
    #[arg(long, num_args = 2, value_names = ["UNIT", "KIND"])]
    options: Option<Vec<String>>,

    /// List time units and interval kinds with their picker labels
    #[arg(long)]
    units: bool,

    /// Print every integer up to END (inclusive)
    #[arg(long, value_name = "END", allow_negative_numbers = true)]
    sequence: Option<i64>,

    /// First value for --sequence (defaults to 0)
    #[arg(long, requires = "sequence", allow_negative_numbers = true)]
    start: Option<i64>,

    /// Output lists as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging (overridden by CRONSTATE_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CRONSTATE_LOG").unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn fail(code: i32, message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    process::exit(code);
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(1, format_args!("failed to serialize: {e}")),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.units {
        for unit in TimeUnit::ALL {
            println!("unit\t{unit}\t{}", capitalize_first(unit.label()));
        }
        for kind in IntervalKind::ALL {
            println!("interval\t{kind}\t{}", capitalize_first(kind.label()));
        }
        process::exit(0);
    }

    if let Some(ref args) = cli.options {
        let (unit, kind) = match args.as_slice() {
            [unit, kind] => (unit, kind),
            _ => fail(2, "--options takes a unit and an interval kind"),
        };
        let unit: TimeUnit = unit.parse().unwrap_or_else(|e| fail(1, e));
        let kind: IntervalKind = kind.parse().unwrap_or_else(|e| fail(1, e));
        let options = options_for(unit, kind);
        if cli.json {
            print_json(&options);
        } else {
            for option in options {
                println!("{}\t{}", option.value, option.label);
            }
        }
        process::exit(0);
    }

    if let Some(end) = cli.sequence {
        let seq = increasing_sequence(cli.start, end).unwrap_or_else(|e| fail(1, e));
        if cli.json {
            print_json(&seq);
        } else {
            for n in seq {
                println!("{n}");
            }
        }
        process::exit(0);
    }

    let state = if cli.default {
        CronState::default()
    } else {
        let json = match cli.state.as_deref() {
            Some("-") | None => {
                debug!("reading state from stdin");
                io::read_to_string(io::stdin())
                    .unwrap_or_else(|e| fail(1, format_args!("failed to read stdin: {e}")))
            }
            Some(json) => json.to_string(),
        };
        if json.trim().is_empty() {
            fail(2, "no state provided");
        }
        CronState::from_json(&json)
            .unwrap_or_else(|e| fail(1, format_args!("invalid state: {e}")))
    };

    if cli.check {
        println!("\u{2713} valid");
        process::exit(0);
    }

    if cli.show_state {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(1, format_args!("failed to serialize: {e}")),
        }
        process::exit(0);
    }

    println!("{}", state.to_cron());
}
