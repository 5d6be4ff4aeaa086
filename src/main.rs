use anyhow::Result;
use clap::Parser;
use tracesum::cli::{Cli, OutputFormat};
use tracesum::duration::parse_duration;
use tracesum::{report, summary};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Sample strings for `-t`, one per supported notation
const SAMPLE_DURATIONS: &[&str] = &[
    "3.5d",
    "21h 40m 51s",
    "1h 21m 27s",
    "2m",
    "1m 53s",
    "42.9s",
    "500ms",
];

/// Parse the built-in samples and print one line per result
fn run_parser_samples() {
    println!("Testing duration parsing:");
    println!("-------------------------------");
    for text in SAMPLE_DURATIONS {
        match parse_duration(text) {
            Ok(duration) => println!(
                "Original: {:<15} | Parsed: {:<15} | Minutes: {:.2}",
                text,
                duration.to_string(),
                duration.as_minutes_f64()
            ),
            Err(err) => println!("Error parsing '{}': {}", text, err),
        }
    }
    println!("-------------------------------");
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    if args.test {
        run_parser_samples();
        return Ok(());
    }

    let input = match &args.input {
        Some(path) => path,
        None => anyhow::bail!(
            "no input file. Usage: tracesum -i TRACE_FILE (or -t for parser samples)"
        ),
    };

    let summary = summary::sum_durations(input)?;
    match args.format {
        OutputFormat::Text => print!("{}", report::render_text(&summary)),
        OutputFormat::Json => println!("{}", report::render_json(&summary)?),
    }
    Ok(())
}
