use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use weekdays_core::Weekdays;
use weekdays_core::args::WalkArgs;

#[derive(Parser)]
#[command(
    name = "weekdays",
    about = "List the weekdays (Mon-Fri) counted from a date",
    after_help = "A negative COUNT walks backward. Use '-' to leave ORIGIN or PATTERN unset."
)]
struct Cli {
    /// COUNT [ORIGIN] [PATTERN]. ORIGIN is YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS
    /// (default: now), PATTERN is a strftime format such as %Y-%m-%d
    #[arg(required = true, allow_negative_numbers = true, value_name = "ARGS")]
    args: Vec<String>,

    /// Print the result as a JSON array
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn render(weekdays: &Weekdays, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string(weekdays).context("failed to serialize weekdays");
    }
    Ok(weekdays.to_strings().join("\n"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    let request = WalkArgs::parse(cli.args.as_slice()).context("invalid arguments")?;
    debug!(
        count = request.count,
        origin = ?request.origin,
        pattern = ?request.pattern,
        "walking weekdays"
    );

    let weekdays = request.run().context("failed to walk weekdays")?;
    info!("collected {} weekday(s)", weekdays.len());

    let output = render(&weekdays, cli.json)?;
    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
