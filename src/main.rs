use clap::Parser;
use guessit_client::{DEFAULT_TIMEOUT, GuessClient, GuessResponse};
use std::process;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Guess movie and episode metadata from release filenames
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL of the guessit endpoint
    #[arg(short, long, env = "GUESSIT_ENDPOINT")]
    endpoint: String,

    /// Timeout per filename in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT.as_secs_f64())]
    timeout: f64,

    /// Print one JSON object per filename instead of a summary
    #[arg(long)]
    json: bool,

    /// Filenames to guess
    #[arg(required = true)]
    filenames: Vec<String>,
}

/// Longest accepted `--timeout`; larger values overflow deadline arithmetic
const MAX_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

/// Converts the `--timeout` argument, rejecting zero, negative, non-finite
/// and oversized values
fn parse_timeout(secs: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(secs)
        .ok()
        .filter(|timeout| !timeout.is_zero() && *timeout <= MAX_TIMEOUT)
}

/// Prints a human readable summary of a guess to stdout
fn print_summary(filename: &str, guess: &GuessResponse) {
    println!("{}", filename);
    println!("  Type: {}", guess.media_type);

    if !guess.title.is_empty() {
        println!("  Title: {}", guess.title);
    }
    if guess.is_episode() {
        println!("  Episode: S{:02}E{:02}", guess.season, guess.episode);
    }
    if guess.year != 0 {
        println!("  Year: {}", guess.year);
    }

    let details = [
        ("Quality", &guess.screen_size),
        ("Release group", &guess.release_group),
        ("Audio codec", &guess.audio_codec),
        ("Video codec", &guess.video_codec),
        ("Container", &guess.container),
        ("Format", &guess.format),
        ("MIME type", &guess.mimetype),
    ];
    for (label, value) in details {
        if !value.is_empty() {
            println!("  {}: {}", label, value);
        }
    }
    println!();
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("guessit_client=warn")),
        )
        .init();

    let timeout = match parse_timeout(cli.timeout) {
        Some(timeout) => timeout,
        None => {
            eprintln!(
                "Error: Timeout must be a positive number of seconds up to {}",
                MAX_TIMEOUT.as_secs()
            );
            process::exit(1);
        }
    };

    let client = GuessClient::new(cli.endpoint).with_timeout(timeout);
    let mut failures = 0;

    for filename in &cli.filenames {
        match client.guess(filename) {
            Ok(guess) if cli.json => match serde_json::to_string(&guess) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    eprintln!("Error: Failed to encode result for {}: {}", filename, e);
                    failures += 1;
                }
            },
            Ok(guess) => print_summary(filename, &guess),
            Err(e) => {
                eprintln!("Error: {}: {}", filename, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(10.0), Some(Duration::from_secs(10)));
        assert_eq!(parse_timeout(0.25), Some(Duration::from_millis(250)));
        assert_eq!(parse_timeout(86400.0), Some(MAX_TIMEOUT));
    }

    #[test]
    fn test_parse_timeout_rejects_out_of_range() {
        assert_eq!(parse_timeout(0.0), None);
        assert_eq!(parse_timeout(-1.0), None);
        assert_eq!(parse_timeout(f64::NAN), None);
        assert_eq!(parse_timeout(f64::INFINITY), None);
        assert_eq!(parse_timeout(86400.5), None);
        assert_eq!(parse_timeout(1e19), None);
    }
}
