use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use connection_finder::domain::ResultSet;
use connection_finder::fetch::{
    ConnectionFetcher, FetchConfig, FetchError, FetchObserver, ResponseDump,
};
use connection_finder::hafas::{HafasClient, HafasConfig, HafasError};
use connection_finder::parser::{PageLayout, ParseError, ResultsParser};
use connection_finder::query::{self, DepartureTime, Direction, QueryParams};
use connection_finder::table;

/// Exit status after Ctrl-C.
const INTERRUPTED: u8 = 130;

/// Find train connections between two stations.
#[derive(Debug, Parser)]
#[command(name = "connection-finder", version)]
struct Args {
    /// Start station
    #[arg(short, long)]
    start: String,

    /// Destination station
    #[arg(short, long)]
    destination: String,

    /// Travel date as DDMMYYYY (default: today)
    #[arg(long, value_parser = parse_date)]
    date: Option<String>,

    /// Travel time as HHMM or HH:MM (default: now)
    #[arg(long, value_parser = parse_time)]
    time: Option<String>,

    /// Treat --date/--time as the arrival rather than the departure
    #[arg(long)]
    arrival: bool,

    /// Minimum number of connections to gather
    #[arg(short = 'n', default_value_t = 3)]
    n: usize,

    /// Dump every raw response to responseN.html and log paging decisions
    #[arg(long)]
    debug: bool,

    /// Directory for --debug dumps
    #[arg(long, default_value = ".")]
    dump_dir: PathBuf,

    /// Search form endpoint
    #[arg(long)]
    base_url: Option<String>,

    /// Pause between requests in milliseconds
    #[arg(long)]
    spacing_ms: Option<u64>,

    /// Base unit of the stall back-off in milliseconds
    #[arg(long)]
    backoff_unit_ms: Option<u64>,

    /// The stall back-off factor doubles modulo this value
    #[arg(long)]
    backoff_ceiling: Option<u32>,

    /// Give up on a request after this many seconds (default: never)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print connections as JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Errors that end the program.
#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Client(#[from] HafasError),

    #[error(transparent)]
    Parser(#[from] ParseError),

    #[error("cannot write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_date(s: &str) -> Result<String, String> {
    if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        Ok(s.to_string())
    } else {
        Err("expected DDMMYYYY".to_string())
    }
}

fn parse_time(s: &str) -> Result<String, String> {
    let t = DepartureTime::parse(s).map_err(|e| e.to_string())?;
    Ok(format!("{:02}{:02}", t.hour(), t.minute()))
}

/// Spinner showing how many connections have been gathered.
struct Spinner(ProgressBar);

impl Spinner {
    fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("    {spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message("Fetching connections...");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self(bar)
    }
}

impl FetchObserver for Spinner {
    fn page_fetched(&mut self, total: usize) {
        self.0
            .set_message(format!("Fetching connections... fetched: {total}"));
    }

    fn stalled(&mut self, delay: Duration, stalls: u32) {
        self.0.set_message(format!(
            "Fetching connections... server is slow, retrying in {:.1}s ({stalls})",
            delay.as_secs_f64()
        ));
    }
}

fn init_tracing(debug: bool) {
    let default = if debug {
        "connection_finder=debug"
    } else {
        "connection_finder=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn query_from(args: &Args) -> QueryParams {
    let now = query::now();
    QueryParams {
        start: args.start.clone(),
        destination: args.destination.clone(),
        date: args.date.clone().unwrap_or_else(|| query::format_date(&now)),
        time: args.time.clone().unwrap_or_else(|| query::format_time(&now)),
        direction: if args.arrival {
            Direction::Arrival
        } else {
            Direction::Departure
        },
    }
}

fn fetch_config(args: &Args) -> FetchConfig {
    let mut config = FetchConfig::new(args.n);
    if let Some(ms) = args.spacing_ms {
        config = config.with_request_spacing_ms(ms);
    }
    if let Some(ms) = args.backoff_unit_ms {
        config = config.with_backoff_unit_ms(ms);
    }
    if let Some(ceiling) = args.backoff_ceiling {
        config = config.with_backoff_ceiling(ceiling);
    }
    config
}

fn print_results(results: &ResultSet, json: bool) -> Result<(), RunError> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        for line in table::render(results.rows()) {
            println!("{line}");
        }
    }
    Ok(())
}

async fn run(args: &Args) -> Result<(), RunError> {
    let mut client_config = HafasConfig::new();
    if let Some(url) = &args.base_url {
        client_config = client_config.with_url(url);
    }
    if let Some(secs) = args.timeout_secs {
        client_config = client_config.with_timeout(secs);
    }
    let client = HafasClient::new(client_config)?;
    let parser = ResultsParser::new(&PageLayout::default())?;

    let mut fetcher = ConnectionFetcher::new(client, parser, fetch_config(args));
    if args.debug {
        fetcher = fetcher.with_dump(ResponseDump::new(&args.dump_dir));
    }

    let query = query_from(args);
    let mut spinner = Spinner::start();
    let results = match fetcher.run(&query, &mut spinner).await {
        Ok(results) => results,
        Err(e) => {
            spinner.0.finish_and_clear();
            return Err(e.into());
        }
    };
    spinner
        .0
        .finish_with_message(format!("Done! Total fetched: {}", results.len()));

    print_results(&results, args.json)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    tokio::select! {
        result = run(&args) => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted");
            ExitCode::from(INTERRUPTED)
        }
    }
}
