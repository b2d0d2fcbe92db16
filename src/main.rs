//! CLI entry point for the bikeshare trip explorer.
//!
//! Provides an `analyze` subcommand that runs one filter-and-report cycle
//! from flags, and an interactive `explore` subcommand that prompts for
//! filters, shows the reports, pages raw rows, and offers a restart.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Result;
use bikeshare_explorer::loader;
use bikeshare_explorer::output;
use bikeshare_explorer::reports;
use bikeshare_explorer::selection::{
    City, DayFilter, FilterSelection, MonthFilter, ParseSelectionError,
};
use bikeshare_explorer::trips::TripTable;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Raw rows shown per page in the explorer.
const PAGE_SIZE: usize = 5;

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory holding the city CSV files (falls back to
    /// BIKESHARE_DATA_DIR, then "data")
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute statistics for one city/month/weekday selection
    Analyze {
        /// City dataset to analyze
        #[arg(value_name = "CITY")]
        city: City,

        /// Month filter: January through June, or "all"
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,

        /// Weekday filter: Monday through Sunday, or "all"
        #[arg(short = 'w', long, default_value = "all")]
        day: DayFilter,

        /// Emit the statistics as pretty JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Interactively pick filters, browse reports and raw rows
    Explore,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    tracing_subscriber::registry().with(stderr_layer).init();

    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        PathBuf::from(std::env::var("BIKESHARE_DATA_DIR").unwrap_or_else(|_| "data".to_string()))
    });

    match cli.command {
        Commands::Analyze {
            city,
            month,
            day,
            json,
        } => {
            let selection = FilterSelection { city, month, day };
            let table = loader::load(&data_dir, &selection)?;
            let stats = reports::compute_statistics(&table)?;

            let mut stdout = io::stdout();
            if json {
                output::print_json(&mut stdout, &stats)?;
            } else {
                output::render_statistics(&mut stdout, &stats)?;
            }
        }
        Commands::Explore => {
            explore(&data_dir)?;
        }
    }

    Ok(())
}

/// Interactive session loop: filter, report, page raw rows, restart.
fn explore(data_dir: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Let's explore some US bikeshare data!");
    loop {
        let city: City = prompt(&mut input, "City (Chicago, New York City or Washington):")?;
        let month: MonthFilter = prompt(&mut input, "Month (January-June, or \"all\"):")?;
        let day: DayFilter = prompt(&mut input, "Weekday (Monday-Sunday, or \"all\"):")?;
        let selection = FilterSelection { city, month, day };

        // A failed load or an empty result ends this session, not the
        // shell; the user picks another selection on restart.
        if let Err(err) = run_session(data_dir, &selection, &mut input) {
            error!(error = %err, "session failed");
            println!("Could not analyze that selection: {err}");
        }

        let restart: YesNo = prompt(&mut input, "Would you like to restart? (yes/no)")?;
        if !restart.0 {
            break;
        }
    }

    Ok(())
}

fn run_session(
    data_dir: &Path,
    selection: &FilterSelection,
    input: &mut impl BufRead,
) -> Result<()> {
    let table = loader::load(data_dir, selection)?;
    let stats = reports::compute_statistics(&table)?;

    output::render_statistics(&mut io::stdout(), &stats)?;
    page_rows(&table, input)?;
    Ok(())
}

/// Pages raw rows five at a time, in original file order.
fn page_rows(table: &TripTable, input: &mut impl BufRead) -> Result<()> {
    let mut offset = 0;
    let mut more: YesNo = prompt(input, "View 5 rows of raw trip data? (yes/no)")?;

    while more.0 {
        let page = table.page(offset, PAGE_SIZE);
        if page.is_empty() {
            println!("No more rows to show.");
            break;
        }
        output::render_rows(&mut io::stdout(), offset, page)?;
        offset += PAGE_SIZE;
        more = prompt(input, "Continue? (yes/no)")?;
    }

    Ok(())
}

/// Asks until the answer parses into the closed vocabulary of `T`.
fn prompt<T>(input: &mut impl BufRead, question: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    loop {
        print!("{question} ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed before the prompt was answered");
        }
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(err) => println!("{err}"),
        }
    }
}

/// A yes/no prompt answer.
#[derive(Debug, Clone, Copy)]
struct YesNo(bool);

impl FromStr for YesNo {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(YesNo(true)),
            "no" | "n" => Ok(YesNo(false)),
            other => Err(ParseSelectionError::new(format!(
                "please answer yes or no, not {other:?}"
            ))),
        }
    }
}
