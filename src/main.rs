// POTA activation logbook - command-line shell
//
// Each subcommand is one user action: pick a province, import the park
// export, record an activation. State is loaded from the data directory,
// the command runs, and whatever changed is written back.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use potalog_lib::commands::{activation, awards, import, parks, AppState};
use potalog_lib::commands::parks::ProvinceSelection;
use potalog_lib::store::DataPaths;
use potalog_lib::view::SortOrder;

#[derive(Debug, Parser)]
#[command(
    name = "potalog",
    version,
    about = "Track Parks on the Air activations against an imported park catalog"
)]
struct Cli {
    /// Directory holding parks_data.json and config.json (default: current directory)
    #[arg(short = 'd', long = "data-dir", env = "POTALOG_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the province selector entries
    Provinces,

    /// Show the park table
    List {
        /// Only parks in this province (e.g. CN-AH); remembered for next time
        #[arg(short, long, conflicts_with = "all")]
        province: Option<String>,

        /// Show parks of all provinces; remembered for next time
        #[arg(short, long)]
        all: bool,

        /// Sort by park number
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,
    },

    /// Import a park catalog CSV export, keeping recorded activations
    Import {
        /// CSV file with reference, name and locationDesc columns
        file: PathBuf,
    },

    /// Record a park activation
    Activate {
        /// Park reference, e.g. CN-0012
        reference: String,

        /// Activation date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show activation progress per province
    Progress,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Asc,
    Desc,
}

fn sort_order(arg: Option<SortArg>) -> SortOrder {
    match arg {
        None => SortOrder::Catalog,
        Some(SortArg::Asc) => SortOrder::ParkNumberAsc,
        Some(SortArg::Desc) => SortOrder::ParkNumberDesc,
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("potalog=info,potalog_lib=info"))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let paths = cli.data_dir.map(DataPaths::new).unwrap_or_default();
    let json = cli.json;

    // The catalog is only read for commands that need it
    let load = || AppState::load(paths.clone()).map_err(|e| e.to_string());

    match cli.command {
        Commands::Provinces => {
            let options = parks::get_provinces();
            if json {
                return print_json(&options);
            }
            for option in options {
                println!("{:<8} {}", option.code.as_deref().unwrap_or("-"), option.label);
            }
        }
        Commands::List { province, all, sort } => {
            let mut state = load()?;
            let selection = match (province, all) {
                (Some(code), _) => ProvinceSelection::Province(code),
                (None, true) => ProvinceSelection::All,
                (None, false) => ProvinceSelection::Restore,
            };
            let table = parks::list_parks(&mut state, selection, sort_order(sort))?;
            if json {
                return print_json(&table);
            }
            println!(
                "{} ({} of {} parks)",
                table.province.as_deref().unwrap_or(parks::ALL_PROVINCES_LABEL),
                table.rows.len(),
                table.total
            );
            for row in &table.rows {
                let marker = if row.highlighted { '*' } else { ' ' };
                println!(
                    "{}{:>5}  {:<10} {:<12} {}",
                    marker, row.index, row.reference, row.activation_label, row.name
                );
            }
        }
        Commands::Import { file } => {
            let mut state = load()?;
            let result = import::import_csv(&mut state, file)?;
            if json {
                return print_json(&result);
            }
            println!("Imported/updated {} park records.", result.imported);
        }
        Commands::Activate { reference, date } => {
            let mut state = load()?;
            let result = activation::activate_park(&mut state, reference, date)?;
            if json {
                return print_json(&result);
            }
            println!(
                "Park {} ({}) activated: {}",
                result.reference, result.name, result.activation_time
            );
        }
        Commands::Progress => {
            let state = load()?;
            let progress = awards::get_activation_progress(&state);
            if json {
                return print_json(&progress);
            }
            println!("Activated {} of {} parks", progress.activated, progress.total);
            for p in &progress.provinces {
                println!("{:<8} {:<6} {:>4} / {:<4}", p.code, p.name, p.activated, p.total);
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", text);
    Ok(())
}
