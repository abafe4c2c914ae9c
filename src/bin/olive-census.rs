//! CLI tool for the olive-oil production census file.
//!
//! Usage:
//!   olive-census [--file census.csv] count
//!   olive-census add --year 2021 --unit-type Industrial ...
//!   olive-census find --year 2020 --unit-type Private ...
//!
//! Any record field not given as a flag is asked for interactively.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::debug;
use olive_census::{
    CsvFileCodec, CsvProductionStore, PartialKey, PartialMeasurements, Production,
    ProductionStore, Prompter, StoreError, StoreOptions,
};

/// Create, read, update and delete olive-oil production records.
#[derive(Parser)]
#[command(name = "olive-census", version)]
struct Cli {
    /// CSV file holding the production records
    #[arg(
        short,
        long,
        env = "OLIVE_CENSUS_FILE",
        default_value = "olive_oil_census2020.csv"
    )]
    file: PathBuf,

    /// Fail instead of treating a missing file as an empty census
    #[arg(long)]
    require_file: bool,

    /// Print records as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the number of records
    Count,
    /// Print every record
    List,
    /// Append a new record
    Add {
        #[command(flatten)]
        key: KeyArgs,
        #[command(flatten)]
        measurements: MeasurementArgs,
    },
    /// Look up a record by prod_ID
    FindId { id: u64 },
    /// Look up a record by year, unit type, extraction type and region
    Find {
        #[command(flatten)]
        key: KeyArgs,
    },
    /// Overwrite the quantities of the record matching the key
    Update {
        #[command(flatten)]
        key: KeyArgs,
        #[command(flatten)]
        measurements: MeasurementArgs,
    },
    /// Remove every record matching the key
    Delete {
        #[command(flatten)]
        key: KeyArgs,
    },
}

#[derive(Args)]
struct KeyArgs {
    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    unit_type: Option<String>,
    #[arg(long)]
    extraction_type: Option<String>,
    #[arg(long = "region")]
    region_name: Option<String>,
}

#[derive(Args)]
struct MeasurementArgs {
    /// Olive quantity used, in tons
    #[arg(long)]
    olive_tons: Option<f64>,
    /// Number of oil presses
    #[arg(long)]
    presses: Option<u32>,
    /// Olive oil produced, in hectoliters
    #[arg(long)]
    oil_hl: Option<f64>,
}

impl From<KeyArgs> for PartialKey {
    fn from(args: KeyArgs) -> Self {
        PartialKey {
            year: args.year,
            unit_type: args.unit_type,
            extraction_type: args.extraction_type,
            region_name: args.region_name,
        }
    }
}

impl From<MeasurementArgs> for PartialMeasurements {
    fn from(args: MeasurementArgs) -> Self {
        PartialMeasurements {
            olive_quant_ton: args.olive_tons,
            oil_press_num: args.presses,
            oil_prod_hl: args.oil_hl,
        }
    }
}

/// 1 when the criteria matched zero or several records, 2 for anything else.
fn exit_status(err: &StoreError) -> u8 {
    if err.is_not_found() || err.is_ambiguous() {
        1
    } else {
        2
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let status = exit_status(&e);
            if status == 1 {
                eprintln!("{}", e);
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(status)
        }
    }
}

fn run(cli: Cli) -> Result<(), StoreError> {
    let options = if cli.require_file {
        StoreOptions::new().require_file()
    } else {
        StoreOptions::new()
    };
    let store: CsvProductionStore =
        ProductionStore::with_options(CsvFileCodec::new(&cli.file), options);
    debug!("census file: {}", store.codec().path().display());
    let mut prompter = Prompter::new(io::stdin().lock(), io::stderr());
    let json = cli.json;

    match cli.command {
        Command::Count => println!("{}", store.count()?),
        Command::List => print_records(&store.list()?, json)?,
        Command::Add { key, measurements } => {
            let fields = prompter.fields_with(key.into(), measurements.into())?;
            let created = store.add(fields)?;
            eprintln!("New production added with prod_ID: {}", created.id);
            print_records(&[created], json)?;
        }
        Command::FindId { id } => {
            let found = store.find_by_id(id)?;
            eprintln!("Record found.");
            print_records(&[found], json)?;
        }
        Command::Find { key } => {
            let found = store.find_by_attributes(&prompter.key_with(key.into())?)?;
            eprintln!("Record found.");
            print_records(&[found], json)?;
        }
        Command::Update { key, measurements } => {
            let key = prompter.key_with(key.into())?;
            let updated = store.update(&key, prompter.measurements_with(measurements.into())?)?;
            eprintln!("Record updated.");
            print_records(&[updated], json)?;
        }
        Command::Delete { key } => {
            let removed = store.delete(&prompter.key_with(key.into())?)?;
            eprintln!("{} record(s) deleted.", removed);
        }
    }
    Ok(())
}

fn print_records(records: &[Production], json: bool) -> Result<(), StoreError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let text = serde_json::to_string_pretty(records).map_err(|e| StoreError::Codec {
            location: "stdout".into(),
            message: e.to_string(),
        })?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    for record in records {
        writeln!(
            out,
            "{:>5}  {}  {:<12} {:<26} {:<20} {:>10.2} t  {:>3} presses  {:>10.2} hl",
            record.id,
            record.year,
            record.unit_type,
            record.extraction_type,
            record.region_name,
            record.olive_quant_ton,
            record.oil_press_num,
            record.oil_prod_hl,
        )?;
    }
    Ok(())
}
