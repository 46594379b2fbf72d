mod error;

use clap::{Parser, Subcommand};
use error::{CliError, CliResult};
use std::path::{Path, PathBuf};
use ws_core::ReportUnits;
use ws_results::{SummaryStore, query};
use ws_summary::{DeckModel, KeywordCatalog, StepRecord, SummaryEngine};

#[derive(Parser)]
#[command(name = "ws-cli")]
#[command(about = "wellsum CLI - well, group and field summary variables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate deck file syntax and references
    Validate {
        /// Path to the deck file (YAML or JSON)
        deck_path: PathBuf,
    },
    /// List the series a deck requests, after entity expansion
    Keywords {
        /// Path to the deck file (YAML or JSON)
        deck_path: PathBuf,
    },
    /// Evaluate a step file against a deck and store the summary
    Run {
        /// Path to the deck file (YAML or JSON)
        deck_path: PathBuf,
        /// JSON array of step records
        steps_path: PathBuf,
        /// Case store directory (defaults to .wellsum/cases next to the deck)
        #[arg(long)]
        store: Option<PathBuf>,
        /// JSON file with report unit scales (defaults to day and bar)
        #[arg(long)]
        units: Option<PathBuf>,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// List stored cases for a deck name
    Cases {
        /// Case store directory
        store: PathBuf,
        /// Deck name
        name: String,
    },
    /// Show the report steps of a stored case
    Steps {
        /// Case store directory
        store: PathBuf,
        /// Case ID
        case_id: String,
    },
    /// Show one variable of a stored case
    Show {
        /// Case store directory
        store: PathBuf,
        /// Case ID
        case_id: String,
        /// Keyword (e.g., WOPR, GWCT, FOPT)
        keyword: String,
        /// Well or group name, FIELD for field keywords
        entity: String,
        /// Report step (all report steps when omitted)
        #[arg(long)]
        step: Option<usize>,
    },
    /// Export the ministep series of one variable as CSV
    Export {
        /// Case store directory
        store: PathBuf,
        /// Case ID
        case_id: String,
        /// Keyword
        keyword: String,
        /// Well or group name, FIELD for field keywords
        entity: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { deck_path } => cmd_validate(&deck_path),
        Commands::Keywords { deck_path } => cmd_keywords(&deck_path),
        Commands::Run {
            deck_path,
            steps_path,
            store,
            units,
            no_cache,
        } => cmd_run(
            &deck_path,
            &steps_path,
            store.as_deref(),
            units.as_deref(),
            !no_cache,
        ),
        Commands::Cases { store, name } => cmd_cases(&store, &name),
        Commands::Steps { store, case_id } => cmd_steps(&store, &case_id),
        Commands::Show {
            store,
            case_id,
            keyword,
            entity,
            step,
        } => cmd_show(&store, &case_id, &keyword, &entity, step),
        Commands::Export {
            store,
            case_id,
            keyword,
            entity,
            output,
        } => cmd_export(&store, &case_id, &keyword, &entity, output.as_deref()),
    }
}

fn cmd_validate(deck_path: &Path) -> CliResult<()> {
    println!("Validating deck: {}", deck_path.display());
    let deck = ws_deck::load(deck_path)?;
    println!(
        "✓ Deck is valid ({} wells, {} groups, {} keyword requests)",
        deck.wells.len(),
        deck.groups.len(),
        deck.summary.len()
    );
    Ok(())
}

fn cmd_keywords(deck_path: &Path) -> CliResult<()> {
    let model = DeckModel::new(ws_deck::load(deck_path)?);
    let catalog = KeywordCatalog::from_model(&model)?;

    if catalog.is_empty() {
        println!("No summary keywords requested");
    } else {
        println!("Summary series ({}):", catalog.len());
        for key in catalog.keys() {
            println!("  {:<8} {}", key.keyword, key.entity);
        }
    }
    Ok(())
}

fn read_file(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &Path, text: &str) -> CliResult<T> {
    serde_json::from_str(text).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn open_store(path: &Path) -> CliResult<SummaryStore> {
    Ok(SummaryStore::new(path.to_path_buf())?)
}

fn cmd_run(
    deck_path: &Path,
    steps_path: &Path,
    store: Option<&Path>,
    units: Option<&Path>,
    use_cache: bool,
) -> CliResult<()> {
    let deck = ws_deck::load(deck_path)?;
    let step_input = read_file(steps_path)?;
    let units = match units {
        Some(path) => parse_json::<ReportUnits>(path, &read_file(path)?)?,
        None => ReportUnits::metric(),
    };

    let store = match store {
        Some(dir) => open_store(dir)?,
        None => SummaryStore::for_deck(deck_path)?,
    };
    // Case identity covers the report units.
    let unit_input = format!("{}:{}", units.time_scale_s, units.pressure_scale_pa);
    let case_id = ws_results::compute_case_id(
        &deck,
        &format!("{step_input}\n{unit_input}"),
        ws_results::WRITER_VERSION,
    );

    tracing::debug!(
        case_id = %case_id,
        store = %store.root_dir().display(),
        "resolved case"
    );

    if use_cache && store.has_case(&case_id) {
        println!("✓ Loaded from cache: {}", case_id);
        return Ok(());
    }

    let records: Vec<StepRecord> = parse_json(steps_path, &step_input)?;
    println!(
        "Evaluating {} steps for deck '{}'",
        records.len(),
        deck.name
    );

    let name = deck.name.clone();
    let mut engine = SummaryEngine::with_units(DeckModel::new(deck), units)?;
    for record in &records {
        engine.ingest_record(record)?;
    }

    let mut writer = ws_results::StoreWriter::new(store, case_id.clone(), name);
    let table = engine.flush(&mut writer)?;

    println!("✓ Summary stored: {}", case_id);
    println!(
        "  {} series, {} ministeps, {} report steps",
        table.keys().len(),
        table.ministeps.len(),
        table.report_steps().len()
    );
    Ok(())
}

fn cmd_cases(store: &Path, name: &str) -> CliResult<()> {
    let cases = open_store(store)?.list_cases(name)?;

    if cases.is_empty() {
        println!("No stored cases for deck: {}", name);
    } else {
        println!("Stored cases for deck '{}':", name);
        for manifest in cases {
            println!("  {} ({})", manifest.case_id, manifest.timestamp);
        }
    }
    Ok(())
}

fn load_case(store: &Path, case_id: &str) -> CliResult<ws_results::SummaryTable> {
    Ok(open_store(store)?.load_table(case_id)?)
}

fn cmd_steps(store: &Path, case_id: &str) -> CliResult<()> {
    let table = load_case(store, case_id)?;
    let summary = query::get_case_summary(&table);

    println!("Case: {}", case_id);
    println!("  Ministeps: {}", summary.ministep_count);
    println!(
        "  Time range: {:.3} - {:.3}",
        summary.time_range.0, summary.time_range.1
    );
    println!("  Series: {}", summary.key_count);

    println!("\nReport steps:");
    for step in table.report_steps() {
        if let Some(time) = table.sim_time(step) {
            println!("  {:>4}  t={:.3}", step, time);
        }
    }
    Ok(())
}

fn cmd_show(
    store: &Path,
    case_id: &str,
    keyword: &str,
    entity: &str,
    step: Option<usize>,
) -> CliResult<()> {
    let table = load_case(store, case_id)?;
    let series = query::extract_report_series(&table, keyword, entity)?;

    println!("{} {}:", keyword, entity);
    for (report_step, time, value) in series {
        if step.is_none_or(|s| s == report_step) {
            println!("  step {:>4}  t={:.3}  {}", report_step, time, value);
        }
    }
    Ok(())
}

fn cmd_export(
    store: &Path,
    case_id: &str,
    keyword: &str,
    entity: &str,
    output: Option<&Path>,
) -> CliResult<()> {
    let table = load_case(store, case_id)?;
    let series = query::extract_series(&table, keyword, entity)?;

    let mut csv = String::from("time,value\n");
    for (t, val) in &series {
        csv.push_str(&format!("{},{}\n", t, val));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} data points to {}",
            series.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}
