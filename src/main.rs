//! rackspace - CLI tool for rack-space matching and scan sessions.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use rackspace_rs::config::{columns, DEFAULT_PAGE_LIMIT, DROPSHIP_WAREHOUSE_ID, PATTERN_EXPANSION_LIMIT};
use rackspace_rs::generator::{
    barcode_filename, format_oms_add_export, oms_add_filename, scanned_orders_filename,
};
use rackspace_rs::parser::{main_rows, mapping_rows, pattern_rows, read_csv_file};
use rackspace_rs::services::{CsvColorCatalog, CsvOrderLookup, LocalMappingIndex};
use rackspace_rs::session::JsonFilePersistence;
use rackspace_rs::validation::{
    validate_columns, validate_main_file, validate_mapping_file, validate_pattern_file,
};
use rackspace_rs::{
    browse, format_barcode_export, format_scanned_orders, FileKind, MatchConfig, ScanConfig,
    ScanStore, Scanner, SearchQuery, ValidationResult, ZeroRackSession,
};

/// Match inventory to rack spaces and manage order scan sessions.
#[derive(Parser, Debug)]
#[command(name = "rackspace")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the inventory reset file from a main file and a rack-space file
    ZeroRack(ZeroRackArgs),

    /// Check a scanned_orders mapping file before upload
    CheckMapping {
        /// Mapping CSV file path
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Look up an order and record it in the scan session
    Scan(ScanArgs),

    /// Inspect or export the scan session
    Session {
        /// Scan session JSON file
        #[arg(long)]
        store: PathBuf,

        #[command(subcommand)]
        action: SessionAction,
    },

    /// Search previously mapped SKUs
    Browse(BrowseArgs),
}

#[derive(Args, Debug)]
struct ZeroRackArgs {
    /// Main inventory CSV (Rack Space, Item SkuCode)
    #[arg(long)]
    main: PathBuf,

    /// Rack-space pattern CSV (Rack Space)
    #[arg(long)]
    racks: PathBuf,

    /// Output CSV file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for the generated file when no output path is given
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Warehouse id written into every row
    #[arg(long, default_value_t = DROPSHIP_WAREHOUSE_ID)]
    warehouse_id: u32,

    /// Codes generated per letters-only pattern
    #[arg(long, default_value_t = PATTERN_EXPANSION_LIMIT)]
    expansion_limit: u32,

    /// Output parsed rows as JSON instead of writing the file
    #[arg(long)]
    debug: bool,
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Scan session JSON file
    #[arg(long)]
    store: PathBuf,

    /// Orders CSV (order_id, style_number, size)
    #[arg(long)]
    orders: PathBuf,

    /// Colors CSV (style_code, color)
    #[arg(long)]
    colors: PathBuf,

    /// Order id to scan
    #[arg(long)]
    order_id: String,

    /// Rack space the order is put on
    #[arg(long, default_value = "")]
    rack_space: String,

    /// Exact inventory style that must not be scanned (repeatable)
    #[arg(long = "block-style")]
    blocked_styles: Vec<u32>,
}

#[derive(Subcommand, Debug)]
enum SessionAction {
    /// List scanned orders, newest first
    List,
    /// Remove one order
    Delete { order_id: String },
    /// Remove every order
    Clear,
    /// Write the session as a CSV file
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Scanned)]
        format: ExportFormat,

        /// Output directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ExportFormat {
    /// scanned_orders mapping file
    Scanned,
    /// Barcode label file
    Barcode,
    /// OMS inventory file adding one unit per order
    Oms,
}

#[derive(Args, Debug)]
struct BrowseArgs {
    /// Mapping CSV to search (scanned_orders-*.csv)
    #[arg(long)]
    mapping: PathBuf,

    /// Style number filter
    #[arg(long)]
    style: Option<String>,

    /// Rack-space filter
    #[arg(long)]
    rack: Option<String>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Results per page
    #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
    limit: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Command::ZeroRack(args) => run_zero_rack(args),
        Command::CheckMapping { input } => run_check_mapping(&input),
        Command::Scan(args) => run_scan(args),
        Command::Session { store, action } => run_session(&store, action),
        Command::Browse(args) => run_browse(args),
    }
}

/// Log validation findings; fail when there are errors.
fn report(validation: &ValidationResult) -> Result<()> {
    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }
    Ok(())
}

fn run_zero_rack(args: ZeroRackArgs) -> Result<()> {
    info!("Main inventory: {}", args.main.display());
    info!("Rack spaces: {}", args.racks.display());

    let main_table = read_csv_file(&args.main, FileKind::Main)
        .with_context(|| format!("Failed to read {}", args.main.display()))?;
    let main = main_rows(&main_table);

    let racks_table = read_csv_file(&args.racks, FileKind::Patterns)
        .with_context(|| format!("Failed to read {}", args.racks.display()))?;
    let patterns = pattern_rows(&racks_table);

    info!(
        "Parsed {} inventory row(s) and {} rack space(s)",
        main.len(),
        patterns.len()
    );

    let mut validation = validate_main_file(&main_table, &main);
    validation.merge(validate_pattern_file(&racks_table, &patterns));
    report(&validation)?;

    // Debug output
    if args.debug {
        let json = serde_json::json!({ "main": &main, "patterns": &patterns });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    let config = MatchConfig {
        expansion_limit: args.expansion_limit,
        warehouse_id: args.warehouse_id,
    };
    let export =
        ZeroRackSession::from_parsed(main, patterns).export(&config, chrono::Utc::now())?;

    if !export.patterns.is_empty() {
        info!(
            "Expanded pattern(s) {} into {} code(s) each",
            export.patterns.join(", "),
            config.expansion_limit
        );
    }

    let output_path = args.output.unwrap_or_else(|| {
        args.out_dir
            .unwrap_or_default()
            .join(&export.filename)
    });

    fs::write(&output_path, &export.csv)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Matched {} row(s)", export.matched);
    info!("Generated: {}", output_path.display());

    Ok(())
}

fn run_check_mapping(input: &Path) -> Result<()> {
    info!("Processing: {}", input.display());

    let table = read_csv_file(input, FileKind::Mapping)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    report(&validate_columns(&table, FileKind::Mapping, &columns::MAPPING))?;

    let parsed = mapping_rows(&table)?;
    report(&validate_mapping_file(&table, &parsed))?;

    info!(
        "Parsed {} valid rows ({} invalid rows skipped)",
        parsed.len(),
        parsed.dropped
    );
    Ok(())
}

fn run_scan(args: ScanArgs) -> Result<()> {
    let orders = CsvOrderLookup::load(&args.orders)
        .with_context(|| format!("Failed to load orders from {}", args.orders.display()))?;
    let colors = CsvColorCatalog::load(&args.colors)
        .with_context(|| format!("Failed to load colors from {}", args.colors.display()))?;

    let scanner = Scanner::new(
        orders,
        &colors,
        ScanConfig {
            blocked_styles: args.blocked_styles,
        },
    );
    let mut store = ScanStore::open(JsonFilePersistence::new(&args.store));

    let record = scanner.scan(&mut store, &args.order_id, &args.rack_space)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    info!("{} order(s) in session", store.len());

    Ok(())
}

fn run_session(store_path: &Path, action: SessionAction) -> Result<()> {
    let mut store = ScanStore::open(JsonFilePersistence::new(store_path));

    match action {
        SessionAction::List => {
            for record in store.list_all() {
                println!(
                    "{}\t{}\t{}\t{}",
                    record.order_id,
                    record.barcode_sku(),
                    record.color.as_deref().unwrap_or("-"),
                    record.rack_space
                );
            }
            info!("{} order(s) in session", store.len());
        }
        SessionAction::Delete { order_id } => {
            if store.delete(&order_id)? {
                info!("Deleted order {}", order_id);
            } else {
                warn!("Order {} is not in the session", order_id);
            }
        }
        SessionAction::Clear => {
            store.clear()?;
            info!("Cleared scan session");
        }
        SessionAction::Export { format, out_dir } => {
            let now = chrono::Utc::now();
            let (filename, csv) = match format {
                ExportFormat::Scanned => {
                    (scanned_orders_filename(now), format_scanned_orders(store.list_all())?)
                }
                ExportFormat::Barcode => {
                    (barcode_filename(now), format_barcode_export(store.list_all())?)
                }
                ExportFormat::Oms => {
                    (oms_add_filename(now), format_oms_add_export(store.list_all())?)
                }
            };

            let output_path = out_dir.unwrap_or_default().join(filename);
            fs::write(&output_path, csv)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            info!("Generated: {}", output_path.display());
        }
    }

    Ok(())
}

fn run_browse(args: BrowseArgs) -> Result<()> {
    let index = LocalMappingIndex::load(&args.mapping)
        .with_context(|| format!("Failed to load {}", args.mapping.display()))?;

    let query = SearchQuery {
        style_number: args.style,
        rack_space: args.rack,
        page: args.page,
        limit: args.limit,
    };
    let page = browse(&index, &query)?;

    for sku in &page.products {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            sku.order_id, sku.style_number, sku.size, sku.color, sku.rack_space
        );
    }

    let pagination = &page.pagination;
    info!(
        "Page {} of {} ({} record(s)); pages {:?}",
        pagination.current_page,
        pagination.total_pages,
        pagination.total_records,
        pagination.default_window()
    );

    Ok(())
}
