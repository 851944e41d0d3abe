//! ScreenLab CLI: screen rows, browse the catalog, manage presets, share URLs.
//!
//! Commands:
//! - `screen`: filter a dataset and print the tab's result table
//! - `catalog`: list filter categories and their options per tab
//! - `presets list|show|save|delete`: manage built-in and user presets
//! - `url encode|decode`: convert filter state to and from query strings

mod persistence;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use screenlab_core::catalog::{categories_for_tab, CategoryKind, CriterionOption};
use screenlab_core::config::CONFIG_FILE_NAME;
use screenlab_core::{
    load_rows, sample_rows, synthetic_rows, FilterState, PresetStore, Row, ScreenerConfig,
    Screener, Tab, UrlSync,
};

use render::OutputFormat;

#[derive(Parser)]
#[command(
    name = "screenlab",
    about = "ScreenLab CLI: tabbed stock screener over JSON/CSV datasets"
)]
struct Cli {
    /// Path to a TOML config file. Defaults to ./screenlab.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a dataset and print the matching rows.
    Screen {
        #[command(flatten)]
        state: StateArgs,

        #[command(flatten)]
        data: DataArgs,

        /// Output format.
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List filter categories and options.
    Catalog {
        /// Only this tab (e.g. "Valuation", "ETF Perf").
        #[arg(long, value_parser = parse_tab)]
        tab: Option<Tab>,

        /// Show the threshold each option tests next to its label.
        #[arg(long)]
        rules: bool,
    },
    /// Preset management commands.
    Presets {
        #[command(subcommand)]
        action: PresetAction,
    },
    /// Query-string conversion commands.
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },
}

#[derive(Subcommand)]
enum PresetAction {
    /// List built-in and saved presets.
    List,
    /// Print one preset as JSON.
    Show { id: String },
    /// Save the filter state described by the flags under NAME.
    Save {
        name: String,

        #[command(flatten)]
        state: StateArgs,
    },
    /// Delete a saved preset. Built-in presets cannot be deleted.
    Delete { id: String },
}

#[derive(Subcommand)]
enum UrlAction {
    /// Print the query string for the filter state described by the flags.
    Encode {
        #[command(flatten)]
        state: StateArgs,
    },
    /// Print the filter state encoded in a query string or full URL as JSON.
    Decode { query: String },
}

/// Flags describing a filter state. Applied in order: --url, --preset, then
/// --tab, --filter and --search on top.
#[derive(Args, Debug, Default)]
struct StateArgs {
    /// Start from the state in this query string or URL.
    #[arg(long)]
    url: Option<String>,

    /// Start from this preset id.
    #[arg(long)]
    preset: Option<String>,

    /// Active tab.
    #[arg(long, value_parser = parse_tab)]
    tab: Option<Tab>,

    /// Filter as "Category=Option", e.g. --filter "P/E=Under 15". Repeatable.
    #[arg(long = "filter", value_name = "CATEGORY=OPTION", value_parser = parse_filter)]
    filters: Vec<(String, String)>,

    /// Case-insensitive ticker/company search.
    #[arg(long)]
    search: Option<String>,
}

#[derive(Args, Debug)]
struct DataArgs {
    /// Dataset file (.json or .csv). Defaults to the config's dataset, then
    /// the bundled sample.
    #[arg(long, conflicts_with = "synthetic")]
    dataset: Option<PathBuf>,

    /// Generate N synthetic rows instead of loading a dataset.
    #[arg(long, value_name = "N")]
    synthetic: Option<usize>,

    /// Seed for --synthetic.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn parse_tab(s: &str) -> Result<Tab, String> {
    s.parse::<Tab>().map_err(|err| {
        let valid: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
        format!("{err}. Valid: {}", valid.join(", "))
    })
}

fn parse_filter(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((category, option)) if !category.trim().is_empty() => {
            Ok((category.trim().to_string(), option.trim().to_string()))
        }
        _ => Err(format!("expected CATEGORY=OPTION, got {s:?}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    debug!(?config, "config loaded");

    match cli.command {
        Commands::Screen {
            state,
            data,
            format,
        } => run_screen(&config, &state, &data, format),
        Commands::Catalog { tab, rules } => run_catalog(tab, rules),
        Commands::Presets { action } => match action {
            PresetAction::List => run_presets_list(&config),
            PresetAction::Show { id } => run_presets_show(&config, &id),
            PresetAction::Save { name, state } => run_presets_save(&config, &name, &state),
            PresetAction::Delete { id } => run_presets_delete(&config, &id),
        },
        Commands::Url { action } => match action {
            UrlAction::Encode { state } => run_url_encode(&config, &state),
            UrlAction::Decode { query } => run_url_decode(&config, &query),
        },
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<ScreenerConfig> {
    match path {
        Some(path) => ScreenerConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(ScreenerConfig::load_or_default(Path::new(CONFIG_FILE_NAME))?),
    }
}

// ── State assembly ───────────────────────────────────────────────────

fn load_presets(config: &ScreenerConfig) -> PresetStore {
    match config.presets_path() {
        Some(path) => persistence::load(&path),
        None => PresetStore::with_builtins(),
    }
}

fn build_state(config: &ScreenerConfig, presets: &PresetStore, args: &StateArgs) -> Result<FilterState> {
    let sync = UrlSync::new(config.default_tab);
    let mut state = match args.url.as_deref() {
        Some(url) => decode(&sync, url),
        None => FilterState::new(sync.default_tab()),
    };

    if let Some(id) = args.preset.as_deref() {
        let Some(preset) = presets.get(id) else {
            bail!("unknown preset '{id}' (see `screenlab presets list`)");
        };
        state.apply_preset(preset);
    }
    if let Some(tab) = args.tab {
        state.tab = tab;
    }
    for (category, option) in &args.filters {
        state.selection.select(category.as_str(), option.as_str());
    }
    if let Some(search) = &args.search {
        state.search = search.clone();
    }
    Ok(state)
}

fn decode(sync: &UrlSync, input: &str) -> FilterState {
    if input.contains("://") {
        sync.from_url(input)
    } else {
        sync.deserialize(input)
    }
}

fn load_dataset(config: &ScreenerConfig, data: &DataArgs) -> Result<Vec<Row>> {
    if let Some(n) = data.synthetic {
        return Ok(synthetic_rows(n, data.seed));
    }
    match data.dataset.as_ref().or(config.dataset.as_ref()) {
        Some(path) => Ok(load_rows(path)?),
        None => Ok(sample_rows()),
    }
}

// ── Commands ─────────────────────────────────────────────────────────

fn run_screen(
    config: &ScreenerConfig,
    args: &StateArgs,
    data: &DataArgs,
    format: OutputFormat,
) -> Result<()> {
    let presets = load_presets(config);
    let state = build_state(config, &presets, args)?;
    let rows = load_dataset(config, data)?;
    let total = rows.len();

    let query = UrlSync::new(config.default_tab).serialize(&state);
    let tab = state.tab;
    let mut screener = Screener::with_state(rows, state);
    let visible = screener.visible_rows();

    let mut out = std::io::stdout().lock();
    render::write_rows(&mut out, format, tab, &visible, config.max_rows)?;

    let summary = format!("{} of {total} rows · {tab} · ?{query}", visible.len());
    match format {
        OutputFormat::Table => println!("{summary}"),
        OutputFormat::Json | OutputFormat::Csv => eprintln!("{summary}"),
    }
    Ok(())
}

fn option_cell(option: &CriterionOption, rules: bool) -> String {
    match option.rule {
        Some(rule) if rules => format!("{} ({rule})", option.label),
        _ => option.label.to_string(),
    }
}

fn run_catalog(tab: Option<Tab>, rules: bool) -> Result<()> {
    let tabs: Vec<Tab> = match tab {
        Some(tab) => vec![tab],
        None => Tab::ALL.to_vec(),
    };

    for tab in tabs {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Category", "Kind", "Options"]);
        for category in categories_for_tab(tab) {
            let kind = match category.kind() {
                CategoryKind::Numeric => "numeric".to_string(),
                CategoryKind::Text(field) => format!("text ({field:?})").to_lowercase(),
                CategoryKind::Informational => "informational".to_string(),
            };
            let options: Vec<String> = category
                .options
                .iter()
                .map(|option| option_cell(option, rules))
                .collect();
            table.add_row(vec![category.name().to_string(), kind, options.join(" | ")]);
        }
        println!("{tab}\n{table}\n");
    }
    Ok(())
}

fn run_presets_list(config: &ScreenerConfig) -> Result<()> {
    let store = load_presets(config);
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Id", "Name", "Tab", "Filters"]);
    for preset in store.list() {
        let filters: Vec<String> = preset
            .filters
            .iter()
            .map(|(category, option)| format!("{category}={option}"))
            .collect();
        table.add_row(vec![
            preset.id.clone(),
            preset.name.clone(),
            preset.tab.to_string(),
            filters.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn run_presets_show(config: &ScreenerConfig, id: &str) -> Result<()> {
    let store = load_presets(config);
    let Some(preset) = store.get(id) else {
        bail!("unknown preset '{id}'");
    };
    println!("{}", serde_json::to_string_pretty(preset)?);
    Ok(())
}

fn presets_path(config: &ScreenerConfig) -> Result<PathBuf> {
    match config.presets_path() {
        Some(path) => Ok(path),
        None => bail!("cannot determine a config directory; set presets_file in {CONFIG_FILE_NAME}"),
    }
}

fn run_presets_save(config: &ScreenerConfig, name: &str, args: &StateArgs) -> Result<()> {
    let path = presets_path(config)?;
    let mut store = persistence::load(&path);
    let state = build_state(config, &store, args)?;
    let preset = store.save(name, state.tab, &state.selection)?;
    persistence::save(&path, &store)
        .with_context(|| format!("writing presets to {}", path.display()))?;
    println!("Saved preset '{}' as {}", preset.name, preset.id);
    Ok(())
}

fn run_presets_delete(config: &ScreenerConfig, id: &str) -> Result<()> {
    let path = presets_path(config)?;
    let mut store = persistence::load(&path);
    match store.get(id) {
        None => bail!("unknown preset '{id}'"),
        Some(preset) if !preset.is_custom() => {
            bail!("'{id}' is a built-in preset and cannot be deleted")
        }
        Some(_) => {}
    }
    store.delete(id);
    persistence::save(&path, &store)
        .with_context(|| format!("writing presets to {}", path.display()))?;
    println!("Deleted preset {id}");
    Ok(())
}

fn run_url_encode(config: &ScreenerConfig, args: &StateArgs) -> Result<()> {
    let presets = load_presets(config);
    let state = build_state(config, &presets, args)?;
    let query = UrlSync::new(config.default_tab).serialize(&state);
    println!("?{query}");
    Ok(())
}

fn run_url_decode(config: &ScreenerConfig, query: &str) -> Result<()> {
    let state = decode(&UrlSync::new(config.default_tab), query);
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
