use std::{env, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use board::BoardController;
use board::config::{BoardConfig, ENDPOINT_ENV, load_config};
use board::core::{DisplayOptions, GroupKey, SortKey};
use board::loader::{FileTicketSource, HttpTicketSource, TicketSource};
use board::render;
use board::storage::{JsonFilePreferenceStore, PreferenceStore};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Parser)]
#[command(
    name = "board",
    about = "Ticket board grouped by status, user or priority",
    version
)]
struct Cli {
    /// Enable verbose logging for debugging.
    #[arg(long, global = true)]
    verbose: bool,
    /// Path to a config.toml (defaults to the platform config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the tickets once and print the board.
    Show(ShowArgs),

    /// Change the grouping and ordering without loading tickets.
    Display(DisplayArgs),

    /// Print the persisted display options.
    Prefs(PrefsArgs),
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Read the ticket payload from a JSON file instead of the endpoint.
    #[arg(long)]
    source: Option<PathBuf>,
    /// Endpoint to fetch from, overriding config and environment.
    #[arg(long)]
    endpoint: Option<String>,
    /// Grouping to select (status, user, priority). Persisted.
    #[arg(long)]
    group_by: Option<GroupKey>,
    /// Ordering to select (priority, title). Persisted.
    #[arg(long)]
    sort_by: Option<SortKey>,
    /// Emit JSON instead of text columns.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct DisplayArgs {
    /// Grouping to select (status, user, priority).
    #[arg(long)]
    group_by: Option<GroupKey>,
    /// Ordering to select (priority, title).
    #[arg(long)]
    sort_by: Option<SortKey>,
}

#[derive(Debug, Args)]
struct PrefsArgs {
    /// Emit JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())
        .context("loading board configuration")?
        .with_endpoint_override(env::var(ENDPOINT_ENV).ok());

    match cli.command {
        Commands::Show(args) => handle_show(args, &config),
        Commands::Display(args) => handle_display(args, &config),
        Commands::Prefs(args) => handle_prefs(args, &config),
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("BOARD_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "board=debug,info"
        } else {
            "board=info,warn"
        })
    });

    let format = env::var("BOARD_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn open_store(config: &BoardConfig) -> Result<JsonFilePreferenceStore> {
    let path = config
        .preferences_path()
        .context("no data directory for preferences; set preferences_path in config.toml")?;
    Ok(JsonFilePreferenceStore::new(path))
}

fn resolve_source(
    source: Option<PathBuf>,
    endpoint: Option<String>,
    config: &BoardConfig,
) -> Result<Box<dyn TicketSource>> {
    match (source, endpoint) {
        (Some(_), Some(_)) => anyhow::bail!("--source cannot be combined with --endpoint"),
        (Some(path), None) => Ok(Box::new(FileTicketSource::new(path))),
        (None, endpoint) => Ok(Box::new(HttpTicketSource::new(
            endpoint.unwrap_or_else(|| config.endpoint.clone()),
            Duration::from_secs(config.timeout_secs),
        ))),
    }
}

fn apply_selection<S: PreferenceStore>(
    controller: &mut BoardController<S>,
    group_by: Option<GroupKey>,
    sort_by: Option<SortKey>,
) -> Result<()> {
    if let Some(key) = group_by {
        controller
            .select_group_key(key)
            .context("saving grouping preference")?;
    }
    if let Some(key) = sort_by {
        controller
            .select_sort_key(key)
            .context("saving ordering preference")?;
    }
    Ok(())
}

fn handle_show(args: ShowArgs, config: &BoardConfig) -> Result<()> {
    let ShowArgs {
        source,
        endpoint,
        group_by,
        sort_by,
        json,
    } = args;

    let source = resolve_source(source, endpoint, config)?;
    let mut controller = BoardController::new(open_store(config)?);
    apply_selection(&mut controller, group_by, sort_by)?;

    controller.initialize(source.as_ref());
    let view = controller.view();
    let options = controller.options();

    if json {
        let snapshot = render::snapshot(&view, options, controller.load_outcome());
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render::render_text(&view, options, controller.board()));
    }
    Ok(())
}

fn handle_display(args: DisplayArgs, config: &BoardConfig) -> Result<()> {
    let DisplayArgs { group_by, sort_by } = args;
    let mut controller = BoardController::new(open_store(config)?);
    apply_selection(&mut controller, group_by, sort_by)?;
    print!("{}", display_menu_text(controller.options()));
    Ok(())
}

fn handle_prefs(args: PrefsArgs, config: &BoardConfig) -> Result<()> {
    let store = open_store(config)?;
    let path = store.path().display().to_string();
    let controller = BoardController::new(store);
    let options = controller.options();

    if args.json {
        #[derive(serde::Serialize)]
        struct JsonOutput {
            path: String,
            options: DisplayOptions,
        }

        let payload = JsonOutput { path, options };
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Preferences: {path}");
        print!("{}", display_menu_text(options));
    }
    Ok(())
}

/// The two option rows of the display menu, current choice in brackets.
fn display_menu_text(options: DisplayOptions) -> String {
    let grouping: Vec<String> = GroupKey::ALL
        .iter()
        .map(|key| mark(key.as_str(), *key == options.group_key))
        .collect();
    let ordering: Vec<String> = SortKey::ALL
        .iter()
        .map(|key| mark(key.as_str(), *key == options.sort_key))
        .collect();
    format!(
        "Grouping: {}\nOrdering: {}\n",
        grouping.join(" "),
        ordering.join(" ")
    )
}

fn mark(value: &str, selected: bool) -> String {
    if selected {
        format!("[{value}]")
    } else {
        value.to_string()
    }
}
