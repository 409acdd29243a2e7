//! `cardgrid` - run layout operations on JSON card lists.
//!
//! Each subcommand reads one request document (`--input -` for stdin) and
//! prints the result as pretty JSON. Logs go to stderr, filtered by
//! `RUST_LOG` (default `warn`).

mod request;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cardgrid_layout::{
    CollisionSearch, GridConfig, GridEngine, LayoutMode, DEFAULT_BOARD_COLUMNS,
    DEFAULT_FLOW_COLUMNS,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use request::{
    AppendRequest, CheckRequest, CheckResponse, InsertRowRequest, PackRequest, PlaceRequest,
};

#[derive(Parser, Debug)]
#[command(name = "cardgrid", version, about = "Grid layout for cards on a canvas")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flow-pack cards by their order
    Pack(GridArgs),
    /// Check whether a candidate fits exactly where it is
    Check(GridArgs),
    /// Drop a group of cards at an anchor on a board
    Place {
        #[command(flatten)]
        grid: GridArgs,
        /// Where to look when a preferred spot is taken
        #[arg(long, value_enum, default_value_t = SearchArg::Forward)]
        search: SearchArg,
    },
    /// Open an empty row above or below a card
    InsertRow {
        /// Request document, or `-` for stdin
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Add cards to a board below its existing content
    Append(GridArgs),
}

#[derive(Args, Debug)]
struct GridArgs {
    /// Request document, or `-` for stdin
    #[arg(short, long)]
    input: PathBuf,

    /// Column count (defaults to 4 for pack/check, 16 for place/append)
    #[arg(short, long)]
    columns: Option<u32>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SearchArg {
    Forward,
    Nearest,
}

impl From<SearchArg> for CollisionSearch {
    fn from(arg: SearchArg) -> Self {
        match arg {
            SearchArg::Forward => CollisionSearch::ForwardScan,
            SearchArg::Nearest => CollisionSearch::Nearest,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli.command)
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Pack(args) => {
            let engine = engine(&args, LayoutMode::Flow, CollisionSearch::default())?;
            let request: PackRequest = read_request(&args.input)?;
            info!(cards = request.cards.len(), "packing");
            let packed = engine.pack(&request.cards).context("pack failed")?;
            print_json(&packed)
        }
        Command::Check(args) => {
            let engine = engine(&args, LayoutMode::Flow, CollisionSearch::default())?;
            let request: CheckRequest = read_request(&args.input)?;
            let open = engine.is_open(&request.candidate, &request.existing);
            print_json(&CheckResponse { open })
        }
        Command::Place { grid, search } => {
            let engine = engine(&grid, LayoutMode::Board, search.into())?;
            let request: PlaceRequest = read_request(&grid.input)?;
            info!(
                cards = request.moving.len(),
                row = request.anchor.row,
                col = request.anchor.col,
                "placing"
            );
            let placed = engine
                .place(
                    &request.moving,
                    request.anchor,
                    request.destination,
                    &request.existing,
                )
                .context("place failed")?;
            print_json(&placed)
        }
        Command::InsertRow { input } => {
            let request: InsertRowRequest = read_request(&input)?;
            let shifted = cardgrid_layout::insert_row(
                &request.reference,
                request.direction,
                &request.cards,
            );
            print_json(&shifted)
        }
        Command::Append(args) => {
            let engine = engine(&args, LayoutMode::Board, CollisionSearch::default())?;
            let request: AppendRequest = read_request(&args.input)?;
            let placed = cardgrid_layout::append_below(
                &request.incoming,
                &request.existing,
                request.destination,
                engine.config().column_count,
            )
            .context("append failed")?;
            print_json(&placed)
        }
    }
}

fn engine(args: &GridArgs, mode: LayoutMode, search: CollisionSearch) -> Result<GridEngine> {
    let default_columns = match mode {
        LayoutMode::Flow => DEFAULT_FLOW_COLUMNS,
        LayoutMode::Board => DEFAULT_BOARD_COLUMNS,
    };
    let config = GridConfig {
        column_count: args.columns.unwrap_or(default_columns),
        mode,
        collision_search: search,
    };
    GridEngine::new(config).context("invalid grid configuration")
}

fn read_request<T: DeserializeOwned>(input: &Path) -> Result<T> {
    let text = if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read request from stdin")?;
        text
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("malformed request in {}", input.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to encode result")?;
    println!("{json}");
    Ok(())
}
