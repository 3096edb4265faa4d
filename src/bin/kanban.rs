//! Command-line host for a file-backed task board.
//!
//! Usage:
//!
//! ```text
//! kanban [--data-dir DIR] [--log-level LEVEL] <command>
//! ```
//!
//! The board snapshot lives in `DIR/<storage key>.json`. `DIR` defaults to
//! `KANBAN_DATA_DIR`, or `.kanban` in the working directory.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use kanban::board::adapters::{TracingNotifier, fs::FileBlobStore};
use kanban::board::domain::{Column, Task, TaskId};
use kanban::board::ports::{BlobStore, BlobStoreError, Notifier};
use kanban::board::services::{
    BoardError, BoardService, DialogOutcome, DialogResponse, EditedFields,
};
use kanban::config::{BoardConfig, ConfigError};
use kanban::telemetry;
use mockable::{Clock, DefaultClock};
use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Parser)]
#[command(name = "kanban", about = "Manage a three-column task board")]
struct Cli {
    /// Directory holding the board snapshot.
    #[arg(long, env = "KANBAN_DATA_DIR", default_value = ".kanban")]
    data_dir: Utf8PathBuf,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every column in display order.
    List,
    /// Add a task to the end of `todo`.
    Add {
        /// Task title.
        title: String,
        /// Optional description.
        #[arg(default_value = "")]
        description: String,
    },
    /// Change the title or description of a task.
    Edit {
        /// Task identifier.
        id: TaskId,
        /// Replacement title.
        #[arg(long)]
        title: Option<String>,
        /// Replacement description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a task.
    Delete {
        /// Task identifier.
        id: TaskId,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
    /// Move a task to a column, optionally at an index.
    Move {
        /// Task identifier.
        id: TaskId,
        /// Destination column: `todo`, `inprogress`, or `done`.
        column: Column,
        /// Zero-based position in the destination; appends when omitted.
        index: Option<usize>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to open board storage: {0}")]
    Storage(#[from] BlobStoreError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("no task with id {0}")]
    UnknownTask(TaskId),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    telemetry::init_subscriber(&cli.log_level);
    run(cli).map_err(Into::into)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = BoardConfig::from_env()?;
    let store = FileBlobStore::open(&cli.data_dir)?;
    let mut board = BoardService::open(
        Arc::new(store),
        Arc::new(TracingNotifier::new()),
        Arc::new(DefaultClock),
        config,
    );

    let mut stdout = io::stdout().lock();
    execute(&mut board, cli.command, &mut stdout)
}

fn execute<B, N, C>(
    board: &mut BoardService<B, N, C>,
    command: Command,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    B: BlobStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    match command {
        Command::List => list(board, out),
        Command::Add { title, description } => {
            let id = board.add_task(&title, &description)?;
            writeln!(out, "added {id}")?;
            Ok(())
        }
        Command::Edit {
            id,
            title,
            description,
        } => edit(board, id, title, description, out),
        Command::Delete { id, yes } => delete(board, id, yes, out),
        Command::Move { id, column, index } => {
            if board.task(id).is_none() {
                return Err(CliError::UnknownTask(id));
            }
            board.move_task(id, column, index);
            let position = board.task(id).map_or(0, Task::order);
            writeln!(out, "moved {id} to {column} at {position}")?;
            Ok(())
        }
    }
}

fn list<B, N, C>(board: &BoardService<B, N, C>, out: &mut impl Write) -> Result<(), CliError>
where
    B: BlobStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    for (column, tasks) in board.columns() {
        writeln!(out, "{column} ({})", tasks.len())?;
        for task in tasks {
            let marker = if task.is_new() { "*" } else { " " };
            writeln!(
                out,
                "{marker} {}. {} [{}]",
                task.order(),
                task.title(),
                task.id()
            )?;
            if !task.description().is_empty() {
                writeln!(out, "     {}", task.description())?;
            }
        }
    }
    Ok(())
}

fn edit<B, N, C>(
    board: &mut BoardService<B, N, C>,
    id: TaskId,
    title: Option<String>,
    description: Option<String>,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    B: BlobStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    let current = board.task(id).ok_or(CliError::UnknownTask(id))?;
    let fields = EditedFields::new(
        title.unwrap_or_else(|| current.title().to_owned()),
        description.unwrap_or_else(|| current.description().to_owned()),
    );
    let request = board.request_edit(id).ok_or(CliError::UnknownTask(id))?;
    match board.resolve_dialog(request.token(), DialogResponse::Edit(Some(fields)))? {
        DialogOutcome::Edited(edited) => writeln!(out, "edited {edited}")?,
        DialogOutcome::Deleted(_) | DialogOutcome::Dismissed => {
            writeln!(out, "unchanged {id}: title must not be empty")?;
        }
    }
    Ok(())
}

fn delete<B, N, C>(
    board: &mut BoardService<B, N, C>,
    id: TaskId,
    confirmed: bool,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    B: BlobStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    let request = board.request_delete(id).ok_or(CliError::UnknownTask(id))?;
    match board.resolve_dialog(request.token(), DialogResponse::Confirm(confirmed))? {
        DialogOutcome::Deleted(deleted) => writeln!(out, "deleted {deleted}")?,
        DialogOutcome::Edited(_) | DialogOutcome::Dismissed => {
            writeln!(out, "kept {id}: pass --yes to delete")?;
        }
    }
    Ok(())
}
