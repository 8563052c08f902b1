pub mod add;
pub mod clear;
pub mod delete;
pub mod done;
pub mod edit;
pub mod import;
pub mod init;
pub mod list;
pub mod path;

use crate::db::store::TaskStore;
use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(flatten)]
    Store(StoreCommands),
}

/// Commands that work on the tasks file.
#[derive(Debug, Subcommand)]
enum StoreCommands {
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Create task")]
    Add(add::AddArgs),
    #[command(about = "Mark a task as completed")]
    Done(done::CompletionArgs),
    #[command(about = "Mark a task as pending again")]
    Undone(done::CompletionArgs),
    #[command(about = "Change a task's description")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Delete all completed tasks")]
    Clear(clear::ClearArgs),
    #[command(about = "Replace the task list with tasks from a JSON file")]
    Import(import::ImportArgs),
    #[command(about = "Show the location of the tasks file")]
    Path,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Tasks file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Store(command) => run(command, cli.file.as_deref()),
        }
    }
}

fn run(command: StoreCommands, file: Option<&Path>) -> Result<()> {
    let mut store = open_store(file)?;

    match command {
        StoreCommands::List(args) => list::cmd(args, &store),
        StoreCommands::Add(args) => add::cmd(args, &mut store),
        StoreCommands::Done(args) => done::cmd(args, true, &store),
        StoreCommands::Undone(args) => done::cmd(args, false, &store),
        StoreCommands::Edit(args) => edit::cmd(args, &store),
        StoreCommands::Delete(args) => delete::cmd(args, &store),
        StoreCommands::Clear(args) => clear::cmd(args, &store),
        StoreCommands::Import(args) => import::cmd(args, &mut store),
        StoreCommands::Path => path::cmd(&store),
    }
}

/// Opens the task store at the resolved tasks file location.
///
/// An explicit `file` wins without reading `config.json`.
pub fn open_store(file: Option<&Path>) -> Result<TaskStore> {
    let path = match file {
        Some(file) => Config::default().tasks_file_path(Some(file))?,
        None => Config::read()?.tasks_file_path(None)?,
    };
    Ok(TaskStore::open(path)?)
}
