pub mod add;
pub mod clear;
pub mod edit;
pub mod filter;
pub mod list;
pub mod rm;
pub mod toggle;

use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::store::{IdMatch, TaskStore};
use crate::libs::view::View;
use crate::libs::view_model::ListView;
use crate::{msg_error, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List tasks using the active filter")]
    List(list::ListArgs),
    #[command(about = "Toggle task completion")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Edit a task's text in place")]
    Edit(edit::EditArgs),
    #[command(about = "Remove a task")]
    Rm(rm::RmArgs),
    #[command(about = "Remove all completed tasks")]
    Clear,
    #[command(about = "Show or set the active filter")]
    Filter(filter::FilterArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Toggle(args) => toggle::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Rm(args) => rm::cmd(args),
            Commands::Clear => clear::cmd(),
            Commands::Filter(args) => filter::cmd(args),
        }
    }
}

/// Persists the store and rebuilds the visible list with the active filter.
///
/// Every mutating command ends here, mirroring the mutation → write →
/// re-render control flow of the list.
pub(crate) fn persist_and_render(storage: &Storage, store: &TaskStore) -> Result<()> {
    storage.save(store.tasks())?;
    let filter = storage.load_filter();
    View::tasks(&ListView::build(store, filter))
}

/// Resolves a user-supplied id or prefix, reporting misses without failing;
/// an unknown target is a no-op, never an error exit.
pub(crate) fn resolve_task_id(store: &TaskStore, given: &str) -> Option<String> {
    match store.resolve_id(given) {
        IdMatch::Unique(id) => Some(id),
        IdMatch::Ambiguous => {
            msg_warning!(Message::TaskIdAmbiguous(given.to_string()));
            None
        }
        IdMatch::NotFound => {
            msg_error!(Message::TaskNotFound(given.to_string()));
            None
        }
    }
}
