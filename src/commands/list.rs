use crate::libs::storage::Storage;
use crate::libs::store::TaskStore;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::libs::view_model::ListView;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Override the persisted filter for this listing only
    #[arg(short, long, value_enum)]
    filter: Option<TaskFilter>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let storage = Storage::new()?;
    let store = TaskStore::new(storage.load());
    let filter = args.filter.unwrap_or_else(|| storage.load_filter());

    View::tasks(&ListView::build(&store, filter))
}
