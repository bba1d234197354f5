use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::store::TaskStore;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::libs::view_model::ListView;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// New active filter; shows the current one when omitted
    #[arg(value_enum)]
    filter: Option<TaskFilter>,
}

pub fn cmd(args: FilterArgs) -> Result<()> {
    let storage = Storage::new()?;

    let filter = match args.filter {
        Some(filter) => filter,
        None => {
            msg_info!(Message::CurrentFilter(storage.load_filter()));
            return Ok(());
        }
    };

    storage.save_filter(filter)?;
    msg_success!(Message::FilterSet(filter));

    // Selecting a filter re-renders the list under it right away.
    let store = TaskStore::new(storage.load());
    View::tasks(&ListView::build(&store, filter))
}
