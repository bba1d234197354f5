use super::view_model::ListView;
use crate::libs::messages::Message;
use crate::{msg_info, msg_print};
use anyhow::Result;
use prettytable::{row, Table};

/// Number of id characters shown in the table; enough to be unambiguous
/// for hand-typed prefixes.
const SHORT_ID_LEN: usize = 8;

pub struct View {}

impl View {
    /// Renders the full list view: table of visible rows plus footer.
    pub fn tasks(view: &ListView) -> Result<()> {
        if view.footer.is_none() {
            msg_info!(Message::NoTasks);
            return Ok(());
        }

        let mut table = Table::new();
        table.add_row(row!["", "ID", "TASK"]);
        for task_row in &view.rows {
            let mark = if task_row.completed { "✓" } else { " " };
            table.add_row(row![mark, short_id(&task_row.id), task_row.text]);
        }
        table.printstd();

        if let Some(footer) = &view.footer {
            msg_print!(Message::CurrentFilter(view.filter));
            msg_print!(Message::ItemsLeft(footer.items_left.clone()));
            if footer.all_completed {
                msg_print!(Message::AllTasksCompleted);
            }
            if footer.clear_enabled {
                msg_print!(Message::ClearCompletedHint);
            }
        }

        Ok(())
    }
}

fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}
