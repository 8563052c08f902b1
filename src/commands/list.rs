use crate::{
    db::store::TaskStore,
    libs::{
        messages::Message,
        task::TaskFilter,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// Show only tasks that are not completed
    #[arg(short, long, conflicts_with = "completed")]
    pub pending: bool,
    /// Show only completed tasks
    #[arg(short, long)]
    pub completed: bool,
}

impl ListArgs {
    pub fn filter(&self) -> TaskFilter {
        match (self.pending, self.completed) {
            (true, _) => TaskFilter::Pending,
            (_, true) => TaskFilter::Completed,
            _ => TaskFilter::All,
        }
    }
}

pub fn cmd(args: ListArgs, store: &TaskStore) -> Result<()> {
    let filter = args.filter();
    let all = store.list()?;
    let tasks: Vec<_> = all.iter().filter(|task| filter.matches(task)).cloned().collect();

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let header = match filter {
        TaskFilter::All => Message::TasksHeader,
        TaskFilter::Pending => Message::TasksPendingHeader,
        TaskFilter::Completed => Message::TasksCompletedHeader,
    };
    msg_print!(header, true);
    View::tasks(&tasks);

    let completed = all.iter().filter(|task| task.completed).count();
    msg_print!(Message::TasksSummary { total: all.len(), completed });
    Ok(())
}
