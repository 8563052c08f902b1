use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        Self::tasks_table(tasks).printstd();
    }

    pub fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "DESCRIPTION", "DONE"]);
        for task in tasks {
            table.add_row(row![task.id, task.description, if task.completed { "x" } else { "" }]);
        }

        table
    }
}
