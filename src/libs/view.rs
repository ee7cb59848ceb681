use super::task::{priority_marker, Task, DUE_DATE_FORMAT};
use chrono::{Local, NaiveDateTime};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders tasks as a table: status, id, priority, title, due date and categories.
    pub fn tasks(tasks: &[&Task]) {
        Self::tasks_table(tasks, Local::now().naive_local()).printstd();
    }

    pub fn tasks_table(tasks: &[&Task], now: NaiveDateTime) -> Table {
        let mut table = Table::new();

        table.add_row(row!["", "ID", "PRIORITY", "TITLE", "DESCRIPTION", "DUE", "CATEGORIES"]);
        for task in tasks {
            let status = if task.completed { "✓" } else { "✗" };
            let due = match task.due_date {
                Some(due) if task.is_overdue_at(now) => format!("{} (OVERDUE!)", due.format(DUE_DATE_FORMAT)),
                Some(due) => due.format(DUE_DATE_FORMAT).to_string(),
                None => String::new(),
            };
            let categories = task.categories().iter().map(|c| format!("#{}", c)).collect::<Vec<_>>().join(", ");
            table.add_row(row![
                status,
                task.id,
                format!("{} {}", priority_marker(task.priority), task.priority),
                task.title,
                task.description,
                due,
                categories
            ]);
        }

        table
    }

    /// Prints each category on its own line with a `#` prefix.
    pub fn categories(categories: &[String]) {
        for category in categories {
            println!("#{}", category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::parse_due_date;

    #[test]
    fn test_tasks_table_rows() {
        let mut late = Task::new("Late", "", 1, Some("2024-01-01"), &["work"]);
        late.id = "aaaa0001".to_string();
        let done = {
            let mut task = Task::new("Done", "", 4, None, &[] as &[&str]);
            task.mark_completed();
            task
        };

        let table = View::tasks_table(&[&late, &done], parse_due_date("2024-02-01").unwrap());
        assert_eq!(table.len(), 3);

        let rendered = table.to_string();
        assert!(rendered.contains("aaaa0001"));
        assert!(rendered.contains("2024-01-01 (OVERDUE!)"));
        assert!(rendered.contains("#work"));
        assert!(rendered.contains("🟢 4"));
    }
}
