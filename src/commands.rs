//! CLI command handlers. Thin glue between parsed arguments and the task
//! service; all logic lives below the service boundary.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::error::TaskError;
use crate::models::{Priority, TaskFilter};
use crate::service::TaskService;

/// Parses a `YYYY-MM-DD` due date. A malformed date is treated as "no due
/// date" rather than an error.
pub fn parse_due_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
}

/// Adds a new task.
pub fn cmd_add(
    service: &TaskService,
    title: &str,
    priority: u8,
    due: Option<&str>,
) -> Result<(), TaskError> {
    let task = service.add_task(title, Priority::from(priority), parse_due_date(due))?;
    println!("Task added (id = {})", task.id);
    Ok(())
}

/// Lists tasks matching the given status and sort strings.
pub fn cmd_list(service: &TaskService, status: &str, sort: &str) -> Result<(), TaskError> {
    let tasks = service.tasks(&TaskFilter::new(status, sort))?;
    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Priority").add_attribute(Attribute::Bold),
            Cell::new("Due").add_attribute(Attribute::Bold),
            Cell::new("Created").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for t in tasks {
        let priority_color = match t.priority {
            Priority::High => Color::Red,
            Priority::Medium => Color::Yellow,
            Priority::Low => Color::Green,
        };
        let due = t
            .due_date
            .map(|d| d.with_timezone(&Local).format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let status = if t.done { "Done" } else { "Pending" };
        let status_color = if t.done { Color::Green } else { Color::Yellow };

        table.add_row(vec![
            Cell::new(&t.id),
            Cell::new(&t.title),
            Cell::new(t.priority).fg(priority_color),
            Cell::new(due),
            Cell::new(t.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")),
            Cell::new(status).fg(status_color),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Toggles the completion status of a task.
pub fn cmd_toggle(service: &TaskService, id: &str) -> Result<(), TaskError> {
    let task = service.toggle_task(id)?;
    if task.done {
        println!("Task {} marked as done.", task.id);
    } else {
        println!("Task {} reopened.", task.id);
    }
    Ok(())
}

/// Removes a task.
pub fn cmd_remove(service: &TaskService, id: &str) -> Result<(), TaskError> {
    service.delete_task(id)?;
    println!("Task removed.");
    Ok(())
}

/// Prints aggregate statistics.
pub fn cmd_stats(service: &TaskService) -> Result<(), TaskError> {
    let stats = service.stats()?;
    println!(
        "{} total, {} active, {} completed",
        stats.total, stats.active, stats.completed
    );
    Ok(())
}
