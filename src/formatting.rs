//! Formatting helper functions for console output
//!
//! This module contains formatting logic for displaying task listings.

use crate::task::{Task, timestamp};
use chrono::NaiveDate;

/// Format the full task listing
///
/// # Arguments
/// * `tasks` - Tasks to display, in storage order
///
/// # Returns
/// Formatted string representation of the tasks
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n", tasks.len());
    for task in tasks {
        let marker = if task.completed { "x" } else { " " };
        let due = task
            .due_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());

        result.push_str(&format!("\n[{}] #{} {}\n", marker, task.id, task.description));
        result.push_str(&format!(
            "    Due: {} | Created: {}\n",
            due,
            task.created_at.format(timestamp::FORMAT)
        ));
    }

    result
}

/// Format a date-filtered listing of active tasks
///
/// # Arguments
/// * `date` - The due date the tasks were filtered by
/// * `tasks` - Active tasks due on that date
pub fn format_due_list(date: NaiveDate, tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return format!("No active tasks due {}", date);
    }

    let mut result = format!("Tasks due {} ({} active):\n", date, tasks.len());
    for task in tasks {
        result.push_str(&format!("- #{} {}\n", task.id, task.description));
    }

    result
}
