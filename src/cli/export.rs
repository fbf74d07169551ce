//! Task list export in pretty or JSON form.

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::core::DateTimeParser;
use crate::error::{ChatterboxError, Result};
use crate::tasks::{Task, TaskList};

#[derive(Serialize)]
struct ExportedTask<'a> {
    index: usize,
    #[serde(flatten)]
    task: &'a Task,
}

#[derive(Serialize)]
struct ExportedList<'a> {
    count: usize,
    tasks: Vec<ExportedTask<'a>>,
}

/// Format the task list.
///
/// # Errors
///
/// Returns `ChatterboxError::Parse` if JSON serialization fails.
pub fn export(tasks: &TaskList, parser: &DateTimeParser, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(export_pretty(tasks, parser)),
        OutputFormat::Json => export_json(tasks),
    }
}

fn export_pretty(tasks: &TaskList, parser: &DateTimeParser) -> String {
    if tasks.is_empty() {
        return "Tasks (0 items)\n  No items".to_string();
    }

    let mut output = format!("Tasks ({} items)\n", tasks.len());
    output.push_str(&"─".repeat(60));

    for (offset, task) in tasks.iter().enumerate() {
        let status_icon = if task.is_done() {
            "[x]".green()
        } else {
            "[ ]".white()
        };
        output.push_str(&format!(
            "\n{:>3}. {} {} {}",
            offset + 1,
            task.symbol().to_string().dimmed(),
            status_icon,
            task.display(parser)
        ));
    }

    output
}

fn export_json(tasks: &TaskList) -> Result<String> {
    let list = ExportedList {
        count: tasks.len(),
        tasks: tasks
            .iter()
            .enumerate()
            .map(|(offset, task)| ExportedTask {
                index: offset + 1,
                task,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&list)
        .map_err(|e| ChatterboxError::Parse(format!("Failed to serialize tasks: {e}")))
}
