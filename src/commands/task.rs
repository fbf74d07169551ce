use crate::core::DateTimeParser;
use crate::error::Result;
use crate::tasks::{DateValue, TagList, Task, TaskList};

/// Numbered listing of every task.
#[must_use]
pub fn list(parser: &DateTimeParser, tasks: &TaskList) -> String {
    let mut output = String::from("Current Tasks in List:");
    for (offset, task) in tasks.iter().enumerate() {
        output.push_str(&format!("\n{}. {}", offset + 1, task.status_line(parser)));
    }
    output
}

/// Mark the task at `index` as done.
///
/// # Errors
///
/// Returns `IndexOutOfRange` if `index` is not a task.
pub fn mark(parser: &DateTimeParser, tasks: &mut TaskList, index: usize) -> Result<String> {
    let task = tasks.set_done(index, true)?;
    Ok(format!("Marked Task as done\n{}", task.display(parser)))
}

/// Mark the task at `index` as not done.
///
/// # Errors
///
/// Returns `IndexOutOfRange` if `index` is not a task.
pub fn unmark(parser: &DateTimeParser, tasks: &mut TaskList, index: usize) -> Result<String> {
    let task = tasks.set_done(index, false)?;
    Ok(format!("Marked Task as undone\n{}", task.display(parser)))
}

/// Append a todo.
///
/// # Errors
///
/// Returns `NoInput` if the description is empty.
pub fn add_todo(tasks: &mut TaskList, description: &str) -> Result<String> {
    tasks.push(Task::todo(description)?);
    Ok(added("Todo", tasks.len()))
}

/// Append a deadline, keeping `due` as raw text if it is not a known format.
///
/// # Errors
///
/// Returns `NoInput` if the description is empty.
pub fn add_deadline(
    parser: &DateTimeParser,
    tasks: &mut TaskList,
    description: &str,
    due: &str,
) -> Result<String> {
    let due = DateValue::resolve(parser, due);
    tasks.push(Task::deadline(description, due)?);
    Ok(added("Deadline", tasks.len()))
}

/// Append an event. Each boundary falls back to raw text on its own.
///
/// # Errors
///
/// Returns `NoInput` if the description is empty.
pub fn add_event(
    parser: &DateTimeParser,
    tasks: &mut TaskList,
    description: &str,
    start: &str,
    end: &str,
) -> Result<String> {
    let start = DateValue::resolve(parser, start);
    let end = DateValue::resolve(parser, end);
    tasks.push(Task::event(description, start, end)?);
    Ok(added("Event", tasks.len()))
}

/// Remove the task at `index` and drop it from every tag.
///
/// # Errors
///
/// Returns `IndexOutOfRange` if `index` is not a task.
pub fn delete(
    parser: &DateTimeParser,
    tasks: &mut TaskList,
    tags: &mut TagList,
    index: usize,
) -> Result<String> {
    let (id, removed) = tasks.remove(index)?;
    tags.forget(id);
    Ok(format!(
        "Removing Task:\n{}\nList has {} tasks",
        removed.status_line(parser),
        tasks.len()
    ))
}

/// Tasks whose description contains the keywords.
#[must_use]
pub fn find(parser: &DateTimeParser, tasks: &TaskList, keywords: &str) -> String {
    let matches = tasks.find(keywords.trim());
    if matches.is_empty() {
        return "No matching tasks found".to_string();
    }

    let mut output = String::from("Matching Tasks:");
    for (index, task) in matches {
        output.push_str(&format!("\n{index}. {}", task.status_line(parser)));
    }
    output
}

fn added(kind: &str, count: usize) -> String {
    format!("Added {kind} to Tasks\nCurrently {count} Tasks in List")
}
