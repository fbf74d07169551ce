use crate::core::DateTimeParser;
use crate::error::{ChatterboxError, Result};
use crate::tasks::{TagList, TaskList};

/// Tag the task at `index`, creating the tag on first use.
///
/// # Errors
///
/// Returns `IndexOutOfRange` if `index` is not a task. No tag is created in
/// that case.
pub fn tag(
    parser: &DateTimeParser,
    tasks: &TaskList,
    tags: &mut TagList,
    index: usize,
    name: &str,
) -> Result<String> {
    let id = tasks.id_at(index)?;
    let task = tasks.get(index)?;
    tags.get_or_create(name).tag_task(id);
    Ok(format!(
        "Tagged task: {} with #{name}",
        task.status_line(parser)
    ))
}

/// Tasks carrying the tag called `name`.
#[must_use]
pub fn find_tag(parser: &DateTimeParser, tasks: &TaskList, tags: &TagList, name: &str) -> String {
    let Some(tag) = tags.get(name) else {
        return format!("No tag named {name} found");
    };

    let mut output = format!("Tasks tagged #{name}:");
    for id in tag.tasks() {
        if let (Some(index), Some(task)) = (tasks.position_of(*id), tasks.by_id(*id)) {
            output.push_str(&format!("\n{index}. {}", task.status_line(parser)));
        }
    }
    output
}

/// Every tag with the number of tasks it labels.
#[must_use]
pub fn all_tags(tags: &TagList) -> String {
    if tags.is_empty() {
        return "No tags yet".to_string();
    }

    let mut output = String::from("Tags:");
    for tag in tags.iter() {
        output.push_str(&format!("\n#{} ({} tasks)", tag.name(), tag.len()));
    }
    output
}

/// Remove the tag called `name` from the task at `index`. The tag itself
/// is kept.
///
/// # Errors
///
/// Returns `IndexOutOfRange` if `index` is not a task, or `NotFound` if the
/// tag does not exist or does not label that task.
pub fn remove_tag(
    parser: &DateTimeParser,
    tasks: &TaskList,
    tags: &mut TagList,
    index: usize,
    name: &str,
) -> Result<String> {
    let id = tasks.id_at(index)?;
    let tag = tags
        .get_mut(name)
        .ok_or_else(|| ChatterboxError::NotFound(format!("Tag '{name}'")))?;

    if !tag.untag_task(id) {
        return Err(ChatterboxError::NotFound(format!(
            "Task {index} is not tagged #{name}"
        )));
    }

    let task = tasks.get(index)?;
    Ok(format!("Removed #{name} from: {}", task.status_line(parser)))
}
