//! Task model: tasks, the ordered task list and tags.

mod list;
mod tag;
mod task;

pub use list::{TaskId, TaskList};
pub use tag::{Tag, TagList};
pub use task::{DateValue, Task, TaskKind};
