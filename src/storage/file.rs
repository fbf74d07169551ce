//! Flat-file task storage.
//!
//! Tasks live in a text file, one line per task (see [`super::codec`]).
//! Tag associations live next to it in a YAML file that maps each tag name
//! to the 1-based positions of its tasks at save time.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::Paths;
use crate::core::DateTimeParser;
use crate::error::{ChatterboxError, Result};
use crate::tasks::{TagList, TaskId, TaskList};

use super::{codec, Snapshot, TaskStore};

/// One tag as written to the tag file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TagRecord {
    name: String,
    #[serde(default)]
    tasks: Vec<usize>,
}

/// Stores tasks and tags as files on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    task_file: PathBuf,
    tag_file: PathBuf,
}

impl FileStore {
    /// Store using the task and tag files from `paths`.
    #[must_use]
    pub fn new(paths: &Paths) -> Self {
        Self::with_files(paths.task_file.clone(), paths.tag_file.clone())
    }

    /// Store using explicit file paths (useful for testing).
    #[must_use]
    pub const fn with_files(task_file: PathBuf, tag_file: PathBuf) -> Self {
        Self {
            task_file,
            tag_file,
        }
    }

    #[must_use]
    pub fn task_file(&self) -> &Path {
        &self.task_file
    }

    /// Load tasks along with the id read from each line of the file.
    /// Unreadable lines keep their slot as `None`, so saved tag positions
    /// still line up.
    fn load_tasks(&self, parser: &DateTimeParser) -> Result<(TaskList, Vec<Option<TaskId>>)> {
        if !self.task_file.exists() {
            return Err(ChatterboxError::NotFound(format!(
                "Task file {}",
                self.task_file.display()
            )));
        }

        let contents = fs::read_to_string(&self.task_file)?;
        let mut tasks = TaskList::new();
        let mut slots = Vec::new();
        for (number, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                slots.push(None);
                continue;
            }
            match codec::decode(line, parser) {
                Ok(task) => slots.push(Some(tasks.push(task))),
                Err(e) => {
                    warn!(line = number + 1, error = %e, "Skipping unreadable task line");
                    slots.push(None);
                },
            }
        }
        Ok((tasks, slots))
    }

    fn load_tags(&self, slots: &[Option<TaskId>]) -> Result<TagList> {
        let mut tags = TagList::new();
        if !self.tag_file.exists() {
            debug!(path = %self.tag_file.display(), "No tag file");
            return Ok(tags);
        }

        let contents = fs::read_to_string(&self.tag_file)?;
        let records: Vec<TagRecord> = serde_yaml::from_str(&contents).map_err(|e| {
            ChatterboxError::Parse(format!(
                "Failed to parse tag file {}: {e}",
                self.tag_file.display()
            ))
        })?;

        for record in records {
            let tag = tags.get_or_create(&record.name);
            for index in record.tasks {
                let slot = index.checked_sub(1).and_then(|line| slots.get(line)).copied();
                match slot.flatten() {
                    Some(id) => {
                        tag.tag_task(id);
                    },
                    None => warn!(tag = %record.name, index, "Tag refers to a missing task"),
                }
            }
        }
        Ok(tags)
    }
}

impl TaskStore for FileStore {
    fn load(&self, parser: &DateTimeParser) -> Result<Snapshot> {
        let (tasks, slots) = self.load_tasks(parser)?;
        let tags = self.load_tags(&slots)?;
        info!(
            tasks = tasks.len(),
            tags = tags.len(),
            path = %self.task_file.display(),
            "Loaded task list"
        );
        Ok(Snapshot { tasks, tags })
    }

    fn save(&self, parser: &DateTimeParser, tasks: &TaskList, tags: &TagList) -> Result<()> {
        let mut contents = String::new();
        for task in tasks.iter() {
            contents.push_str(&codec::encode(task, parser));
            contents.push('\n');
        }
        atomic_write(&self.task_file, contents)?;

        let records: Vec<TagRecord> = tags
            .iter()
            .map(|tag| TagRecord {
                name: tag.name().to_string(),
                tasks: tag
                    .tasks()
                    .iter()
                    .filter_map(|id| tasks.position_of(*id))
                    .collect(),
            })
            .collect();
        let yaml = serde_yaml::to_string(&records)
            .map_err(|e| ChatterboxError::Parse(format!("Failed to serialize tags: {e}")))?;
        atomic_write(&self.tag_file, yaml)?;

        debug!(tasks = tasks.len(), tags = tags.len(), "Saved task list");
        Ok(())
    }
}

/// Write to a sibling `.tmp` file, then rename over the target.
fn atomic_write(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::tasks::{DateValue, Task};

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::with_files(dir.path().join("tasks.txt"), dir.path().join("tags.yaml"))
    }

    fn sample() -> (TaskList, TagList) {
        let parser = DateTimeParser::default();
        let mut tasks = TaskList::new();
        let a = tasks.push(Task::todo("read book").unwrap());
        let b = tasks.push(
            Task::deadline("return book", DateValue::resolve(&parser, "2-12-2019 1800")).unwrap(),
        );
        tasks.push(
            Task::event(
                "meeting",
                DateValue::resolve(&parser, "2/2/2024 1400"),
                DateValue::Raw("late".to_string()),
            )
            .unwrap(),
        );
        tasks.set_done(2, true).unwrap();

        let mut tags = TagList::new();
        tags.get_or_create("books").tag_task(a);
        tags.get_or_create("books").tag_task(b);
        tags.get_or_create("empty");
        (tasks, tags)
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = store_in(&dir).load(&DateTimeParser::default()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_save_writes_line_format() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let (tasks, tags) = sample();

        store.save(&DateTimeParser::default(), &tasks, &tags).unwrap();

        let contents = fs::read_to_string(store.task_file()).unwrap();
        assert_eq!(
            contents,
            "T |   | read book\n\
             D | X | return book ( by Dec 02 2019, 18:00 )\n\
             E |   | meeting ( from Feb 02 2024, 14:00 to late )\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let parser = DateTimeParser::default();
        let (tasks, tags) = sample();

        store.save(&parser, &tasks, &tags).unwrap();
        let loaded = store.load(&parser).unwrap();

        assert_eq!(loaded.tasks.len(), tasks.len());
        for (original, reloaded) in tasks.iter().zip(loaded.tasks.iter()) {
            assert_eq!(original.description(), reloaded.description());
            assert_eq!(original.is_done(), reloaded.is_done());
            assert_eq!(original.kind(), reloaded.kind());
        }

        let books = loaded.tags.get("books").unwrap();
        let positions: Vec<usize> = books
            .tasks()
            .iter()
            .filter_map(|id| loaded.tasks.position_of(*id))
            .collect();
        assert_eq!(positions, vec![1, 2]);
        assert!(loaded.tags.get("empty").unwrap().is_empty());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let parser = DateTimeParser::default();
        let (tasks, tags) = sample();
        store.save(&parser, &tasks, &tags).unwrap();

        let mut fewer = TaskList::new();
        fewer.push(Task::todo("only one").unwrap());
        store.save(&parser, &fewer, &TagList::new()).unwrap();

        let loaded = store.load(&parser).unwrap();
        assert_eq!(loaded.tasks.len(), 1);
        assert!(loaded.tags.is_empty());
    }

    #[test]
    fn test_load_skips_bad_lines() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.task_file(),
            "T |   | good\ngarbage\n\nD |   | missing annotation\nT | X | also good\n",
        )
        .unwrap();

        let loaded = store.load(&DateTimeParser::default()).unwrap();
        let names: Vec<&str> = loaded.tasks.iter().map(Task::description).collect();
        assert_eq!(names, vec!["good", "also good"]);
    }

    #[test]
    fn test_load_ignores_dangling_tag_positions() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.task_file(), "T |   | only\n").unwrap();
        fs::write(dir.path().join("tags.yaml"), "- name: work\n  tasks: [1, 5]\n").unwrap();

        let loaded = store.load(&DateTimeParser::default()).unwrap();
        assert_eq!(loaded.tags.get("work").unwrap().len(), 1);
    }

    #[test]
    fn test_tags_follow_their_line_past_skipped_lines() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.task_file(), "garbage\nT |   | a\nT |   | b\n").unwrap();
        fs::write(
            dir.path().join("tags.yaml"),
            "- name: work\n  tasks: [3]\n- name: home\n  tasks: [2]\n",
        )
        .unwrap();

        let loaded = store.load(&DateTimeParser::default()).unwrap();
        let tagged = |name: &str| -> Vec<String> {
            loaded
                .tags
                .get(name)
                .unwrap()
                .tasks()
                .iter()
                .filter_map(|id| loaded.tasks.by_id(*id))
                .map(|task| task.description().to_string())
                .collect()
        };
        assert_eq!(tagged("work"), vec!["b"]);
        assert_eq!(tagged("home"), vec!["a"]);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data");
        let store = FileStore::with_files(nested.join("tasks.txt"), nested.join("tags.yaml"));

        store
            .save(&DateTimeParser::default(), &TaskList::new(), &TagList::new())
            .unwrap();

        assert!(nested.join("tasks.txt").exists());
    }
}
