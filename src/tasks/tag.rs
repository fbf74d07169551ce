//! Tags: named labels that refer to tasks without owning them.

use super::TaskId;

/// A named label. Identity is the exact, case-sensitive name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    tasks: Vec<TaskId>,
}

impl Tag {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Associate a task. Returns `false` if it was already tagged.
    pub fn tag_task(&mut self, id: TaskId) -> bool {
        if self.is_tagged(id) {
            return false;
        }
        self.tasks.push(id);
        true
    }

    /// Drop an association. Returns `false` if the task was not tagged.
    pub fn untag_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|tagged| *tagged != id);
        self.tasks.len() != before
    }

    #[must_use]
    pub fn is_tagged(&self, id: TaskId) -> bool {
        self.tasks.contains(&id)
    }

    /// Tagged task ids in tagging order.
    #[must_use]
    pub fn tasks(&self) -> &[TaskId] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// All tags, one per distinct name, in creation order.
///
/// Tags are never removed, even when they no longer label anything.
#[derive(Debug, Clone, Default)]
pub struct TagList {
    tags: Vec<Tag>,
}

impl TagList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Tag> {
        self.tags.iter_mut().find(|tag| tag.name == name)
    }

    /// The tag called `name`, created on first use.
    pub fn get_or_create(&mut self, name: &str) -> &mut Tag {
        let position = match self.tags.iter().position(|tag| tag.name == name) {
            Some(position) => position,
            None => {
                self.tags.push(Tag::new(name));
                self.tags.len() - 1
            },
        };
        &mut self.tags[position]
    }

    /// Remove a deleted task from every tag.
    pub fn forget(&mut self, id: TaskId) {
        for tag in &mut self.tags {
            tag.untag_task(id);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
