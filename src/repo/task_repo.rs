use std::io;

use crate::io::store::{self, Slot, Store};

/// Owns the ordered list of freeform tasks. Tasks are plain strings
/// addressed by position; deleting shifts later indices down, which is
/// safe here because re-render is synchronous between user events.
pub struct TaskRepo<S: Store> {
    tasks: Vec<String>,
    store: S,
}

impl<S: Store> TaskRepo<S> {
    pub fn open(store: S) -> Self {
        let tasks = store::load_or(&store, Slot::Tasks, Vec::new);
        TaskRepo { tasks, store }
    }

    pub fn list(&self) -> &[String] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task. Blank-after-trim text is dropped silently — not
    /// an error.
    pub fn append(&mut self, text: &str) -> io::Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        self.tasks.push(text.to_string());
        self.persist()
    }

    /// Remove the task at `index`. Out-of-range is a no-op.
    pub fn delete_at(&mut self, index: usize) -> io::Result<()> {
        if index >= self.tasks.len() {
            return Ok(());
        }
        self.tasks.remove(index);
        self.persist()
    }

    fn persist(&self) -> io::Result<()> {
        store::save(&self.store, Slot::Tasks, &self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemStore;
    use pretty_assertions::assert_eq;

    fn persisted(repo: &TaskRepo<MemStore>) -> Vec<String> {
        store::load_or(&repo.store, Slot::Tasks, Vec::new)
    }

    #[test]
    fn append_adds_last_and_persists() {
        let mut repo = TaskRepo::open(MemStore::new());
        repo.append("Buy highlighters").unwrap();
        repo.append("Finish essay").unwrap();
        assert_eq!(repo.list(), ["Buy highlighters", "Finish essay"]);
        assert_eq!(persisted(&repo), repo.tasks);
    }

    #[test]
    fn append_trims_surrounding_whitespace() {
        let mut repo = TaskRepo::open(MemStore::new());
        repo.append("  Finish essay  ").unwrap();
        assert_eq!(repo.list(), ["Finish essay"]);
    }

    #[test]
    fn blank_append_leaves_repo_unchanged() {
        let mut repo = TaskRepo::open(MemStore::new());
        repo.append("").unwrap();
        repo.append("   \t ").unwrap();
        assert!(repo.is_empty());
        // Nothing was persisted either
        assert!(repo.store.read(Slot::Tasks).is_none());
    }

    #[test]
    fn delete_at_shifts_later_indices_down() {
        let mut repo = TaskRepo::open(MemStore::new());
        repo.append("a").unwrap();
        repo.append("b").unwrap();
        repo.append("c").unwrap();
        repo.delete_at(1).unwrap();
        assert_eq!(repo.list(), ["a", "c"]);
        assert_eq!(persisted(&repo), repo.tasks);
    }

    #[test]
    fn delete_out_of_range_is_a_no_op() {
        let mut repo = TaskRepo::open(MemStore::new());
        repo.append("only").unwrap();
        repo.delete_at(5).unwrap();
        assert_eq!(repo.list(), ["only"]);
    }

    #[test]
    fn open_restores_insertion_order_from_disk() {
        use crate::io::store::JsonStore;
        let dir = tempfile::TempDir::new().unwrap();
        {
            let mut repo = TaskRepo::open(JsonStore::open(dir.path()));
            repo.append("first").unwrap();
            repo.append("second").unwrap();
        }
        let reopened = TaskRepo::open(JsonStore::open(dir.path()));
        assert_eq!(reopened.list(), ["first", "second"]);
    }
}
