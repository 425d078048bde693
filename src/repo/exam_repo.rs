use std::io;

use chrono::Utc;

use crate::io::store::{self, Slot, Store};
use crate::model::exam::{Exam, ExamId};

/// Error type for exam repository operations
#[derive(Debug, thiserror::Error)]
pub enum ExamError {
    #[error("exam not found: {0}")]
    NotFound(ExamId),
    #[error("could not persist exams: {0}")]
    Store(#[from] io::Error),
}

/// Owns the ordered exam collection and mirrors it to the store after
/// every mutation. Required-field checks (`code`, `date` non-blank) are
/// the caller's job; the repository trusts its input.
pub struct ExamRepo<S: Store> {
    exams: Vec<Exam>,
    store: S,
}

impl<S: Store> ExamRepo<S> {
    /// Load the exam collection from the store. A missing or corrupt
    /// slot starts the repository empty.
    pub fn open(store: S) -> Self {
        let exams = store::load_or(&store, Slot::Exams, Vec::new);
        ExamRepo { exams, store }
    }

    pub fn all(&self) -> &[Exam] {
        &self.exams
    }

    pub fn len(&self) -> usize {
        self.exams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exams.is_empty()
    }

    /// Append a new exam with a fresh id and persist.
    /// Returns the stored record.
    pub fn create(
        &mut self,
        code: String,
        date: String,
        time: String,
        notes: String,
    ) -> Result<&Exam, ExamError> {
        let id = self.fresh_id();
        self.exams.push(Exam::new(id, code, date, time, notes));
        self.persist()?;
        // just pushed, so the collection is non-empty
        Ok(self.exams.last().unwrap())
    }

    /// Replace every field but `id` on an existing record and persist.
    /// A stale id is a hard error: the UI only reaches update through a
    /// live selection, so an absent target means a logic bug upstream.
    pub fn update(
        &mut self,
        id: ExamId,
        code: String,
        date: String,
        time: String,
        notes: String,
    ) -> Result<(), ExamError> {
        let exam = self
            .exams
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ExamError::NotFound(id))?;
        exam.code = code;
        exam.date = date;
        exam.time = time;
        exam.notes = notes;
        self.persist()?;
        Ok(())
    }

    /// Remove the record with this id. Silent no-op when absent.
    pub fn delete(&mut self, id: ExamId) -> Result<(), ExamError> {
        let before = self.exams.len();
        self.exams.retain(|e| e.id != id);
        if self.exams.len() != before {
            self.persist()?;
        }
        Ok(())
    }

    pub fn find_by_id(&self, id: ExamId) -> Option<&Exam> {
        self.exams.iter().find(|e| e.id == id)
    }

    /// All records whose `date` field equals the query, in collection
    /// order. The calendar calls this once per day cell.
    pub fn filter_by_date(&self, date: &str) -> Vec<&Exam> {
        self.exams.iter().filter(|e| e.date == date).collect()
    }

    /// Creation-timestamp id, bumped past the current maximum so ids
    /// stay unique even when two creates land on the same millisecond.
    /// Not a distributed identifier — exactly one session mutates a
    /// store at a time.
    fn fresh_id(&self) -> ExamId {
        let now = Utc::now().timestamp_millis();
        match self.exams.iter().map(|e| e.id).max() {
            Some(max) if now <= max => max + 1,
            _ => now,
        }
    }

    fn persist(&self) -> io::Result<()> {
        store::save(&self.store, Slot::Exams, &self.exams)
    }
}
