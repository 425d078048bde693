use serde::{Deserialize, Serialize};

/// Exam identifier. Derived from the creation timestamp in milliseconds,
/// bumped past the current maximum if the clock hasn't advanced — unique
/// within one store, never reassigned.
pub type ExamId = i64;

/// A single exam entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: ExamId,
    /// Module code like `CS101`
    pub code: String,
    /// Exam date in `YYYY-MM-DD` form (calendar lookups compare this
    /// string exactly)
    pub date: String,
    /// Free-text start time like `09:00`
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub notes: String,
}

impl Exam {
    pub fn new(id: ExamId, code: String, date: String, time: String, notes: String) -> Self {
        Exam {
            id,
            code,
            date,
            time,
            notes,
        }
    }
}
