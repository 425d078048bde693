use serde::Serialize;

use crate::model::exam::{Exam, ExamId};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ExamJson {
    pub id: ExamId,
    pub code: String,
    pub date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl From<&Exam> for ExamJson {
    fn from(exam: &Exam) -> Self {
        ExamJson {
            id: exam.id,
            code: exam.code.clone(),
            date: exam.date.clone(),
            time: exam.time.clone(),
            notes: exam.notes.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct ExamListJson {
    pub exams: Vec<ExamJson>,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub tasks: Vec<String>,
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// ---------------------------------------------------------------------------
// Plain text helpers
// ---------------------------------------------------------------------------

/// One exam as a listing row: id, date, time, code, then notes if any
pub fn exam_row(exam: &Exam) -> String {
    let mut row = format!("{}  {} {:>5}  {}", exam.id, exam.date, exam.time, exam.code);
    if !exam.notes.is_empty() {
        row.push_str("  - ");
        row.push_str(&exam.notes);
    }
    row
}
