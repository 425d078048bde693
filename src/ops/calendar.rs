use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::model::exam::{Exam, ExamId};

/// Weekday header for a Monday-first grid
pub const WEEKDAY_HEADER: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// An exam shown inside a day cell. Carries enough to open the detail
/// view without another repository lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamMarker {
    pub id: ExamId,
    pub code: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// Day of month, 1-based
    pub day: u32,
    /// Canonical `YYYY-MM-DD` key for this cell
    pub date: String,
    pub is_today: bool,
    pub markers: Vec<ExamMarker>,
}

/// Render model for the visible month. Pure data — the TUI grid and the
/// `calendar` CLI command both draw from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
    pub month_name: &'static str,
    /// Blank cells before day 1 in a Monday-first week
    /// (Monday = 0 … Sunday = 6)
    pub leading_blanks: usize,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Heading like `// MARCH_2026`
    pub fn heading(&self) -> String {
        format!("// {}_{}", self.month_name.to_uppercase(), self.year)
    }
}

/// Project the current month. Always today's month and year — there is
/// no month navigation.
pub fn project_month(today: NaiveDate, exams: &[Exam]) -> MonthGrid {
    let year = today.year();
    let month = today.month();

    // day 1 of a valid date's month always exists
    let first = today.with_day(1).unwrap();
    let leading_blanks = first.weekday().num_days_from_monday() as usize;

    let days = (1..=days_in_month(year, month))
        .map(|day| {
            let date = format!("{:04}-{:02}-{:02}", year, month, day);
            let markers = exams
                .iter()
                .filter(|e| e.date == date)
                .map(|e| ExamMarker {
                    id: e.id,
                    code: e.code.clone(),
                    time: e.time.clone(),
                })
                .collect();
            DayCell {
                day,
                date,
                is_today: day == today.day(),
                markers,
            }
        })
        .collect();

    MonthGrid {
        year,
        month,
        month_name: MONTH_NAMES[month as usize - 1],
        leading_blanks,
        days,
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // both arms construct day 1 of a real month
    next_first.unwrap().pred_opt().unwrap().day()
}
