use crate::io::store::Store;
use crate::model::exam::{Exam, ExamId};
use crate::repo::exam_repo::{ExamError, ExamRepo};

/// Required-field validation failures, shown inside the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("module code is required")]
    MissingCode,
    #[error("exam date is required")]
    MissingDate,
}

/// Which form field has input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Code,
    Date,
    Time,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Code,
        FormField::Date,
        FormField::Time,
        FormField::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Code => "Module code",
            FormField::Date => "Date (YYYY-MM-DD)",
            FormField::Time => "Time",
            FormField::Notes => "Notes",
        }
    }

    pub fn next(self) -> FormField {
        match self {
            FormField::Code => FormField::Date,
            FormField::Date => FormField::Time,
            FormField::Time => FormField::Notes,
            FormField::Notes => FormField::Code,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Code => FormField::Notes,
            FormField::Date => FormField::Code,
            FormField::Time => FormField::Date,
            FormField::Notes => FormField::Time,
        }
    }
}

/// In-progress field values for the exam form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExamForm {
    pub code: String,
    pub date: String,
    pub time: String,
    pub notes: String,
    pub field: FormField,
}

impl ExamForm {
    pub fn blank() -> Self {
        ExamForm::default()
    }

    pub fn prefilled(exam: &Exam) -> Self {
        ExamForm {
            code: exam.code.clone(),
            date: exam.date.clone(),
            time: exam.time.clone(),
            notes: exam.notes.clone(),
            field: FormField::Code,
        }
    }

    /// Presence checks on the two required fields. Values are stored as
    /// typed; only the check trims.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.code.trim().is_empty() {
            return Err(FormError::MissingCode);
        }
        if self.date.trim().is_empty() {
            return Err(FormError::MissingDate);
        }
        Ok(())
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Code => &self.code,
            FormField::Date => &self.date,
            FormField::Time => &self.time,
            FormField::Notes => &self.notes,
        }
    }

    pub fn active_value_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Code => &mut self.code,
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
            FormField::Notes => &mut self.notes,
        }
    }
}

/// Whether the form will create a new exam or overwrite an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Update(ExamId),
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    Saved,
    /// Validation failed; the panel stays in Editing with the error set
    Invalid,
}

/// Selection/editing state of the detail panel and exam form. One enum,
/// one transition impl — an Update edit without a target id cannot be
/// represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Idle,
    Viewing {
        exam_id: ExamId,
    },
    Editing {
        mode: EditMode,
        form: ExamForm,
        error: Option<FormError>,
    },
}

impl Panel {
    /// Exam currently selected for detail view
    pub fn selected(&self) -> Option<ExamId> {
        match self {
            Panel::Viewing { exam_id } => Some(*exam_id),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Panel::Editing { .. })
    }

    /// Validation error from the last submit attempt, if still showing
    pub fn form_error(&self) -> Option<FormError> {
        match self {
            Panel::Editing { error, .. } => *error,
            _ => None,
        }
    }

    /// A calendar marker was activated: open (or retarget) the detail
    /// view.
    pub fn open_details(&mut self, exam_id: ExamId) {
        *self = Panel::Viewing { exam_id };
    }

    /// Close the detail view. The selection clears with the transition;
    /// any fade-out is the renderer's business.
    pub fn close_details(&mut self) {
        if matches!(self, Panel::Viewing { .. }) {
            *self = Panel::Idle;
        }
    }

    /// Open the form in create mode with blank fields.
    pub fn open_create(&mut self) {
        *self = Panel::Editing {
            mode: EditMode::Create,
            form: ExamForm::blank(),
            error: None,
        };
    }

    /// Open the form in update mode, pre-filled from the viewed exam.
    /// No-op unless an exam is selected and still present.
    pub fn open_edit<S: Store>(&mut self, exams: &ExamRepo<S>) {
        let Panel::Viewing { exam_id } = *self else {
            return;
        };
        let Some(exam) = exams.find_by_id(exam_id) else {
            return;
        };
        *self = Panel::Editing {
            mode: EditMode::Update(exam_id),
            form: ExamForm::prefilled(exam),
            error: None,
        };
    }

    /// Submit the form. Invalid input keeps the panel in Editing with
    /// the error recorded; a successful write returns to Idle.
    pub fn submit<S: Store>(&mut self, exams: &mut ExamRepo<S>) -> Result<Submit, ExamError> {
        let Panel::Editing { mode, form, error } = self else {
            return Ok(Submit::Invalid);
        };
        if let Err(e) = form.validate() {
            *error = Some(e);
            return Ok(Submit::Invalid);
        }
        let (code, date, time, notes) = (
            form.code.clone(),
            form.date.clone(),
            form.time.clone(),
            form.notes.clone(),
        );
        match *mode {
            EditMode::Create => {
                exams.create(code, date, time, notes)?;
            }
            EditMode::Update(id) => {
                exams.update(id, code, date, time, notes)?;
            }
        }
        *self = Panel::Idle;
        Ok(Submit::Saved)
    }

    /// Abandon the form without writing.
    pub fn cancel_edit(&mut self) {
        if self.is_editing() {
            *self = Panel::Idle;
        }
    }

    /// Delete the viewed exam (caller has already confirmed). Clears the
    /// selection and dismisses the panel. Returns the deleted id, or
    /// None when nothing was selected.
    pub fn delete_selected<S: Store>(
        &mut self,
        exams: &mut ExamRepo<S>,
    ) -> Result<Option<ExamId>, ExamError> {
        let Panel::Viewing { exam_id } = *self else {
            return Ok(None);
        };
        exams.delete(exam_id)?;
        *self = Panel::Idle;
        Ok(Some(exam_id))
    }
}
