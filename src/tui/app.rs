use std::io;
use std::time::{Duration, Instant};

use chrono::{Datelike, Local, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::session;
use crate::io::store::{self, JsonStore, Slot, resolve_data_dir};
use crate::model::exam::{Exam, ExamId};
use crate::model::theme::ThemePreference;
use crate::ops::calendar::{self, MonthGrid};
use crate::ops::panel::Panel;
use crate::repo::{ExamRepo, TaskRepo};

use super::input;
use super::render;
use super::theme::{self, Theme};

/// How long the detail panel's ghost lingers after closing
pub const DETAIL_FADE: Duration = Duration::from_millis(400);
/// How long a status message stays on the status row
pub const STATUS_TTL: Duration = Duration::from_secs(4);

/// Which section is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Calendar,
    Settings,
}

impl View {
    pub const ALL: [View; 3] = [View::Dashboard, View::Calendar, View::Settings];

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "DASHBOARD",
            View::Calendar => "CALENDAR",
            View::Settings => "SETTINGS",
        }
    }

    pub fn section_id(self) -> &'static str {
        match self {
            View::Dashboard => session::SECTION_DASHBOARD,
            View::Calendar => session::SECTION_CALENDAR,
            View::Settings => session::SECTION_SETTINGS,
        }
    }

    pub fn from_section_id(id: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.section_id() == id)
    }

    pub fn next(self) -> View {
        match self {
            View::Dashboard => View::Calendar,
            View::Calendar => View::Settings,
            View::Settings => View::Dashboard,
        }
    }

    pub fn prev(self) -> View {
        self.next().next()
    }
}

/// Current interaction mode, drives input dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Exam form popup open
    Form,
    /// Typing a new task on the dashboard
    TaskInput,
    /// Editing the custom theme color pair
    ColorInput,
    /// Waiting on a y/n answer
    Confirm,
}

/// Destructive actions pending confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteExam { exam_id: ExamId, code: String },
    ResetTheme,
}

impl ConfirmAction {
    pub fn prompt(&self) -> String {
        match self {
            ConfirmAction::DeleteExam { code, .. } => format!("Delete exam {}?", code),
            ConfirmAction::ResetTheme => "Reset to default theme?".to_string(),
        }
    }
}

/// Deferred single-shot state changes. Scheduled, never cancelled; two
/// overlapping timers both fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    ClearDetailGhost,
    ClearStatus,
}

#[derive(Debug)]
pub struct Deferred {
    pub at: Instant,
    pub action: DeferredAction,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Two-field editor for the custom theme colors
#[derive(Debug, Clone, Default)]
pub struct ColorForm {
    pub background: String,
    pub text: String,
    /// false = background field focused, true = text field
    pub editing_text: bool,
}

/// Main application state. Owns the repositories, the selection panel
/// and every piece of transient UI state — there are no globals.
pub struct App {
    pub store: JsonStore,
    pub exams: ExamRepo<JsonStore>,
    pub tasks: TaskRepo<JsonStore>,
    pub view: View,
    pub mode: Mode,
    pub panel: Panel,
    pub theme: Theme,
    pub theme_pref: ThemePreference,
    pub should_quit: bool,

    /// Today as of the last tick; the calendar re-projects when it rolls
    pub today: NaiveDate,
    /// Current month render model
    pub grid: MonthGrid,
    /// Selected day of month on the calendar (1-based)
    pub day_cursor: u32,
    /// Which of the selected day's markers Enter opened last
    pub marker_cycle: usize,

    pub task_cursor: usize,
    pub task_input: String,

    /// Cursor over the settings rows (presets then `custom`)
    pub settings_cursor: usize,
    pub color_form: ColorForm,

    pub confirm: Option<ConfirmAction>,
    pub status: Option<StatusMessage>,
    pub deferred: Vec<Deferred>,
    /// Snapshot of a just-closed detail panel, rendered dimmed until its
    /// timer fires
    pub detail_ghost: Option<Exam>,
}

impl App {
    pub fn new(store: JsonStore) -> Self {
        let exams = ExamRepo::open(store.clone());
        let tasks = TaskRepo::open(store.clone());
        let theme_pref = theme::load_preference(&store);
        let theme = Theme::resolve(&theme_pref);
        let today = Local::now().date_naive();
        let grid = calendar::project_month(today, exams.all());

        // Restore the section a previous session was showing
        let view = session::read_last_section(&store)
            .and_then(|s| View::from_section_id(&s))
            .unwrap_or(View::Dashboard);

        App {
            store,
            exams,
            tasks,
            view,
            mode: Mode::Navigate,
            panel: Panel::default(),
            theme,
            theme_pref,
            should_quit: false,
            today,
            day_cursor: today.day(),
            marker_cycle: 0,
            grid,
            task_cursor: 0,
            task_input: String::new(),
            settings_cursor: 0,
            color_form: ColorForm::default(),
            confirm: None,
            status: None,
            deferred: Vec::new(),
            detail_ghost: None,
        }
    }

    /// Re-project the month after an exam mutation or a date roll.
    pub fn refresh_calendar(&mut self) {
        self.grid = calendar::project_month(self.today, self.exams.all());
        let last = self.grid.days.len() as u32;
        if self.day_cursor > last {
            self.day_cursor = last;
        }
    }

    /// Switch sections and remember the choice for the next startup.
    pub fn switch_view(&mut self, view: View) {
        self.view = view;
        let _ = session::write_last_section(&self.store, view.section_id());
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
        self.schedule(STATUS_TTL, DeferredAction::ClearStatus);
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
        self.schedule(STATUS_TTL, DeferredAction::ClearStatus);
    }

    pub fn schedule(&mut self, delay: Duration, action: DeferredAction) {
        self.deferred.push(Deferred {
            at: Instant::now() + delay,
            action,
        });
    }

    /// Keep a dimmed snapshot of the detail panel while it fades out.
    pub fn start_detail_fade(&mut self, exam: Exam) {
        self.detail_ghost = Some(exam);
        self.schedule(DETAIL_FADE, DeferredAction::ClearDetailGhost);
    }

    /// Fire due deferred actions and roll the calendar across midnight.
    pub fn tick(&mut self, now: Instant) {
        let mut due = Vec::new();
        self.deferred.retain(|d| {
            if d.at <= now {
                due.push(d.action);
                false
            } else {
                true
            }
        });
        for action in due {
            match action {
                DeferredAction::ClearDetailGhost => self.detail_ghost = None,
                DeferredAction::ClearStatus => self.status = None,
            }
        }

        let today = Local::now().date_naive();
        if today != self.today {
            self.today = today;
            self.day_cursor = today.day();
            self.refresh_calendar();
        }
    }

    /// Persist and apply a theme preference.
    pub fn apply_theme(&mut self, pref: ThemePreference) -> io::Result<()> {
        if let ThemePreference::Custom(colors) = &pref {
            store::save(&self.store, Slot::CustomColors, colors)?;
        }
        store::save(&self.store, Slot::Theme, &pref.slot_value())?;
        self.theme = Theme::resolve(&pref);
        self.theme_pref = pref;
        Ok(())
    }

    /// The selected day's cell in the month grid
    pub fn cursor_cell(&self) -> Option<&calendar::DayCell> {
        self.grid.days.get(self.day_cursor.saturating_sub(1) as usize)
    }
}

/// Launch the TUI against the resolved data directory.
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = resolve_data_dir(data_dir)?;
    let mut app = App::new(JsonStore::open(&dir));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // The section memory is session-scoped: gone after a clean exit
    let _ = session::clear_session(&app.store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
