use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rv", about = concat!("[~] revise v", env!("CARGO_PKG_VERSION"), " - exams and tasks in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all exams
    List(ListArgs),
    /// Add an exam
    Add(AddArgs),
    /// Edit an exam's fields
    Edit(EditArgs),
    /// Delete an exam
    Delete(DeleteArgs),
    /// Show the exams on one date
    Day(DayArgs),
    /// Print this month's calendar
    Calendar,
    /// List tasks
    Tasks,
    /// Add a task
    Task(TaskArgs),
    /// Cross off a task by its number
    Done(DoneArgs),
    /// Show or change the theme
    Theme(ThemeArgs),
    /// Write all data to a backup file
    Export(ExportArgs),
    /// Restore a backup file, overwriting all data
    Import(ImportArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Only exams on this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Module code like CS101
    pub code: String,
    /// Exam date (YYYY-MM-DD)
    pub date: String,
    /// Start time like 09:00
    #[arg(long, default_value = "")]
    pub time: String,
    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Exam id (see `rv list`)
    pub id: i64,
    /// Unset fields keep their current value
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Exam id
    pub id: i64,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct DayArgs {
    /// Date to show (YYYY-MM-DD)
    pub date: String,
}

#[derive(Args)]
pub struct TaskArgs {
    /// Task text
    pub text: String,
}

#[derive(Args)]
pub struct DoneArgs {
    /// Task number as shown by `rv tasks` (1-based)
    pub index: usize,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// Preset name (nord, peach, matrix), `custom`, or `reset`
    pub name: Option<String>,
    /// Background hex color, with `custom`
    #[arg(long)]
    pub background: Option<String>,
    /// Text hex color, with `custom`
    #[arg(long)]
    pub text: Option<String>,
    /// Skip the confirmation prompt, with `reset`
    #[arg(long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Destination file
    pub file: String,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Backup file to restore
    pub file: String,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}
