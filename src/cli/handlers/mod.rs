use std::fs;
use std::io::{self, Write};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::backup::{self, Backup};
use crate::io::store::{self, JsonStore, Slot, Store};
use crate::model::theme::{self, CUSTOM, CustomColors, DEFAULT_PRESET, PRESET_NAMES};
use crate::ops::calendar::{self, MonthGrid, WEEKDAY_HEADER};
use crate::ops::panel::ExamForm;
use crate::repo::{ExamRepo, TaskRepo};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let store = open_store(cli.data_dir.as_deref())?;

    match cli.command {
        None => {
            // Reached only when the TUI is bypassed; main.rs owns that path
            eprintln!("no command given (try `rv --help`)");
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::List(args) => cmd_list(&store, args, json),
            Commands::Add(args) => cmd_add(&store, args, json),
            Commands::Edit(args) => cmd_edit(&store, args, json),
            Commands::Delete(args) => cmd_delete(&store, args),
            Commands::Day(args) => cmd_day(&store, args, json),
            Commands::Calendar => cmd_calendar(&store, json),
            Commands::Tasks => cmd_tasks(&store, json),
            Commands::Task(args) => cmd_task(&store, args),
            Commands::Done(args) => cmd_done(&store, args),
            Commands::Theme(args) => cmd_theme(&store, args, json),
            Commands::Export(args) => cmd_export(&store, args),
            Commands::Import(args) => cmd_import(&store, args),
        },
    }
}

/// Open the store for the resolved data directory (`-C` flag, then
/// `$REVISE_DIR`, then `~/.revise`).
pub fn open_store(override_dir: Option<&str>) -> Result<JsonStore, Box<dyn std::error::Error>> {
    let dir = store::resolve_data_dir(override_dir)?;
    Ok(JsonStore::open(&dir))
}

/// Ask before a destructive action. Anything but `y` declines.
fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y"))
}

// ---------------------------------------------------------------------------
// Exam commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &JsonStore, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let repo = ExamRepo::open(store.clone());
    let exams: Vec<&crate::model::Exam> = match &args.date {
        Some(date) => repo.filter_by_date(date),
        None => repo.all().iter().collect(),
    };

    if json {
        let out = ExamListJson {
            exams: exams.iter().map(|e| ExamJson::from(*e)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if exams.is_empty() {
        println!("no exams");
    } else {
        for exam in exams {
            println!("{}", exam_row(exam));
        }
    }
    Ok(())
}

fn cmd_add(store: &JsonStore, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Same presence checks the TUI form runs, before the repository
    let form = ExamForm {
        code: args.code,
        date: args.date,
        time: args.time,
        notes: args.notes,
        ..ExamForm::default()
    };
    form.validate()?;

    let mut repo = ExamRepo::open(store.clone());
    let exam = repo.create(form.code, form.date, form.time, form.notes)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&ExamJson::from(exam))?);
    } else {
        println!("[+] added {} on {} (id {})", exam.code, exam.date, exam.id);
    }
    Ok(())
}

fn cmd_edit(store: &JsonStore, args: EditArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut repo = ExamRepo::open(store.clone());
    let current = repo
        .find_by_id(args.id)
        .ok_or_else(|| format!("exam not found: {}", args.id))?
        .clone();

    // Unset flags keep current values — the CLI analogue of a pre-filled
    // form
    let form = ExamForm {
        code: args.code.unwrap_or(current.code),
        date: args.date.unwrap_or(current.date),
        time: args.time.unwrap_or(current.time),
        notes: args.notes.unwrap_or(current.notes),
        ..ExamForm::default()
    };
    form.validate()?;

    repo.update(args.id, form.code, form.date, form.time, form.notes)?;
    if json {
        let exam = repo.find_by_id(args.id).unwrap();
        println!("{}", serde_json::to_string_pretty(&ExamJson::from(exam))?);
    } else {
        println!("[~] updated {}", args.id);
    }
    Ok(())
}

fn cmd_delete(store: &JsonStore, args: DeleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut repo = ExamRepo::open(store.clone());
    let Some(exam) = repo.find_by_id(args.id) else {
        // Absent id is a no-op, matching repository policy
        return Ok(());
    };
    let code = exam.code.clone();

    if !args.yes && !confirm(&format!("Delete exam {}?", code))? {
        return Ok(());
    }
    repo.delete(args.id)?;
    println!("[-] deleted {}", code);
    Ok(())
}

fn cmd_day(store: &JsonStore, args: DayArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    cmd_list(
        store,
        ListArgs {
            date: Some(args.date),
        },
        json,
    )
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

fn cmd_calendar(store: &JsonStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let repo = ExamRepo::open(store.clone());
    let today = chrono::Local::now().date_naive();
    let grid = calendar::project_month(today, repo.all());

    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
    } else {
        print!("{}", calendar_text(&grid));
    }
    Ok(())
}

/// Plain-text month grid: `<` marks today, `*` marks a day with exams,
/// followed by one legend row per marker.
fn calendar_text(grid: &MonthGrid) -> String {
    let mut out = format!("{}\n{}\n", grid.heading(), WEEKDAY_HEADER.join(" "));

    let mut cells: Vec<String> = vec!["   ".to_string(); grid.leading_blanks];
    for cell in &grid.days {
        let flag = match (cell.is_today, cell.markers.is_empty()) {
            (true, _) => '<',
            (false, false) => '*',
            _ => ' ',
        };
        cells.push(format!("{:>2}{}", cell.day, flag));
        if cells.len() == 7 {
            out.push_str(cells.concat().trim_end());
            out.push('\n');
            cells.clear();
        }
    }
    if !cells.is_empty() {
        out.push_str(cells.concat().trim_end());
        out.push('\n');
    }

    for cell in grid.days.iter().filter(|c| !c.markers.is_empty()) {
        for marker in &cell.markers {
            let row = format!("{:>2}  {} {}", cell.day, marker.code, marker.time);
            out.push_str(row.trim_end());
            out.push('\n');
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Task commands
// ---------------------------------------------------------------------------

fn cmd_tasks(store: &JsonStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let repo = TaskRepo::open(store.clone());
    if json {
        let out = TaskListJson {
            tasks: repo.list().to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if repo.is_empty() {
        println!("no tasks");
    } else {
        for (i, task) in repo.list().iter().enumerate() {
            println!("{}. {}", i + 1, task);
        }
    }
    Ok(())
}

fn cmd_task(store: &JsonStore, args: TaskArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut repo = TaskRepo::open(store.clone());
    let before = repo.len();
    repo.append(&args.text)?;
    // Blank text is dropped silently, so only report a real append
    if repo.len() > before {
        println!("[+] task {} added", repo.len());
    }
    Ok(())
}

fn cmd_done(store: &JsonStore, args: DoneArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut repo = TaskRepo::open(store.clone());
    if args.index == 0 || args.index > repo.len() {
        // Out-of-range is a no-op, matching repository policy
        return Ok(());
    }
    let text = repo.list()[args.index - 1].clone();
    repo.delete_at(args.index - 1)?;
    println!("[x] {}", text);
    Ok(())
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

fn cmd_theme(store: &JsonStore, args: ThemeArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match args.name.as_deref() {
        None => {
            let name: String = store::load_or(store, Slot::Theme, || DEFAULT_PRESET.to_string());
            let colors: Option<CustomColors> = if name == CUSTOM {
                store::load_or(store, Slot::CustomColors, || None)
            } else {
                None
            };
            if json {
                let out = ThemeJson {
                    theme: name,
                    background: colors.as_ref().map(|c| c.background.clone()),
                    text: colors.as_ref().map(|c| c.text.clone()),
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                match colors {
                    Some(c) => println!("{} (bg {}, text {})", name, c.background, c.text),
                    None => println!("{}", name),
                }
            }
        }
        Some("reset") => {
            if args.yes || confirm("Reset to default theme?")? {
                store.remove(Slot::CustomColors)?;
                store::save(store, Slot::Theme, &DEFAULT_PRESET)?;
                println!("[~] theme reset to {}", DEFAULT_PRESET);
            }
        }
        Some(CUSTOM) => {
            let (Some(background), Some(text)) = (args.background, args.text) else {
                return Err("custom theme needs --background and --text".into());
            };
            if !theme::valid_hex(&background) || !theme::valid_hex(&text) {
                return Err("colors must be hex like #2E3440".into());
            }
            let colors = CustomColors { background, text };
            store::save(store, Slot::CustomColors, &colors)?;
            store::save(store, Slot::Theme, &CUSTOM)?;
            println!("[~] theme set to custom");
        }
        Some(name) if PRESET_NAMES.contains(&name) => {
            store::save(store, Slot::Theme, &name)?;
            println!("[~] theme set to {}", name);
        }
        Some(other) => {
            return Err(format!(
                "unknown theme '{}' (presets: {}, or custom/reset)",
                other,
                PRESET_NAMES.join(", ")
            )
            .into());
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Backup
// ---------------------------------------------------------------------------

fn cmd_export(store: &JsonStore, args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let backup = backup::export(store);
    fs::write(&args.file, serde_json::to_string_pretty(&backup)?)?;
    println!(
        "[>] exported {} exams, {} tasks to {}",
        backup.exams.len(),
        backup.tasks.len(),
        args.file
    );
    Ok(())
}

fn cmd_import(store: &JsonStore, args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&args.file)?;
    let backup: Backup = serde_json::from_str(&text)
        .map_err(|e| format!("{} is not a revise backup: {}", args.file, e))?;

    if !args.yes && !confirm("Overwrite all data?")? {
        return Ok(());
    }
    backup::import(store, &backup)?;
    println!(
        "[<] imported {} exams, {} tasks (restart any running TUI)",
        backup.exams.len(),
        backup.tasks.len()
    );
    Ok(())
}
