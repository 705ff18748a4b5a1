use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output;
use crate::io::lock::FileLock;
use crate::io::store_io::{data_dir, load_tasks, save_tasks};
use crate::model::task::{NO_DEADLINE, TaskId, TaskList};
use crate::ops::deadline::{self, parse_deadline, validate_deadline};
use crate::ops::task_ops;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let dir = resolve_dir(cli.dir.as_deref());

    match cli.command {
        None => {
            // main.rs routes the no-subcommand case to the TUI
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::List => cmd_list(&dir, json),
            Commands::Add(args) => cmd_add(&dir, args, json),
            Commands::Toggle(args) => cmd_toggle(&dir, args, json),
            Commands::Rm(args) => cmd_rm(&dir, args, json),
            Commands::Edit(args) => cmd_edit(&dir, args, json),
            Commands::Due(args) => cmd_due(&dir, args, json),
        },
    }
}

pub fn resolve_dir(flag: Option<&str>) -> PathBuf {
    data_dir(flag.map(Path::new))
}

/// Resolve a 1-based `td list` position to a store id
fn resolve_position(list: &TaskList, position: usize) -> Result<TaskId, String> {
    position
        .checked_sub(1)
        .and_then(|idx| list.id_at(idx))
        .ok_or_else(|| format!("no task at position {}", position))
}

/// Locked load for the write commands. The directory is created up front
/// so the lock file has somewhere to live on first use.
fn open_for_write(dir: &Path) -> Result<(FileLock, TaskList), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;
    let lock = FileLock::acquire_default(dir)?;
    Ok((lock, load_tasks(dir)))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let list = load_tasks(dir);
    output::print_tasks(&list, json);
    Ok(())
}

fn cmd_add(dir: &Path, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let deadline_label = match args.due.as_deref() {
        Some(input) => {
            let date = parse_deadline(input)?;
            validate_deadline(date)?;
            deadline::format_deadline(date)
        }
        None => NO_DEADLINE.to_string(),
    };

    let (_lock, mut list) = open_for_write(dir)?;
    task_ops::add_task(&mut list, &args.text, deadline_label)?;
    save_tasks(dir, &list)?;

    if json {
        output::print_tasks(&list, true);
    } else {
        println!("added ({} total)", list.len());
    }
    Ok(())
}

fn cmd_toggle(dir: &Path, args: PositionArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_lock, mut list) = open_for_write(dir)?;
    let id = resolve_position(&list, args.position)?;
    task_ops::toggle_task(&mut list, id)?;
    save_tasks(dir, &list)?;

    if json {
        output::print_tasks(&list, true);
    } else if let Some(task) = list.get(id) {
        let state = if task.completed { "done" } else { "open" };
        println!("{} {}", state, task.text);
    }
    Ok(())
}

fn cmd_rm(dir: &Path, args: PositionArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_lock, mut list) = open_for_write(dir)?;
    let id = resolve_position(&list, args.position)?;
    let removed = task_ops::delete_task(&mut list, id);
    save_tasks(dir, &list)?;

    if json {
        output::print_tasks(&list, true);
    } else if let Some(task) = removed {
        println!("deleted {}", task.text);
    }
    Ok(())
}

fn cmd_edit(dir: &Path, args: EditArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_lock, mut list) = open_for_write(dir)?;
    let id = resolve_position(&list, args.position)?;
    task_ops::commit_edit(&mut list, id, &args.text)?;
    save_tasks(dir, &list)?;

    if json {
        output::print_tasks(&list, true);
    } else if let Some(task) = list.get(id) {
        println!("edited {}", task.text);
    }
    Ok(())
}

fn cmd_due(dir: &Path, args: DueArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_lock, mut list) = open_for_write(dir)?;
    let id = resolve_position(&list, args.position)?;
    let date = parse_deadline(&args.date)?;
    deadline::set_deadline(&mut list, id, date)?;
    save_tasks(dir, &list)?;

    if json {
        output::print_tasks(&list, true);
    } else if let Some(task) = list.get(id) {
        println!("due {} {}", task.deadline, task.text);
    }
    Ok(())
}
