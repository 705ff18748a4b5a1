use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::lock::FileLock;
use crate::io::store_io::{self, load_tasks, save_tasks};
use crate::model::task::{NO_DEADLINE, TaskId, TaskList};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Cursor over the task list
    Navigate,
    /// Typing into the new-task input row
    Input,
    /// Typing into an existing task's text
    Edit,
    /// Date picker open
    Deadline,
}

/// Which slot the open date picker targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineTarget {
    /// The not-yet-created task on the input row
    NewTask,
    /// An existing task
    Task(TaskId),
}

/// Main application state: the task store plus all transient session
/// state (input buffers, edit target, open picker, pending label).
pub struct App {
    pub data_dir: PathBuf,
    pub tasks: TaskList,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub show_help: bool,

    /// Cursor index into the task list
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,

    /// New-task text buffer
    pub input: String,
    /// Byte offset of the cursor in `input`
    pub input_cursor: usize,

    /// Task currently being edited, if any (at most one)
    pub editing: Option<TaskId>,
    /// Text buffer for that edit
    pub edit_buffer: String,
    /// Byte offset of the cursor in `edit_buffer`
    pub edit_cursor: usize,

    /// Open date picker target, if any (at most one)
    pub picker: Option<DeadlineTarget>,
    /// Digit buffer for the picker (dd-mm-yyyy)
    pub picker_input: String,
    /// Deadline label for the not-yet-created task. Reset to the
    /// sentinel whenever a task is submitted.
    pub pending_deadline: String,

    /// One-line notice for the status row
    pub status_message: Option<String>,
}

impl App {
    pub fn new(data_dir: PathBuf, tasks: TaskList) -> Self {
        let config = read_config(&data_dir);
        let theme = Theme::from_config(&config.ui);

        App {
            data_dir,
            tasks,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            cursor: 0,
            scroll_offset: 0,
            input: String::new(),
            input_cursor: 0,
            editing: None,
            edit_buffer: String::new(),
            edit_cursor: 0,
            picker: None,
            picker_input: String::new(),
            pending_deadline: NO_DEADLINE.to_string(),
            status_message: None,
        }
    }

    /// Id of the task under the list cursor
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.tasks.id_at(self.cursor)
    }

    /// Keep the cursor inside the list after a deletion
    pub fn clamp_cursor(&mut self) {
        if self.tasks.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.tasks.len() {
            self.cursor = self.tasks.len() - 1;
        }
    }

    /// The line buffer keystrokes currently route to: the edit buffer
    /// while a task is being edited, the new-task buffer otherwise.
    pub fn active_buffer_mut(&mut self) -> (&mut String, &mut usize) {
        if self.editing.is_some() {
            (&mut self.edit_buffer, &mut self.edit_cursor)
        } else {
            (&mut self.input, &mut self.input_cursor)
        }
    }

    /// Write-through save. Takes the advisory lock so a concurrent CLI
    /// invocation never interleaves with us; failures surface on the
    /// status row instead of interrupting the session.
    pub fn save(&mut self) {
        let _lock = match FileLock::acquire_default(&self.data_dir) {
            Ok(lock) => lock,
            Err(e) => {
                self.status_message = Some(format!("save skipped: {}", e));
                return;
            }
        };
        if let Err(e) = save_tasks(&self.data_dir, &self.tasks) {
            self.status_message = Some(format!("save failed: {}", e));
        }
    }
}

/// Run the TUI application
pub fn run(dir_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = store_io::data_dir(dir_override);
    let tasks = load_tasks(&data_dir);
    let mut app = App::new(data_dir, tasks);

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

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Teardown save: covers any mutation whose write-through was skipped.
    // save() is idempotent, so doubling up with the last write is fine.
    app.save();

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
