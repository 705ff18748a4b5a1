use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td", about = concat!("[*] tudu v", env!("CARGO_PKG_VERSION"), " - a tiny to-do list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add(AddArgs),
    /// List tasks in order
    List,
    /// Toggle a task between open and done
    Toggle(PositionArgs),
    /// Delete a task
    Rm(PositionArgs),
    /// Replace a task's text
    Edit(EditArgs),
    /// Set a task's deadline
    Due(DueArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Deadline as dd-mm-yyyy (must be in the future)
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Args)]
pub struct PositionArgs {
    /// Task position as shown by `td list` (1-based)
    pub position: usize,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task position as shown by `td list` (1-based)
    pub position: usize,
    /// Replacement text
    pub text: String,
}

#[derive(Args)]
pub struct DueArgs {
    /// Task position as shown by `td list` (1-based)
    pub position: usize,
    /// Deadline as dd-mm-yyyy (must be in the future)
    pub date: String,
}
