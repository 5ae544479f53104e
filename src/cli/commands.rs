use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tb", about = concat!("taskboard v", env!("CARGO_PKG_VERSION"), " - your tasks, one server, any terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Backend base URL (overrides TASKBOARD_URL and taskboard.toml)
    #[arg(long, global = true)]
    pub url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks, filtered client-side
    List(ListArgs),
    /// Show a single task
    Show(ShowArgs),
    /// Create a task
    Add(AddArgs),
    /// Update fields on a task
    Update(UpdateArgs),
    /// Mark a task completed
    Done(IdArg),
    /// Mark a task not completed
    Undone(IdArg),
    /// Delete a task
    Rm(IdArg),
}

#[derive(Args)]
pub struct ListArgs {
    /// Title substring to match (case-insensitive)
    #[arg(long)]
    pub title: Option<String>,
    /// Description substring to match (case-insensitive)
    #[arg(long)]
    pub description: Option<String>,
    /// Completion state to match (true or false; default: any)
    #[arg(long)]
    pub completed: Option<bool>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Task id
    pub id: u64,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Task description
    #[arg(long, default_value = "")]
    pub description: String,
    /// Create the task as already completed
    #[arg(long)]
    pub completed: bool,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Task id
    pub id: u64,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New description
    #[arg(long)]
    pub description: Option<String>,
    /// New completion state (true or false)
    #[arg(long)]
    pub completed: Option<bool>,
}

#[derive(Args)]
pub struct IdArg {
    /// Task id
    pub id: u64,
}
