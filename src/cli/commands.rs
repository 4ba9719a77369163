use clap::{Args, Parser, Subcommand};

use crate::model::quest::Tab;

#[derive(Parser)]
#[command(name = "ql", about = concat!("[!] questlog v", env!("CARGO_PKG_VERSION"), " - quest progress at a glance"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different questlog directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter quests.json in the current directory
    Init(InitArgs),
    /// List quests with their progress
    List(ListArgs),
    /// Show one quest's steps
    Show(ShowArgs),
    /// Show aggregate progress statistics
    Stats(StatsArgs),
    /// Show the next incomplete DLC step
    Next,
    /// Mark a step complete
    Check(StepArgs),
    /// Mark a step incomplete
    Uncheck(StepArgs),
    /// Clear all saved progress
    Reset(ResetArgs),
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Tab to list: base or dlc (default: both)
    #[arg(long)]
    pub tab: Option<Tab>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Quest ID
    pub quest: String,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Tab to aggregate: base or dlc (default: whole catalog)
    #[arg(long)]
    pub tab: Option<Tab>,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct StepArgs {
    /// Step ID
    pub step: String,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing quests.json
    #[arg(long)]
    pub force: bool,
}
