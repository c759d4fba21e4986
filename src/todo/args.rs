use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(version, about = "A simple command-line todo manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo
    #[command(alias = "a")]
    Add {
        /// What needs doing
        description: String,

        /// Priority: high/h, medium/m or low/l
        #[arg(short, long, default_value = "medium")]
        priority: String,

        /// Associate with a file path
        #[arg(short, long)]
        file: Option<String>,
    },

    /// List todos
    #[command(alias = "l")]
    List {
        /// Show only completed todos
        #[arg(long, conflicts_with = "pending")]
        completed: bool,

        /// Show only pending todos
        #[arg(long)]
        pending: bool,

        /// Keep only todos whose file contains this substring
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Mark todos as completed
    #[command(alias = "c")]
    Complete {
        /// Todo IDs (e.g. 1 3 5)
        #[arg(required_unless_present = "all", num_args = 0..)]
        ids: Vec<u8>,

        /// Complete every pending todo
        #[arg(long, conflicts_with = "ids")]
        all: bool,
    },

    /// Mark todos as pending again
    #[command(alias = "p")]
    Pending {
        /// Todo IDs (e.g. 1 3 5)
        #[arg(required_unless_present = "all", num_args = 0..)]
        ids: Vec<u8>,

        /// Reopen every completed todo
        #[arg(long, conflicts_with = "ids")]
        all: bool,
    },

    /// Change the priority of todos
    #[command(alias = "m")]
    Modify {
        /// Todo IDs (e.g. 1 3 5)
        #[arg(required_unless_present = "all", num_args = 0..)]
        ids: Vec<u8>,

        /// Modify every todo
        #[arg(long, conflicts_with = "ids")]
        all: bool,

        /// New priority: high/h, medium/m or low/l
        #[arg(short, long)]
        priority: String,
    },

    /// Erase todos
    #[command(alias = "e")]
    Erase {
        /// Todo IDs (e.g. 1 3 5)
        #[arg(num_args = 0..)]
        ids: Vec<u8>,

        /// Erase every todo
        #[arg(long, conflicts_with_all = ["ids", "completed", "pending"])]
        all: bool,

        /// Erase all completed todos
        #[arg(long, conflicts_with_all = ["ids", "pending"])]
        completed: bool,

        /// Erase all pending todos
        #[arg(long, conflicts_with = "ids")]
        pending: bool,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Show full details of one todo
    #[command(alias = "s")]
    Show {
        /// Todo ID
        id: u8,
    },
}
