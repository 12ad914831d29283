use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tenon::grid::{SortDirection, SortKey};
use tenon::model::{Complexity, ComponentStatus};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.4.2" for releases, "0.4.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "tenon", version = get_version())]
#[command(about = "Review workbench for joinery estimation data", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Restrict the operation to one joinery unit
    #[arg(short, long, global = true)]
    pub unit: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List components as an indented grid
    #[command(alias = "ls")]
    List {
        /// Filter by review status
        #[arg(short, long)]
        status: Option<ComponentStatus>,

        /// Filter by complexity
        #[arg(short, long)]
        complexity: Option<Complexity>,

        /// Filter by material (substring match)
        #[arg(short, long)]
        material: Option<String>,

        /// Free-text search against name and type
        #[arg(long)]
        search: Option<String>,

        /// Sort key (name, type, complexity, time)
        #[arg(long)]
        sort: Option<SortKey>,

        /// Sort direction (asc, desc)
        #[arg(long)]
        direction: Option<SortDirection>,

        /// Show every subtree regardless of saved view state
        #[arg(long)]
        expand_all: bool,
    },

    /// Expand components in the grid view
    #[command(alias = "x")]
    Expand {
        /// Component ids or name terms
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Collapse components in the grid view
    Collapse {
        /// Component ids or name terms
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Show full component details
    #[command(alias = "v")]
    Show {
        /// Component ids or name terms
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Per-status component totals
    Status,

    /// List joinery units
    Units,

    /// Approve components
    #[command(alias = "a")]
    Approve {
        /// Component ids or name terms
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Review note to attach
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Discard components
    #[command(alias = "d")]
    Discard {
        /// Component ids or name terms
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Review note to attach
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Flag components as needing clarification
    Unclear {
        /// Component ids or name terms
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Review note to attach
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Send components back to review
    Reopen {
        /// Component ids or name terms
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Edit component fields (marks the component modified)
    #[command(alias = "e")]
    Update {
        /// Component id or name term (must match exactly one)
        selector: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New material type
        #[arg(short, long)]
        material: Option<String>,

        /// New complexity
        #[arg(short, long)]
        complexity: Option<Complexity>,

        /// New estimated time in minutes
        #[arg(short, long)]
        time: Option<u32>,

        /// New quantity
        #[arg(short, long)]
        quantity: Option<u32>,

        /// Replace the notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Manually add a component missed by detection (requires --unit)
    Add {
        /// Component name
        name: String,

        /// Component type (door, drawer, shelf, ...)
        kind: String,

        /// Material type
        #[arg(short, long)]
        material: Option<String>,

        /// Complexity
        #[arg(short, long)]
        complexity: Option<Complexity>,

        /// Estimated time in minutes
        #[arg(short, long)]
        time: Option<u32>,

        /// Quantity
        #[arg(short, long)]
        quantity: Option<u32>,

        /// Parent component to nest under
        #[arg(short, long)]
        parent: Option<String>,
    },

    /// Import units and components from JSON files
    Import {
        /// Files to import
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// Export a snapshot archive of the store
    Export,

    /// Permanently remove discarded components
    Purge {
        /// Component ids or name terms (default: all discarded)
        selectors: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Verify and repair tree links
    Doctor,

    /// Get or set configuration
    Config {
        /// Configuration key (sort-by, sort-direction, indent)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store
    Init,
}
