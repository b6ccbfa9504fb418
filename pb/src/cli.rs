//! CLI argument parsing for planboard

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::Group;

#[derive(Parser, Debug)]
#[command(name = "pb")]
#[command(author, version, about = "Sprint planning board", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the store directory
    #[arg(short, long)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Reorder direction for `bump`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BumpDirection {
    Up,
    Down,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the board (all groups, items, and point totals)
    Show,

    /// Add a new item to a group
    Add {
        /// Target group (staging, committed, milestones, risks,
        /// dependencies, willNotDo, uncommitted)
        group: Group,

        /// Item text
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Edit an item's fields
    Edit {
        group: Group,
        item_id: String,

        /// Replace the item text
        #[arg(long)]
        text: Option<String>,

        /// Set the epic reference
        #[arg(long, conflicts_with = "clear_epic")]
        epic: Option<String>,
        /// Clear the epic reference
        #[arg(long)]
        clear_epic: bool,

        /// Set the domain tag
        #[arg(long, conflicts_with = "clear_domain")]
        domain: Option<String>,
        /// Clear the domain tag
        #[arg(long)]
        clear_domain: bool,

        /// Set required story points
        #[arg(long, conflicts_with = "clear_required")]
        required: Option<i64>,
        /// Clear required story points
        #[arg(long)]
        clear_required: bool,

        /// Set optional story points
        #[arg(long, conflicts_with = "clear_optional")]
        optional: Option<i64>,
        /// Clear optional story points
        #[arg(long)]
        clear_optional: bool,
    },

    /// Delete an item
    Rm {
        group: Group,
        item_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Duplicate an item (fresh ids, " (copy)" suffix)
    Dup { group: Group, item_id: String },

    /// Move an item up or down within its group
    Bump {
        group: Group,
        item_id: String,
        direction: BumpDirection,
    },

    /// Move an item to the end of another group
    Move { item_id: String, to: Group },

    /// Manage an item's sub-items
    Sub {
        group: Group,
        item_id: String,

        #[command(subcommand)]
        action: SubAction,
    },

    /// Set the nominal velocity
    Velocity { value: i64 },

    /// Edit a sprint's multiplier or name
    Sprint {
        sprint_id: String,

        /// Velocity multiplier percentage
        #[arg(short, long)]
        multiplier: Option<i64>,

        /// Rename the sprint
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Show capacity statistics and the domain breakdown
    Stats,

    /// Print the document as pretty JSON (backup format)
    Export,

    /// Replace the document from a JSON file (or stdin)
    Import {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,

        /// Skip the destructive-overwrite confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Simulate a drag gesture: pick up an item and drop it on a target
    Drag {
        /// Item id to pick up
        from: String,

        /// Drop target: a group name or another item id; omitted = drop
        /// outside every zone (cancel)
        onto: Option<String>,
    },

    /// Show or toggle UI preference flags
    Flag {
        /// Flag name: velocity-collapsed, shortcuts-collapsed, dark-mode
        name: Option<String>,

        /// New value
        #[arg(long)]
        set: Option<bool>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SubAction {
    /// Append a sub-item
    Add { text: String },

    /// Replace a sub-item's text
    Edit { sub_id: String, text: String },

    /// Remove a sub-item
    Rm { sub_id: String },
}
