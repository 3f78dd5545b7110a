//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::{Category, CategoryFilter};
use output::OutputFormat;

/// jot - quick notes with categories, tags and pins
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// Data directory holding the note store (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    New(NewArgs),

    /// Change fields of an existing note
    Edit(EditArgs),

    /// Show a note's contents
    Show(ShowArgs),

    /// Pin or unpin a note
    Pin(PinArgs),

    /// Delete a note
    Rm(RmArgs),

    /// Delete every note
    Clear(ClearArgs),

    /// List notes, optionally filtered by category, tags and search text
    #[command(name = "ls")]
    List(ListArgs),

    /// Add a tag to a note
    Tag(TagArgs),

    /// Remove a tag from a note
    Untag(UntagArgs),

    /// List all tags in use
    Tags(TagsArgs),

    /// Show note counts per category
    Counts(CountsArgs),

    /// Show totals across all notes
    Stats(StatsArgs),

    /// Write all notes to a JSON file
    Export(ExportArgs),

    /// Merge notes from a JSON file
    Import(ImportArgs),

    /// Show or change the theme preference
    Theme(ThemeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Note body
    #[arg(short, long, default_value = "")]
    pub content: String,

    /// Category (personal, work, ideas, important)
    #[arg(short = 'C', long)]
    pub category: Option<Category>,

    /// Tag for the note (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Display color
    #[arg(long)]
    pub color: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID, ID prefix or title
    pub note: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New body
    #[arg(short, long)]
    pub content: Option<String>,

    /// New category
    #[arg(short = 'C', long)]
    pub category: Option<Category>,

    /// Replace all tags (comma-separated; empty string clears)
    #[arg(long)]
    pub tags: Option<String>,

    /// New display color
    #[arg(long)]
    pub color: Option<String>,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID, ID prefix or title
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `pin` command
#[derive(Parser, Debug)]
pub struct PinArgs {
    /// Note ID, ID prefix or title
    pub note: String,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Note ID, ID prefix or title
    pub note: String,
}

/// Arguments for the `clear` command
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Confirm deleting every note
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Category to show, or "all"
    #[arg(short = 'C', long, default_value_t = CategoryFilter::All)]
    pub category: CategoryFilter,

    /// Show notes with this tag (can be specified multiple times, OR logic)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Case-insensitive text to find in title or content
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tag` command (add tag to note)
#[derive(Parser, Debug)]
pub struct TagArgs {
    /// Note ID, ID prefix or title
    pub note: String,

    /// Tag to add
    pub tag: String,
}

/// Arguments for the `untag` command (remove tag from note)
#[derive(Parser, Debug)]
pub struct UntagArgs {
    /// Note ID, ID prefix or title
    pub note: String,

    /// Tag to remove
    pub tag: String,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `counts` command
#[derive(Parser, Debug)]
pub struct CountsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `stats` command
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output path (defaults to notes-YYYY-MM-DD.json in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Arguments for the `import` command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// JSON file previously written by `export`
    pub path: PathBuf,
}

/// Theme change requested by the `theme` command
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

/// Arguments for the `theme` command
#[derive(Parser, Debug)]
pub struct ThemeArgs {
    /// New theme; prints the current one if omitted
    #[arg(value_enum)]
    pub action: Option<ThemeAction>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
