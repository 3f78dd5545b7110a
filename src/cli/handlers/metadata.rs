//! Metadata command handlers (tag, untag, tags, counts, stats).

use anyhow::{Context, Result};
use std::path::Path;

use super::open_store;
use super::resolve::require_note;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::{CountsArgs, StatsArgs, TagArgs, TagsArgs, UntagArgs};
use crate::domain::{Category, CategoryFilter, Tag};
use crate::query::{all_tags, category_counts, stats};

pub fn handle_tag(args: &TagArgs, data_dir: &Path) -> Result<()> {
    // Validate tag first (before any I/O)
    let tag = Tag::new(&args.tag).with_context(|| format!("invalid tag '{}'", args.tag))?;

    let mut store = open_store(data_dir)?;
    let id = require_note(store.notes(), &args.note)?;

    if store.add_tag(&id, tag.clone())? {
        println!("Tagged {} with '{}'", id, tag);
    } else {
        println!("Note {} already has tag '{}'", id, tag);
    }
    Ok(())
}

pub fn handle_untag(args: &UntagArgs, data_dir: &Path) -> Result<()> {
    let tag = Tag::new(&args.tag).with_context(|| format!("invalid tag '{}'", args.tag))?;

    let mut store = open_store(data_dir)?;
    let id = require_note(store.notes(), &args.note)?;

    if store.remove_tag(&id, &tag)? {
        println!("Removed tag '{}' from {}", tag, id);
    } else {
        println!("Note {} does not have tag '{}'", id, tag);
    }
    Ok(())
}

pub fn handle_tags(args: &TagsArgs, data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir)?;
    let tags = all_tags(store.notes());

    match args.format {
        OutputFormat::Human | OutputFormat::Ids => {
            if tags.is_empty() && matches!(args.format, OutputFormat::Human) {
                println!("No tags found.");
            }
            for tag in &tags {
                println!("{}", tag);
            }
        }
        OutputFormat::Json => {
            let names: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(names))?);
        }
    }
    Ok(())
}

pub fn handle_counts(args: &CountsArgs, data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir)?;
    let counts = category_counts(store.notes());

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(counts))?);
        }
        OutputFormat::Human | OutputFormat::Ids => {
            println!("{:<10} {:>5}", "all", counts.all);
            for category in Category::ALL {
                println!(
                    "{:<10} {:>5}",
                    category.as_str(),
                    counts.get(CategoryFilter::Only(category))
                );
            }
        }
    }
    Ok(())
}

pub fn handle_stats(args: &StatsArgs, data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir)?;
    let totals = stats(store.notes());

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(totals))?);
        }
        OutputFormat::Human | OutputFormat::Ids => {
            println!("Notes:      {}", totals.notes);
            println!("Characters: {}", totals.characters);
        }
    }
    Ok(())
}
