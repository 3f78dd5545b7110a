//! List command handler.

use anyhow::Result;
use std::path::Path;

use super::notes::parse_tags;
use super::{open_store, truncate_str};
use crate::cli::ListArgs;
use crate::cli::output::{ListOutput, NoteListing, Output, OutputFormat};
use crate::query::Query;

/// Builds the query described by `ls` arguments.
pub(crate) fn list_query(args: &ListArgs) -> Result<Query> {
    Ok(Query::new()
        .category(args.category)
        .tags(parse_tags(&args.tags)?)
        .search(args.search.clone().unwrap_or_default()))
}

pub fn handle_list(args: &ListArgs, data_dir: &Path) -> Result<()> {
    let query = list_query(args)?;
    let store = open_store(data_dir)?;
    let notes = query.apply(store.notes());

    match args.format {
        OutputFormat::Human => {
            println!("{} ({})", query.title(), notes.len());
            if notes.is_empty() {
                println!("No notes found.");
                return Ok(());
            }
            println!();
            println!(
                "{:<1}  {:<8}  {:<40}  {:<9}  {:>10}",
                "", "ID", "Title", "Category", "Modified"
            );
            println!(
                "{:<1}  {:<8}  {:<40}  {:<9}  {:>10}",
                "-",
                "--------",
                "----------------------------------------",
                "---------",
                "----------"
            );

            for note in &notes {
                let pin = if note.pinned() { "*" } else { " " };
                let title = if note.title().is_empty() {
                    truncate_str(note.content().lines().next().unwrap_or(""), 40)
                } else {
                    truncate_str(note.title(), 40)
                };
                let category = note
                    .category()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let modified = note.modified().format("%Y-%m-%d").to_string();
                println!(
                    "{:<1}  {:<8}  {:<40}  {:<9}  {:>10}",
                    pin,
                    note.id().prefix(),
                    title,
                    category,
                    modified
                );
            }
        }
        OutputFormat::Json => {
            let output = Output::new(ListOutput {
                title: query.title(),
                notes: notes.iter().map(NoteListing::from).collect(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Ids => {
            for note in &notes {
                println!("{}", note.id());
            }
        }
    }

    Ok(())
}
