//! Note lifecycle handlers (new, edit, show, pin, rm, clear).

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::open_store;
use super::resolve::{ResolveResult, print_ambiguous_notes, require_note, resolve_note};
use crate::cli::output::{Output, OutputFormat};
use crate::cli::{ClearArgs, EditArgs, NewArgs, PinArgs, RmArgs, ShowArgs};
use crate::domain::{Note, NotePatch, Tag};
use crate::store::NoteDraft;

/// Parses tag arguments, failing on the first blank one.
pub(crate) fn parse_tags<S: AsRef<str>>(tag_strs: &[S]) -> Result<Vec<Tag>> {
    tag_strs
        .iter()
        .map(|s| {
            let s = s.as_ref();
            Tag::new(s).with_context(|| format!("invalid tag '{}'", s))
        })
        .collect()
}

/// Parses a comma-separated tag list. An empty string means no tags.
pub(crate) fn parse_tag_list(list: &str) -> Result<Vec<Tag>> {
    let parts: Vec<&str> = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    parse_tags(&parts)
}

/// Builds the patch for `edit` from its arguments.
pub(crate) fn edit_patch(args: &EditArgs) -> Result<NotePatch> {
    let tags = args.tags.as_deref().map(parse_tag_list).transpose()?;
    Ok(NotePatch {
        title: args.title.clone(),
        content: args.content.clone(),
        category: args.category,
        tags,
        color: args.color.clone(),
    })
}

pub fn handle_new(args: &NewArgs, data_dir: &Path) -> Result<()> {
    let tags = parse_tags(&args.tags)?;

    let mut draft = NoteDraft::new(&args.title, &args.content).tags(tags);
    draft.category = args.category;
    draft.color = args.color.clone();

    let mut store = open_store(data_dir)?;
    let note = store.create(draft).with_context(|| "failed to create note")?;

    print_note_result("Created", &note, args.format)
}

pub fn handle_edit(args: &EditArgs, data_dir: &Path) -> Result<()> {
    let patch = edit_patch(args)?;
    if patch.is_empty() {
        bail!("nothing to change: pass --title, --content, --category, --tags or --color");
    }

    let mut store = open_store(data_dir)?;
    let id = require_note(store.notes(), &args.note)?;
    let note = store
        .update(&id, patch)
        .with_context(|| format!("failed to update note {}", id))?;

    println!("Updated: {}", note);
    Ok(())
}

pub fn handle_show(args: &ShowArgs, data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir)?;
    let id = require_note(store.notes(), &args.note)?;
    let Some(note) = store.get(&id) else {
        bail!("note not found: '{}'", args.note);
    };

    match args.format {
        OutputFormat::Human => {
            let marker = if note.pinned() { " (pinned)" } else { "" };
            println!("# {}{}", note.title(), marker);
            println!();
            println!(
                "ID: {}  Category: {}  Created: {}  Modified: {}",
                note.id(),
                category_label(note),
                note.created().format("%Y-%m-%d %H:%M"),
                note.modified().format("%Y-%m-%d %H:%M")
            );
            if !note.tags().is_empty() {
                let tags: Vec<_> = note.tags().iter().map(|t| t.as_str()).collect();
                println!("Tags: {}", tags.join(", "));
            }
            println!("Color: {}", note.color());
            println!();
            if !note.content().is_empty() {
                println!("{}", note.content());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(note))?);
        }
        OutputFormat::Ids => println!("{}", note.id()),
    }
    Ok(())
}

pub fn handle_pin(args: &PinArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;
    let id = match resolve_note(store.notes(), &args.note) {
        ResolveResult::Unique(note) => note.id().clone(),
        ResolveResult::Ambiguous(matches) => {
            print_ambiguous_notes(&args.note, &matches);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => {
            println!("No note matches '{}'.", args.note);
            return Ok(());
        }
    };

    match store.toggle_pin(&id)? {
        Some(true) => println!("Pinned: {}", id),
        Some(false) => println!("Unpinned: {}", id),
        None => println!("No note matches '{}'.", args.note),
    }
    Ok(())
}

pub fn handle_rm(args: &RmArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;
    let (id, title) = match resolve_note(store.notes(), &args.note) {
        ResolveResult::Unique(note) => (note.id().clone(), note.to_string()),
        ResolveResult::Ambiguous(matches) => {
            print_ambiguous_notes(&args.note, &matches);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => {
            println!("No note matches '{}'.", args.note);
            return Ok(());
        }
    };

    if store.delete(&id)? {
        println!("Deleted: {}", title);
    }
    Ok(())
}

pub fn handle_clear(args: &ClearArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;
    if store.is_empty() {
        println!("No notes to delete.");
        return Ok(());
    }
    if !args.yes {
        bail!(
            "refusing to delete {} notes without --yes (this cannot be undone)",
            store.len()
        );
    }

    let removed = store.clear_all()?;
    println!("Deleted {} notes", removed);
    Ok(())
}

/// Category text for display. Unrecognized stored values are shown as-is.
fn category_label(note: &Note) -> String {
    match (note.category(), note.unrecognized_category()) {
        (Some(category), _) => category.to_string(),
        (None, Some(raw)) => format!("{} (unrecognized)", raw),
        (None, None) => "-".to_string(),
    }
}

fn print_note_result(verb: &str, note: &Note, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{}: {}", verb, note),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(note))?);
        }
        OutputFormat::Ids => println!("{}", note.id()),
    }
    Ok(())
}
