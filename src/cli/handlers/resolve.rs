//! Note resolution utilities.

use anyhow::{Result, bail};

use crate::domain::{Note, NoteId};

/// Result of resolving a note identifier.
#[derive(Debug)]
pub enum ResolveResult<'a> {
    /// Exactly one note matched.
    Unique(&'a Note),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<&'a Note>),
    /// No notes matched.
    NotFound,
}

/// Prints detailed information about ambiguous notes to help distinguish them.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[&Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!("  {} - {}", note.id(), note.title());
        if !note.tags().is_empty() {
            let tags: Vec<_> = note.tags().iter().map(|t| t.as_str()).collect();
            eprintln!("      tags: {}", tags.join(", "));
        }
    }
    eprintln!();
    eprintln!("Use a longer ID prefix to specify which note you mean.");
}

/// Resolves a note identifier to a unique note.
///
/// Resolution order:
/// 1. Exact ID match
/// 2. ID prefix match
/// 3. Exact title match (case-insensitive)
///
/// Returns `Unique` if exactly one note matches, `Ambiguous` if several
/// do, or `NotFound` if none do.
pub fn resolve_note<'a>(notes: &'a [Note], identifier: &str) -> ResolveResult<'a> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return ResolveResult::NotFound;
    }

    if let Some(exact) = notes.iter().find(|n| n.id().as_str() == identifier) {
        return ResolveResult::Unique(exact);
    }

    let id_matches: Vec<&Note> = notes
        .iter()
        .filter(|n| n.id().as_str().starts_with(identifier))
        .collect();
    if id_matches.len() == 1 {
        return ResolveResult::Unique(id_matches[0]);
    }

    let wanted = identifier.to_lowercase();
    let mut candidates = id_matches;
    for note in notes {
        let already = candidates.iter().any(|c| c.id() == note.id());
        if !already && note.title().to_lowercase() == wanted {
            candidates.push(note);
        }
    }

    match candidates.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(candidates[0]),
        _ => ResolveResult::Ambiguous(candidates),
    }
}

/// Resolves an identifier or fails with a user-facing error.
pub(crate) fn require_note(notes: &[Note], identifier: &str) -> Result<NoteId> {
    match resolve_note(notes, identifier) {
        ResolveResult::Unique(note) => Ok(note.id().clone()),
        ResolveResult::Ambiguous(matches) => {
            print_ambiguous_notes(identifier, &matches);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => bail!("note not found: '{}'", identifier),
    }
}
