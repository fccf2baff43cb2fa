//! The per-document command registry.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::parser::{detect_command_start, extract_parameters, resolve_span};
use crate::scanner::strip_comment;

use super::span::{CommandKey, CommandSpan};
use super::zones::ZoneIndex;

/// Command registry for a single open document.
///
/// Holds every detected [`CommandSpan`] plus the [`ZoneIndex`] for point
/// lookup. Rebuilds construct the new state aside and swap it in, so a reader
/// between edits always sees either the old or the new structure, never a mix.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: IndexMap<CommandKey, CommandSpan>,
    zones: ZoneIndex,
    document_len: usize,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full (re)build from the current document text.
    ///
    /// Detects every command start, resolves spans, computes zone ends,
    /// extracts parameters, and rebuilds the zone index. Total over arbitrary
    /// input: empty documents, comment-only documents, garbage.
    pub fn initialize(&mut self, lines: &[&str]) {
        let mut spans = detect_all_commands(lines);

        for span in &mut spans {
            span.parameters = extract_parameters(lines, span.start_line, span.zone_end_line);
        }

        let mut commands = IndexMap::with_capacity(spans.len());
        for span in spans {
            commands.insert(span.key(), span);
        }
        let zones = ZoneIndex::build(commands.values(), lines.len());

        debug!(
            commands = commands.len(),
            zones = zones.len(),
            lines = lines.len(),
            "registry rebuilt"
        );

        self.commands = commands;
        self.zones = zones;
        self.document_len = lines.len();
    }

    /// Re-extract parameters for the command owning `line`, leaving span
    /// boundaries untouched.
    ///
    /// This is the local-edit path: completeness and boundaries are *not*
    /// recomputed, so a single-line edit that closes an incomplete command is
    /// only recognized at the next full rebuild. A line in a filler zone is a
    /// no-op.
    pub fn apply_local_edit(&mut self, lines: &[&str], line: usize) {
        let Some(key) = self.zones.key_at_line(line).cloned() else {
            trace!(line, "local edit outside any command");
            return;
        };
        if let Some(span) = self.commands.get_mut(&key) {
            span.parameters = extract_parameters(lines, span.start_line, span.zone_end_line);
            trace!(command = %key, params = span.parameters.len(), "parameters reparsed");
        }
    }

    /// The command owning `line`, if any.
    pub fn command_at_line(&self, line: usize) -> Option<&CommandSpan> {
        let key = self.zones.key_at_line(line)?;
        self.commands.get(key)
    }

    /// All commands as `key -> "start-end"` (complete) or `"start"`
    /// (incomplete), in source order.
    pub fn all_commands(&self) -> IndexMap<CommandKey, String> {
        self.commands
            .iter()
            .map(|(key, span)| (key.clone(), span.range_display()))
            .collect()
    }

    /// Spans in source order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandSpan> {
        self.commands.values()
    }

    /// Look up a span by key.
    pub fn get(&self, key: &CommandKey) -> Option<&CommandSpan> {
        self.commands.get(key)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The zone index over the current document.
    pub fn zones(&self) -> &ZoneIndex {
        &self.zones
    }

    /// Number of lines the registry was last built against.
    pub fn document_len(&self) -> usize {
        self.document_len
    }
}

/// Detect every command in the document and resolve its span and zone end.
fn detect_all_commands(lines: &[&str]) -> Vec<CommandSpan> {
    let mut spans: Vec<CommandSpan> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if is_blank_or_comment(lines[i]) {
            i += 1;
            continue;
        }

        let Some(start) = detect_command_start(lines[i]) else {
            i += 1;
            continue;
        };

        let resolved = resolve_span(lines, i, &start);
        let start_line = i + 1;

        // Resume after a complete span's end line; an incomplete span may
        // contain the next command start, so advance one line only.
        i = match resolved.end_line {
            Some(end_line) if resolved.complete => end_line,
            _ => i + 1,
        };

        spans.push(CommandSpan {
            name: start.name,
            bound_name: start.bound_name,
            start_line,
            end_line: resolved.end_line,
            end_column: resolved.end_column,
            // Placeholder; fixed up below once the next start is known.
            zone_end_line: resolved.end_line.unwrap_or(start_line),
            complete: resolved.complete,
            parameters: IndexMap::new(),
        });
    }

    // Incomplete spans own every line up to the next command or document end.
    for idx in 0..spans.len() {
        if spans[idx].complete {
            continue;
        }
        spans[idx].zone_end_line = match spans.get(idx + 1) {
            Some(next) => next.start_line - 1,
            None => lines.len(),
        };
    }

    spans
}

fn is_blank_or_comment(line: &str) -> bool {
    strip_comment(line).trim().is_empty()
}
