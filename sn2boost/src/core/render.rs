// src/core/render.rs
use crate::models::DerivedFields;
use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use std::io::{self, Write as _};

/// Bounds the multi-line content block of a CSON record.
pub const CONTENT_DELIMITER: &[u8] = b"'''";
pub const ESCAPED_DELIMITER: &[u8] = b"\\'''";
pub const IMPORT_TAG: &str = "simplenote-import";

const CONTENT_INDENT: usize = 2;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Replaces every non-overlapping `from` in `haystack`, scanning left to right.
fn replace_bytes(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(from) {
            out.extend_from_slice(to);
            rest = tail;
        } else if let Some((first, tail)) = rest.split_first() {
            out.push(*first);
            rest = tail;
        }
    }
    out
}

/// Escapes every `'''` so note text cannot close the content block early.
///
/// Works on raw bytes; content in any encoding passes through unchanged.
#[inline]
#[must_use]
pub fn escape_content(content: &[u8]) -> Vec<u8> {
    replace_bytes(content, CONTENT_DELIMITER, ESCAPED_DELIMITER)
}

/// Prefixes every line with `width` spaces, including the empty line that
/// follows a trailing newline.
#[inline]
#[must_use]
pub fn indent(text: &[u8], width: usize) -> Vec<u8> {
    let pad = vec![b' '; width];
    let mut newline_pad = Vec::with_capacity(width.saturating_add(1));
    newline_pad.push(b'\n');
    newline_pad.extend_from_slice(&pad);

    let mut indented = pad;
    indented.extend(replace_bytes(text, b"\n", &newline_pad));
    indented
}

/// Formats a timestamp the way Boostnote stores it: UTC, millisecond precision.
#[inline]
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Escapes a title for a double-quoted CSON string.
fn quote_title(title: &str) -> String {
    title.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renders one Boostnote CSON record.
///
/// # Arguments
///
/// * `fields` - Derived fields with content already escaped by [`escape_content`]
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - The complete record, ending with a newline
///
/// # Errors
///
/// This function may return an error if writing into the output buffer fails.
#[inline]
pub fn render(fields: &DerivedFields) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_record(&mut out, fields).context("Failed to render note record")?;
    Ok(out)
}

fn write_record(out: &mut Vec<u8>, fields: &DerivedFields) -> io::Result<()> {
    writeln!(out, "createdAt: \"{}\"", format_timestamp(&fields.created))?;
    writeln!(out, "updatedAt: \"{}\"", format_timestamp(&fields.updated))?;
    writeln!(out, "type: \"{}\"", fields.note_type.as_str())?;
    writeln!(out, "folder: \"{}\"", fields.folder)?;
    writeln!(out, "title: \"{}\"", quote_title(&fields.title))?;
    out.write_all(b"content: ")?;
    out.write_all(CONTENT_DELIMITER)?;
    out.write_all(b"\n")?;
    out.write_all(&indent(&fields.content, CONTENT_INDENT))?;
    out.write_all(b"\n")?;
    out.write_all(CONTENT_DELIMITER)?;
    out.write_all(b"\n")?;
    writeln!(out, "tags: [")?;
    writeln!(out, "  \"{IMPORT_TAG}\"")?;
    writeln!(out, "]")?;
    writeln!(out, "isStarred: false")?;
    writeln!(out, "isTrashed: {}", fields.trashed)
}
