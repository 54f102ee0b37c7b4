//! Document model builder for SQL tips documents.
//!
//! This module parses a tips document (a markdown README of SQL tips with
//! example queries) into a structured [`Document`]: a title, an anchor table
//! of headings, table-of-contents entries, and tip [`Section`]s with their
//! embedded code [`Example`]s.
//!
//! # Document Conventions
//!
//! - ATX headings (`#` through `######` followed by a space) delimit
//!   structure. Level 1 is the document title, headings naming one of the
//!   five categories group the sections after them, every other heading
//!   opens a section.
//! - Fenced code blocks (``` or ~~~) are extracted verbatim as examples;
//!   whitespace inside the fence is preserved exactly, since formatting tips
//!   depend on it.
//! - A pipe table directly after a closing fence is attached to that example
//!   as its expected output.
//! - List items of the form `- [Label](#anchor)` are collected as
//!   table-of-contents entries.
//!
//! Parsing is a pure transformation: same text, same model. Section bodies
//! are kept byte-verbatim, so [`Document::to_markdown`] round-trips.
//!
//! # Example
//!
//! ```
//! use sql_doc_validator::document::parse_document;
//!
//! let text = "# SQL Tips\n\n## Use a leading comma\n\n```sql\nSELECT id\n     , name\nFROM users;\n```\n";
//!
//! let doc = parse_document(text).unwrap();
//! assert_eq!(doc.sections.len(), 1);
//! assert_eq!(doc.sections[0].slug.as_str(), "use-a-leading-comma");
//! assert_eq!(doc.sections[0].examples.len(), 1);
//! ```

mod types;

use std::sync::LazyLock;

use compact_str::CompactString;
use regex::Regex;
pub use types::{
    Category, Document, Example, ExampleVec, Heading, HeadingKind, OutputTable, Section, TocEntry
};

use crate::error::{AppResult, malformed_document_error, unterminated_code_block_error};

/// List items linking to an in-document anchor: `- [Label](#slug)`
pub(crate) static TOC_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-*+]\s*\[([^\]]+)\]\(#([^)\s]+)\)").expect("valid TOC link pattern")
});

/// Generate the anchor slug for a heading title.
///
/// Lowercases the title, joins whitespace-separated words with single
/// hyphens, and strips punctuation except hyphens. Deterministic: the same
/// title always yields the same slug.
pub fn slugify(title: &str) -> CompactString {
    let mut slug = String::with_capacity(title.len());
    for word in title.split_whitespace() {
        let cleaned: String = word
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '-')
            .flat_map(char::to_lowercase)
            .collect();
        if cleaned.is_empty() {
            continue;
        }
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(&cleaned);
    }
    slug.into()
}

struct RawBlock {
    title: String,
    level: u8,
    line:  usize,
    body:  String
}

/// Parse a tips document into its [`Document`] model.
///
/// # Errors
///
/// Returns `MalformedDocument` when a heading marker cannot be associated
/// with a heading level (more than six `#`, or an empty title) or when the
/// document contains no sections, and `UnterminatedCodeBlock` when a fence
/// is opened but never closed. Both carry the offending 1-based line.
pub fn parse_document(text: &str) -> AppResult<Document> {
    let mut doc = Document::default();
    let mut blocks: Vec<RawBlock> = Vec::new();
    let mut fence: Option<Fence> = None;

    for (idx, line) in text.lines().enumerate() {
        let lineno = idx + 1;
        if let Some(open) = &fence {
            if is_closing_fence(line, open) {
                fence = None;
            }
        } else if let Some(open) = opening_fence(line, lineno) {
            fence = Some(open);
        } else if let Some((level, title)) = parse_heading_line(line, lineno)? {
            blocks.push(RawBlock {
                title,
                level,
                line: lineno,
                body: String::new()
            });
            continue;
        } else if let Some(caps) = TOC_LINK.captures(line) {
            doc.toc.push(TocEntry {
                label:       caps[1].into(),
                target_slug: caps[2].into(),
                line:        lineno
            });
        }

        match blocks.last_mut() {
            Some(block) => {
                block.body.push_str(line);
                block.body.push('\n');
            }
            None => {
                doc.preamble.push_str(line);
                doc.preamble.push('\n');
            }
        }
    }

    if let Some(open) = fence {
        return Err(unterminated_code_block_error(open.line));
    }

    let mut category = Category::default();
    for block in blocks {
        let slug = slugify(&block.title);
        let kind = if block.level == 1 {
            if doc.title.is_none() {
                doc.title = Some(block.title.as_str().into());
            }
            HeadingKind::Title
        } else if let Some(cat) = Category::from_slug(&slug) {
            category = cat;
            HeadingKind::Category(cat)
        } else {
            HeadingKind::Section
        };

        let body = if kind == HeadingKind::Section {
            let examples = extract_examples(&block.body, block.line);
            doc.sections.push(Section {
                title: block.title.as_str().into(),
                slug: slug.clone(),
                level: block.level,
                category,
                body: block.body,
                examples,
                line: block.line
            });
            String::new()
        } else {
            block.body
        };

        doc.headings.push(Heading {
            title: block.title.into(),
            slug,
            level: block.level,
            line: block.line,
            kind,
            body
        });
    }

    if doc.sections.is_empty() {
        return Err(malformed_document_error(
            1,
            "document contains no sections"
        ));
    }

    Ok(doc)
}

impl Document {
    /// Reconstruct the document as markdown.
    ///
    /// Headings are re-emitted in canonical ATX form; bodies are emitted
    /// byte-verbatim, so parsing the output again yields identical section
    /// bodies.
    pub fn to_markdown(&self) -> String {
        let mut out = String::with_capacity(self.preamble.len() + 256);
        out.push_str(&self.preamble);
        let mut sections = self.sections.iter();
        for heading in &self.headings {
            for _ in 0..heading.level {
                out.push('#');
            }
            out.push(' ');
            out.push_str(&heading.title);
            out.push('\n');
            if heading.kind == HeadingKind::Section {
                if let Some(section) = sections.next() {
                    out.push_str(&section.body);
                }
            } else {
                out.push_str(&heading.body);
            }
        }
        out
    }
}

/// Parse an ATX heading line into (level, title)
fn parse_heading_line(line: &str, lineno: usize) -> AppResult<Option<(u8, String)>> {
    let trimmed = line.trim_start();
    let indent = line.len() - trimmed.len();
    if indent > 3 || !trimmed.starts_with('#') {
        return Ok(None);
    }
    let marker_len = trimmed.chars().take_while(|c| *c == '#').count();
    let rest = &trimmed[marker_len..];
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        // Not a heading, e.g. "#standardsql" inside body text
        return Ok(None);
    }
    if marker_len > 6 {
        return Err(malformed_document_error(
            lineno,
            format!("heading marker with {marker_len} '#' cannot be associated with a heading level")
        ));
    }
    let title = strip_closing_sequence(rest.trim());
    if title.is_empty() {
        return Err(malformed_document_error(lineno, "heading has no title"));
    }
    Ok(Some((marker_len as u8, title.to_string())))
}

/// Strip an ATX closing sequence ("## Title ##" -> "Title")
fn strip_closing_sequence(title: &str) -> &str {
    let stripped = title.trim_end_matches('#');
    if stripped.len() < title.len() && stripped.ends_with([' ', '\t']) {
        stripped.trim_end()
    } else {
        title
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Fence {
    pub(crate) marker: char,
    pub(crate) len:    usize,
    pub(crate) line:   usize,
    pub(crate) info:   CompactString
}

pub(crate) fn opening_fence(line: &str, lineno: usize) -> Option<Fence> {
    let trimmed = line.trim_start();
    let marker = match trimmed.chars().next() {
        Some(c @ ('`' | '~')) => c,
        _ => return None
    };
    let len = trimmed.chars().take_while(|c| *c == marker).count();
    if len < 3 {
        return None;
    }
    Some(Fence {
        marker,
        len,
        line: lineno,
        info: trimmed[len..].trim().into()
    })
}

pub(crate) fn is_closing_fence(line: &str, open: &Fence) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= open.len && trimmed.chars().all(|c| c == open.marker)
}

/// Extract fenced code blocks (and trailing expected-output tables) from a
/// section body. `base_line` is the 1-based line of the section heading.
fn extract_examples(body: &str, base_line: usize) -> ExampleVec {
    let lines: Vec<&str> = body.lines().collect();
    let mut examples = ExampleVec::new();
    let mut i = 0;
    while i < lines.len() {
        let Some(open) = opening_fence(lines[i], base_line + 1 + i) else {
            i += 1;
            continue;
        };
        let mut code = String::new();
        i += 1;
        while i < lines.len() && !is_closing_fence(lines[i], &open) {
            code.push_str(lines[i]);
            code.push('\n');
            i += 1;
        }
        i += 1; // past the closing fence

        let mut expected_output = None;
        let mut j = i;
        while j < lines.len() && lines[j].trim().is_empty() {
            j += 1;
        }
        if j < lines.len() && is_table_row(lines[j]) {
            let (table, consumed) = parse_table(&lines[j..]);
            expected_output = Some(table);
            i = j + consumed;
        }

        // Empty fenced blocks are left in the body but not modeled
        if !code.trim().is_empty() {
            examples.push(Example {
                language: open.info.clone(),
                code,
                expected_output,
                line: open.line
            });
        }
    }
    examples
}

pub(crate) fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() > 1 && trimmed.starts_with('|')
}

fn is_separator_row(cells: &[CompactString]) -> bool {
    !cells.is_empty()
        && cells
            .iter()
            .all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':'))
}

pub(crate) fn parse_table(lines: &[&str]) -> (OutputTable, usize) {
    let mut table = OutputTable::default();
    let mut consumed = 0;
    for line in lines {
        if !is_table_row(line) {
            break;
        }
        consumed += 1;
        let inner = line.trim().trim_start_matches('|').trim_end_matches('|');
        let cells: Vec<CompactString> = inner.split('|').map(|c| c.trim().into()).collect();
        if is_separator_row(&cells) {
            continue;
        }
        if table.header.is_empty() {
            table.header = cells;
        } else {
            table.rows.push(cells);
        }
    }
    (table, consumed)
}
