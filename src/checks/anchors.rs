use compact_str::CompactString;
use indexmap::IndexMap;

use super::{Check, CheckCategory, CheckInfo, Finding, Severity};
use crate::document::Document;

/// Two headings producing the same anchor slug
pub struct DuplicateAnchor;

impl Check for DuplicateAnchor {
    fn info(&self) -> CheckInfo {
        CheckInfo {
            id:       "ANCHOR001",
            name:     "Duplicate anchor",
            severity: Severity::Error,
            category: CheckCategory::Anchors
        }
    }

    fn run(&self, doc: &Document) -> Vec<Finding> {
        let mut by_slug: IndexMap<&CompactString, Vec<usize>> = IndexMap::new();
        for heading in &doc.headings {
            by_slug.entry(&heading.slug).or_default().push(heading.line);
        }

        let info = self.info();
        by_slug
            .into_iter()
            .filter(|(_, lines)| lines.len() > 1)
            .map(|(slug, lines)| Finding {
                check_id: info.id,
                check_name: info.name,
                message: format!(
                    "{} headings produce the anchor '#{}' (first at line {})",
                    lines.len(),
                    slug,
                    lines[0]
                ),
                severity: info.severity,
                category: info.category,
                suggestion: Some("Retitle the later heading so its anchor is unique".to_string()),
                line: Some(lines[1]),
                anchor: Some(slug.clone())
            })
            .collect()
    }
}

/// Table-of-contents entry pointing to a missing anchor
pub struct BrokenAnchor;

impl Check for BrokenAnchor {
    fn info(&self) -> CheckInfo {
        CheckInfo {
            id:       "ANCHOR002",
            name:     "Broken anchor",
            severity: Severity::Error,
            category: CheckCategory::Anchors
        }
    }

    fn run(&self, doc: &Document) -> Vec<Finding> {
        let info = self.info();
        doc.toc
            .iter()
            .filter(|entry| !doc.has_anchor(&entry.target_slug))
            .map(|entry| Finding {
                check_id: info.id,
                check_name: info.name,
                message: format!(
                    "TOC entry '{}' points to '#{}', which matches no heading",
                    entry.label, entry.target_slug
                ),
                severity: info.severity,
                category: info.category,
                suggestion: Some(
                    "Update the link target or restore the section it referred to".to_string()
                ),
                line: Some(entry.line),
                anchor: Some(entry.target_slug.clone())
            })
            .collect()
    }
}
