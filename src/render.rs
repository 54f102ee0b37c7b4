//! Static HTML rendering of a parsed tips document.
//!
//! Rendering is deliberately minimal: a navigation list built from the
//! document's heading anchors, one article per section with `id` equal to
//! its slug, escaped body text, `<pre><code>` for fenced examples, and a
//! `<table>` for expected-output tables. This is not a general markdown
//! renderer; body prose is emitted as escaped paragraphs.

use std::{fs, path::Path};

use crate::{
    document::{
        self, Document, Heading, HeadingKind, OutputTable, is_table_row, opening_fence,
        parse_table
    },
    error::{AppResult, render_write_error}
};

const STYLESHEET: &str = "\
body { max-width: 52rem; margin: 2rem auto; padding: 0 1rem;
       font-family: system-ui, sans-serif; line-height: 1.5; }
nav ul { list-style: none; padding-left: 0; }
nav li { margin: 0.15rem 0; }
nav li.depth-3 { padding-left: 1.25rem; }
nav li.depth-4 { padding-left: 2.5rem; }
pre { background: #f6f8fa; padding: 0.75rem; overflow-x: auto; }
code { font-family: ui-monospace, monospace; }
table { border-collapse: collapse; margin: 0.5rem 0; }
th, td { border: 1px solid #d0d7de; padding: 0.25rem 0.6rem; text-align: left; }
";

/// Render the document as a single HTML page.
pub fn render_html(doc: &Document, title_override: Option<&str>) -> String {
    let title = title_override
        .map(str::to_string)
        .or_else(|| doc.title.as_ref().map(|t| t.to_string()))
        .unwrap_or_else(|| "SQL Tips".to_string());

    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(&title)));
    html.push_str("<link rel=\"stylesheet\" href=\"style.css\">\n");
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&title)));

    render_nav(doc, &mut html);
    render_body(&doc.preamble, &mut html);

    let mut sections = doc.sections.iter();
    for heading in &doc.headings {
        match heading.kind {
            HeadingKind::Title => render_body(&heading.body, &mut html),
            HeadingKind::Category(_) => {
                render_heading_tag(heading, &mut html);
                render_body(&heading.body, &mut html);
            }
            HeadingKind::Section => {
                if let Some(section) = sections.next() {
                    html.push_str(&format!("<article id=\"{}\">\n", escape_html(&section.slug)));
                    render_heading_tag(heading, &mut html);
                    render_body(&section.body, &mut html);
                    html.push_str("</article>\n");
                }
            }
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Write `index.html` and `style.css` into the output directory.
pub fn write_site(doc: &Document, out_dir: &Path, title_override: Option<&str>) -> AppResult<()> {
    fs::create_dir_all(out_dir)
        .map_err(|e| render_write_error(&out_dir.display().to_string(), e))?;

    let index = out_dir.join("index.html");
    fs::write(&index, render_html(doc, title_override))
        .map_err(|e| render_write_error(&index.display().to_string(), e))?;

    let style = out_dir.join("style.css");
    fs::write(&style, STYLESHEET).map_err(|e| render_write_error(&style.display().to_string(), e))
}

fn render_nav(doc: &Document, html: &mut String) {
    html.push_str("<nav>\n<ul>\n");
    for heading in &doc.headings {
        if heading.kind == HeadingKind::Title {
            continue;
        }
        html.push_str(&format!(
            "<li class=\"depth-{}\"><a href=\"#{}\">{}</a></li>\n",
            heading.level,
            escape_html(&heading.slug),
            escape_html(&heading.title)
        ));
    }
    html.push_str("</ul>\n</nav>\n");
}

fn render_heading_tag(heading: &Heading, html: &mut String) {
    // Clamp into the h2-h6 range; h1 is reserved for the page title
    let level = heading.level.clamp(2, 6);
    let anchor = match heading.kind {
        HeadingKind::Section => String::new(),
        _ => format!(" id=\"{}\"", escape_html(&heading.slug))
    };
    html.push_str(&format!(
        "<h{level}{anchor}>{}</h{level}>\n",
        escape_html(&heading.title)
    ));
}

/// Render a raw section body: prose paragraphs, fenced code, pipe tables,
/// and anchor-link list items.
fn render_body(body: &str, html: &mut String) {
    let lines: Vec<&str> = body.lines().collect();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if let Some(open) = opening_fence(line, i + 1) {
            flush_paragraph(&mut paragraph, html);
            let mut code = String::new();
            i += 1;
            while i < lines.len() && !document::is_closing_fence(lines[i], &open) {
                code.push_str(lines[i]);
                code.push('\n');
                i += 1;
            }
            i += 1;
            let class = if open.info.is_empty() {
                String::new()
            } else {
                format!(" class=\"language-{}\"", escape_html(&open.info))
            };
            html.push_str(&format!("<pre><code{}>{}</code></pre>\n", class, escape_html(&code)));
            continue;
        }

        if is_table_row(line) {
            flush_paragraph(&mut paragraph, html);
            let (table, consumed) = parse_table(&lines[i..]);
            render_table(&table, html);
            i += consumed;
            continue;
        }

        if let Some(caps) = document::TOC_LINK.captures(line) {
            flush_paragraph(&mut paragraph, html);
            html.push_str(&format!(
                "<ul><li><a href=\"#{}\">{}</a></li></ul>\n",
                escape_html(&caps[2]),
                escape_html(&caps[1])
            ));
            i += 1;
            continue;
        }

        if line.trim().is_empty() {
            flush_paragraph(&mut paragraph, html);
        } else {
            paragraph.push(line);
        }
        i += 1;
    }
    flush_paragraph(&mut paragraph, html);
}

fn flush_paragraph(paragraph: &mut Vec<&str>, html: &mut String) {
    if paragraph.is_empty() {
        return;
    }
    html.push_str("<p>");
    html.push_str(&escape_html(&paragraph.join("\n")));
    html.push_str("</p>\n");
    paragraph.clear();
}

fn render_table(table: &OutputTable, html: &mut String) {
    html.push_str("<table>\n<tr>");
    for cell in &table.header {
        html.push_str(&format!("<th>{}</th>", escape_html(cell)));
    }
    html.push_str("</tr>\n");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c)
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn test_render_section_anchor() {
        let doc = parse_document("## Use a leading comma\n\nBody text.\n").unwrap();
        let html = render_html(&doc, None);
        assert!(html.contains("<article id=\"use-a-leading-comma\">"));
        assert!(html.contains("<p>Body text.</p>"));
    }

    #[test]
    fn test_render_escapes_code() {
        let text = "## Compare\n\n```sql\nSELECT 1 WHERE 2 > 1;\n```\n";
        let doc = parse_document(text).unwrap();
        let html = render_html(&doc, None);
        assert!(html.contains("2 &gt; 1"));
        assert!(!html.contains("```"));
    }
}
