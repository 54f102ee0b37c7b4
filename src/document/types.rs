use compact_str::CompactString;
use serde::Serialize;
use smallvec::SmallVec;

/// Type alias for per-section example lists (typically 0-2 elements)
pub type ExampleVec = SmallVec<[Example; 2]>;

/// Parsed tips document
#[derive(Debug, Clone, Serialize, Default)]
pub struct Document {
    /// Document title from the first level-1 heading, if any
    pub title:    Option<CompactString>,
    /// Raw text before the first heading
    pub preamble: String,
    /// Every heading in order, the document's anchor table
    pub headings: Vec<Heading>,
    /// Table-of-contents entries found anywhere in the document
    pub toc:      Vec<TocEntry>,
    /// Tip sections in document order
    pub sections: Vec<Section>
}

impl Document {
    /// Total number of extracted examples across all sections
    pub fn example_count(&self) -> usize {
        self.sections.iter().map(|s| s.examples.len()).sum()
    }

    /// Whether any heading produces the given anchor slug
    pub fn has_anchor(&self, slug: &str) -> bool {
        self.headings.iter().any(|h| h.slug == slug)
    }
}

/// A single heading with its raw trailing content.
///
/// The `body` holds everything between this heading and the next one,
/// byte-verbatim. For section headings the same text is owned by the
/// corresponding [`Section`]; title and category headings keep theirs here
/// so the document round-trips through [`Document::to_markdown`].
#[derive(Debug, Clone, Serialize)]
pub struct Heading {
    pub title: CompactString,
    pub slug:  CompactString,
    pub level: u8,
    /// 1-based source line of the heading
    pub line:  usize,
    pub kind:  HeadingKind,
    pub body:  String
}

/// Role a heading plays in the document structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadingKind {
    /// Level-1 document title
    Title,
    /// Category marker, groups the sections that follow it
    Category(Category),
    /// A tip section
    Section
}

/// A tip section: one titled entry with body text and extracted examples
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title:    CompactString,
    /// Anchor slug, unique within a valid document
    pub slug:     CompactString,
    pub level:    u8,
    pub category: Category,
    /// Raw markdown between this heading and the next, fences included
    pub body:     String,
    pub examples: ExampleVec,
    /// 1-based source line of the section heading
    pub line:     usize
}

/// A fenced code block extracted from a section body
#[derive(Debug, Clone, Serialize)]
pub struct Example {
    /// Info string of the fence, e.g. "sql"
    pub language:        CompactString,
    /// Code verbatim, indentation preserved
    pub code:            String,
    /// Pipe table following the fence, when present
    pub expected_output: Option<OutputTable>,
    /// 1-based source line of the opening fence
    pub line:            usize
}

impl Example {
    /// Whether this example should go through the SQL syntax check
    pub fn is_sql(&self) -> bool {
        self.language.eq_ignore_ascii_case("sql")
    }
}

/// Expected query output rendered as a markdown pipe table
#[derive(Debug, Clone, Serialize, Default)]
pub struct OutputTable {
    pub header: Vec<CompactString>,
    pub rows:   Vec<Vec<CompactString>>
}

/// One table-of-contents link item
#[derive(Debug, Clone, Serialize)]
pub struct TocEntry {
    pub label:       CompactString,
    /// Anchor slug the entry points to, without the leading '#'
    pub target_slug: CompactString,
    /// 1-based source line of the list item
    pub line:        usize
}

/// Tip category, derived from the enclosing category heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum Category {
    Formatting,
    DataWrangling,
    Performance,
    CommonMistakes,
    Miscellaneous
}

impl Category {
    /// Map a heading slug to a category marker
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "formatting" => Some(Self::Formatting),
            "data-wrangling" => Some(Self::DataWrangling),
            "performance" => Some(Self::Performance),
            "common-mistakes" => Some(Self::CommonMistakes),
            "miscellaneous" | "misc" => Some(Self::Miscellaneous),
            _ => None
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Miscellaneous
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Formatting => write!(f, "Formatting"),
            Self::DataWrangling => write!(f, "Data wrangling"),
            Self::Performance => write!(f, "Performance"),
            Self::CommonMistakes => write!(f, "Common mistakes"),
            Self::Miscellaneous => write!(f, "Miscellaneous")
        }
    }
}
