//! # SQL Doc Validator
//!
//! Validator and static site renderer for curated SQL tips documents.
//!
//! `sql-doc-validator` parses a tips document (a markdown README of SQL
//! tips, tricks, and anti-patterns with example queries and expected output
//! tables) into a structured model, verifies its table-of-contents anchors,
//! detects duplicate heading slugs, syntax-checks embedded SQL examples
//! against a permissive multi-dialect grammar, and can render the model as
//! a small static HTML site. Examples are never executed.
//!
//! # Quick Start
//!
//! ```bash
//! # Validate a tips document
//! sql-doc-validator validate README.md
//!
//! # CI integration with JSON output
//! sql-doc-validator validate README.md -f json > report.json
//!
//! # Stream the document from stdin
//! cat README.md | sql-doc-validator validate -
//!
//! # Render a static site
//! sql-doc-validator render README.md --out site/
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. `.sql-doc-validator.toml` in current directory
//! 3. `~/.config/sql-doc-validator/config.toml`
//!
//! ## Example Configuration
//!
//! ```toml
//! [checks]
//! # Disable specific checks by ID
//! disabled = ["SNIP002"]
//!
//! # Override default severity levels
//! [checks.severity]
//! SNIP001 = "error"     # Promote to error
//! ANCHOR002 = "warning" # Demote to warning
//!
//! [render]
//! title = "SQL Tips and Tricks"
//! ```
//!
//! # Checks
//!
//! ## Anchor Checks (ANCHOR001-ANCHOR002)
//!
//! | ID | Name | Description |
//! |----|------|-------------|
//! | ANCHOR001 | Duplicate anchor | Two headings slugify to the same anchor |
//! | ANCHOR002 | Broken anchor | TOC entry points to a missing anchor |
//!
//! ## Snippet Checks (SNIP001-SNIP002)
//!
//! | ID | Name | Description |
//! |----|------|-------------|
//! | SNIP001 | Unparseable snippet | Example parses under no known dialect |
//! | SNIP002 | Dialect-specific snippet | Example needs a different dialect |
//!
//! # Exit Codes
//!
//! - `0` - Document is valid, or only informational findings
//! - `1` - Findings at Warning or above, or a fatal parse/I-O error
//!
//! Fatal parse errors (a malformed heading, an unterminated code block)
//! halt the run with the offending line number; validation findings are
//! always accumulated across the whole document and reported together.
//!
//! # Output Formats
//!
//! - `text` - Human-readable colored output (default)
//! - `json` - Structured JSON for programmatic processing
//! - `yaml` - YAML format for configuration management
//!
//! # Modules
//!
//! - [`sql_doc_validator::document`] - Document model builder
//! - [`sql_doc_validator::checks`] - Check engine and built-in checks
//! - [`sql_doc_validator::snippet`] - Syntax-only SQL snippet checking
//! - [`sql_doc_validator::render`] - Static HTML site rendering
//! - [`sql_doc_validator::config`] - Configuration loading
//! - [`sql_doc_validator::output`] - Report formatting
//! - [`sql_doc_validator::cache`] - Parsed-document cache
//! - [`sql_doc_validator::error`] - Error types and constructors

use std::process;

use clap::Parser;
use sql_doc_validator::{
    app::{RenderParams, ValidateParams, run_render, run_validate},
    cli::{Cli, Commands},
    error::AppResult
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            path,
            dialect,
            output_format,
            verbose,
            no_snippet_check,
            no_color
        } => {
            let params = ValidateParams {
                path: path.display().to_string(),
                dialect,
                output_format,
                verbose,
                snippet_check: !no_snippet_check,
                no_color
            };
            let outcome = run_validate(&params)?;
            if let Some(summary) = &outcome.summary {
                println!("{}", summary);
            }
            println!("{}", outcome.report_output);
            Ok(outcome.exit_code)
        }
        Commands::Render {
            path,
            out,
            title
        } => {
            let params = RenderParams {
                path:    path.display().to_string(),
                out_dir: out,
                title
            };
            run_render(&params)?;
            println!("Site written to {}", params.out_dir.display());
            Ok(0)
        }
    }
}
