use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL Doc Validator - Validate and render curated SQL tips documents
#[derive(Parser, Debug)]
#[command(name = "sql-doc-validator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate anchors, TOC links, and SQL examples
    Validate {
        /// Path to the tips document (use - for stdin)
        path: PathBuf,

        /// SQL dialect tried first for snippet checking
        #[arg(long, value_enum, default_value = "generic")]
        dialect: Dialect,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Enable verbose output with a per-section summary
        #[arg(short, long)]
        verbose: bool,

        /// Skip syntax checking of SQL examples
        #[arg(long)]
        no_snippet_check: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },
    /// Render the document as a static HTML site
    Render {
        /// Path to the tips document (use - for stdin)
        path: PathBuf,

        /// Output directory for the generated site
        #[arg(short, long)]
        out: PathBuf,

        /// Site title override
        #[arg(long)]
        title: Option<String>
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Dialect {
    Generic,
    Mysql,
    Postgresql,
    Sqlite,
    Clickhouse
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
