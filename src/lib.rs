//! # SQL Doc Validator Library
//!
//! Validation and static-site rendering for curated SQL tips documents.

pub mod app;
pub mod cache;
pub mod checks;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod render;
pub mod snippet;
