//! Dialect Cloner
//!
//! Bootstraps a new dialect by copying an existing one's grammar folder,
//! support module and test fixtures, rewriting the embedded identifiers so
//! the copies refer to the new dialect. The caller re-runs discovery
//! afterwards to register the new dialect's recipes.

use std::fs;
use std::io;
use std::path::Path;

use log::info;
use regex::Regex;
use thiserror::Error;

use crate::common::paths::{ProjectLayout, SUPPORT_FILE};
use crate::recipe::RecipeTable;

#[derive(Error, Debug)]
pub enum CloneError {
    #[error("No existing parser found for '{0}'")]
    SourceDialectNotFound(String),
    #[error("Invalid rewrite pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CloneError>;

/// Copies an existing dialect's file set under a new name
pub struct DialectCloner<'a> {
    layout: &'a ProjectLayout,
}

impl<'a> DialectCloner<'a> {
    pub fn new(layout: &'a ProjectLayout) -> Self {
        DialectCloner { layout }
    }

    /// Clone the `source` dialect into `target`.
    ///
    /// `source` is matched as a prefix of registered recipe names, the same
    /// way build targets are addressed; an unmatched prefix aborts the whole
    /// run since cloning was explicitly requested.
    pub fn clone_dialect(&self, table: &RecipeTable, source: &str, target: &str) -> Result<()> {
        if !table.names().any(|name| name.starts_with(source)) {
            return Err(CloneError::SourceDialectNotFound(source.to_string()));
        }
        info!("Cloning dialect '{}' into '{}'", source, target);
        self.copy_grammar(source, target)?;
        self.copy_support_module(source, target)?;
        self.copy_tests(source, target)?;
        Ok(())
    }

    /// Copy the whole grammar folder, subfolders included. The descriptor
    /// travels with it, so the next discovery pass picks the clone up.
    fn copy_grammar(&self, source: &str, target: &str) -> Result<()> {
        let from = self.layout.dialect_grammar_dir(source);
        let to = self.layout.dialect_grammar_dir(target);
        copy_dir_recursive(&from, &to)?;
        Ok(())
    }

    /// Copy the parse support module, pointing its dialect identifier at
    /// the new dialect.
    fn copy_support_module(&self, source: &str, target: &str) -> Result<()> {
        let from = self.layout.dialect_output_dir(source).join(SUPPORT_FILE);
        let to_dir = self.layout.dialect_output_dir(target);
        fs::create_dir_all(&to_dir)?;
        let contents = fs::read_to_string(&from)?;
        let active_dialect = Regex::new(r"parser\.yy\.activeDialect = '[^']+';")?;
        let replacement = format!("parser.yy.activeDialect = '{}';", target);
        let rewritten = active_dialect.replace_all(&contents, replacement.as_str());
        fs::write(to_dir.join(SUPPORT_FILE), rewritten.as_bytes())?;
        Ok(())
    }

    /// Copy the test fixtures, renaming files and rewriting parser names
    /// from `<source>(Autocomplete|Syntax)Parser` to the target dialect.
    fn copy_tests(&self, source: &str, target: &str) -> Result<()> {
        let parser_name = Regex::new(&format!(
            "{}(Autocomplete|Syntax)Parser",
            regex::escape(source)
        ))?;
        let replacement = format!("{}${{1}}Parser", target);
        let from_dir = self.layout.dialect_output_dir(source).join("test");
        let to_dir = self.layout.dialect_output_dir(target).join("test");
        fs::create_dir_all(&to_dir)?;
        for entry in fs::read_dir(&from_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let contents = fs::read_to_string(&path)?;
            let rewritten = parser_name.replace_all(&contents, replacement.as_str());
            let target_name = file_name.replace(source, target);
            fs::write(to_dir.join(target_name), rewritten.as_bytes())?;
        }
        Ok(())
    }
}

fn copy_dir_recursive(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let from_path = entry.path();
        let to_path = to.join(entry.file_name());
        if from_path.is_dir() {
            copy_dir_recursive(&from_path, &to_path)?;
        } else {
            fs::copy(&from_path, &to_path)?;
        }
    }
    Ok(())
}
