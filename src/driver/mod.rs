// Build Driver
//
// Resolves requested targets against the recipe table and runs generation
// strictly one target at a time. The shared per-name concatenation path
// forbids overlapping builds within a process.

use std::fs;

use log::{debug, error};
use thiserror::Error;

use crate::codegen::assemble::concatenate;
use crate::codegen::compiler::{self, generated_module_path, GrammarCompiler};
use crate::codegen::error::GenerateError;
use crate::codegen::post_process::{self, AnchorMode};
use crate::common::paths::ALL_TARGETS;
use crate::recipe::RecipeTable;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("No parser config found for: '{}'", .0.join("', '"))]
    InvalidTargets(Vec<String>),
}

pub type Result<T> = std::result::Result<T, DriverError>;

/// Expand command-line tokens into a duplicate-free list of recipe names.
///
/// A token is the `all` keyword, an exact recipe name, or a prefix matching
/// one or more names. Unknown tokens abort resolution before any generation
/// starts, reported together rather than one at a time.
pub fn resolve_targets(args: &[String], table: &RecipeTable) -> Result<Vec<String>> {
    let mut selected: Vec<String> = Vec::new();
    let mut invalid: Vec<String> = Vec::new();
    let mut all = false;

    for arg in args {
        if arg == ALL_TARGETS {
            all = true;
            continue;
        }
        if table.contains(arg) {
            push_unique(&mut selected, arg);
            continue;
        }
        let matches: Vec<&String> = table
            .names()
            .filter(|name| name.starts_with(arg.as_str()))
            .collect();
        if matches.is_empty() {
            invalid.push(arg.clone());
        } else {
            for name in matches {
                push_unique(&mut selected, name);
            }
        }
    }

    if !invalid.is_empty() {
        return Err(DriverError::InvalidTargets(invalid));
    }
    if all {
        return Ok(table.names().cloned().collect());
    }
    Ok(selected)
}

fn push_unique(selected: &mut Vec<String>, name: &str) {
    if !selected.iter().any(|existing| existing == name) {
        selected.push(name.to_string());
    }
}

/// Outcome of one target in a batch run
#[derive(Debug)]
pub struct TargetOutcome {
    pub name: String,
    pub result: std::result::Result<(), GenerateError>,
}

/// Aggregate result of a batch run
#[derive(Debug, Default)]
pub struct BuildReport {
    pub outcomes: Vec<TargetOutcome>,
}

impl BuildReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.len() - self.failed()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_err())
            .count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs generation for resolved targets, sequentially
pub struct BuildDriver<'a> {
    table: &'a RecipeTable,
    compiler: &'a dyn GrammarCompiler,
    anchor_mode: AnchorMode,
}

impl<'a> BuildDriver<'a> {
    pub fn new(
        table: &'a RecipeTable,
        compiler: &'a dyn GrammarCompiler,
        anchor_mode: AnchorMode,
    ) -> Self {
        BuildDriver {
            table,
            compiler,
            anchor_mode,
        }
    }

    /// Attempt every target once. A failing target is logged with its name
    /// and cause and does not stop the rest of the batch.
    pub fn run(&self, targets: &[String]) -> BuildReport {
        let total = targets.len();
        let mut report = BuildReport::default();
        for (index, name) in targets.iter().enumerate() {
            if total > 1 {
                println!("Generating '{}' ({}/{})...", name, index + 1, total);
            } else {
                println!("Generating '{}'...", name);
            }
            let result = self.generate(name);
            if let Err(err) = &result {
                error!("Generation of '{}' failed: {}", name, err);
            }
            report.outcomes.push(TargetOutcome {
                name: name.clone(),
                result,
            });
        }
        report
    }

    /// One target, start to finish: assemble, compile, post-process, write.
    fn generate(&self, name: &str) -> std::result::Result<(), GenerateError> {
        let recipe = self
            .table
            .get(name)
            .ok_or_else(|| GenerateError::UnknownRecipe(name.to_string()))?;

        let assembled = concatenate(recipe)?;
        let lexer = recipe.lexer_path.as_deref();
        let raw = compiler::invoke(self.compiler, &recipe.name, &assembled.path, lexer)?;
        // The concatenated grammar survives a failed compile for inspection.
        assembled.cleanup()?;

        debug!("Adjusting generated module for '{}'", name);
        let processed = post_process::apply(&raw, recipe, self.anchor_mode)?;

        let module_path = generated_module_path(&assembled.path);
        fs::create_dir_all(&recipe.output_dir)?;
        let output_path = match module_path.file_name() {
            Some(file_name) => recipe.output_dir.join(file_name),
            None => return Err(GenerateError::UnknownRecipe(name.to_string())),
        };
        fs::write(&output_path, processed)?;
        fs::remove_file(&module_path)?;
        Ok(())
    }
}
