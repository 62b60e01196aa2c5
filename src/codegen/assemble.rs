// Grammar Assembler
//
// Joins a recipe's ordered grammar fragments into one compilable file.

use std::fs;
use std::path::PathBuf;

use crate::recipe::ParserRecipe;

use super::error::{GenerateError, Result};

/// A grammar file ready to hand to the compiler
#[derive(Debug)]
pub struct AssembledGrammar {
    pub path: PathBuf,
    /// True when the file was produced by concatenation. The file is only
    /// removed after successful generation so that a failing build leaves
    /// it behind for inspection.
    pub temporary: bool,
}

impl AssembledGrammar {
    /// Remove the concatenated file. Single-fragment grammars are used in
    /// place and left untouched.
    pub fn cleanup(&self) -> Result<()> {
        if self.temporary {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Assemble the grammar for one recipe.
///
/// With more than one fragment the files are joined with no separator, in
/// the exact order listed by the recipe, and written to the recipe's
/// concatenation path. A single fragment is used directly without copying.
pub fn concatenate(recipe: &ParserRecipe) -> Result<AssembledGrammar> {
    match recipe.source_fragments.len() {
        0 => Err(GenerateError::NoGrammarSource(recipe.name.clone())),
        1 => Ok(AssembledGrammar {
            path: recipe.source_fragments[0].clone(),
            temporary: false,
        }),
        _ => {
            let mut combined = String::new();
            for fragment in &recipe.source_fragments {
                combined.push_str(&fs::read_to_string(fragment)?);
            }
            fs::write(&recipe.target_concat_path, combined)?;
            Ok(AssembledGrammar {
                path: recipe.target_concat_path.clone(),
                temporary: true,
            })
        }
    }
}
