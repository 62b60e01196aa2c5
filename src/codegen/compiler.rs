// Code Generator Invoker
//
// Delegates grammar compilation to the external jison compiler and reads
// back the raw generated module.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::common::paths::MODULE_EXT;

use super::error::{GenerateError, Result};

/// External grammar compiler collaborator.
///
/// Implementations compile a grammar file (plus optional standalone lexer)
/// and write the generated module to [`generated_module_path`]. The call is
/// synchronous: the output file must exist when it returns.
pub trait GrammarCompiler {
    fn compile(&self, grammar_path: &Path, lexer_path: Option<&Path>)
        -> std::result::Result<(), String>;
}

/// Path of the module a compiler run produces for a grammar file: the
/// grammar file with its extension swapped.
pub fn generated_module_path(grammar_path: &Path) -> PathBuf {
    grammar_path.with_extension(MODULE_EXT)
}

/// The jison CLI, invoked as a subprocess with plain-module output.
#[derive(Debug, Default)]
pub struct JisonCli;

impl GrammarCompiler for JisonCli {
    fn compile(
        &self,
        grammar_path: &Path,
        lexer_path: Option<&Path>,
    ) -> std::result::Result<(), String> {
        let output = generated_module_path(grammar_path);
        let mut command = Command::new("jison");
        command.arg(grammar_path);
        if let Some(lexer) = lexer_path {
            command.arg(lexer);
        }
        command.args(["-m", "js"]).arg("-o").arg(&output);
        let status = command
            .status()
            .map_err(|err| format!("failed to run jison: {}", err))?;
        if !status.success() {
            return Err(format!("jison exited with {}", status));
        }
        Ok(())
    }
}

/// Run the compiler for one recipe and read back the raw generated module.
///
/// Compiler failures and a missing output file are both reported as
/// [`GenerateError::Compiler`] tagged with the recipe name; either aborts
/// only the current target.
pub fn invoke(
    compiler: &dyn GrammarCompiler,
    recipe_name: &str,
    grammar_path: &Path,
    lexer_path: Option<&Path>,
) -> Result<String> {
    compiler
        .compile(grammar_path, lexer_path)
        .map_err(|reason| GenerateError::Compiler {
            parser: recipe_name.to_string(),
            reason,
        })?;
    let module_path = generated_module_path(grammar_path);
    fs::read_to_string(&module_path).map_err(|err| GenerateError::Compiler {
        parser: recipe_name.to_string(),
        reason: format!(
            "generated module {} is unreadable: {}",
            module_path.display(),
            err
        ),
    })
}
