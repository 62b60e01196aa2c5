// SQL Parser Generation Pipeline
//
// Compiles jison grammar definitions into parser modules for the supported
// SQL dialects, two variants per dialect (autocomplete and syntax).

pub mod bootstrap;
pub mod codegen;
pub mod common;
pub mod driver;
pub mod recipe;
pub mod registry;

// Re-export key items for convenient access
pub use bootstrap::DialectCloner;
pub use codegen::compiler::{GrammarCompiler, JisonCli};
pub use codegen::post_process::AnchorMode;
pub use codegen::GenerateError;
pub use common::paths::ProjectLayout;
pub use driver::{resolve_targets, BuildDriver, BuildReport};
pub use recipe::{ParserRecipe, RecipeTable};
pub use registry::DialectStructure;
