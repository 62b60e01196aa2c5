// Parser Recipe Table
//
// Build recipes describe how each parser target is assembled, compiled and
// post-processed. The table is owned by the build driver and only ever
// mutated through merge().

use std::path::PathBuf;

use linked_hash_map::LinkedHashMap;

use crate::common::paths::{ProjectLayout, GRAMMAR_EXT};
use crate::registry::DialectStructure;

/// Import binding injected ahead of the generated factory assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportImport {
    /// Module path as written in the emitted import statement
    pub module: String,
    /// Imported symbol name
    pub symbol: String,
}

/// Post-processing plan applied to raw generated code
#[derive(Debug, Clone)]
pub struct PostProcess {
    /// Support module bound immediately before the factory assignment
    pub support_import: Option<SupportImport>,
    /// Capture a rule identifier alongside location tracking
    pub rule_id_capture: bool,
    /// Doc block inserted before the generated parse function
    pub parse_doc: Option<String>,
    /// Top-level symbol exported at the end of the module
    pub export_symbol: String,
}

/// Build instructions for one parser target
#[derive(Debug, Clone)]
pub struct ParserRecipe {
    /// Globally unique recipe name, e.g. `hiveAutocompleteParser`
    pub name: String,
    /// Grammar fragments, concatenated in this exact order
    pub source_fragments: Vec<PathBuf>,
    /// Standalone lexer file, when the grammar does not embed one
    pub lexer_path: Option<PathBuf>,
    /// Where the concatenated grammar is written when there is more than
    /// one fragment
    pub target_concat_path: PathBuf,
    /// Directory receiving the processed parser module
    pub output_dir: PathBuf,
    pub post_process: PostProcess,
}

/// The two parser variants generated for every dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Autocomplete,
    Syntax,
}

impl Variant {
    fn label(self) -> &'static str {
        match self {
            Variant::Autocomplete => "Autocomplete",
            Variant::Syntax => "Syntax",
        }
    }

    fn fragments(self, structure: &DialectStructure) -> &[String] {
        match self {
            Variant::Autocomplete => &structure.autocomplete,
            Variant::Syntax => &structure.syntax,
        }
    }
}

/// Insertion-ordered table of parser recipes, keyed by unique name
#[derive(Debug, Default)]
pub struct RecipeTable {
    recipes: LinkedHashMap<String, ParserRecipe>,
}

impl RecipeTable {
    pub fn new() -> Self {
        RecipeTable::default()
    }

    /// Table pre-populated with the static, non-dialect recipes
    pub fn with_static_recipes(layout: &ProjectLayout) -> Self {
        let mut table = RecipeTable::new();
        table.merge(static_recipes(layout));
        table
    }

    /// Merge recipes into the table, replacing entries with the same name.
    ///
    /// This is the table's only mutation point; both static registration
    /// and discovery passes go through it.
    pub fn merge(&mut self, recipes: Vec<ParserRecipe>) {
        for recipe in recipes {
            self.recipes.insert(recipe.name.clone(), recipe);
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParserRecipe> {
        self.recipes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    /// Recipe names in registration order
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.recipes.keys()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Derive the two per-dialect recipes from a structure descriptor.
///
/// Fragment order is taken from the descriptor lists unchanged.
pub fn recipes_for_dialect(
    layout: &ProjectLayout,
    dialect: &str,
    structure: &DialectStructure,
) -> Vec<ParserRecipe> {
    vec![
        dialect_recipe(layout, dialect, structure, Variant::Autocomplete),
        dialect_recipe(layout, dialect, structure, Variant::Syntax),
    ]
}

fn dialect_recipe(
    layout: &ProjectLayout,
    dialect: &str,
    structure: &DialectStructure,
    variant: Variant,
) -> ParserRecipe {
    let grammar_dir = layout.dialect_grammar_dir(dialect);
    let name = format!("{}{}Parser", dialect, variant.label());
    let source_fragments = variant
        .fragments(structure)
        .iter()
        .map(|fragment| grammar_dir.join(fragment))
        .collect();
    ParserRecipe {
        source_fragments,
        lexer_path: Some(grammar_dir.join(&structure.lexer)),
        target_concat_path: grammar_dir.join(format!("{}.{}", name, GRAMMAR_EXT)),
        output_dir: layout.dialect_output_dir(dialect),
        post_process: PostProcess {
            support_import: Some(SupportImport {
                module: format!("parse/sql/{}/sqlParseSupport", dialect),
                symbol: "SqlParseSupport".to_string(),
            }),
            rule_id_capture: true,
            parse_doc: None,
            export_symbol: name.clone(),
        },
        name,
    }
}

/// Doc block inserted before the parse function of the statement splitters
const STATEMENTS_PARSER_DOC: &str = "/**\n * @param {string} input\n *\n * @return {SqlStatementsParserResult}\n */\n";

/// The non-dialect parsers that predate structure descriptors.
///
/// Each one has a single grammar file at the grammar root and writes its
/// module to the output root.
pub fn static_recipes(layout: &ProjectLayout) -> Vec<ParserRecipe> {
    vec![
        static_recipe(
            layout,
            "globalSearchParser",
            Some(SupportImport {
                module: "parse/sqlParseSupport".to_string(),
                symbol: "SqlParseSupport".to_string(),
            }),
            None,
        ),
        static_recipe(layout, "solrFormulaParser", None, None),
        static_recipe(layout, "solrQueryParser", None, None),
        static_recipe(layout, "sqlStatementsParser", None, Some(STATEMENTS_PARSER_DOC)),
        static_recipe(layout, "hplsqlStatementsParser", None, Some(STATEMENTS_PARSER_DOC)),
    ]
}

fn static_recipe(
    layout: &ProjectLayout,
    name: &str,
    support_import: Option<SupportImport>,
    parse_doc: Option<&str>,
) -> ParserRecipe {
    let grammar = layout.grammar_root.join(format!("{}.{}", name, GRAMMAR_EXT));
    ParserRecipe {
        name: name.to_string(),
        source_fragments: vec![grammar.clone()],
        lexer_path: None,
        target_concat_path: grammar,
        output_dir: layout.output_root.clone(),
        post_process: PostProcess {
            support_import,
            rule_id_capture: false,
            parse_doc: parse_doc.map(str::to_string),
            export_symbol: name.to_string(),
        },
    }
}
