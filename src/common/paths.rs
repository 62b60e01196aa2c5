use std::path::PathBuf;

/// Extension of grammar definition files
pub const GRAMMAR_EXT: &str = "jison";

/// Extension of modules emitted by the grammar compiler
pub const MODULE_EXT: &str = "js";

/// Per-dialect structure descriptor file name
pub const STRUCTURE_FILE: &str = "structure.json";

/// Per-dialect parse support module file name
pub const SUPPORT_FILE: &str = "sqlParseSupport.js";

/// Target keyword expanding to every registered recipe
pub const ALL_TARGETS: &str = "all";

/// Filesystem layout of the parser build tree.
///
/// Static grammars live directly under the grammar root, dialect grammars
/// under `<grammar root>/sql/<dialect>/`. Generated modules mirror that
/// split under the output root.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Root folder holding grammar definition files
    pub grammar_root: PathBuf,
    /// Root folder receiving generated parser modules
    pub output_root: PathBuf,
}

impl ProjectLayout {
    pub fn new(grammar_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        ProjectLayout {
            grammar_root: grammar_root.into(),
            output_root: output_root.into(),
        }
    }

    /// Folder containing one grammar subfolder per dialect
    pub fn sql_grammar_dir(&self) -> PathBuf {
        self.grammar_root.join("sql")
    }

    /// Grammar folder of a single dialect
    pub fn dialect_grammar_dir(&self, dialect: &str) -> PathBuf {
        self.sql_grammar_dir().join(dialect)
    }

    /// Folder containing one output subfolder per dialect
    pub fn sql_output_dir(&self) -> PathBuf {
        self.output_root.join("sql")
    }

    /// Output folder of a single dialect, which also holds its support
    /// module and test fixtures
    pub fn dialect_output_dir(&self, dialect: &str) -> PathBuf {
        self.sql_output_dir().join(dialect)
    }
}
