use serde::Deserialize;

/// Per-dialect structure descriptor, read from `structure.json`.
///
/// Lists the lexer file shared by both parser variants and the ordered
/// grammar fragments making up each variant. Fragment order is
/// significant: the assembler joins files exactly as listed here.
#[derive(Debug, Clone, Deserialize)]
pub struct DialectStructure {
    /// Lexer file name, relative to the dialect grammar folder
    pub lexer: String,
    /// Ordered fragments of the autocomplete parser
    pub autocomplete: Vec<String>,
    /// Ordered fragments of the syntax parser
    pub syntax: Vec<String>,
}

impl DialectStructure {
    /// Check the descriptor invariants: a lexer name and at least one
    /// fragment per variant.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.lexer.is_empty() {
            return Err("lexer file name is empty".to_string());
        }
        if self.autocomplete.is_empty() {
            return Err("autocomplete fragment list is empty".to_string());
        }
        if self.syntax.is_empty() {
            return Err("syntax fragment list is empty".to_string());
        }
        Ok(())
    }
}
