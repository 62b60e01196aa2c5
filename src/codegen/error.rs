use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("No grammar source specified for '{0}'")]
    NoGrammarSource(String),
    #[error("No recipe registered for '{0}'")]
    UnknownRecipe(String),
    #[error("Grammar compiler failed for '{parser}': {reason}")]
    Compiler { parser: String, reason: String },
    #[error("Anchor '{anchor}' not found while post-processing '{parser}'")]
    MissingAnchor { parser: String, anchor: String },
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
