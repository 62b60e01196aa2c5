use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Could not find '{0}' in {1}")]
    MissingDescriptor(String, String),
    #[error("Invalid structure descriptor for dialect '{dialect}': {reason}")]
    InvalidDescriptor { dialect: String, reason: String },
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
