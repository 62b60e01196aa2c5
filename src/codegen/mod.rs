// Code generation pipeline: assemble, compile, post-process.

pub mod assemble;
pub mod compiler;
pub mod error;
pub mod post_process;

pub use assemble::{concatenate, AssembledGrammar};
pub use compiler::{GrammarCompiler, JisonCli};
pub use error::GenerateError;
pub use post_process::AnchorMode;
