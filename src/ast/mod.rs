//! Go source parsing and lowering into the interface model
//! See: https://github.com/tree-sitter/tree-sitter-go

pub mod lower;
pub mod parser;
pub mod types;


// Re-export main types for convenience
pub use parser::GoParser;
pub use types::{Declaration, ParsedFile};
