pub mod error;
pub mod io;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::ParseError;
pub use io::*;
pub use parsing::callouts::{CalloutExtension, IconTable};
pub use parsing::tree::Element;
pub use parsing::{Document, Extension, Markdown, parse_document};
