pub mod blocks;
pub mod callouts;
pub mod host;
pub mod span;
pub mod tree;

use std::rc::Rc;

use crate::error::ParseError;
use crate::render;

use blocks::{BlockParser, DEFAULT_MAX_NESTING, Registry, default_registry};
use tree::Element;

/// Something that installs block processors into a pipeline.
pub trait Extension {
    fn extend(&self, registry: &mut Registry);
}

/// A parsed document: a `div` root whose children are the top-level blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn to_html(&self) -> String {
        render::html::to_html(&self.root)
    }

    pub fn outline(&self) -> Vec<String> {
        render::outline::outline(&self.root)
    }
}

/// Configured block pipeline. Cheap to reuse across documents.
#[derive(Debug, Clone)]
pub struct Markdown {
    registry: Registry,
    max_nesting: usize,
}

impl Markdown {
    /// The built-in processors only; no callouts until an extension is added.
    pub fn new() -> Self {
        Self {
            registry: default_registry(),
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Extension) -> Self {
        extension.extend(&mut self.registry);
        self
    }

    #[must_use]
    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn parse(&self, text: &str) -> Result<Document, ParseError> {
        let mut parser = BlockParser::new(Rc::new(self.registry.clone()), self.max_nesting);
        let root = parser.parse_document(text)?;
        Ok(Document { root })
    }

    pub fn convert(&self, text: &str) -> Result<String, ParseError> {
        Ok(self.parse(text)?.to_html())
    }
}

impl Default for Markdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience: parse with the built-in processors plus callouts.
pub fn parse_document(text: &str) -> Result<Document, ParseError> {
    Markdown::new()
        .with_extension(callouts::CalloutExtension::default())
        .parse(text)
}

#[cfg(test)]
mod tests;
