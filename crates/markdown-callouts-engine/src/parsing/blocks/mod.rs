//! # Block Parsing
//!
//! A queue-driven block pipeline in the Python-Markdown mould.
//!
//! ## Parsing Model
//!
//! 1. **Segmentation**: a chunk of text is split on blank lines into a queue
//!    of raw blocks (`parser::split_blocks`).
//!
//! 2. **Dispatch**: the front block is offered to each registered
//!    [`BlockProcessor`] from highest to lowest priority. The first one that
//!    accepts it consumes it, possibly pushing leftover text back onto the
//!    front of the queue and recursing into the host for nested content.
//!
//! ## Modules
//!
//! - **`processor`**: `BlockProcessor` trait and the priority-ordered `Registry`
//! - **`parser`**: `BlockParser`, the queue, the state stack and the depth guard
//! - **`kinds`**: the built-in processors (empty, fenced code, heading, rule,
//!   blockquote, paragraph) with their owned delimiters
//!
//! ## Key Invariants
//!
//! - Every dispatch round removes at least one block or shortens the front
//!   block, so parsing terminates
//! - Fenced code blocks are raw zones: no block parsing inside
//! - Nesting depth is capped; near the cap, quote-like processors decline so
//!   deep input degrades to paragraphs instead of failing

pub mod kinds;
pub mod parser;
pub mod processor;

pub use parser::{BlockParser, DEFAULT_MAX_NESTING};
pub use processor::{BlockProcessor, RegisteredProcessor, Registry};

use kinds::{
    BlockQuoteProcessor, EmptyBlockProcessor, FencedCodeProcessor, HashHeadingProcessor,
    HorizontalRuleProcessor, ParagraphProcessor,
};

/// The built-in processors at their standard priorities.
pub fn default_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(
        EmptyBlockProcessor::NAME,
        EmptyBlockProcessor::PRIORITY,
        EmptyBlockProcessor,
    );
    registry.register(
        FencedCodeProcessor::NAME,
        FencedCodeProcessor::PRIORITY,
        FencedCodeProcessor,
    );
    registry.register(
        HashHeadingProcessor::NAME,
        HashHeadingProcessor::PRIORITY,
        HashHeadingProcessor,
    );
    registry.register(
        HorizontalRuleProcessor::NAME,
        HorizontalRuleProcessor::PRIORITY,
        HorizontalRuleProcessor,
    );
    registry.register(
        BlockQuoteProcessor::NAME,
        BlockQuoteProcessor::PRIORITY,
        BlockQuoteProcessor,
    );
    registry.register(
        ParagraphProcessor::NAME,
        ParagraphProcessor::PRIORITY,
        ParagraphProcessor,
    );
    registry
}
