//! # Callouts
//!
//! Obsidian-style callouts: a blockquote whose first line carries a kind
//! marker, an optional fold marker and a title.
//!
//! ```text
//! > [!warning]- Be careful
//! > The body is ordinary block-level markup,
//! > including further callouts.
//! ```
//!
//! ## Components
//!
//! - **`classify`**: per-line facts (marker line, quoted line, blank, other)
//! - **`matcher`**: `try_match` finds the first callout in a block and splits
//!   the block into leading text, callout parts and trailing text
//! - **`builder`**: `build` turns a match into elements, calling back into the
//!   host for leading text and, recursively, for the body
//! - **`icons`**: kind to glyph lookup and default titles
//!
//! ## Host Cooperation
//!
//! The processor is registered just above the blockquote processor, so any
//! quoted block without a well-formed marker falls through to an ordinary
//! `<blockquote>`. Matching is vetoed inside a plain blockquote and near the
//! host's nesting limit. Callout bodies are parsed under
//! [`ParserState::Callout`](crate::parsing::host::ParserState::Callout),
//! which is not a plain blockquote, so callouts nest.

pub mod builder;
pub mod classify;
pub mod icons;
pub mod matcher;

use std::collections::VecDeque;

use crate::error::ParseError;
use crate::parsing::blocks::kinds::BlockQuoteProcessor;
use crate::parsing::blocks::processor::{BlockProcessor, Registry};
use crate::parsing::host::BlockHost;
use crate::parsing::tree::Element;
use crate::parsing::Extension;

pub use builder::build;
pub use classify::Fold;
pub use icons::{DEFAULT_ICON, IconTable, default_title};
pub use matcher::{CalloutMatch, MatchContext, try_match};

/// Directly above [`BlockQuoteProcessor::PRIORITY`], below rules, headings and fences.
pub const CALLOUT_PRIORITY: f32 = 21.1;

pub struct CalloutProcessor {
    icons: IconTable,
}

impl CalloutProcessor {
    pub const NAME: &'static str = "callouts";

    pub fn new(icons: IconTable) -> Self {
        Self { icons }
    }
}

impl BlockProcessor for CalloutProcessor {
    fn test(&self, host: &dyn BlockHost, _parent: &Element, block: &str) -> bool {
        try_match(block, MatchContext::from_host(host)).is_some()
    }

    fn run(
        &self,
        host: &mut dyn BlockHost,
        parent: &mut Element,
        blocks: &mut VecDeque<String>,
    ) -> Result<bool, ParseError> {
        let Some(block) = blocks.pop_front() else {
            return Ok(false);
        };
        let Some(callout) = try_match(&block, MatchContext::from_host(host)) else {
            blocks.push_front(block);
            return Ok(false);
        };
        build(host, parent, blocks, &callout, &self.icons)?;
        Ok(true)
    }
}

/// Installs [`CalloutProcessor`] into a block pipeline.
#[derive(Debug, Clone, Default)]
pub struct CalloutExtension {
    icons: IconTable,
}

impl CalloutExtension {
    pub fn new(icons: IconTable) -> Self {
        Self { icons }
    }
}

impl Extension for CalloutExtension {
    fn extend(&self, registry: &mut Registry) {
        registry.register(
            CalloutProcessor::NAME,
            CALLOUT_PRIORITY,
            CalloutProcessor::new(self.icons.clone()),
        );
    }
}
