use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::ParseError;
use crate::parsing::host::{BlockHost, ParserState};
use crate::parsing::tree::Element;

use super::processor::Registry;

/// Default cap on nested [`BlockHost::parse_chunk`] calls.
pub const DEFAULT_MAX_NESTING: usize = 32;

/// The block pipeline: a pending-block queue dispatched to registered processors.
pub struct BlockParser {
    processors: Rc<Registry>,
    state: Vec<ParserState>,
    depth: usize,
    max_nesting: usize,
}

impl BlockParser {
    pub fn new(processors: Rc<Registry>, max_nesting: usize) -> Self {
        Self {
            processors,
            state: Vec::new(),
            depth: 0,
            max_nesting,
        }
    }

    /// Parses a whole document into a fresh root element.
    pub fn parse_document(&mut self, text: &str) -> Result<Element, ParseError> {
        let mut root = Element::new("div");
        self.parse_chunk(&mut root, &normalize(text))?;
        Ok(root)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl BlockHost for BlockParser {
    fn is_near_recursion_limit(&self) -> bool {
        self.depth + 1 >= self.max_nesting
    }

    fn state(&self) -> Option<ParserState> {
        self.state.last().copied()
    }

    fn set_state(&mut self, state: ParserState) {
        self.state.push(state);
    }

    fn reset_state(&mut self) {
        self.state.pop();
    }

    fn parse_blocks(
        &mut self,
        parent: &mut Element,
        mut blocks: VecDeque<String>,
    ) -> Result<(), ParseError> {
        let processors = Rc::clone(&self.processors);

        while !blocks.is_empty() {
            let mut handled = false;
            for entry in processors.iter() {
                let accepts = blocks
                    .front()
                    .is_some_and(|block| entry.processor.test(self, parent, block));
                if !accepts {
                    continue;
                }
                log::trace!("block accepted by '{}'", entry.name);
                if entry.processor.run(self, parent, &mut blocks)? {
                    handled = true;
                    break;
                }
            }

            if !handled && let Some(block) = blocks.pop_front() {
                log::warn!("no block processor accepted {} bytes; dropping", block.len());
            }
        }

        Ok(())
    }

    fn parse_chunk(&mut self, parent: &mut Element, text: &str) -> Result<(), ParseError> {
        if self.depth >= self.max_nesting {
            return Err(ParseError::NestingTooDeep {
                depth: self.depth + 1,
                limit: self.max_nesting,
            });
        }

        self.depth += 1;
        let result = self.parse_blocks(parent, split_blocks(text));
        self.depth -= 1;
        result
    }
}

/// Splits text into blocks on blank lines.
///
/// Runs of more than one blank line leave blocks starting with `\n`; the
/// empty-block processor strips those.
pub fn split_blocks(text: &str) -> VecDeque<String> {
    text.split("\n\n").map(str::to_string).collect()
}

/// Unifies line endings and empties whitespace-only lines so they separate blocks.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(|line| if line.trim().is_empty() { "" } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}
