use std::collections::VecDeque;

use crate::error::ParseError;
use crate::parsing::blocks::processor::BlockProcessor;
use crate::parsing::host::BlockHost;
use crate::parsing::tree::Element;

/// Swallows empty blocks and the extra leading newline left by runs of blank lines.
pub struct EmptyBlockProcessor;

impl EmptyBlockProcessor {
    pub const NAME: &'static str = "empty";
    pub const PRIORITY: f32 = 100.0;
}

impl BlockProcessor for EmptyBlockProcessor {
    fn test(&self, _host: &dyn BlockHost, _parent: &Element, block: &str) -> bool {
        block.trim().is_empty() || block.starts_with('\n')
    }

    fn run(
        &self,
        _host: &mut dyn BlockHost,
        _parent: &mut Element,
        blocks: &mut VecDeque<String>,
    ) -> Result<bool, ParseError> {
        let Some(block) = blocks.pop_front() else {
            return Ok(false);
        };
        let rest = block.trim_start_matches('\n');
        if !rest.trim().is_empty() {
            blocks.push_front(rest.to_string());
        }
        Ok(true)
    }
}
