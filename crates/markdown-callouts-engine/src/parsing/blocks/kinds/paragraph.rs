use std::collections::VecDeque;

use crate::error::ParseError;
use crate::parsing::blocks::processor::BlockProcessor;
use crate::parsing::host::BlockHost;
use crate::parsing::tree::Element;

/// Paragraphs have no delimiters: they are the default leaf block when no
/// other processor accepts. Inline markup is kept verbatim.
pub struct ParagraphProcessor;

impl ParagraphProcessor {
    pub const NAME: &'static str = "paragraph";
    pub const PRIORITY: f32 = 10.0;
}

impl BlockProcessor for ParagraphProcessor {
    fn test(&self, _host: &dyn BlockHost, _parent: &Element, _block: &str) -> bool {
        true
    }

    fn run(
        &self,
        _host: &mut dyn BlockHost,
        parent: &mut Element,
        blocks: &mut VecDeque<String>,
    ) -> Result<bool, ParseError> {
        let Some(block) = blocks.pop_front() else {
            return Ok(false);
        };
        let text = block.trim();
        if !text.is_empty() {
            parent.append(Element::new("p").with_text(text));
        }
        Ok(true)
    }
}
