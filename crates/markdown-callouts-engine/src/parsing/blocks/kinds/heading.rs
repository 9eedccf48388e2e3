use std::collections::VecDeque;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ParseError;
use crate::parsing::blocks::processor::BlockProcessor;
use crate::parsing::host::BlockHost;
use crate::parsing::tree::Element;

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX.get_or_init(|| {
        Regex::new(r"(?m)^(#{1,6})[ \t]+(.+?)[ \t]*#*[ \t]*$").expect("Invalid heading regex")
    })
}

/// ATX headings (`# Title` through `###### Title`), found anywhere in a block.
pub struct HashHeadingProcessor;

impl HashHeadingProcessor {
    pub const NAME: &'static str = "hashheader";
    pub const PRIORITY: f32 = 70.0;
}

impl BlockProcessor for HashHeadingProcessor {
    fn test(&self, _host: &dyn BlockHost, _parent: &Element, block: &str) -> bool {
        heading_regex().is_match(block)
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
        let Some(caps) = heading_regex().captures(&block) else {
            blocks.push_front(block);
            return Ok(false);
        };
        let (Some(full), Some(hashes), Some(title)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            blocks.push_front(block);
            return Ok(false);
        };

        let before = &block[..full.start()];
        if !before.trim().is_empty() {
            host.parse_blocks(parent, VecDeque::from([before.to_string()]))?;
        }

        let level = hashes.as_str().len();
        parent.append(Element::new(format!("h{level}")).with_text(title.as_str()));

        let after = &block[full.end()..];
        let after = after.strip_prefix('\n').unwrap_or(after);
        if !after.is_empty() {
            blocks.push_front(after.to_string());
        }
        Ok(true)
    }
}
