use std::collections::VecDeque;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ParseError;
use crate::parsing::blocks::processor::BlockProcessor;
use crate::parsing::host::BlockHost;
use crate::parsing::tree::Element;

fn rule_regex() -> &'static Regex {
    static RULE_REGEX: OnceLock<Regex> = OnceLock::new();
    RULE_REGEX.get_or_init(|| {
        Regex::new(r"(?m)^[ ]{0,3}(?:(?:\*[ ]*){3,}|(?:-[ ]*){3,}|(?:_[ ]*){3,})$")
            .expect("Invalid rule regex")
    })
}

/// Thematic breaks: `***`, `---`, `___` (three or more, spaces allowed).
pub struct HorizontalRuleProcessor;

impl HorizontalRuleProcessor {
    pub const NAME: &'static str = "hr";
    pub const PRIORITY: f32 = 50.0;
}

impl BlockProcessor for HorizontalRuleProcessor {
    fn test(&self, _host: &dyn BlockHost, _parent: &Element, block: &str) -> bool {
        rule_regex().is_match(block)
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
        let Some(m) = rule_regex().find(&block) else {
            blocks.push_front(block);
            return Ok(false);
        };

        let before = &block[..m.start()];
        if !before.trim().is_empty() {
            host.parse_blocks(parent, VecDeque::from([before.to_string()]))?;
        }

        parent.append(Element::new("hr"));

        let after = &block[m.end()..];
        let after = after.strip_prefix('\n').unwrap_or(after);
        if !after.is_empty() {
            blocks.push_front(after.to_string());
        }
        Ok(true)
    }
}
