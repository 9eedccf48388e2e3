use std::collections::VecDeque;

use crate::error::ParseError;
use crate::parsing::blocks::processor::BlockProcessor;
use crate::parsing::host::BlockHost;
use crate::parsing::tree::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// What a line looks like if it could open or close a fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Number of fence characters.
    pub len: usize,
    /// Whether anything follows the fence characters.
    pub has_info: bool,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = line.trim_end_matches(['\r', '\n']);
        let indent = t.len() - t.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        let t = &t[indent..];

        let (kind, ch) = if t.starts_with(Self::BACKTICKS) {
            (FenceKind::Backticks, '`')
        } else if t.starts_with(Self::TILDES) {
            (FenceKind::Tildes, '~')
        } else {
            return None;
        };

        let len = t.len() - t.trim_start_matches(ch).len();
        Some(FenceSig {
            kind,
            len,
            has_info: !t[len..].trim().is_empty(),
        })
    }

    /// The info string of an opening fence line (`rust` in "```rust").
    pub fn info(line: &str) -> Option<&str> {
        let sig = Self::sig(line)?;
        let ch = match sig.kind {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        };
        let info = line.trim().trim_start_matches(ch).trim();
        (!info.is_empty()).then(|| info.split_whitespace().next().unwrap_or(info))
    }

    pub fn closes(open: FenceSig, sig: Option<FenceSig>) -> bool {
        sig.is_some_and(|s| s.kind == open.kind && s.len >= open.len && !s.has_info)
    }
}

/// Fenced code: a raw zone, no block parsing happens inside.
///
/// Fences may contain blank lines, so an unclosed fence pulls following
/// blocks off the queue until it finds its closing line or runs out.
pub struct FencedCodeProcessor;

impl FencedCodeProcessor {
    pub const NAME: &'static str = "fenced_code";
    pub const PRIORITY: f32 = 80.0;
}

impl BlockProcessor for FencedCodeProcessor {
    fn test(&self, _host: &dyn BlockHost, _parent: &Element, block: &str) -> bool {
        block.split('\n').any(|line| CodeFence::sig(line).is_some())
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

        let lines: Vec<&str> = block.split('\n').collect();
        let Some(open_at) = lines.iter().position(|l| CodeFence::sig(l).is_some()) else {
            blocks.push_front(block);
            return Ok(false);
        };
        let open_line = lines[open_at];
        let Some(open) = CodeFence::sig(open_line) else {
            blocks.push_front(block);
            return Ok(false);
        };

        let before = lines[..open_at].join("\n");
        if !before.trim().is_empty() {
            host.parse_blocks(parent, VecDeque::from([before]))?;
        }

        // Gather code lines, pulling further blocks while the fence stays open.
        let mut code: Vec<String> = Vec::new();
        let mut pending: Vec<String> = lines[open_at + 1..].iter().map(|l| l.to_string()).collect();
        let mut after: Option<String> = None;
        loop {
            if let Some(close_at) = pending
                .iter()
                .position(|l| CodeFence::closes(open, CodeFence::sig(l)))
            {
                code.extend(pending.drain(..close_at));
                let rest = pending.split_off(1).join("\n");
                if !rest.is_empty() {
                    after = Some(rest);
                }
                break;
            }
            code.append(&mut pending);
            match blocks.pop_front() {
                Some(next) => {
                    code.push(String::new());
                    pending = next.split('\n').map(str::to_string).collect();
                }
                None => break,
            }
        }

        let mut code_el = Element::new("code");
        if let Some(lang) = CodeFence::info(open_line) {
            code_el.set_attr("class", format!("language-{lang}"));
        }
        let mut text = code.join("\n");
        text.push('\n');
        code_el.text = Some(text);

        parent.append(Element::new("pre")).append(code_el);

        if let Some(rest) = after {
            blocks.push_front(rest);
        }
        Ok(true)
    }
}
