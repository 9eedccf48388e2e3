use std::collections::VecDeque;

use crate::error::ParseError;
use crate::parsing::blocks::kinds::BlockQuote;
use crate::parsing::host::{BlockHost, ParserState, StateGuard};
use crate::parsing::tree::Element;

use super::icons::IconTable;
use super::matcher::CalloutMatch;

pub const CALLOUT_CLASS: &str = "callout";
pub const TITLE_CLASS: &str = "callout-title";
pub const ICON_CLASS: &str = "callout-icon";
pub const TITLE_INNER_CLASS: &str = "callout-title-inner";
pub const CONTENT_CLASS: &str = "callout-content";
pub const KIND_ATTR: &str = "data-callout";
pub const FOLD_ATTR: &str = "data-callout-fold";

/// Turns a match into a callout element under `parent`.
///
/// Leading text goes back through the host as ordinary blocks, the body is
/// parsed recursively under [`ParserState::Callout`], and trailing text is
/// queued at the front of `blocks` for another round. Host failures are
/// returned as-is; elements already appended stay in place.
pub fn build(
    host: &mut dyn BlockHost,
    parent: &mut Element,
    blocks: &mut VecDeque<String>,
    callout: &CalloutMatch<'_>,
    icons: &IconTable,
) -> Result<(), ParseError> {
    if !callout.leading.trim().is_empty() {
        host.parse_blocks(parent, VecDeque::from([callout.leading.to_string()]))?;
    }

    let body = BlockQuote::dequote_lines(callout.body);
    let kind = callout.kind_key();

    let mut container = Element::new("div")
        .with_attr("class", CALLOUT_CLASS)
        .with_attr(KIND_ATTR, kind.as_str());
    if let Some(marker) = callout.fold.marker() {
        container.set_attr(FOLD_ATTR, marker.to_string());
    }

    let title = container.append(Element::new("div").with_attr("class", TITLE_CLASS));
    title.append(
        Element::new("div")
            .with_attr("class", ICON_CLASS)
            .with_text(icons.lookup(&kind)),
    );
    title.append(
        Element::new("div")
            .with_attr("class", TITLE_INNER_CLASS)
            .with_text(callout.display_title()),
    );

    let container = parent.append(container);
    log::debug!("callout '{kind}' with {} body bytes", body.len());

    if !body.trim().is_empty() {
        let content = container.append(Element::new("div").with_attr("class", CONTENT_CLASS));
        let mut host = StateGuard::enter(host, ParserState::Callout);
        host.parse_chunk(content, &body)?;
    }

    if !callout.trailing.is_empty() {
        blocks.push_front(callout.trailing.to_string());
    }
    Ok(())
}
