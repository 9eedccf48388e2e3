//! # Host Interface
//!
//! The surface a block processor sees of the pipeline that invoked it.
//!
//! Processors call back into their host: text preceding a construct is
//! handed to [`BlockHost::parse_blocks`], nested content to
//! [`BlockHost::parse_chunk`]. The pipeline is therefore not strictly
//! top-down; it round-trips through its processors.
//!
//! ## Parser State
//!
//! The host keeps a stack of [`ParserState`] values describing the container
//! currently being parsed. Mutations go through [`StateGuard`], which resets
//! the state when dropped, so a failed recursive parse can never leave the
//! host believing it is still inside a container.

use std::collections::VecDeque;
use std::ops::{Deref, DerefMut};

use crate::error::ParseError;
use crate::parsing::tree::Element;

/// The container a chunk of text is being parsed inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Content of a plain `>` blockquote.
    BlockQuote,
    /// Body of a callout. Quoted, but not a plain blockquote.
    Callout,
}

/// Capabilities a block processor may use on the pipeline that called it.
pub trait BlockHost {
    /// True when the innermost state is a plain blockquote.
    fn is_inside_blockquote(&self) -> bool {
        self.state() == Some(ParserState::BlockQuote)
    }

    /// True when one more nested [`BlockHost::parse_chunk`] would hit the depth limit.
    fn is_near_recursion_limit(&self) -> bool;

    /// The innermost state, if any.
    fn state(&self) -> Option<ParserState>;

    fn set_state(&mut self, state: ParserState);

    /// Pops the innermost state.
    fn reset_state(&mut self);

    /// Parses already-segmented blocks as document content under `parent`.
    fn parse_blocks(
        &mut self,
        parent: &mut Element,
        blocks: VecDeque<String>,
    ) -> Result<(), ParseError>;

    /// Segments `text` into blocks and parses them under `parent`, one level deeper.
    fn parse_chunk(&mut self, parent: &mut Element, text: &str) -> Result<(), ParseError>;
}

/// Holds a [`ParserState`] on the host for as long as the guard lives.
///
/// Derefs to the host so the recursive call can be made through the guard:
///
/// ```ignore
/// let mut host = StateGuard::enter(host, ParserState::Callout);
/// host.parse_chunk(content, &body)?; // state reset even if this fails
/// ```
pub struct StateGuard<'h> {
    host: &'h mut dyn BlockHost,
}

impl<'h> StateGuard<'h> {
    pub fn enter(host: &'h mut dyn BlockHost, state: ParserState) -> Self {
        host.set_state(state);
        Self { host }
    }
}

impl<'h> Deref for StateGuard<'h> {
    type Target = dyn BlockHost + 'h;

    fn deref(&self) -> &Self::Target {
        &*self.host
    }
}

impl DerefMut for StateGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.host
    }
}

impl Drop for StateGuard<'_> {
    fn drop(&mut self) {
        self.host.reset_state();
    }
}
