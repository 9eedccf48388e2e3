use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::error::ParseError;
use crate::parsing::host::{BlockHost, ParserState};
use crate::parsing::tree::Element;

/// Create a temporary notes directory with test files
pub fn create_test_notes_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test markdown file with content
pub fn create_test_file(notes_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = notes_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Recording host for exercising processors without a real pipeline.
///
/// Every `parse_blocks` / `parse_chunk` call is logged and appends one `<p>`
/// holding the trimmed text it was given.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub state: Vec<ParserState>,
    pub near_limit: bool,
    pub fail_chunks: bool,
    pub chunks: Vec<String>,
    pub blocks: Vec<String>,
    pub states_seen: Vec<Option<ParserState>>,
}

impl FakeHost {
    /// A host whose `parse_chunk` records the call, then fails.
    pub fn failing() -> Self {
        Self {
            fail_chunks: true,
            ..Self::default()
        }
    }
}

impl BlockHost for FakeHost {
    fn is_near_recursion_limit(&self) -> bool {
        self.near_limit
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
        blocks: VecDeque<String>,
    ) -> Result<(), ParseError> {
        let text = Vec::from(blocks).join("\n\n");
        parent.append(Element::new("p").with_text(text.trim()));
        self.blocks.push(text);
        Ok(())
    }

    fn parse_chunk(&mut self, parent: &mut Element, text: &str) -> Result<(), ParseError> {
        self.chunks.push(text.to_string());
        self.states_seen.push(self.state());
        if self.fail_chunks {
            return Err(ParseError::processor("fake", "parse_chunk failed"));
        }
        parent.append(Element::new("p").with_text(text.trim()));
        Ok(())
    }
}
