use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::error::ParseError;
use crate::parsing::host::BlockHost;
use crate::parsing::tree::Element;

/// A handler for one kind of block-level syntax.
///
/// The pipeline offers the front of its pending-block queue to each
/// registered processor in priority order. The first processor whose
/// [`test`](BlockProcessor::test) accepts the block and whose
/// [`run`](BlockProcessor::run) returns `Ok(true)` consumes it.
pub trait BlockProcessor {
    /// Cheap acceptance check for `block`, which is still at the front of the queue.
    fn test(&self, host: &dyn BlockHost, parent: &Element, block: &str) -> bool;

    /// Consumes one or more blocks from the front of `blocks`.
    ///
    /// Text left over after the recognised construct is pushed back to the
    /// front of the queue. Returning `Ok(false)` hands the block on to the
    /// next processor.
    fn run(
        &self,
        host: &mut dyn BlockHost,
        parent: &mut Element,
        blocks: &mut VecDeque<String>,
    ) -> Result<bool, ParseError>;
}

#[derive(Clone)]
pub struct RegisteredProcessor {
    pub name: String,
    pub priority: f32,
    pub processor: Rc<dyn BlockProcessor>,
}

impl fmt::Debug for RegisteredProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredProcessor")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Block processors ordered from highest to lowest priority.
///
/// Registering under an existing name replaces that processor. Equal
/// priorities keep registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<RegisteredProcessor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<P>(&mut self, name: impl Into<String>, priority: f32, processor: P)
    where
        P: BlockProcessor + 'static,
    {
        let name = name.into();
        self.deregister(&name);
        self.entries.push(RegisteredProcessor {
            name,
            priority,
            processor: Rc::new(processor),
        });
        self.entries.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    }

    pub fn deregister(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        self.entries.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn priority_of(&self, name: &str) -> Option<f32> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.priority)
    }

    /// Processor names in dispatch order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredProcessor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
