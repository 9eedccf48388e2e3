/// Failures raised by the block pipeline.
///
/// "No match" is never an error here: processors that do not recognise a
/// block simply decline it and the next processor is tried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Nesting depth {depth} exceeds the limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },
    #[error("Block processor '{name}' failed: {message}")]
    Processor { name: String, message: String },
}

impl ParseError {
    pub fn processor(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Processor {
            name: name.into(),
            message: message.into(),
        }
    }
}
