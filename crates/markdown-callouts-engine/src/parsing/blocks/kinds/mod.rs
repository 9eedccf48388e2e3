pub mod block_quote;
pub mod code_fence;
pub mod empty;
pub mod heading;
pub mod paragraph;
pub mod rule;

pub use block_quote::{BlockQuote, BlockQuoteProcessor};
pub use code_fence::{CodeFence, FenceKind, FenceSig, FencedCodeProcessor};
pub use empty::EmptyBlockProcessor;
pub use heading::HashHeadingProcessor;
pub use paragraph::ParagraphProcessor;
pub use rule::HorizontalRuleProcessor;
