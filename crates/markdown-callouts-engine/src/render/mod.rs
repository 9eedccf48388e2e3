//! Output from the element tree: HTML for publishing, a plain-text outline
//! for the terminal browser.

pub mod html;
pub mod outline;

pub use html::to_html;
pub use outline::outline;
