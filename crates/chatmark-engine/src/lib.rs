pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use parsing::blocks::{BlockNode, BulletListItem};
pub use parsing::inline::{InlineSpan, tokenize_inline};
pub use parsing::{Document, parse_blocks};
