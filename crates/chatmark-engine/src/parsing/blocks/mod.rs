//! # Block Parsing
//!
//! Two-phase block parsing over `\n`-separated lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified
//!    independently into a [`LineKind`] containing only local facts
//!    (rule, heading level and rest, bullet content, numbered line,
//!    plain text, blank)
//!
//! 2. **Block Construction** (`builder`): a [`BlockBuilder`] threads the
//!    single piece of cross-line state — the open bullet-list group —
//!    and emits [`BlockNode`]s in source order
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BulletListItem`)
//! - **`kinds`**: Block-specific types with owned markers (Rule, Heading, Bullet, NumberedLine)
//! - **`classify`**: `LineClassifier` produces a `LineKind` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blocks appear in the order of their source lines
//! - A maximal run of consecutive bullet lines becomes exactly one
//!   `BulletList`; any other line kind (blank included) closes the run
//! - Blank lines never emit a node
//! - Classification never fails; every line lands in some `LineKind`

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClassifier, LineKind};
pub use types::{BlockNode, BulletListItem};
