//! Promptbox content core
//!
//! The pure logic behind the prompt save dialog:
//!
//! - **Title extraction** ([`title`]): derive a human-readable title from raw
//!   prompt text using an ordered chain of format-sensitive heuristics.
//! - **Conversation validation** ([`conversation`]): check that a pasted chat
//!   history is a well-formed JSON array of role-tagged turns, reporting the
//!   first violation as a value.
//! - **Save flow** ([`save`]): the caller-owned form record that composes both
//!   into a submit-ready request.
//!
//! Everything here is synchronous, side-effect-free, and safe to run on every
//! keystroke. Rendering, navigation, and the HTTP save endpoint are external
//! collaborators.
//!
//! # Example
//!
//! ```rust
//! use promptbox_core::prelude::*;
//!
//! let title = extract_title("# Role: Assistant\nYou are helpful.");
//! assert_eq!(title, "Assistant");
//!
//! let raw = r#"[{"role":"user","content":"hi"}]"#;
//! assert!(conversation::validate(raw).is_ok());
//! ```

// Core modules
pub mod conversation;
pub mod error;
pub mod save;
pub mod title;

// Re-exports for convenience
pub use conversation::{Role, Turn};
pub use error::{HistoryError, SaveError};
pub use save::{SaveForm, SaveRequest};
pub use title::extract_title;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the save flow
    pub use crate::conversation::{self, Role, Turn};
    pub use crate::error::{HistoryError, SaveError};
    pub use crate::save::{SaveForm, SaveRequest};
    pub use crate::title::{extract_title, MAX_TITLE_CHARS};
}
