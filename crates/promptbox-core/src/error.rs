//! Error types for the content core
//!
//! Errors are data: the form layer compares them, displays them, and uses
//! presence/absence to gate submission. Nothing here aborts the caller.

/// Errors from conversation-history validation.
///
/// Only the first violation is reported; priority is syntax error, then
/// shape, then per-element checks in order. Element indices are 1-based,
/// matching what the user sees in the dialog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    /// Input is not well-formed JSON; carries the parser's own description.
    #[error("{0}")]
    Syntax(String),

    /// Parsed JSON is not an array.
    #[error("must be an array format")]
    NotAnArray,

    /// Element has no usable `role` or `content` field.
    #[error("message {0} is missing role or content field")]
    MissingField(usize),

    /// Element carries a role outside `user`/`assistant`/`system`.
    #[error("message {0}'s role must be user, assistant, or system")]
    InvalidRole(usize),
}

/// Errors from finalizing the save form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    /// Prompt content was blank; there is nothing to save.
    #[error("prompt content must not be empty")]
    EmptyContent,

    /// Attached conversation history failed validation.
    #[error(transparent)]
    History(#[from] HistoryError),
}
