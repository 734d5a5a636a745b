//! Conversation-history validation and formatting
//!
//! The save dialog accepts an optional chat history pasted as a JSON array
//! of role-tagged turns. Validation is structural: well-formed JSON, array
//! shape, then per-element field checks, reporting only the first violation
//! with a 1-based index. All operations are pure and single-shot.

use crate::error::HistoryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human side of the conversation.
    User,
    /// The model side of the conversation.
    Assistant,
    /// System instructions preceding the exchange.
    System,
}

impl Role {
    /// Wire spelling of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message in a conversation history. Order is significant and preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who sent this message.
    pub role: Role,
    /// Message text; never empty after validation.
    pub content: String,
}

/// Validate a raw history blob.
///
/// Empty or whitespace-only input is valid (no history supplied). Otherwise
/// the input must parse as a JSON array whose every element carries a usable
/// `role` and `content`. Only the first violation is reported.
///
/// # Errors
///
/// See [`HistoryError`] for the violation kinds and their fixed messages.
pub fn validate(raw: &str) -> Result<(), HistoryError> {
    for_each_turn(raw, |_| {})
}

/// Validate and decode a raw history blob into typed turns.
///
/// Empty input yields an empty history. Non-string `content` values that
/// pass the truthiness check are flattened to their JSON text.
///
/// # Errors
///
/// Same failure modes as [`validate`].
pub fn parse(raw: &str) -> Result<Vec<Turn>, HistoryError> {
    let mut turns = Vec::new();
    for_each_turn(raw, |turn| turns.push(turn))?;
    Ok(turns)
}

/// Re-serialize a history blob with 2-space indentation for display.
///
/// Presentation convenience only: the caller keeps its original text when
/// this fails.
///
/// # Errors
///
/// [`HistoryError::Syntax`] when the input is not valid JSON.
pub fn format(raw: &str) -> Result<String, HistoryError> {
    let value: Value = serde_json::from_str(raw).map_err(syntax_error)?;
    serde_json::to_string_pretty(&value).map_err(syntax_error)
}

fn for_each_turn(raw: &str, mut sink: impl FnMut(Turn)) -> Result<(), HistoryError> {
    if raw.trim().is_empty() {
        return Ok(());
    }

    let value: Value = serde_json::from_str(raw).map_err(syntax_error)?;
    let items = value.as_array().ok_or(HistoryError::NotAnArray)?;

    for (index, item) in items.iter().enumerate() {
        sink(turn_from_value(index + 1, item)?);
    }

    Ok(())
}

/// Check one element; `index` is 1-based for error reporting.
fn turn_from_value(index: usize, item: &Value) -> Result<Turn, HistoryError> {
    let object = item.as_object().ok_or(HistoryError::MissingField(index))?;

    let role = object
        .get("role")
        .filter(|value| is_usable(value))
        .ok_or(HistoryError::MissingField(index))?;
    let content = object
        .get("content")
        .filter(|value| is_usable(value))
        .ok_or(HistoryError::MissingField(index))?;

    let role = match role.as_str() {
        Some("user") => Role::User,
        Some("assistant") => Role::Assistant,
        Some("system") => Role::System,
        _ => return Err(HistoryError::InvalidRole(index)),
    };

    let content = match content {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };

    Ok(Turn { role, content })
}

/// Field presence check: absent, null, `false`, `0`, and `""` all count as
/// missing, matching how the dialog treated its loosely-typed input.
fn is_usable(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn syntax_error(err: serde_json::Error) -> HistoryError {
    HistoryError::Syntax(err.to_string())
}
