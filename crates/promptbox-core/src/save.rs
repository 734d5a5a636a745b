//! Save-flow form record
//!
//! The dialog's mutable form state, re-expressed as a caller-owned value.
//! [`SaveForm::finalize`] runs the whole pre-submit pipeline: content check,
//! title derivation, history validation, tag normalization. The resulting
//! [`SaveRequest`] is what the external save endpoint receives; transport is
//! not this crate's concern.

use crate::conversation::{self, Turn};
use crate::error::SaveError;
use crate::title::{clamp_title, extract_title};
use serde::{Deserialize, Serialize};

/// Raw form state as typed by the user. Field values are taken verbatim;
/// nothing is normalized until [`finalize`](Self::finalize).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveForm {
    /// Title field; blank means "derive one from the content".
    pub title: String,
    /// The prompt text being saved.
    pub content: String,
    /// Free-form description.
    pub description: String,
    /// Tag inputs, possibly blank or duplicated.
    pub tags: Vec<String>,
    /// Raw conversation-history JSON; blank means no history.
    pub history: String,
}

/// Submit-ready payload produced from a valid [`SaveForm`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Final title, derived or user-supplied, truncation applied.
    pub title: String,
    /// The prompt text.
    pub content: String,
    /// Trimmed description.
    pub description: String,
    /// Trimmed, deduplicated tags in first-seen order.
    pub tags: Vec<String>,
    /// Decoded conversation history; empty when none was supplied.
    pub history: Vec<Turn>,
}

impl SaveForm {
    /// Run all pre-submit checks and produce the request payload.
    ///
    /// A blank title is derived from the content (always succeeds); an
    /// explicit title is kept, subject to the same truncation rule.
    ///
    /// # Errors
    ///
    /// [`SaveError::EmptyContent`] when there is nothing to save;
    /// [`SaveError::History`] when the attached history fails validation,
    /// which blocks submission.
    pub fn finalize(self) -> Result<SaveRequest, SaveError> {
        if self.content.trim().is_empty() {
            return Err(SaveError::EmptyContent);
        }

        let history = conversation::parse(&self.history)?;

        let trimmed_title = self.title.trim();
        let title = if trimmed_title.is_empty() {
            tracing::debug!("title field blank, deriving from content");
            extract_title(&self.content)
        } else {
            clamp_title(trimmed_title)
        };

        Ok(SaveRequest {
            title,
            content: self.content,
            description: self.description.trim().to_string(),
            tags: normalize_tags(self.tags),
            history,
        })
    }
}

/// Trim tags, drop blanks, and deduplicate while keeping first-seen order.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || normalized.iter().any(|seen| seen == tag) {
            continue;
        }
        normalized.push(tag.to_string());
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Role;
    use crate::error::HistoryError;
    use pretty_assertions::assert_eq;

    fn form_with_content(content: &str) -> SaveForm {
        SaveForm {
            content: content.to_string(),
            ..SaveForm::default()
        }
    }

    #[test]
    fn blank_title_is_derived_from_content() {
        let request = form_with_content("# My Prompt\nbody").finalize().unwrap();
        assert_eq!(request.title, "My Prompt");
    }

    #[test]
    fn explicit_title_kept_and_trimmed() {
        let mut form = form_with_content("body");
        form.title = "  Custom  ".to_string();
        assert_eq!(form.finalize().unwrap().title, "Custom");
    }

    #[test]
    fn explicit_title_subject_to_truncation() {
        let mut form = form_with_content("body");
        form.title = "t".repeat(60);
        let title = form.finalize().unwrap().title;
        assert!(title.ends_with("..."));
        assert_eq!(title.chars().count(), 53);
    }

    #[test]
    fn empty_content_blocks_save() {
        let form = form_with_content("   ");
        assert_eq!(form.finalize(), Err(SaveError::EmptyContent));
    }

    #[test]
    fn invalid_history_blocks_save() {
        let mut form = form_with_content("body");
        form.history = r#"{"not":"an array"}"#.to_string();
        assert_eq!(
            form.finalize(),
            Err(SaveError::History(HistoryError::NotAnArray))
        );
    }

    #[test]
    fn valid_history_decoded_into_request() {
        let mut form = form_with_content("body");
        form.history = r#"[{"role":"user","content":"hi"}]"#.to_string();
        let request = form.finalize().unwrap();
        assert_eq!(
            request.history,
            vec![Turn {
                role: Role::User,
                content: "hi".to_string()
            }]
        );
    }

    #[test]
    fn blank_history_means_none() {
        let request = form_with_content("body").finalize().unwrap();
        assert!(request.history.is_empty());
    }

    #[test]
    fn tags_trimmed_deduplicated_in_order() {
        let mut form = form_with_content("body");
        form.tags = vec![
            " writing ".to_string(),
            String::new(),
            "code".to_string(),
            "writing".to_string(),
        ];
        assert_eq!(form.finalize().unwrap().tags, ["writing", "code"]);
    }

    #[test]
    fn description_trimmed() {
        let mut form = form_with_content("body");
        form.description = "  notes  ".to_string();
        assert_eq!(form.finalize().unwrap().description, "notes");
    }

    #[test]
    fn request_serializes_for_the_save_endpoint() {
        let mut form = form_with_content("body");
        form.title = "T".to_string();
        let json = serde_json::to_value(form.finalize().unwrap()).unwrap();
        assert_eq!(json["title"], "T");
        assert_eq!(json["history"], serde_json::json!([]));
    }
}
