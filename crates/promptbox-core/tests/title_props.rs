use promptbox_core::title::{extract_title, MAX_TITLE_CHARS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_title_never_empty(content in ".*") {
        prop_assert!(!extract_title(&content).is_empty());
    }

    #[test]
    fn prop_title_bounded_unless_marked(content in ".*") {
        let title = extract_title(&content);
        // Truncated titles carry the marker and are allowed past the bound.
        if !title.ends_with("...") {
            prop_assert!(title.chars().count() <= MAX_TITLE_CHARS);
        }
    }

    #[test]
    fn prop_truncated_title_has_fixed_length(content in "[a-zA-Z0-9 ]{60,120}") {
        let title = extract_title(&content);
        if title.ends_with("...") {
            prop_assert_eq!(title.chars().count(), MAX_TITLE_CHARS + 3);
        }
    }

    #[test]
    fn prop_extraction_is_pure(content in ".*") {
        prop_assert_eq!(extract_title(&content), extract_title(&content));
    }

    #[test]
    fn prop_whitespace_input_gets_generated_title(content in "[ \t\r\n]*") {
        let title = extract_title(&content);
        prop_assert!(title.starts_with("prompt_"));
    }
}
