//! Title extraction heuristics
//!
//! Derives a human-readable title from raw prompt text. Input is classified
//! as markup (leading `<`) or plain text, and an ordered chain of named
//! matchers is tried until one yields a non-empty capture. A date-based
//! fallback guarantees the result is never empty.

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum title length in characters before truncation.
pub const MAX_TITLE_CHARS: usize = 50;

/// Marker appended when a title was truncated.
const TRUNCATION_MARKER: &str = "...";

static TITLE_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title element pattern"));

// One pattern per attribute, in priority order: title, name, id, type.
static ROLE_ATTRIBUTES: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["title", "name", "id", "type"]
        .iter()
        .map(|attr| {
            Regex::new(&format!(
                r#"(?is)<[a-z][^>]*\b{attr}\s*=\s*["']?role\b["']?[^>]*>([^<]*)"#
            ))
            .expect("role attribute pattern")
        })
        .collect()
});

static ROLE_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<section\b[^>]*>\s*((?:role|角色)\s*[:：]\s*[^<]*)")
        .expect("role section pattern")
});

static ROLE_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<role\b[^>]*>(.*?)</role>").expect("role element pattern"));

static INTER_TAG_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">([^<>]+)<").expect("inter-tag text pattern"));

// The title element strips only a `Role:` prefix; the role-oriented
// matchers additionally strip `角色:`.
static TITLE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^role\s*[:：]\s*").expect("title prefix pattern"));

static ROLE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:role|角色)\s*[:：]\s*").expect("role prefix pattern"));

static ROLE_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#\s*role\s*[:：]\s*(.*)$").expect("role heading pattern"));

static HEADING_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6}\s+").expect("heading marker pattern"));

static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[*-]\s+").expect("list marker pattern"));

static NUMBERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+").expect("numbered marker pattern"));

/// Extract a display title from raw prompt content.
///
/// Total function: every input produces a non-empty title. When no heuristic
/// matches, a generated `prompt_<date>` title is returned. Results longer
/// than [`MAX_TITLE_CHARS`] characters are truncated and suffixed with `...`
/// (the marker pushes the result past the bound; this matches the shipped
/// dialog behavior and is kept deliberately).
#[must_use]
pub fn extract_title(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return fallback_title();
    }

    let candidate = if trimmed.starts_with('<') {
        run_markup_chain(trimmed)
    } else {
        match_plain_lines(trimmed)
    };

    match candidate {
        Some(title) => clamp_title(&title),
        None => {
            tracing::debug!("no title heuristic matched, using generated title");
            fallback_title()
        }
    }
}

/// Truncate a title to [`MAX_TITLE_CHARS`] characters, appending `...` when
/// truncation occurred.
#[must_use]
pub fn clamp_title(title: &str) -> String {
    let mut chars = title.chars();
    let head: String = chars.by_ref().take(MAX_TITLE_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}{TRUNCATION_MARKER}")
    } else {
        head
    }
}

/// Named matcher: tried in order, first non-empty capture wins.
type Matcher = for<'a> fn(&'a str) -> Option<String>;

const MARKUP_CHAIN: &[(&str, Matcher)] = &[
    ("title-element", match_title_element),
    ("role-attribute", match_role_attribute),
    ("role-section", match_role_section),
    ("role-element", match_role_element),
    ("inter-tag-text", match_inter_tag_text),
];

fn run_markup_chain(content: &str) -> Option<String> {
    for (name, matcher) in MARKUP_CHAIN {
        if let Some(title) = matcher(content) {
            tracing::trace!(matcher = *name, "title heuristic matched");
            return Some(title);
        }
    }
    None
}

/// `<title>…</title>`, with any leading `Role:` prefix stripped.
fn match_title_element(content: &str) -> Option<String> {
    let capture = TITLE_ELEMENT.captures(content)?;
    clean_with(&TITLE_PREFIX, &capture[1])
}

/// Any element whose `title`/`name`/`id`/`type` attribute equals `role`,
/// in that attribute order.
fn match_role_attribute(content: &str) -> Option<String> {
    ROLE_ATTRIBUTES
        .iter()
        .filter_map(|pattern| pattern.captures(content))
        .find_map(|capture| clean_capture(&capture[1]))
}

/// A `<section>` whose immediate text starts with `role:` / `角色:`.
fn match_role_section(content: &str) -> Option<String> {
    let capture = ROLE_SECTION.captures(content)?;
    clean_capture(&capture[1])
}

/// A literal `<role>…</role>` element.
fn match_role_element(content: &str) -> Option<String> {
    let capture = ROLE_ELEMENT.captures(content)?;
    clean_capture(&capture[1])
}

/// First non-empty text segment between a `>` and a `<`.
fn match_inter_tag_text(content: &str) -> Option<String> {
    INTER_TAG_TEXT
        .captures_iter(content)
        .map(|capture| capture[1].trim().to_string())
        .find(|text| !text.is_empty())
}

/// Plain-text path: lines in order, each normalized by the `# Role:` rule or
/// a single leading-marker strip, until one yields a non-empty title.
fn match_plain_lines(content: &str) -> Option<String> {
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let candidate = normalize_line(line);
        if !candidate.is_empty() {
            return Some(candidate);
        }
    }
    None
}

/// Normalize one line. A `# Role:` heading takes the remainder verbatim;
/// otherwise exactly one heading, list, or numbered marker is stripped, in
/// that priority order.
fn normalize_line(line: &str) -> String {
    if let Some(capture) = ROLE_HEADING.captures(line) {
        return capture[1].trim().to_string();
    }
    strip_line_marker(line).trim().to_string()
}

fn strip_line_marker(line: &str) -> &str {
    for marker in [&*HEADING_MARKER, &*LIST_MARKER, &*NUMBERED_MARKER] {
        if let Some(found) = marker.find(line) {
            return &line[found.end()..];
        }
    }
    line
}

/// Trim a capture and strip a leading `role:` / `角色:` prefix; empty
/// results advance the chain.
fn clean_capture(text: &str) -> Option<String> {
    clean_with(&ROLE_PREFIX, text)
}

fn clean_with(prefix: &Regex, text: &str) -> Option<String> {
    let text = prefix.replace(text.trim(), "");
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn fallback_title() -> String {
    format!("prompt_{}", Local::now().format("%Y-%m-%d"))
}
