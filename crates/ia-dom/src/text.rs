//! Text emptiness check shared by every blank test.

/// Non-breaking space entity, which counts as whitespace.
const NBSP_ENTITY: &str = "&nbsp;";

/// Whether `text` is empty or whitespace-only.
///
/// Unicode whitespace (including U+00A0) and literal `&nbsp;` entities
/// both count as whitespace.
///
/// ```
/// use ia_dom::is_text_empty;
///
/// assert!(is_text_empty(""));
/// assert!(is_text_empty(" \t\n&nbsp;"));
/// assert!(!is_text_empty("https://example.com"));
/// ```
#[must_use]
pub fn is_text_empty(text: &str) -> bool {
    text.split(NBSP_ENTITY).all(|part| part.trim().is_empty())
}
