//! Table cell text.

use studio_shared::models::FieldValue;

const MAX_CELL_CHARS: usize = 100;
const TRUNCATED_CHARS: usize = 97;
const ELLIPSIS: &str = "...";

/// Plain text of a listing cell.
///
/// Lists (page references, multi-option selections) join with `", "`. Text
/// over 100 characters is cut to 97 plus an ellipsis. Missing values are empty.
pub fn cell_text(value: Option<&FieldValue>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let text = value.display_text();
    if text.chars().count() > MAX_CELL_CHARS {
        let mut cut: String = text.chars().take(TRUNCATED_CHARS).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        text.into_owned()
    }
}
