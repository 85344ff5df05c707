/// Folder name used when a title sanitizes down to nothing.
pub const FALLBACK_FOLDER_NAME: &str = "untitled_story";
/// Title used when the story text has no usable first line.
pub const FALLBACK_TITLE: &str = "Untitled Story";
/// Longest folder name produced, in characters.
pub const MAX_FOLDER_NAME_LEN: usize = 50;

const TITLE_PREFIX: &str = "title:";
const FALLBACK_TITLE_WORDS: usize = 5;

/// Title of a generated story.
///
/// Uses the first line when it reads `Title: ...` (any case). Otherwise the
/// first few words of the first line, joined with underscores.
pub fn extract_title(text: &str) -> String {
    let first_line = text.trim().lines().next().unwrap_or("");

    if let Some(prefix) = first_line.get(..TITLE_PREFIX.len()) {
        if prefix.eq_ignore_ascii_case(TITLE_PREFIX) {
            return first_line[TITLE_PREFIX.len()..].trim().to_string();
        }
    }

    let words: Vec<&str> = first_line
        .split_whitespace()
        .take(FALLBACK_TITLE_WORDS)
        .collect();
    if words.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        words.join("_")
    }
}

/// Turn a title into a safe, lowercase folder name.
///
/// Anything other than word characters and `-` becomes `_`, underscore runs
/// collapse to one, and the result is trimmed and capped in length.
pub fn sanitize_folder_name(title: &str) -> String {
    let mut name = String::with_capacity(title.len());
    for c in title.chars() {
        let c = if c.is_alphanumeric() || c == '-' || c == '_' {
            c
        } else {
            '_'
        };
        if c == '_' && name.ends_with('_') {
            continue;
        }
        name.push(c);
    }

    let name: String = name
        .trim_matches('_')
        .to_lowercase()
        .chars()
        .take(MAX_FOLDER_NAME_LEN)
        .collect();

    if name.is_empty() {
        FALLBACK_FOLDER_NAME.to_string()
    } else {
        name
    }
}
