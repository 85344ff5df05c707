//! Splits story text into a fixed number of slide-sized segments.
//!
//! Paragraphs (blocks separated by a blank line) are kept whole whenever the
//! text has at least as many paragraphs as segments requested. Shorter texts
//! fall back to cutting the raw text into equal character runs.

/// Separator placed between paragraphs that share a segment.
pub const PARAGRAPH_JOINER: &str = "\n\n";

/// Divide `text` into exactly `n` ordered segments.
///
/// Never fails: empty text or an `n` larger than the text produces empty
/// segments as padding. `n == 0` yields an empty vector.
pub fn segment(text: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    let paragraphs = paragraphs(text);
    if paragraphs.len() >= n {
        group_paragraphs(&paragraphs, n)
    } else {
        split_by_chars(text, n)
    }
}

/// Non-empty, trimmed paragraphs in reading order.
///
/// Runs of three or more newlines leave a leading newline on the next piece,
/// which trimming removes, so any blank-line run acts as one boundary.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_JOINER)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

fn group_paragraphs(paragraphs: &[&str], n: usize) -> Vec<String> {
    let group_size = paragraphs.len().div_ceil(n);

    let mut parts: Vec<String> = paragraphs
        .chunks(group_size)
        .map(|group| group.join(PARAGRAPH_JOINER))
        .collect();

    // Excess trailing groups are appended to the last kept one, in order.
    if parts.len() > n {
        let excess = parts.split_off(n);
        if let Some(last) = parts.last_mut() {
            for extra in excess {
                last.push_str(PARAGRAPH_JOINER);
                last.push_str(&extra);
            }
        }
    }

    parts.resize(n, String::new());
    parts
}

fn split_by_chars(text: &str, n: usize) -> Vec<String> {
    // Byte offset of every char, plus the end, so slices stay on char boundaries.
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let total = offsets.len() - 1;
    let part_length = total.div_ceil(n);

    let mut parts: Vec<String> = (0..n)
        .map(|i| {
            let start = (i * part_length).min(total);
            let end = ((i + 1) * part_length).min(total);
            text[offsets[start]..offsets[end]].trim().to_string()
        })
        .collect();

    parts.resize(n, String::new());
    parts
}
