//! Pure document decomposition helpers.
//!
//! Decomposition is a function of document length and configuration only,
//! never of model output, so chunk boundaries are deterministic and repeat
//! calls produce identical chunks.

/// Count whitespace-delimited words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split at the word midpoint into exactly two contiguous halves.
///
/// The halves partition the word sequence: concatenating them, modulo the
/// single-space join, yields the original words in order. The split is always
/// two-way and never recurses, however long the document is.
#[must_use]
pub fn split_word_halves(text: &str) -> (String, String) {
    let words: Vec<&str> = text.split_whitespace().collect();
    let midpoint = words.len() / 2;
    (words[..midpoint].join(" "), words[midpoint..].join(" "))
}

/// Partition into fixed-size character windows.
///
/// Each window is `window_chars` characters (the last may be shorter); splits
/// land on character boundaries. Concatenating the windows reconstructs the
/// document exactly. Always returns at least one window.
#[must_use]
pub fn split_char_windows(text: &str, window_chars: usize) -> Vec<String> {
    if window_chars == 0 {
        return vec![text.to_string()];
    }

    let mut windows = Vec::new();
    let mut current = String::new();
    let mut filled = 0;

    for ch in text.chars() {
        current.push(ch);
        filled += 1;
        if filled == window_chars {
            windows.push(std::mem::take(&mut current));
            filled = 0;
        }
    }

    if !current.is_empty() || windows.is_empty() {
        windows.push(current);
    }

    windows
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (0..n)
            .map(|i| format!("w{i}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two  three\n four"), 4);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_halves_partition_word_sequence() {
        let text = words(901);
        let (first, second) = split_word_halves(&text);

        assert_eq!(word_count(&first), 450);
        assert_eq!(word_count(&second), 451);
        assert_eq!(format!("{first} {second}"), text);
    }

    #[test]
    fn test_halves_normalize_whitespace() {
        let (first, second) = split_word_halves("a  b\tc \n d");
        assert_eq!(first, "a b");
        assert_eq!(second, "c d");
    }

    #[test]
    fn test_halves_are_deterministic() {
        let text = words(900);
        assert_eq!(split_word_halves(&text), split_word_halves(&text));
    }

    #[test]
    fn test_windows_reconstruct_document() {
        let text = "abcdef".repeat(1200);
        let windows = split_char_windows(&text, 3000);

        assert_eq!(windows.len(), 3);
        assert_eq!(windows[0].chars().count(), 3000);
        assert_eq!(windows[1].chars().count(), 3000);
        assert_eq!(windows[2].chars().count(), 1200);
        assert_eq!(windows.concat(), text);
    }

    #[test]
    fn test_windows_respect_char_boundaries() {
        let text = "héllo wörld ".repeat(300);
        let windows = split_char_windows(&text, 1000);

        assert!(windows.len() > 1);
        assert_eq!(windows.concat(), text);
    }

    #[test]
    fn test_short_document_is_one_window() {
        let windows = split_char_windows("short text", 3000);
        assert_eq!(windows, vec!["short text".to_string()]);
    }

    #[test]
    fn test_empty_document_still_yields_one_window() {
        let windows = split_char_windows("", 3000);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0], "");
    }
}
