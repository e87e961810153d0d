//! Knuth-Morris-Pratt substring matching.
//!
//! The failure table is built once per pattern in O(m); each scan is O(n)
//! and never re-reads text already matched.

/// Longest proper prefix that is also a suffix, for every pattern prefix.
///
/// `table[i]` is the length of that border for `pattern[..=i]`.
pub fn failure_table<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut border = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[border] {
            border += 1;
            table[i] = border;
            i += 1;
        } else if border > 0 {
            border = table[border - 1];
        } else {
            table[i] = 0;
            i += 1;
        }
    }
    table
}

/// Returns the start of the first occurrence of `pattern` in `text`.
///
/// An empty pattern never matches.
pub fn find_with_table<T: PartialEq>(text: &[T], pattern: &[T], table: &[usize]) -> Option<usize> {
    if pattern.is_empty() {
        return None;
    }

    let mut i = 0;
    let mut j = 0;
    while i < text.len() {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == pattern.len() {
                return Some(i - j);
            }
        } else if j > 0 {
            j = table[j - 1];
        } else {
            i += 1;
        }
    }
    None
}

/// Returns whether `pattern` occurs as a contiguous substring of `text`.
///
/// Case-sensitive; `kmp_contains(text, "")` is `false` for every `text`.
pub fn kmp_contains(text: &str, pattern: &str) -> bool {
    KmpPattern::new(pattern).is_found_in(text)
}

/// Pattern with its precomputed failure table, reusable across many texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmpPattern {
    pattern: Vec<u8>,
    table: Vec<usize>,
}

impl KmpPattern {
    pub fn new(pattern: &str) -> Self {
        let pattern = pattern.as_bytes().to_vec();
        let table = failure_table(&pattern);
        Self { pattern, table }
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Byte offset of the first match in `text`.
    ///
    /// UTF-8 is self-synchronizing, so a byte match of a valid pattern always
    /// starts on a char boundary.
    pub fn find_in(&self, text: &str) -> Option<usize> {
        find_with_table(text.as_bytes(), &self.pattern, &self.table)
    }

    pub fn is_found_in(&self, text: &str) -> bool {
        self.find_in(text).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{failure_table, kmp_contains, KmpPattern};

    #[test]
    fn failure_table_matches_known_values() {
        assert_eq!(failure_table(b"ababaca"), vec![0, 0, 1, 2, 3, 0, 1]);
        assert_eq!(failure_table(b"aaaa"), vec![0, 1, 2, 3]);
        assert!(failure_table::<u8>(b"").is_empty());
    }

    #[test]
    fn finds_pattern_after_partial_overlap() {
        assert!(kmp_contains("abababca", "ababca"));
        assert_eq!(KmpPattern::new("ababca").find_in("abababca"), Some(2));
        assert!(!kmp_contains("abababc", "ababca"));
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        assert!(!kmp_contains("anything", ""));
        assert!(!kmp_contains("", ""));
    }

    #[test]
    fn pattern_longer_than_text_never_matches() {
        assert!(!kmp_contains("ab", "abc"));
    }

    #[test]
    fn matches_multibyte_text_on_char_boundaries() {
        let pattern = KmpPattern::new("über");
        assert_eq!(pattern.find_in("grüße über alles"), Some(8));
    }
}
