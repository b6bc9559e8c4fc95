//! String validation functions
//!
//! Lengths are counted in Unicode scalar values, not bytes or UTF-16 units.

/// Non-empty check; whitespace counts as content
pub fn is_present(s: &str) -> bool {
    !s.is_empty()
}

pub fn char_length(s: &str) -> usize {
    s.chars().count()
}

pub fn has_min_length(s: &str, min: usize) -> bool {
    char_length(s) >= min
}

pub fn has_max_length(s: &str, max: usize) -> bool {
    char_length(s) <= max
}

/// Exact equality, no trimming or case folding
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence() {
        assert!(is_present("x"));
        assert!(is_present(" "));
        assert!(!is_present(""));
    }

    #[test]
    fn test_length_validators() {
        assert!(has_min_length("hello", 3));
        assert!(!has_min_length("hi", 3));

        assert!(has_max_length("hello", 10));
        assert!(!has_max_length("verylongstring", 5));
    }

    #[test]
    fn test_length_counts_chars() {
        // 5 chars, 10 bytes
        assert_eq!(char_length("ééééé"), 5);
        assert!(has_max_length("ééééé", 5));
    }

    #[test]
    fn test_length_counts_astral_chars_once() {
        // 4 bytes and 2 UTF-16 units each
        let emoji = "😀".repeat(16);
        assert_eq!(char_length(&emoji), 16);
        assert!(has_max_length(&emoji, 16));
        assert!(!has_max_length(&emoji, 15));
        assert!(has_min_length("😀😀😀😀😀😀😀😀", 8));
    }

    #[test]
    fn test_equality() {
        assert!(equals("Abcdef12", "Abcdef12"));
        assert!(!equals("Abcdef12", "abcdef12"));
        assert!(!equals("Abcdef12", "Abcdef12 "));
    }
}
