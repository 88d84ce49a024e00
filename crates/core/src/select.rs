use rand::Rng;

/// 32-bit rolling hash over UTF-16 code units: `hash * 31 + unit`, wrapping.
/// Must stay bit-compatible with looks already stored in history.
pub fn rolling_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0_i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

/// Stable index into a table of `len` entries (`len` must be non-zero).
pub fn stable_index(text: &str, len: usize) -> usize {
    rolling_hash(text).unsigned_abs() as usize % len
}

/// Uniform pick from a non-empty slice.
pub fn pick<'a, T, R>(rng: &mut R, items: &'a [T]) -> &'a T
where
    R: Rng + ?Sized,
{
    &items[rng.gen_range(0..items.len())]
}

/// Longest prefix that fits in `units` UTF-16 code units, the unit stored
/// history was truncated in. A `char` that would straddle the limit is dropped.
pub fn truncate_utf16(text: &str, units: usize) -> &str {
    let mut used = 0;
    for (index, ch) in text.char_indices() {
        used += ch.len_utf16();
        if used > units {
            return &text[..index];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn rolling_hash_matches_known_values() {
        assert_eq!(rolling_hash(""), 0);
        assert_eq!(rolling_hash("a"), 97);
        assert_eq!(rolling_hash("ab"), 97 * 31 + 98);
        // Overflows i32 and wraps.
        assert_eq!(rolling_hash("hello world"), 1_794_106_052);
        assert_eq!(rolling_hash("the quick brown fox"), 1_302_335_171);
        assert_eq!(rolling_hash("sunset over the ocean"), -1_260_823_795);
    }

    #[test]
    fn stable_index_is_in_range() {
        for text in ["", "a", "sunset over the ocean", "नमस्ते"] {
            assert!(stable_index(text, 12) < 12);
            assert_eq!(stable_index(text, 12), stable_index(text, 12));
        }
    }

    #[test]
    fn pick_uses_the_rng() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(*pick(&mut rng, &["a", "b", "c"]), "a");
    }

    #[test]
    fn truncation_counts_utf16_units() {
        assert_eq!(truncate_utf16("hello", 3), "hel");
        assert_eq!(truncate_utf16("hi", 30), "hi");
        assert_eq!(truncate_utf16("", 5), "");
        // Vowel signs are separate units.
        assert_eq!(truncate_utf16("निम", 1), "न");
        assert_eq!(truncate_utf16("निम", 2), "नि");
    }

    #[test]
    fn truncation_never_splits_a_surrogate_pair() {
        assert_eq!(truncate_utf16("😀x", 1), "");
        assert_eq!(truncate_utf16("😀x", 2), "😀");
        assert_eq!(truncate_utf16("a😀", 2), "a");
    }
}
