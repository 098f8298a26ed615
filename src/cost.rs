/// Cost of inserting or deleting a single character.
pub const GAP_COST: usize = 2;
pub const MATCH_COST: usize = 0;
/// Vowel for vowel, or consonant for consonant.
pub const SAME_CLASS_COST: usize = 1;
/// Vowel for consonant, or the other way round.
pub const CROSS_CLASS_COST: usize = 3;

pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Cost of aligning `x` against `y`. Anything that is not an ASCII vowel
/// counts as a consonant, digits and punctuation included.
pub fn substitution_cost(x: char, y: char) -> usize {
    if x == y {
        MATCH_COST
    } else if is_vowel(x) == is_vowel(y) {
        SAME_CLASS_COST
    } else {
        CROSS_CLASS_COST
    }
}
