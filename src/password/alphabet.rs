//! Character alphabets for password candidates.

use crate::error::{Error, Result};
use std::collections::HashSet;

/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// ASCII digits.
pub const DIGITS: &str = "0123456789";
/// ASCII punctuation symbols.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Character class counted by the strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharClass {
    /// A lowercase letter.
    Lowercase,
    /// An uppercase letter.
    Uppercase,
    /// A decimal digit.
    Digit,
    /// An ASCII punctuation symbol.
    Punctuation,
}

impl CharClass {
    /// Classifies a character, or `None` if it belongs to no scored class
    /// (whitespace, control characters, non-ASCII symbols).
    pub fn of(c: char) -> Option<Self> {
        if c.is_lowercase() {
            Some(CharClass::Lowercase)
        } else if c.is_uppercase() {
            Some(CharClass::Uppercase)
        } else if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if c.is_ascii_punctuation() {
            Some(CharClass::Punctuation)
        } else {
            None
        }
    }
}

/// An ordered, duplicate-free set of characters that candidates are drawn
/// from.
///
/// ```
/// use u_passgen::password::Alphabet;
///
/// let alphabet = Alphabet::standard();
/// assert_eq!(alphabet.len(), 94);
/// assert!(alphabet.contains('~'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Letters, digits and punctuation: the 94 printable non-space ASCII
    /// characters.
    pub fn standard() -> Self {
        let chars = [LOWERCASE, UPPERCASE, DIGITS, PUNCTUATION]
            .concat()
            .chars()
            .collect();
        Self { chars }
    }

    /// Builds a custom alphabet.
    ///
    /// Fails with [`Error::InvalidAlphabet`] if fewer than two characters are
    /// given or a character repeats. Two distinct characters are needed so
    /// that mutation can always pick a different one.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.len() < 2 {
            return Err(Error::InvalidAlphabet(format!(
                "needs at least 2 characters, got {}",
                chars.len()
            )));
        }
        let mut seen = HashSet::with_capacity(chars.len());
        if let Some(dup) = chars.iter().find(|&&c| !seen.insert(c)) {
            return Err(Error::InvalidAlphabet(format!(
                "duplicate character {dup:?}"
            )));
        }
        Ok(Self { chars })
    }

    /// The characters in order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the alphabet has no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether `c` is part of the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Character classes represented in the alphabet.
    pub fn classes(&self) -> HashSet<CharClass> {
        self.chars.iter().filter_map(|&c| CharClass::of(c)).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_alphabet() {
        let alphabet = Alphabet::standard();
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 32);
        assert!(alphabet.chars().iter().all(|c| c.is_ascii_graphic()));
        assert_eq!(alphabet.classes().len(), 4);
        assert_eq!(alphabet.chars()[0], 'a');
        assert_eq!(*alphabet.chars().last().unwrap(), '~');
    }

    #[test]
    fn test_punctuation_matches_ascii_punctuation() {
        let expected: String = (0u8..128)
            .map(char::from)
            .filter(char::is_ascii_punctuation)
            .collect();
        assert_eq!(PUNCTUATION, expected);
    }

    #[test]
    fn test_classify() {
        assert_eq!(CharClass::of('q'), Some(CharClass::Lowercase));
        assert_eq!(CharClass::of('Q'), Some(CharClass::Uppercase));
        assert_eq!(CharClass::of('7'), Some(CharClass::Digit));
        assert_eq!(CharClass::of('%'), Some(CharClass::Punctuation));
        assert_eq!(CharClass::of(' '), None);
        assert_eq!(CharClass::of('\n'), None);
    }

    #[test]
    fn test_custom_alphabet() {
        let alphabet = Alphabet::new("ab1!".chars()).unwrap();
        assert_eq!(alphabet.len(), 4);
        assert!(!alphabet.is_empty());
        assert!(alphabet.contains('1'));
        assert!(!alphabet.contains('c'));
    }

    #[test]
    fn test_custom_alphabet_too_small() {
        assert!(matches!(
            Alphabet::new("a".chars()),
            Err(Error::InvalidAlphabet(_))
        ));
        assert!(matches!(
            Alphabet::new(std::iter::empty()),
            Err(Error::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn test_custom_alphabet_duplicates() {
        let err = Alphabet::new("abca".chars()).unwrap_err();
        assert_eq!(err, Error::InvalidAlphabet("duplicate character 'a'".into()));
    }
}
