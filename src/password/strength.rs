//! Password strength scoring.
//!
//! A password earns one point for each satisfied criterion:
//!
//! | Criterion | Point |
//! |---|---|
//! | contains a lowercase letter | 1 |
//! | contains an uppercase letter | 1 |
//! | contains a digit | 1 |
//! | contains a punctuation symbol | 1 |
//! | is at least `min_length` characters long | 1 |

use super::alphabet::CharClass;

/// Highest attainable score.
pub const MAX_SCORE: u8 = 5;

/// Default minimum length for the length criterion.
pub const DEFAULT_MIN_LENGTH: usize = 12;

/// Scoring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrengthCriteria {
    /// Length at which the length criterion is satisfied.
    pub min_length: usize,
}

impl Default for StrengthCriteria {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl StrengthCriteria {
    /// Scores a password given as characters.
    pub fn score_chars(&self, password: &[char]) -> u8 {
        self.report_chars(password).score()
    }

    /// Scores a password.
    pub fn score(&self, password: &str) -> u8 {
        let chars: Vec<char> = password.chars().collect();
        self.score_chars(&chars)
    }

    /// Per-criterion breakdown for a password given as characters.
    pub fn report_chars(&self, password: &[char]) -> StrengthReport {
        let mut report = StrengthReport {
            long_enough: password.len() >= self.min_length,
            ..StrengthReport::default()
        };
        for &c in password {
            match CharClass::of(c) {
                Some(CharClass::Lowercase) => report.has_lowercase = true,
                Some(CharClass::Uppercase) => report.has_uppercase = true,
                Some(CharClass::Digit) => report.has_digit = true,
                Some(CharClass::Punctuation) => report.has_punctuation = true,
                None => {}
            }
        }
        report
    }

    /// Per-criterion breakdown for a password.
    pub fn report(&self, password: &str) -> StrengthReport {
        let chars: Vec<char> = password.chars().collect();
        self.report_chars(&chars)
    }
}

/// Which strength criteria a password satisfies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrengthReport {
    /// At least one lowercase letter.
    pub has_lowercase: bool,
    /// At least one uppercase letter.
    pub has_uppercase: bool,
    /// At least one digit.
    pub has_digit: bool,
    /// At least one punctuation symbol.
    pub has_punctuation: bool,
    /// Meets the minimum length.
    pub long_enough: bool,
}

impl StrengthReport {
    /// Number of satisfied criteria, in `0..=MAX_SCORE`.
    pub fn score(&self) -> u8 {
        [
            self.has_lowercase,
            self.has_uppercase,
            self.has_digit,
            self.has_punctuation,
            self.long_enough,
        ]
        .into_iter()
        .map(u8::from)
        .sum()
    }

    /// Whether every criterion is satisfied.
    pub fn is_max(&self) -> bool {
        self.score() == MAX_SCORE
    }
}

/// Scores a password with the default criteria.
///
/// ```
/// use u_passgen::password::score;
///
/// assert_eq!(score("aB3$aB3$aB3$"), 5);
/// assert_eq!(score("abc"), 1);
/// ```
pub fn score(password: &str) -> u8 {
    StrengthCriteria::default().score(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_each_criterion() {
        let c = StrengthCriteria::default();
        assert_eq!(c.score(""), 0);
        assert_eq!(c.score("a"), 1);
        assert_eq!(c.score("A"), 1);
        assert_eq!(c.score("1"), 1);
        assert_eq!(c.score("#"), 1);
        assert_eq!(c.score("            "), 1);
        assert_eq!(c.score("aA1#"), 4);
        assert_eq!(c.score("aA1#aA1#aA1#"), 5);
    }

    #[test]
    fn test_length_threshold() {
        let c = StrengthCriteria::default();
        assert!(!c.report("aaaaaaaaaaa").long_enough);
        assert!(c.report("aaaaaaaaaaaa").long_enough);
    }

    #[test]
    fn test_single_character_scores_at_most_one() {
        for ch in ['a', 'Z', '0', '!', ' '] {
            assert!(score(&ch.to_string()) <= 1, "{ch:?}");
        }
    }

    #[test]
    fn test_custom_min_length() {
        let c = StrengthCriteria { min_length: 4 };
        assert_eq!(c.score("aA1#"), 5);
        assert!(c.report("aA1#").is_max());
    }

    #[test]
    fn test_report_breakdown() {
        let report = score_report("password1");
        assert!(report.has_lowercase);
        assert!(!report.has_uppercase);
        assert!(report.has_digit);
        assert!(!report.has_punctuation);
        assert!(!report.long_enough);
        assert_eq!(report.score(), 2);
    }

    fn score_report(p: &str) -> StrengthReport {
        StrengthCriteria::default().report(p)
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 12 characters, 24 bytes
        let c = StrengthCriteria::default();
        assert!(!c.report("ééééééééééé").long_enough);
        assert!(c.report("éééééééééééé").long_enough);
    }
}
