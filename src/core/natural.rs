//! Natural ("human") string ordering
//!
//! Names are split into alternating runs of ASCII digits and everything
//! else. Digit runs compare by numeric value, other runs compare
//! case-insensitively, so `"Item 2"` sorts before `"Item 10"`.
//!
//! Numeric comparison works on the digit text itself (leading zeros
//! stripped, then length, then digits), so runs of any length are
//! supported without overflow and `"007"` equals `"7"`.

use std::cmp::Ordering;

/// A single run produced by [`runs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

impl<'a> Run<'a> {
    fn as_str(self) -> &'a str {
        match self {
            Run::Digits(s) | Run::Text(s) => s,
        }
    }
}

/// Iterator over digit / non-digit runs, split at every boundary.
struct Runs<'a> {
    rest: &'a str,
}

fn runs(s: &str) -> Runs<'_> {
    Runs { rest: s }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map_or(self.rest.len(), |(idx, _)| idx);

        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits {
            Run::Digits(run)
        } else {
            Run::Text(run)
        })
    }
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_text_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn cmp_runs(a: Run<'_>, b: Run<'_>) -> Ordering {
    match (a, b) {
        (Run::Digits(x), Run::Digits(y)) => cmp_digits(x, y),
        _ => cmp_text_ignore_case(a.as_str(), b.as_str()),
    }
}

/// Compares two names with embedded numbers ordered numerically.
///
/// # Examples
///
/// ```
/// use itemtrack::core::natural::natural_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_cmp("Item 2", "Item 10"), Ordering::Less);
/// assert_eq!(natural_cmp("item 2", "Item 2"), Ordering::Equal);
/// assert_eq!(natural_cmp("Ammo 007", "ammo 7"), Ordering::Equal);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = runs(a);
    let mut right = runs(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match cmp_runs(x, y) {
                Ordering::Equal => {}
                other => return other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_split_at_boundaries() {
        let parts: Vec<_> = runs("Lv12Sword3").collect();
        assert_eq!(
            parts,
            vec![
                Run::Text("Lv"),
                Run::Digits("12"),
                Run::Text("Sword"),
                Run::Digits("3"),
            ]
        );
    }

    #[test]
    fn test_runs_no_digits_is_single_run() {
        let parts: Vec<_> = runs("Wooden Sword").collect();
        assert_eq!(parts, vec![Run::Text("Wooden Sword")]);
    }

    #[test]
    fn test_numeric_ordering() {
        assert_eq!(natural_cmp("Item 2", "Item 10"), Ordering::Less);
        assert_eq!(natural_cmp("Item 10", "Item 2"), Ordering::Greater);
        assert_eq!(natural_cmp("9", "10"), Ordering::Less);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(natural_cmp("item 2", "Item 2"), Ordering::Equal);
        assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn test_leading_zeros_ignored() {
        assert_eq!(natural_cmp("007", "7"), Ordering::Equal);
        assert_eq!(natural_cmp("x000", "x0"), Ordering::Equal);
        assert_eq!(natural_cmp("008", "7"), Ordering::Greater);
    }

    #[test]
    fn test_shorter_prefix_sorts_first() {
        assert_eq!(natural_cmp("Sword", "Sword 2"), Ordering::Less);
        assert_eq!(natural_cmp("Sword 2", "Sword"), Ordering::Greater);
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(natural_cmp("", ""), Ordering::Equal);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn test_huge_numbers_do_not_overflow() {
        let big = "Crate 123456789012345678901234567890";
        let bigger = "Crate 923456789012345678901234567890";
        assert_eq!(natural_cmp(big, bigger), Ordering::Less);
    }

    #[test]
    fn test_digit_run_against_text_run() {
        // Position 0 is digits on one side and text on the other
        assert_eq!(natural_cmp("10 Arrows", "Arrows"), Ordering::Less);
    }
}
