//! Pattern table: one compiled rule per PII category

use std::borrow::Cow;
use std::collections::HashMap;
use std::net::Ipv4Addr;

use lazy_static::lazy_static;
use regex::{Match, Regex};

use crate::Category;

/// Extra acceptance check applied to every regex match.
///
/// The `regex` crate has no look-around, so context that a pattern cannot
/// express (neighbouring separators, octet ranges) lives here as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Accept every regex match
    Any,
    /// Reject a match glued to one of these separators followed by a digit
    Joined(&'static [char]),
    /// Four decimal octets, not preceded by a dot
    Ipv4,
    /// Colon groups with `::` or eight groups, at least one non-zero digit.
    /// A single leading `:` is allowed after a label such as `addr:`.
    Ipv6,
    /// Reject a match directly preceded by a word character
    NotAfterWord,
}

#[derive(Debug)]
pub struct Rule {
    pub category: Category,
    pub pattern: Regex,
    pub boundary: Boundary,
}

lazy_static! {
    static ref RULES: HashMap<Category, Rule> = {
        let mut rules = HashMap::new();

        let mut add = |category, pattern: &str, boundary| {
            rules.insert(
                category,
                Rule {
                    category,
                    pattern: Regex::new(pattern).unwrap(),
                    boundary,
                },
            );
        };

        add(
            Category::UsPhone,
            r"(?:\+1[-.]|\b1[-.])?\b(?:[0-9]{3}-[0-9]{3}-[0-9]{4}|[0-9]{3}\.[0-9]{3}\.[0-9]{4})\b",
            Boundary::Joined(&['-', '.']),
        );
        add(
            Category::Email,
            r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
            Boundary::Any,
        );
        add(Category::Ipv4, r"\b[0-9]+(?:\.[0-9]+)+\b", Boundary::Ipv4);
        add(
            Category::Ipv6,
            r"[0-9A-Fa-f]{0,4}(?::[0-9A-Fa-f]{0,4}){2,7}(?:(?:\.[0-9]{1,3}){3})?",
            Boundary::Ipv6,
        );
        add(Category::Name, r"\b[A-Z][a-z]+ [A-Z][a-z]+\b", Boundary::Any);
        add(
            Category::StreetAddress,
            r"\b[0-9]+(?: [A-Z][a-z]*)* (?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Lane|Ln|Drive|Dr|Court|Ct|Way|Place|Pl|Terrace|Circle)\b",
            Boundary::Any,
        );
        add(
            Category::AccountNumber,
            r"\b[0-9]{2}-[0-9]{6}\b",
            Boundary::Joined(&['-']),
        );
        add(
            Category::CreditCard,
            r"\b[0-9]{4}-[0-9]{4}-[0-9]{4}-[0-9]{4}\b",
            Boundary::Joined(&['-']),
        );
        add(Category::AtHandle, r"@\w+", Boundary::NotAfterWord);
        add(
            Category::Ssn,
            r"\b[0-9]{3}-[0-9]{2}-[0-9]{4}\b",
            Boundary::Joined(&['-']),
        );

        rules
    };
}

/// Look up the compiled rule for a category
pub fn rule(category: Category) -> &'static Rule {
    &RULES[&category]
}

impl Rule {
    /// Accepted matches, left to right, non-overlapping.
    ///
    /// A rejected candidate resumes the search one character after its start,
    /// so a valid match overlapping it is still found.
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Match<'a>> + 'a {
        let mut start = 0;

        std::iter::from_fn(move || {
            while start <= text.len() {
                let m = self.pattern.find_at(text, start)?;

                if self.boundary.accepts(text, &m) {
                    start = m.end();
                    return Some(m);
                }

                start = m.start()
                    + text[m.start()..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
            }
            None
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find_iter(text).next().is_some()
    }

    /// Replace every accepted match with the category placeholder.
    ///
    /// Returns the rewritten text and the number of replacements; the text is
    /// borrowed unchanged when nothing matched.
    pub fn replace_all<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let mut result = String::with_capacity(text.len());
        let mut last = 0;
        let mut count = 0;

        for m in self.find_iter(text) {
            result.push_str(&text[last..m.start()]);
            result.push_str(self.category.placeholder());
            last = m.end();
            count += 1;
        }

        if count == 0 {
            return (Cow::Borrowed(text), 0);
        }

        result.push_str(&text[last..]);
        (Cow::Owned(result), count)
    }
}

impl Boundary {
    fn accepts(&self, text: &str, m: &Match<'_>) -> bool {
        let before = &text[..m.start()];
        let after = &text[m.end()..];

        match self {
            Boundary::Any => true,
            Boundary::Joined(separators) => {
                !glued(before.chars().rev(), separators) && !glued(after.chars(), separators)
            }
            Boundary::Ipv4 => !before.ends_with('.') && m.as_str().parse::<Ipv4Addr>().is_ok(),
            Boundary::Ipv6 => {
                let detached = |c: char| !is_word(c) && c != ':';
                let mut prev = before.chars().rev();
                let leading = match prev.next() {
                    None => true,
                    Some(':') => prev.next().is_none_or(|c| !c.is_ascii_hexdigit() && c != ':'),
                    Some(c) => detached(c),
                };
                let trailing =
                    after.chars().next().is_none_or(detached) && !glued(after.chars(), &['.']);

                leading && trailing && ipv6_shape(m.as_str())
            }
            Boundary::NotAfterWord => before.chars().next_back().is_none_or(|c| !is_word(c)),
        }
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A separator immediately followed by a digit continues the number
fn glued(mut chars: impl Iterator<Item = char>, separators: &[char]) -> bool {
    matches!(
        (chars.next(), chars.next()),
        (Some(sep), Some(c)) if separators.contains(&sep) && c.is_ascii_digit()
    )
}

// Permissive on purpose: repeated `::` still passes. Only the unspecified
// address (all colons or all zeros) is refused outright.
fn ipv6_shape(candidate: &str) -> bool {
    let compressed = candidate.contains("::");
    let groups = candidate.split(':').count();
    let specified = candidate
        .chars()
        .any(|c| c.is_ascii_hexdigit() && c != '0');

    (compressed || groups == 8) && specified
}
