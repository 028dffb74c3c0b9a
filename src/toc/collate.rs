//! Case-insensitive, number-aware string ordering.
//!
//! Runs of ASCII digits compare by numeric value (`"2" < "10"`). Letters
//! compare by their case-folded base letter, so `"Étape"` files under `e`,
//! and combining marks are ignored. Punctuation sorts before digits and
//! digits before letters. Strings that still tie are ordered by a case
//! tiebreak (lowercase first) and finally by code point, so the result
//! is a total order.

use std::cmp::Ordering;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// A maximal run of ASCII digits, ordered by numeric value.
#[derive(Debug, Clone, Copy)]
struct Digits<'a>(&'a str);

impl Ord for Digits<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_digits(self.0, other.0)
    }
}

impl PartialOrd for Digits<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Digits<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Digits<'_> {}

// Variant order is the collation order between character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Token<'a> {
    Symbol(char),
    Number(Digits<'a>),
    Letter(char),
}

struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let c = loop {
            let c = self.rest.chars().next()?;
            if !is_combining_mark(c) {
                break c;
            }
            self.rest = &self.rest[c.len_utf8()..];
        };

        if c.is_ascii_digit() {
            let end = self
                .rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(self.rest.len());
            let (digits, rest) = self.rest.split_at(end);
            self.rest = rest;
            return Some(Token::Number(Digits(digits)));
        }

        self.rest = &self.rest[c.len_utf8()..];
        if c.is_alphanumeric() {
            Some(Token::Letter(base_letter(c)))
        } else {
            Some(Token::Symbol(fold_case(c)))
        }
    }
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// `c` without accents, case-folded: `'É'` and `'e'` share `'e'`.
fn base_letter(c: char) -> char {
    let mut base = None;
    decompose_canonical(c, |d| {
        if base.is_none() && !is_combining_mark(d) {
            base = Some(d);
        }
    });
    fold_case(base.unwrap_or(c))
}

/// Compares two strings the way a reader expects a file list to be ordered.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let primary = Tokens { rest: a }.cmp(Tokens { rest: b });

    primary.then_with(|| {
        let case_key = |c: char| (c.is_uppercase(), c);
        a.chars().map(case_key).cmp(b.chars().map(case_key))
    })
}

/// Compares two digit strings by value, ignoring leading zeros.
pub fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// The run of ASCII digits at the start of `s`, after optional whitespace.
pub fn leading_number(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    (end > 0).then(|| &s[..end])
}
