//! Locale-like string collation.
//!
//! Approximates the root collation browsers use for `localeCompare`:
//! whitespace sorts before punctuation, punctuation before digits, digits
//! before letters. Letters compare case-insensitively first; only when two
//! strings are otherwise equal does case decide, lowercase first.

use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Symbol,
    Digit,
    Letter,
}

fn class_of(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Space
    } else if ch.is_numeric() {
        CharClass::Digit
    } else if ch.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Symbol
    }
}

fn primary_key(ch: char) -> (CharClass, char) {
    let folded = ch.to_lowercase().next().unwrap_or(ch);
    (class_of(ch), folded)
}

/// Compare two strings the way a user-facing sort would.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(primary_key)
        .cmp(b.chars().map(primary_key));
    if primary != Ordering::Equal {
        return primary;
    }
    for (left, right) in a.chars().zip(b.chars()) {
        if left == right {
            continue;
        }
        match (left.is_lowercase(), right.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => return left.cmp(&right),
        }
    }
    a.cmp(b)
}

#[cfg(test)]
#[path = "collate_test.rs"]
mod collate_test;
