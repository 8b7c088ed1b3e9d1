use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Orders titles the way a reader expects rather than by code point.
///
/// The primary level ignores accents and case, and puts punctuation and
/// symbols before digits and digits before letters. Remaining ties are broken
/// by accents (unaccented first), then by case (lowercase first at the first
/// differing position), then by code point, so the result is a total order.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    primary_keys(a)
        .cmp(primary_keys(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn primary_keys(title: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (script_class(c), c))
}

fn script_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

fn folded(title: &str) -> impl Iterator<Item = char> + '_ {
    title.nfd().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
