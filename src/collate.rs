//! Name collation for sibling ordering.
//!
//! Approximates a default-locale collator without pulling in locale data.
//! Whitespace, punctuation and symbols sort before digits, and digits before
//! letters. Letters compare case-insensitively, lowercase wins a case-only
//! tie, and raw byte order settles anything left so the ordering is total.

use std::cmp::Ordering;

/// Compare two entry names in locale-style ascending order.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use tree_exporter::collate::compare;
///
/// assert_eq!(compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(compare("a.txt", "A.txt"), Ordering::Less);
/// assert_eq!(compare("foo_bar.rs", "foo.rs"), Ordering::Less);
/// assert_eq!(compare("same", "same"), Ordering::Equal);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    primary(a, b)
        .then_with(|| case_tiebreak(a, b))
        .then_with(|| a.cmp(b))
}

/// ASCII whitespace, punctuation and symbols in default collation order.
const VARIABLE_ORDER: &str = " \t_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary weight of a lowercased character: (group, rank within group).
fn weight(c: char) -> (u8, u32) {
    if let Some(rank) = VARIABLE_ORDER.find(c) {
        (0, rank as u32)
    } else if c.is_ascii_digit() {
        (1, c as u32)
    } else {
        (2, c as u32)
    }
}

fn primary(a: &str, b: &str) -> Ordering {
    let a = a.chars().flat_map(char::to_lowercase).map(weight);
    let b = b.chars().flat_map(char::to_lowercase).map(weight);
    a.cmp(b)
}

/// First position where the names differ only by case: lowercase sorts first.
fn case_tiebreak(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
