//! Ordering rules for the library.
//!
//! Two orderings live here:
//!
//! - [`extract_sort_key`] derives the page order of image files inside a
//!   gallery from the first parenthesized number in the filename
//!   (`"page (12).jpg"` → 12, no match → 0).
//! - [`natural_cmp`] orders gallery titles so that embedded numbers compare
//!   numerically (`"Title 2"` before `"Title 10"`).

use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;

/// Matches the first `(<digits>)` group in a filename.
static SORT_KEY_RE: OnceLock<Regex> = OnceLock::new();

fn sort_key_re() -> &'static Regex {
    SORT_KEY_RE.get_or_init(|| Regex::new(r"\((\d+)\)").expect("valid sort key pattern"))
}

/// Extract the numeric sort key from an image filename.
///
/// The key is the base-10 value of the first parenthesized digit run, e.g.
/// `"page (12).jpg"` → 12. Filenames without such a group sort as key 0.
/// Digit runs longer than `u64` saturate rather than wrap.
pub fn extract_sort_key(filename: &str) -> u64 {
    let Some(caps) = sort_key_re().captures(filename) else {
        return 0;
    };

    caps[1]
        .bytes()
        .fold(0u64, |n, b| n.saturating_mul(10).saturating_add(u64::from(b - b'0')))
}

/// Compare two titles with numeric-aware ordering.
///
/// Runs of ASCII digits compare by value (leading zeros ignored), other
/// characters compare case-insensitively. Strings that only differ in case
/// or zero-padding fall back to plain ordering so the result is a total
/// order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();

    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_a = take_digit_run(&mut ai);
                    let run_b = take_digit_run(&mut bi);
                    let ord = cmp_digit_runs(&run_a, &run_b);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let ord = x.to_lowercase().cmp(y.to_lowercase());
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    ai.next();
                    bi.next();
                }
            }
        }
    }
}

/// Consume a run of ASCII digits from the iterator.
fn take_digit_run(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compare digit runs by numeric value without parsing into an integer.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

// =============================================================================
// Tests
// =============================================================================
