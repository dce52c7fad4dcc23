//! Name comparison and matching used by the card views.
//!
//! `natural_cmp` orders names the way a person reading a list expects:
//! case is ignored, accented letters sort with their base letter, and runs
//! of digits compare by numeric value ("Card 2" before "Card 10").

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two names with a case-insensitive, accent-folding natural order.
///
/// Names that only differ by accents are ordered unaccented first. Names that
/// only differ by case compare `Equal`, so a stable sort keeps their source
/// order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let primary = compare_keys(&fold(a), &fold(b));
    if primary != Ordering::Equal {
        return primary;
    }
    compare_keys(&lower(a), &lower(b))
}

/// Case-insensitive substring test. An empty needle always matches.
///
/// Both sides are compared in NFC, so a precomposed "É" and "E" followed by a
/// combining acute are the same text.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    search_key(haystack).contains(&search_key(needle))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Lowercased, decomposed, combining marks dropped.
fn fold(s: &str) -> Vec<char> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn search_key(s: &str) -> String {
    s.to_lowercase().nfc().collect()
}

/// Lowercased and decomposed, accents kept.
fn lower(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn compare_keys(a: &[char], b: &[char]) -> Ordering {
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let end_a = digit_run_end(a, i);
            let end_b = digit_run_end(b, j);
            let ord = compare_digit_runs(&a[i..end_a], &b[j..end_b]);
            if ord != Ordering::Equal {
                return ord;
            }
            i = end_a;
            j = end_b;
            continue;
        }
        let ord = a[i].cmp(&b[j]);
        if ord != Ordering::Equal {
            return ord;
        }
        i += 1;
        j += 1;
    }
    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run_end(s: &[char], start: usize) -> usize {
    s[start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(s.len(), |p| start + p)
}

/// Compare two runs of ASCII digits by value, without parsing (runs may be
/// longer than any integer type).
fn compare_digit_runs(a: &[char], b: &[char]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(run: &[char]) -> &[char] {
    let first = run.iter().position(|&c| c != '0').unwrap_or(run.len());
    &run[first..]
}
