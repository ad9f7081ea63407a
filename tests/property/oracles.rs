//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct ways to get the same number by a different road:
//! the distance is `|S| + |T| - 2·LCS(S, T)`, so anything that finds the
//! longest common subsequence gives the distance too.

use proptest::prelude::*;

use super::common::short_seq;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Longest common subsequence length, classic prefix table.
///
/// Indexes by prefix length, the opposite direction from the suffix-based
/// recurrence the engine uses.
pub fn oracle_lcs(s: &[u8], t: &[u8]) -> usize {
    let mut table = vec![vec![0usize; t.len() + 1]; s.len() + 1];
    for i in 1..=s.len() {
        for j in 1..=t.len() {
            table[i][j] = if s[i - 1] == t[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }
    table[s.len()][t.len()]
}

/// Brute-force LCS: try every subsequence of `s`, keep the longest one that
/// is also a subsequence of `t`.
///
/// O(2^|s|), only for tiny inputs.
pub fn oracle_lcs_brute(s: &[u8], t: &[u8]) -> usize {
    assert!(s.len() <= 16, "brute-force oracle is exponential");
    (0u32..1 << s.len())
        .filter_map(|mask| {
            let picked: Vec<u8> = s
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &c)| c)
                .collect();
            is_subsequence(&picked, t).then_some(picked.len())
        })
        .max()
        .unwrap_or(0)
}

fn is_subsequence(needle: &[u8], haystack: &[u8]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|c| rest.any(|h| h == c))
}

/// Delete/insert distance from the LCS.
pub fn oracle_distance(s: &[u8], t: &[u8]) -> usize {
    s.len() + t.len() - 2 * oracle_lcs(s, t)
}

// =============================================================================
// ORACLE SELF-TESTS
// =============================================================================

#[test]
fn oracle_known_values() {
    assert_eq!(oracle_lcs(b"HELLO", b"WORLD"), 1);
    assert_eq!(oracle_lcs(b"AGGTAB", b"GXTXAYB"), 4);
    assert_eq!(oracle_distance(b"AB", b"XYZ"), 5);
    assert_eq!(oracle_distance(b"", b""), 0);
}

#[test]
fn subsequence_check() {
    assert!(is_subsequence(b"", b""));
    assert!(is_subsequence(b"ACE", b"ABCDE"));
    assert!(!is_subsequence(b"AEC", b"ABCDE"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// The two oracles agree with each other.
    #[test]
    fn prop_lcs_oracles_agree(s in short_seq(), t in short_seq()) {
        prop_assert_eq!(oracle_lcs(&s, &t), oracle_lcs_brute(&s, &t));
    }

    /// LCS can't be longer than either input.
    #[test]
    fn prop_lcs_bounded(s in short_seq(), t in short_seq()) {
        let lcs = oracle_lcs(&s, &t);
        prop_assert!(lcs <= s.len().min(t.len()));
    }
}
