//! Auxiliary space: full-table variants hold every cell, the rolling variant
//! holds two rows sized by the shorter input.

use super::common::{cycle, pseudo_random};
use delins::distance::{
    memoized, memoized_with_footprint, space_optimized, space_optimized_with_footprint,
    tabulated, tabulated_with_footprint,
};
use delins::Variant;

#[test]
fn rolling_rows_follow_the_shorter_input() {
    let long = pseudo_random(b"ACGT", 20_000, 7);
    let short = pseudo_random(b"ACGT", 40, 11);

    let (forward, f1) = space_optimized_with_footprint(&long, &short);
    let (backward, f2) = space_optimized_with_footprint(&short, &long);

    assert_eq!(forward, backward);
    assert_eq!(f1.cells, 2 * 41);
    assert_eq!(f2.cells, 2 * 41);

    // |m - n| <= d <= m + n, with matching parity
    assert!(forward >= 20_000 - 40 && forward <= 20_040);
    assert_eq!(forward % 2, 20_040 % 2);
}

#[test]
fn full_table_variants_hold_every_cell() {
    let s = cycle(b"AB", 30);
    let t = cycle(b"BCA", 45);

    let (d_table, table) = tabulated_with_footprint(&s, &t);
    let (d_memo, memo) = memoized_with_footprint(&s, &t);
    assert_eq!(d_table, d_memo);
    assert_eq!(table.cells, 31 * 46);
    assert_eq!(memo.cells, 31 * 46);

    let (_, naive) = Variant::Naive.distance_with_footprint(b"AB", b"XYZ");
    assert_eq!(naive.cells, 0);
}

#[test]
fn space_optimized_matches_the_table_on_long_input() {
    let s = pseudo_random(b"ACGT", 1_500, 3);
    let t = pseudo_random(b"ACGT", 1_000, 5);

    let (expected, table) = tabulated_with_footprint(&s, &t);
    let (d, rows) = space_optimized_with_footprint(&s, &t);
    assert_eq!(d, expected);
    assert!(rows.cells * 500 < table.cells);
}

#[test]
fn memoized_survives_recursion_deeper_than_the_call_stack() {
    let s = vec![b'A'; 50_000];
    let t = b"BBB".to_vec();
    assert_eq!(memoized(&s, &t), 50_003);
    assert_eq!(memoized(&t, &s), 50_003);
}

#[test]
fn identical_long_inputs_cost_nothing() {
    let s = pseudo_random(b"ACGT", 5_000, 99);
    assert_eq!(space_optimized(&s, &s), 0);
    assert_eq!(tabulated(&s[..800], &s[..800]), 0);
}
