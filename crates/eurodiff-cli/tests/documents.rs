//! Whole-document runs through the text front end.

use eurodiff_cli::{run_document, split_cases, DocumentError};
use eurodiff_test_utils::{CANONICAL_INPUT, CANONICAL_OUTPUT};
use proptest::prelude::*;

#[test]
fn canonical_document_renders_published_results() {
    assert_eq!(run_document(CANONICAL_INPUT).unwrap(), CANONICAL_OUTPUT);
}

#[test]
fn canonical_document_splits_into_three_cases() {
    let cases = split_cases(CANONICAL_INPUT).unwrap();
    let declared: Vec<i64> = cases.iter().map(|c| c.declared).collect();
    assert_eq!(declared, vec![3, 1, 2]);
    assert!(cases.iter().all(|c| c.records.len() as i64 == c.declared));
}

#[test]
fn invalid_cases_keep_their_numbers() {
    let doc = "\
1
Luxembourg 1 1 1 1
2
Low 1 1 1 1
High 2 2 2 2
2
Short 1 1 1 1
0
";
    let out = run_document(doc).unwrap();
    assert_eq!(
        out,
        "\
Case Number 1
Luxembourg 0
Case Number 2
Validation error: countries without borders: Low, High
Case Number 3
Validation error: count of countries should be 2, but got 1 country lines"
    );
}

#[test]
fn records_after_terminator_are_ignored() {
    let out = run_document("1\nSolo 5 5 5 5\n0\n1\nLate 1 1 1 1\n").unwrap();
    assert_eq!(out, "Case Number 1\nSolo 0");
}

#[test]
fn out_of_range_coordinate_is_reported() {
    let out = run_document("1\nFar 1 1 11 1\n0\n").unwrap();
    assert_eq!(
        out,
        "Case Number 1\nValidation error: higher x coordinate should be <= 10, but got 11 for Far"
    );
}

#[test]
fn wrong_count_reported_before_malformed_record() {
    assert_eq!(
        run_document("2\nBroken 1 1\n0\n").unwrap(),
        "Case Number 1\nValidation error: count of countries should be 2, but got 1 country lines"
    );
}

#[test]
fn first_bad_record_decides_the_error() {
    let doc = format!("2\n{} 1 1 1 1\nBroken 1 1\n0\n", "N".repeat(26));
    let out = run_document(&doc).unwrap();
    assert!(out.starts_with("Case Number 1\nValidation error: maximum length of country name is 25"));
}

#[test]
fn negative_count_fails_only_its_case() {
    let doc = "\
-1
Ghost 1 1 1 1
1
Solo 1 1 1 1
0
";
    assert_eq!(
        run_document(doc).unwrap(),
        "\
Case Number 1
Validation error: count of countries should be -1, but got 1 country lines
Case Number 2
Solo 0"
    );
}

#[test]
fn structural_errors_fail_the_document() {
    assert!(matches!(
        run_document("x\n0\n"),
        Err(DocumentError::BadCount { case: 1, .. })
    ));
    assert_eq!(
        run_document("1\nSolo 1 1 1 1\n"),
        Err(DocumentError::MissingTerminator { cases: 1 })
    );
}

proptest! {
    #[test]
    fn single_cell_cases_complete_on_day_zero(x in 1i32..=10, y in 1i32..=10) {
        let out = run_document(&format!("1\nSolo {x} {y} {x} {y}\n0\n")).unwrap();
        prop_assert_eq!(out, "Case Number 1\nSolo 0");
    }
}
