use super::*;
use crate::test_support::write_temp_file;
use tempfile::TempDir;

#[test]
fn single_problem_slices_to_one_section() {
    let raw = ";;! Begin Problem 1: Add\n(+ 1 2)\n;;! End Problem 1\n";
    let submission = slice_submission(raw).unwrap();

    assert_eq!(submission.full_code, raw);
    assert_eq!(
        submission.sections,
        vec![ProblemSection {
            index: 0,
            code: "(+ 1 2)\n".to_string(),
            start_line: 1,
        }]
    );
}

#[test]
fn well_formed_pairs_yield_zero_based_indices_in_input_order() {
    let raw = "\
;;! Begin Problem 1: Add
(+ 1 2)
;;! End Problem 1

;;! Begin Problem 2: Double
(* 2 x)
;;! End Problem 2
";
    let submission = slice_submission(raw).unwrap();
    let indices: Vec<i64> = submission.sections.iter().map(|s| s.index).collect();
    assert_eq!(indices, [0, 1]);
    assert_eq!(submission.sections[1].start_line, 5);
    assert_eq!(submission.sections[1].code, "(* 2 x)\n");
}

#[test]
fn marker_numbers_are_one_based_and_stored_zero_based() {
    // The off-by-one translation is a contract, asserted explicitly.
    let raw = ";;! Begin Problem 3\nbody\n;;! End Problem 3\n";
    let submission = slice_submission(raw).unwrap();
    assert_eq!(submission.sections[0].index, 2);
    assert!(submission.has_problem(2));
    assert!(!submission.has_problem(0));
}

#[test]
fn blank_gaps_between_problems_are_dropped() {
    let raw = "\n\n;;! Begin Problem 1\nbody\n;;! End Problem 1\n   \n\t\n";
    let submission = slice_submission(raw).unwrap();
    assert_eq!(submission.sections.len(), 1);
    assert_eq!(submission.sections[0].index, 0);
}

#[test]
fn stray_content_outside_problems_is_kept_with_sentinel_index() {
    let raw = "\
#lang htdp/bsl
;;! Begin Problem 1
(+ 1 2)
;;! End Problem 1
; a trailing remark
";
    let submission = slice_submission(raw).unwrap();
    assert_eq!(submission.sections.len(), 3);

    assert_eq!(submission.sections[0].index, OUTSIDE_PROBLEM);
    assert_eq!(submission.sections[0].code, "#lang htdp/bsl\n");
    assert_eq!(submission.sections[0].start_line, 1);

    assert_eq!(submission.sections[2].index, OUTSIDE_PROBLEM);
    assert_eq!(submission.sections[2].code, "; a trailing remark\n");
    assert_eq!(submission.sections[2].start_line, 5);
}

#[test]
fn section_code_keeps_line_terminators_verbatim() {
    let raw = ";;! Begin Problem 1\n(define x\r\n  1)\n\n;;! End Problem 1\n";
    let submission = slice_submission(raw).unwrap();
    assert_eq!(submission.sections[0].code, "(define x\r\n  1)\n\n");
}

#[test]
fn indented_markers_are_recognized() {
    let raw = "  ;;! Begin Problem 1\nbody\n\t;;! End Problem 1\n";
    let submission = slice_submission(raw).unwrap();
    assert_eq!(submission.sections[0].index, 0);
}

#[test]
fn nested_begin_fails_at_the_nested_line() {
    let raw = "\
;;! Begin Problem 1
;;! Begin Problem 2
;;! End Problem 2
;;! End Problem 1
";
    let err = slice_submission(raw).unwrap_err();
    assert_eq!(err, SliceError::MalformedNesting { open: 1, line: 2 });
}

#[test]
fn non_numeric_problem_number_is_rejected() {
    let err = slice_submission(";;! Begin Problem one: Add\n").unwrap_err();
    assert_eq!(
        err,
        SliceError::InvalidProblemNumber {
            token: "one".to_string(),
            line: 1,
        }
    );
}

#[test]
fn zero_problem_number_is_rejected() {
    let err = slice_submission(";;! Begin Problem 0\n").unwrap_err();
    assert_eq!(
        err,
        SliceError::InvalidProblemNumber {
            token: "0".to_string(),
            line: 1,
        }
    );
}

#[test]
fn signed_problem_number_is_rejected() {
    let err = slice_submission(";;! Begin Problem +3\n").unwrap_err();
    assert_eq!(
        err,
        SliceError::InvalidProblemNumber {
            token: "+3".to_string(),
            line: 1,
        }
    );
}

#[test]
fn end_without_begin_fails() {
    let raw = "stray\n;;! End Problem 1\n";
    let err = slice_submission(raw).unwrap_err();
    assert_eq!(err, SliceError::UnmatchedEnd { line: 2 });
}

#[test]
fn mismatched_end_number_fails_at_that_line() {
    let raw = ";;! Begin Problem 1\nbody\n;;! End Problem 2\n";
    let err = slice_submission(raw).unwrap_err();
    assert_eq!(
        err,
        SliceError::MismatchedEnd {
            open: 1,
            found: 2,
            line: 3,
        }
    );
}

#[test]
fn unterminated_problem_fails_at_the_final_line() {
    let raw = ";;! Begin Problem 1\n(+ 1\n   2)\n";
    let err = slice_submission(raw).unwrap_err();
    assert_eq!(err, SliceError::UnterminatedProblem { open: 1, line: 3 });
    assert_eq!(err.line(), 3);
}

#[test]
fn number_parsing_stops_at_colon_or_whitespace() {
    // "1: Add" and "1 Add" both carry problem number 1.
    let submission =
        slice_submission(";;! Begin Problem 1 Add\nbody\n;;! End Problem 1: done\n").unwrap();
    assert_eq!(submission.sections[0].index, 0);
}

#[test]
fn empty_input_yields_no_sections() {
    let submission = slice_submission("").unwrap();
    assert!(submission.sections.is_empty());
    assert_eq!(submission.full_code, "");
}

#[test]
fn lookups_over_sections_are_pure() {
    let raw = "\
;;! Begin Problem 1
a
;;! End Problem 1
;;! Begin Problem 2
b
;;! End Problem 2
";
    let submission = slice_submission(raw).unwrap();

    assert!(submission.has_all_problems(0..2));
    assert!(!submission.has_all_problems(0..3));
    assert_eq!(submission.get_problem(1).unwrap().code, "b\n");
    assert!(submission.get_problem(5).is_none());
}

#[test]
fn slice_file_reads_and_slices() {
    let dir = TempDir::new().unwrap();
    let path = write_temp_file(
        &dir,
        "sub.rkt",
        ";;! Begin Problem 1\n(+ 1 2)\n;;! End Problem 1\n",
    );
    let submission = slice_file(&path).unwrap();
    assert_eq!(submission.sections.len(), 1);
}

#[test]
fn slice_file_surfaces_scan_errors() {
    let dir = TempDir::new().unwrap();
    let path = write_temp_file(&dir, "sub.rkt", ";;! End Problem 1\n");
    let err = slice_file(&path).unwrap_err();
    assert!(err.to_string().contains("can't end a problem"));
}
