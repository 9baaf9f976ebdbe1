use crs::batch::{BatchError, CandidateRanker};
use crs::intake::IntakeError;
use std::io::Cursor;

const HEADER: &str = "candidate_id,age,has_spouse,education_level,first_test,first_reading,first_writing,first_listening,first_speaking,canadian_work_experience,sibling_in_canada\n";

fn rank(rows: &str) -> Result<Vec<crs::batch::RankedCandidate>, BatchError> {
    CandidateRanker::default().rank_reader(Cursor::new(format!("{HEADER}{rows}")))
}

#[test]
fn candidates_are_ordered_by_total_descending() {
    let ranked = rank(
        "low,44,false,high_school,celpip,5,5,5,5,0,false\n\
         top,29,false,phd,ielts,9,9,9,9,3,false\n\
         mid,29,false,bachelors,celpip,9,9,9,9,1,false\n",
    )
    .expect("batch ranks");

    let ids: Vec<_> = ranked.iter().map(|c| c.candidate_id.as_str()).collect();
    assert_eq!(ids, ["top", "mid", "low"]);
    assert_eq!(
        ranked.iter().map(|c| c.rank).collect::<Vec<_>>(),
        [1, 2, 3]
    );
    assert_eq!(ranked[1].result.total, 432);
    assert!(ranked.windows(2).all(|pair| pair[0].result.total >= pair[1].result.total));
}

#[test]
fn equal_totals_keep_file_order() {
    let ranked = rank(
        "first,29,false,bachelors,celpip,9,9,9,9,1,false\n\
         second,29,false,bachelors,pte,9,9,9,9,1,false\n\
         third,29,false,bachelors,ielts,9,9,9,9,1,false\n",
    )
    .expect("batch ranks");

    let ids: Vec<_> = ranked.iter().map(|c| c.candidate_id.as_str()).collect();
    assert_eq!(ids, ["first", "second", "third"]);
}

#[test]
fn optional_columns_default_to_absent_factors() {
    let ranked = rank(
        "sibling,29,,bachelors,celpip,9,9,9,9,1,true\n\
         plain,29,,bachelors,celpip,9,9,9,9,,\n",
    )
    .expect("batch ranks");

    assert_eq!(ranked[0].candidate_id, "sibling");
    assert_eq!(ranked[0].result.total, 447);
    assert_eq!(ranked[1].result.total, 379);
}

#[test]
fn invalid_row_reports_its_position() {
    let error = rank(
        "ok,29,false,bachelors,celpip,9,9,9,9,1,false\n\
         bad,29,false,bachelors,celpip,9,13,9,9,1,false\n",
    )
    .expect_err("level above twelve is rejected");

    match error {
        BatchError::Row { row, source } => {
            assert_eq!(row, 2);
            assert!(matches!(source, IntakeError::LevelOutOfRange { .. }));
        }
        other => panic!("expected row error, got {other:?}"),
    }
    assert!(rank("x,29,false,bachelors,celpip,9,13,9,9,1,false\n")
        .expect_err("rejected")
        .to_string()
        .starts_with("row 1:"));
}

#[test]
fn unknown_test_name_is_a_csv_error() {
    let error = rank("x,29,false,bachelors,toefl,9,9,9,9,1,false\n")
        .expect_err("unknown test is rejected");
    assert!(matches!(error, BatchError::Csv(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let error = CandidateRanker::default()
        .rank_path("/nonexistent/candidates.csv")
        .expect_err("missing file");
    assert!(matches!(error, BatchError::Io(_)));
}
