//! Tests for the filter engine contract.

#[allow(clippy::wildcard_imports)]
use proptest::prelude::*;

use rahnuma_model::{Percentage, ProgramDetail, ProgramId, UniversityId, UniversityType};
use rahnuma_query::{FilterCriteria, filter};

fn row(id: u32, name: &str, city: &str, degree: &str, tuition: u64, min_pct: u8) -> ProgramDetail {
    ProgramDetail {
        program_id: ProgramId::new(id),
        program_name: name.to_string(),
        degree_type: degree.to_string(),
        duration_years: 4,
        university_id: UniversityId::new(1),
        university_name: "Test University".to_string(),
        university_type: UniversityType::Public,
        city: city.to_string(),
        website: "test.edu.pk".to_string(),
        tuition_fee: tuition,
        admission_fee: 10_000,
        hostel_fee: 30_000,
        min_percentage: Percentage::new(min_pct).expect("valid percentage"),
    }
}

/// A sample catalog shaped like the seed data: Lahore-heavy, one Karachi
/// program.
fn sample_rows() -> Vec<ProgramDetail> {
    vec![
        row(1, "Computer Science", "Lahore", "BS", 120_000, 80),
        row(2, "Software Engineering", "Lahore", "BS", 130_000, 85),
        row(3, "Business Administration", "Lahore", "BBA", 200_000, 70),
        row(4, "Electrical Engineering", "Lahore", "BS", 110_000, 82),
        row(5, "Computer Science", "Karachi", "BS", 180_000, 85),
        row(6, "Data Science", "Lahore", "BS", 150_000, 78),
        row(7, "Economics", "Lahore", "BS", 220_000, 75),
        row(8, "Mechanical Engineering", "Lahore", "BS", 115_000, 80),
    ]
}

fn ids(rows: &[&ProgramDetail]) -> Vec<u32> {
    rows.iter().map(|r| r.program_id.get()).collect()
}

#[test]
fn empty_criteria_is_identity() {
    let rows = sample_rows();
    let matched = filter(&rows, &FilterCriteria::default());
    assert_eq!(matched.len(), rows.len());
    assert_eq!(ids(&matched), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn city_match_is_exact_and_case_sensitive() {
    let rows = sample_rows();
    let matched = filter(&rows, &FilterCriteria::new().with_city("Karachi"));
    assert_eq!(ids(&matched), vec![5]);

    let matched = filter(&rows, &FilterCriteria::new().with_city("karachi"));
    assert!(matched.is_empty());
}

#[test]
fn degree_type_matches_exactly() {
    let rows = sample_rows();
    let matched = filter(&rows, &FilterCriteria::new().with_degree_type("BBA"));
    assert_eq!(ids(&matched), vec![3]);
}

#[test]
fn max_tuition_bound_is_inclusive() {
    let rows = sample_rows();
    let matched = filter(&rows, &FilterCriteria::new().with_max_tuition(150_000));
    assert_eq!(ids(&matched), vec![1, 2, 4, 6, 8]);

    // 149_999 excludes the program sitting exactly on the old bound.
    let matched = filter(&rows, &FilterCriteria::new().with_max_tuition(149_999));
    assert_eq!(ids(&matched), vec![1, 2, 4, 8]);
}

#[test]
fn percentage_filter_keeps_programs_the_candidate_qualifies_for() {
    let rows = sample_rows();
    let allowed = Percentage::new(80).expect("valid percentage");
    let matched = filter(
        &rows,
        &FilterCriteria::new().with_min_percentage_allowed(allowed),
    );
    // Requirement <= 80, never the other direction.
    assert_eq!(ids(&matched), vec![1, 3, 6, 7, 8]);
    for row in &matched {
        assert!(row.min_percentage <= allowed);
    }
}

#[test]
fn name_query_is_case_insensitive_substring() {
    let rows = sample_rows();
    let matched = filter(&rows, &FilterCriteria::new().with_name_contains("engineering"));
    assert_eq!(ids(&matched), vec![2, 4, 8]);

    let matched = filter(&rows, &FilterCriteria::new().with_name_contains("SCIENCE"));
    assert_eq!(ids(&matched), vec![1, 5, 6]);
}

#[test]
fn blank_name_query_matches_all() {
    let rows = sample_rows();
    let criteria = FilterCriteria::new().with_name_contains("   ");
    assert!(criteria.is_unconstrained());
    assert_eq!(filter(&rows, &criteria).len(), rows.len());
}

#[test]
fn empty_stored_name_never_matches_a_query() {
    let rows = vec![row(1, "", "Lahore", "BS", 100_000, 70)];
    let matched = filter(&rows, &FilterCriteria::new().with_name_contains("science"));
    assert!(matched.is_empty());
}

#[test]
fn lahore_budget_scenario_preserves_order() {
    let rows = sample_rows();
    let criteria = FilterCriteria::new()
        .with_city("Lahore")
        .with_max_tuition(150_000);
    let matched = filter(&rows, &criteria);
    assert_eq!(ids(&matched), vec![1, 2, 4, 6, 8]);
    for row in &matched {
        assert_eq!(row.city, "Lahore");
        assert!(row.tuition_fee <= 150_000);
    }
}

#[test]
fn no_matches_is_an_empty_vec() {
    let rows = sample_rows();
    let matched = filter(&rows, &FilterCriteria::new().with_city("Islamabad"));
    assert!(matched.is_empty());
}

fn arbitrary_rows() -> impl Strategy<Value = Vec<ProgramDetail>> {
    prop::collection::vec((any::<u32>(), 0u64..400_000, 0u8..=100), 0..32).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (seed, tuition, pct))| {
                row(
                    index as u32,
                    &format!("Program {seed}"),
                    "Lahore",
                    "BS",
                    tuition,
                    pct,
                )
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn filter_with_no_criteria_returns_every_row(rows in arbitrary_rows()) {
        let matched = filter(&rows, &FilterCriteria::default());
        prop_assert_eq!(matched.len(), rows.len());
    }

    #[test]
    fn max_tuition_matches_exactly_the_affordable_subset(
        rows in arbitrary_rows(),
        bound in 0u64..400_000,
    ) {
        let criteria = FilterCriteria::new().with_max_tuition(bound);
        let matched = filter(&rows, &criteria);
        let expected: Vec<u32> = rows
            .iter()
            .filter(|row| row.tuition_fee <= bound)
            .map(|row| row.program_id.get())
            .collect();
        prop_assert_eq!(ids(&matched), expected);
    }

    #[test]
    fn raising_the_tuition_bound_only_grows_the_result(
        rows in arbitrary_rows(),
        bound in 0u64..399_999,
    ) {
        let tight = filter(&rows, &FilterCriteria::new().with_max_tuition(bound));
        let loose = filter(&rows, &FilterCriteria::new().with_max_tuition(bound + 1));
        let loose_ids = ids(&loose);
        for id in ids(&tight) {
            prop_assert!(loose_ids.contains(&id));
        }
    }

    #[test]
    fn percentage_filter_matches_exactly_the_qualifying_subset(
        rows in arbitrary_rows(),
        allowed in 0u8..=100,
    ) {
        let allowed = Percentage::new(allowed).expect("in range by construction");
        let criteria = FilterCriteria::new().with_min_percentage_allowed(allowed);
        let matched = filter(&rows, &criteria);
        let expected: Vec<u32> = rows
            .iter()
            .filter(|row| row.min_percentage <= allowed)
            .map(|row| row.program_id.get())
            .collect();
        prop_assert_eq!(ids(&matched), expected);
    }
}
