//! Tests for the cost calculator contract.

use rahnuma_model::{Percentage, ProgramDetail, ProgramId, UniversityId, UniversityType};
use rahnuma_query::{AnnualExtras, CostBasis, CostError, compute_cost};

fn basis() -> CostBasis {
    CostBasis {
        tuition_fee: 120_000,
        admission_fee: 10_000,
        hostel_fee: 30_000,
        duration_years: 4,
    }
}

#[test]
fn computes_annual_and_total_cost() {
    let extras = AnnualExtras {
        books: 15_000,
        transport: 30_000,
        misc: 20_000,
    };
    let summary = compute_cost(&basis(), &extras).expect("valid inputs");
    assert_eq!(summary.annual_cost, 215_000);
    assert_eq!(summary.total_cost, 215_000 * 4 + 10_000);
    assert_eq!(summary.total_cost, 870_000);
}

#[test]
fn summary_carries_the_itemized_breakdown() {
    let summary = compute_cost(&basis(), &AnnualExtras::default()).expect("valid inputs");
    assert_eq!(summary.tuition_fee, 120_000);
    assert_eq!(summary.hostel_fee, 30_000);
    assert_eq!(summary.books, 15_000);
    assert_eq!(summary.transport, 30_000);
    assert_eq!(summary.misc, 20_000);
    assert_eq!(summary.admission_fee, 10_000);
    assert_eq!(summary.duration_years, 4);
}

#[test]
fn default_extras_match_the_calculator_defaults() {
    let extras = AnnualExtras::default();
    assert_eq!(extras.books, 15_000);
    assert_eq!(extras.transport, 30_000);
    assert_eq!(extras.misc, 20_000);
}

#[test]
fn zero_duration_is_invalid() {
    let mut basis = basis();
    basis.duration_years = 0;
    let error = compute_cost(&basis, &AnnualExtras::default()).expect_err("zero years");
    assert!(matches!(error, CostError::InvalidDuration { years: 0 }));
}

#[test]
fn negative_extras_are_invalid() {
    for (field, extras) in [
        ("books", AnnualExtras { books: -1, ..AnnualExtras::default() }),
        ("transport", AnnualExtras { transport: -500, ..AnnualExtras::default() }),
        ("misc", AnnualExtras { misc: -20_000, ..AnnualExtras::default() }),
    ] {
        let error = compute_cost(&basis(), &extras).expect_err("negative extra");
        match error {
            CostError::NegativeExtra { field: named, .. } => assert_eq!(named, field),
            other => panic!("expected NegativeExtra, got {other:?}"),
        }
    }
}

#[test]
fn zero_extras_are_valid() {
    let extras = AnnualExtras {
        books: 0,
        transport: 0,
        misc: 0,
    };
    let summary = compute_cost(&basis(), &extras).expect("zero extras are allowed");
    assert_eq!(summary.annual_cost, 150_000);
    assert_eq!(summary.total_cost, 150_000 * 4 + 10_000);
}

#[test]
fn basis_from_program_detail() {
    let detail = ProgramDetail {
        program_id: ProgramId::new(3),
        program_name: "Business Administration".to_string(),
        degree_type: "BBA".to_string(),
        duration_years: 4,
        university_id: UniversityId::new(2),
        university_name: "LUMS".to_string(),
        university_type: UniversityType::Private,
        city: "Lahore".to_string(),
        website: "lums.edu.pk".to_string(),
        tuition_fee: 200_000,
        admission_fee: 15_000,
        hostel_fee: 45_000,
        min_percentage: Percentage::new(70).expect("valid percentage"),
    };
    let basis = CostBasis::from(&detail);
    assert_eq!(basis.tuition_fee, 200_000);
    assert_eq!(basis.admission_fee, 15_000);
    assert_eq!(basis.hostel_fee, 45_000);
    assert_eq!(basis.duration_years, 4);
}
