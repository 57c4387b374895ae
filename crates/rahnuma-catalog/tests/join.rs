//! Unit tests for the ProgramDetail join contract.

use rahnuma_catalog::{CatalogError, build_program_details};
use rahnuma_model::{
    Eligibility, Fee, Percentage, Program, ProgramId, University, UniversityId, UniversityType,
};

fn university(id: u32, name: &str, city: &str) -> University {
    University {
        id: UniversityId::new(id),
        name: name.to_string(),
        university_type: UniversityType::Public,
        city: city.to_string(),
        website: format!("{}.edu.pk", name.to_lowercase()),
    }
}

fn program(id: u32, university_id: u32, name: &str) -> Program {
    Program {
        id: ProgramId::new(id),
        university_id: UniversityId::new(university_id),
        name: name.to_string(),
        degree_type: "BS".to_string(),
        duration_years: 4,
    }
}

fn fee(program_id: u32, tuition: u64) -> Fee {
    Fee {
        program_id: ProgramId::new(program_id),
        tuition_fee: tuition,
        admission_fee: 10_000,
        hostel_fee: 30_000,
    }
}

fn eligibility(program_id: u32, min: u8) -> Eligibility {
    Eligibility {
        program_id: ProgramId::new(program_id),
        min_percentage: Percentage::new(min).expect("valid percentage"),
    }
}

#[test]
fn join_preserves_program_order_and_fields() {
    let universities = vec![university(1, "Alpha", "Lahore"), university(2, "Beta", "Karachi")];
    let programs = vec![
        program(10, 2, "Physics"),
        program(11, 1, "Chemistry"),
        program(12, 2, "Mathematics"),
    ];
    let fees = vec![fee(10, 100_000), fee(11, 120_000), fee(12, 90_000)];
    let eligibility = vec![eligibility(10, 70), eligibility(11, 80), eligibility(12, 75)];

    let details = build_program_details(&universities, &programs, &fees, &eligibility)
        .expect("well-formed catalog joins");

    assert_eq!(details.len(), 3);
    let ids: Vec<u32> = details.iter().map(|d| d.program_id.get()).collect();
    assert_eq!(ids, vec![10, 11, 12]);

    let first = &details[0];
    assert_eq!(first.program_name, "Physics");
    assert_eq!(first.university_name, "Beta");
    assert_eq!(first.city, "Karachi");
    assert_eq!(first.tuition_fee, 100_000);
    assert_eq!(first.min_percentage.get(), 70);
}

#[test]
fn join_rejects_unknown_university() {
    let universities = vec![university(1, "Alpha", "Lahore")];
    let programs = vec![program(10, 9, "Physics")];
    let fees = vec![fee(10, 100_000)];
    let eligibility = vec![eligibility(10, 70)];

    let error = build_program_details(&universities, &programs, &fees, &eligibility)
        .expect_err("dangling university reference must fail");
    assert!(matches!(
        error,
        CatalogError::UnknownUniversity { program, university }
            if program == ProgramId::new(10) && university == UniversityId::new(9)
    ));
}

#[test]
fn join_rejects_missing_fee_and_eligibility() {
    let universities = vec![university(1, "Alpha", "Lahore")];
    let programs = vec![program(10, 1, "Physics")];

    let error = build_program_details(&universities, &programs, &[], &[eligibility(10, 70)])
        .expect_err("missing fee row must fail");
    assert!(matches!(error, CatalogError::MissingFee(id) if id == ProgramId::new(10)));

    let error = build_program_details(&universities, &programs, &[fee(10, 100_000)], &[])
        .expect_err("missing eligibility row must fail");
    assert!(matches!(error, CatalogError::MissingEligibility(id) if id == ProgramId::new(10)));
}

#[test]
fn join_rejects_duplicate_ids() {
    let universities = vec![university(1, "Alpha", "Lahore"), university(1, "Beta", "Karachi")];
    let error = build_program_details(&universities, &[], &[], &[])
        .expect_err("duplicate university id must fail");
    assert!(matches!(error, CatalogError::DuplicateUniversity(id) if id == UniversityId::new(1)));

    let universities = vec![university(1, "Alpha", "Lahore")];
    let programs = vec![program(10, 1, "Physics"), program(10, 1, "Physics")];
    let fees = vec![fee(10, 100_000)];
    let eligibility = vec![eligibility(10, 70)];
    let error = build_program_details(&universities, &programs, &fees, &eligibility)
        .expect_err("duplicate program id must fail");
    assert!(matches!(error, CatalogError::DuplicateProgram(id) if id == ProgramId::new(10)));
}

#[test]
fn join_rejects_zero_duration() {
    let universities = vec![university(1, "Alpha", "Lahore")];
    let mut zero = program(10, 1, "Physics");
    zero.duration_years = 0;
    let error =
        build_program_details(&universities, &[zero], &[fee(10, 100_000)], &[eligibility(10, 70)])
            .expect_err("zero duration must fail");
    assert!(matches!(error, CatalogError::ZeroDuration(id) if id == ProgramId::new(10)));
}
