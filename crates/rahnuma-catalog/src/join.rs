//! The ProgramDetail inner join.

use std::collections::{BTreeMap, BTreeSet};

use rahnuma_model::{
    Eligibility, Fee, Program, ProgramDetail, ProgramId, University, UniversityId,
};

use crate::error::CatalogError;

/// Join the four base tables into denormalized [`ProgramDetail`] rows.
///
/// The output preserves the program-table row order. Referential integrity is
/// validated explicitly: a program pointing at a missing university, fee, or
/// eligibility row is an error, never a row with fabricated fields. Duplicate
/// ids in any base table are also rejected, as are zero-duration programs.
pub fn build_program_details(
    universities: &[University],
    programs: &[Program],
    fees: &[Fee],
    eligibility: &[Eligibility],
) -> Result<Vec<ProgramDetail>, CatalogError> {
    let mut university_map: BTreeMap<UniversityId, &University> = BTreeMap::new();
    for university in universities {
        if university_map.insert(university.id, university).is_some() {
            return Err(CatalogError::DuplicateUniversity(university.id));
        }
    }

    let mut fee_map: BTreeMap<ProgramId, &Fee> = BTreeMap::new();
    for fee in fees {
        if fee_map.insert(fee.program_id, fee).is_some() {
            return Err(CatalogError::DuplicateFee(fee.program_id));
        }
    }

    let mut eligibility_map: BTreeMap<ProgramId, &Eligibility> = BTreeMap::new();
    for row in eligibility {
        if eligibility_map.insert(row.program_id, row).is_some() {
            return Err(CatalogError::DuplicateEligibility(row.program_id));
        }
    }

    let mut seen_programs: BTreeSet<ProgramId> = BTreeSet::new();
    let mut details = Vec::with_capacity(programs.len());
    for program in programs {
        if !seen_programs.insert(program.id) {
            return Err(CatalogError::DuplicateProgram(program.id));
        }
        if program.duration_years == 0 {
            return Err(CatalogError::ZeroDuration(program.id));
        }
        let university = university_map.get(&program.university_id).ok_or(
            CatalogError::UnknownUniversity {
                program: program.id,
                university: program.university_id,
            },
        )?;
        let fee = fee_map
            .get(&program.id)
            .ok_or(CatalogError::MissingFee(program.id))?;
        let eligibility = eligibility_map
            .get(&program.id)
            .ok_or(CatalogError::MissingEligibility(program.id))?;

        details.push(ProgramDetail {
            program_id: program.id,
            program_name: program.name.clone(),
            degree_type: program.degree_type.clone(),
            duration_years: program.duration_years,
            university_id: university.id,
            university_name: university.name.clone(),
            university_type: university.university_type,
            city: university.city.clone(),
            website: university.website.clone(),
            tuition_fee: fee.tuition_fee,
            admission_fee: fee.admission_fee,
            hostel_fee: fee.hostel_fee,
            min_percentage: eligibility.min_percentage,
        });
    }
    Ok(details)
}
