use serde::{Deserialize, Serialize};

use crate::ids::{Percentage, ProgramId, UniversityId};
use crate::tables::UniversityType;

/// One denormalized row of the catalog: a program joined with its university,
/// fee schedule, and eligibility requirement.
///
/// Field names from the source tables are kept disjoint (`program_name` vs
/// `university_name`) so no positional suffixing is needed after the join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramDetail {
    pub program_id: ProgramId,
    pub program_name: String,
    pub degree_type: String,
    pub duration_years: u32,
    pub university_id: UniversityId,
    pub university_name: String,
    pub university_type: UniversityType,
    pub city: String,
    pub website: String,
    pub tuition_fee: u64,
    pub admission_fee: u64,
    pub hostel_fee: u64,
    pub min_percentage: Percentage,
}
