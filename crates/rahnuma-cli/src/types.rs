use serde::Serialize;

use rahnuma_model::{Percentage, ProgramDetail, ProgramId};
use rahnuma_query::{CostSummary, FilterCriteria};
use rahnuma_report::DashboardMetrics;

/// One program as rendered in listings and JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramRow {
    pub program_id: ProgramId,
    pub program: String,
    pub university: String,
    pub city: String,
    pub degree: String,
    pub duration_years: u32,
    pub tuition_fee: u64,
    pub min_percentage: Percentage,
}

impl From<&ProgramDetail> for ProgramRow {
    fn from(detail: &ProgramDetail) -> Self {
        Self {
            program_id: detail.program_id,
            program: detail.program_name.clone(),
            university: detail.university_name.clone(),
            city: detail.city.clone(),
            degree: detail.degree_type.clone(),
            duration_years: detail.duration_years,
            tuition_fee: detail.tuition_fee,
            min_percentage: detail.min_percentage,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub criteria: FilterCriteria,
    pub count: usize,
    pub programs: Vec<ProgramRow>,
}

#[derive(Debug, Serialize)]
pub struct OverviewResult {
    pub metrics: DashboardMetrics,
    pub featured: Vec<ProgramRow>,
}

#[derive(Debug, Serialize)]
pub struct FeeQuote {
    pub program: ProgramRow,
    pub website: String,
    pub cost: CostSummary,
}
