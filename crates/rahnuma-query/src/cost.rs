//! Total cost-of-attendance computation for one program.

use serde::Serialize;

use rahnuma_model::ProgramDetail;

/// The catalog-sourced charges a cost computation starts from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CostBasis {
    pub tuition_fee: u64,
    pub admission_fee: u64,
    pub hostel_fee: u64,
    pub duration_years: u32,
}

impl From<&ProgramDetail> for CostBasis {
    fn from(detail: &ProgramDetail) -> Self {
        Self {
            tuition_fee: detail.tuition_fee,
            admission_fee: detail.admission_fee,
            hostel_fee: detail.hostel_fee,
            duration_years: detail.duration_years,
        }
    }
}

/// User-supplied annual costs on top of the catalog charges.
///
/// Signed so that out-of-range input reaches [`compute_cost`] and is rejected
/// there instead of being silently unrepresentable.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnnualExtras {
    pub books: i64,
    pub transport: i64,
    pub misc: i64,
}

impl Default for AnnualExtras {
    fn default() -> Self {
        Self {
            books: 15_000,
            transport: 30_000,
            misc: 20_000,
        }
    }
}

/// Itemized breakdown plus the annual and whole-program totals.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CostSummary {
    pub tuition_fee: u64,
    pub hostel_fee: u64,
    pub books: u64,
    pub transport: u64,
    pub misc: u64,
    pub admission_fee: u64,
    pub duration_years: u32,
    pub annual_cost: u64,
    pub total_cost: u64,
}

/// Input validation failures of the cost calculator.
#[derive(Debug, thiserror::Error)]
pub enum CostError {
    #[error("{field} must not be negative (got {value})")]
    NegativeExtra { field: &'static str, value: i64 },

    #[error("duration must be a positive number of years (got {years})")]
    InvalidDuration { years: u32 },
}

/// Compute the annual and total cost of attendance.
///
/// `annual_cost = tuition + hostel + books + transport + misc`;
/// `total_cost = annual_cost * duration_years + admission_fee`.
/// Pure arithmetic: fails on a negative extra or a zero duration, never
/// mutates anything.
pub fn compute_cost(basis: &CostBasis, extras: &AnnualExtras) -> Result<CostSummary, CostError> {
    if basis.duration_years == 0 {
        return Err(CostError::InvalidDuration {
            years: basis.duration_years,
        });
    }
    let books = non_negative("books", extras.books)?;
    let transport = non_negative("transport", extras.transport)?;
    let misc = non_negative("misc", extras.misc)?;

    let annual_cost = basis.tuition_fee + basis.hostel_fee + books + transport + misc;
    let total_cost = annual_cost * u64::from(basis.duration_years) + basis.admission_fee;

    Ok(CostSummary {
        tuition_fee: basis.tuition_fee,
        hostel_fee: basis.hostel_fee,
        books,
        transport,
        misc,
        admission_fee: basis.admission_fee,
        duration_years: basis.duration_years,
        annual_cost,
        total_cost,
    })
}

fn non_negative(field: &'static str, value: i64) -> Result<u64, CostError> {
    u64::try_from(value).map_err(|_| CostError::NegativeExtra { field, value })
}
