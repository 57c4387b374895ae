//! The pure filter engine over [`ProgramDetail`] rows.

use serde::Serialize;

use rahnuma_model::{Percentage, ProgramDetail};

/// Optional predicates over the denormalized catalog, ANDed together.
///
/// A `None` field is skipped entirely (matches every row); UI sentinels such
/// as "All" are a harness concern and never reach this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    /// Exact, case-sensitive match on the university city.
    pub city: Option<String>,
    /// Exact match on the degree code (e.g. "BS").
    pub degree_type: Option<String>,
    /// Inclusive upper bound on the annual tuition fee.
    pub max_tuition: Option<u64>,
    /// The candidate's own percentage: a program matches when its
    /// requirement does not exceed this value. Note the direction; this is
    /// "the candidate qualifies", not a lower bound on the requirement.
    pub min_percentage_allowed: Option<Percentage>,
    /// Case-insensitive substring match on the program name.
    pub name_contains: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_degree_type(mut self, degree_type: impl Into<String>) -> Self {
        self.degree_type = Some(degree_type.into());
        self
    }

    pub fn with_max_tuition(mut self, max_tuition: u64) -> Self {
        self.max_tuition = Some(max_tuition);
        self
    }

    pub fn with_min_percentage_allowed(mut self, percentage: Percentage) -> Self {
        self.min_percentage_allowed = Some(percentage);
        self
    }

    /// Set the name query; a blank query is normalized to "no predicate".
    pub fn with_name_contains(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        let trimmed = query.trim();
        self.name_contains = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// True when every predicate is skipped.
    pub fn is_unconstrained(&self) -> bool {
        self.city.is_none()
            && self.degree_type.is_none()
            && self.max_tuition.is_none()
            && self.min_percentage_allowed.is_none()
            && self.name_contains.is_none()
    }

    /// Evaluate all predicates against one row.
    pub fn matches(&self, row: &ProgramDetail) -> bool {
        if let Some(city) = &self.city
            && row.city != *city
        {
            return false;
        }
        if let Some(degree_type) = &self.degree_type
            && row.degree_type != *degree_type
        {
            return false;
        }
        if let Some(max_tuition) = self.max_tuition
            && row.tuition_fee > max_tuition
        {
            return false;
        }
        if let Some(allowed) = self.min_percentage_allowed
            && row.min_percentage > allowed
        {
            return false;
        }
        if let Some(query) = &self.name_contains {
            let query = query.trim();
            if !query.is_empty()
                && !row
                    .program_name
                    .to_lowercase()
                    .contains(&query.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Return the rows matching `criteria`, preserving input order.
///
/// Pure and side-effect free; no matches yields an empty vec, never an
/// error. Sorting is layered on by consumers that need it.
pub fn filter<'a>(rows: &'a [ProgramDetail], criteria: &FilterCriteria) -> Vec<&'a ProgramDetail> {
    rows.iter().filter(|row| criteria.matches(row)).collect()
}
