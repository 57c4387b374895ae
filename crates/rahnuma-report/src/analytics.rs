//! Chart-feeding aggregations over the denormalized catalog.
//!
//! Everything here is a pure fold over [`ProgramDetail`] rows; rendering the
//! numbers as a pie, bar, or histogram stays with the presentation layer.

use std::collections::BTreeMap;

use serde::Serialize;

use rahnuma_catalog::Catalog;
use rahnuma_model::{ProgramDetail, University, UniversityType};

/// Mean tuition for one university.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniversityAverage {
    pub university_name: String,
    pub average_tuition: f64,
}

/// One equal-width tuition bucket (bounds inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistogramBin {
    pub lower: u64,
    pub upper: u64,
    pub count: usize,
}

pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Count universities per funding type.
pub fn university_type_counts(universities: &[University]) -> BTreeMap<UniversityType, usize> {
    let mut counts = BTreeMap::new();
    for university in universities {
        *counts.entry(university.university_type).or_insert(0) += 1;
    }
    counts
}

/// Mean tuition per university, ascending by average.
///
/// Universities with equal averages keep alphabetical order.
pub fn average_tuition_by_university(details: &[ProgramDetail]) -> Vec<UniversityAverage> {
    let mut sums: BTreeMap<String, (u64, usize)> = BTreeMap::new();
    for detail in details {
        let entry = sums.entry(detail.university_name.clone()).or_insert((0, 0));
        entry.0 += detail.tuition_fee;
        entry.1 += 1;
    }
    let mut averages: Vec<UniversityAverage> = sums
        .into_iter()
        .map(|(university_name, (sum, count))| UniversityAverage {
            university_name,
            average_tuition: sum as f64 / count as f64,
        })
        .collect();
    averages.sort_by(|a, b| a.average_tuition.total_cmp(&b.average_tuition));
    averages
}

/// Count programs per city, alphabetically keyed.
pub fn programs_by_city(details: &[ProgramDetail]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for detail in details {
        *counts.entry(detail.city.clone()).or_insert(0) += 1;
    }
    counts
}

/// Equal-width tuition-fee buckets covering the observed range.
///
/// Empty input or zero bins yields no buckets; a single distinct fee yields
/// one bucket holding every row.
pub fn tuition_histogram(details: &[ProgramDetail], bins: usize) -> Vec<HistogramBin> {
    if details.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = details.iter().map(|d| d.tuition_fee).min().unwrap_or(0);
    let max = details.iter().map(|d| d.tuition_fee).max().unwrap_or(0);
    let span = max - min + 1;
    let width = span.div_ceil(bins as u64).max(1);
    let bin_count = span.div_ceil(width) as usize;

    let mut buckets: Vec<HistogramBin> = (0..bin_count)
        .map(|index| {
            let lower = min + index as u64 * width;
            HistogramBin {
                lower,
                upper: lower + width - 1,
                count: 0,
            }
        })
        .collect();
    for detail in details {
        let index = ((detail.tuition_fee - min) / width) as usize;
        buckets[index].count += 1;
    }
    buckets
}

/// Everything the analytics page shows, in one serializable payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub university_type_counts: BTreeMap<UniversityType, usize>,
    pub average_tuition_by_university: Vec<UniversityAverage>,
    pub programs_by_city: BTreeMap<String, usize>,
    pub tuition_histogram: Vec<HistogramBin>,
}

impl AnalyticsReport {
    pub fn build(catalog: &Catalog) -> Self {
        let details = catalog.details();
        Self {
            university_type_counts: university_type_counts(catalog.universities()),
            average_tuition_by_university: average_tuition_by_university(details),
            programs_by_city: programs_by_city(details),
            tuition_histogram: tuition_histogram(details, DEFAULT_HISTOGRAM_BINS),
        }
    }
}
