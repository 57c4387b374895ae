use serde::Serialize;

use rahnuma_catalog::Catalog;

/// The four dashboard metric tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub universities: usize,
    pub programs: usize,
    pub matches: usize,
    pub saved: usize,
}

impl DashboardMetrics {
    pub fn new(catalog: &Catalog, matches: usize, saved: usize) -> Self {
        Self {
            universities: catalog.universities().len(),
            programs: catalog.programs().len(),
            matches,
            saved,
        }
    }
}
