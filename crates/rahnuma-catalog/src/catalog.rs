use std::path::Path;

use rahnuma_model::{Eligibility, Fee, Program, ProgramDetail, ProgramId, University};
use tracing::info;

use crate::error::CatalogError;
use crate::join::build_program_details;
use crate::loaders::{CatalogTables, default_data_root, load_catalog_tables};

/// The in-memory catalog: four immutable base tables plus the denormalized
/// join, computed exactly once at construction.
///
/// A `Catalog` is safe to share read-only across sessions; it has no update
/// operations.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: CatalogTables,
    details: Vec<ProgramDetail>,
}

impl Catalog {
    /// Build a catalog from already-loaded tables, validating the join.
    pub fn from_tables(tables: CatalogTables) -> Result<Self, CatalogError> {
        let details = build_program_details(
            &tables.universities,
            &tables.programs,
            &tables.fees,
            &tables.eligibility,
        )?;
        Ok(Self { tables, details })
    }

    /// Load the seed tables from `root` and build the joined view.
    pub fn load(root: &Path) -> Result<Self, CatalogError> {
        let tables = load_catalog_tables(root)?;
        let catalog = Self::from_tables(tables)?;
        info!(
            universities = catalog.universities().len(),
            programs = catalog.programs().len(),
            root = %root.display(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Load from [`default_data_root`].
    pub fn load_default() -> Result<Self, CatalogError> {
        Self::load(&default_data_root())
    }

    pub fn universities(&self) -> &[University] {
        &self.tables.universities
    }

    pub fn programs(&self) -> &[Program] {
        &self.tables.programs
    }

    pub fn fees(&self) -> &[Fee] {
        &self.tables.fees
    }

    pub fn eligibility(&self) -> &[Eligibility] {
        &self.tables.eligibility
    }

    /// The memoized join result, in program-table order.
    pub fn details(&self) -> &[ProgramDetail] {
        &self.details
    }

    pub fn program_detail(&self, id: ProgramId) -> Option<&ProgramDetail> {
        self.details.iter().find(|detail| detail.program_id == id)
    }
}
