mod catalog;
mod error;
mod join;
mod loaders;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use join::build_program_details;
pub use loaders::{
    CatalogTables, ELIGIBILITY_FILE, FEES_FILE, PROGRAMS_FILE, UNIVERSITIES_FILE,
    default_data_root, load_catalog_tables, load_eligibility, load_fees, load_programs,
    load_universities,
};
