//! CSV loaders for the four seed tables.
//!
//! The data root defaults to the repository-level `data/` directory and can
//! be pointed elsewhere with the `RAHNUMA_DATA_DIR` environment variable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::StringRecord;

use rahnuma_model::{
    Eligibility, Fee, Percentage, Program, ProgramId, University, UniversityId, UniversityType,
};

use crate::error::CatalogError;

const DATA_ENV_VAR: &str = "RAHNUMA_DATA_DIR";

pub const UNIVERSITIES_FILE: &str = "universities.csv";
pub const PROGRAMS_FILE: &str = "programs.csv";
pub const FEES_FILE: &str = "fees.csv";
pub const ELIGIBILITY_FILE: &str = "eligibility.csv";

/// The four base tables as loaded, before any join.
#[derive(Debug, Clone)]
pub struct CatalogTables {
    pub universities: Vec<University>,
    pub programs: Vec<Program>,
    pub fees: Vec<Fee>,
    pub eligibility: Vec<Eligibility>,
}

pub fn default_data_root() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

/// Load all four seed tables from `root`.
pub fn load_catalog_tables(root: &Path) -> Result<CatalogTables, CatalogError> {
    let tables = CatalogTables {
        universities: load_universities(&root.join(UNIVERSITIES_FILE))?,
        programs: load_programs(&root.join(PROGRAMS_FILE))?,
        fees: load_fees(&root.join(FEES_FILE))?,
        eligibility: load_eligibility(&root.join(ELIGIBILITY_FILE))?,
    };
    tracing::debug!(
        universities = tables.universities.len(),
        programs = tables.programs.len(),
        fees = tables.fees.len(),
        eligibility = tables.eligibility.len(),
        root = %root.display(),
        "seed tables loaded"
    );
    Ok(tables)
}

pub fn load_universities(path: &Path) -> Result<Vec<University>, CatalogError> {
    read_rows(path, |row| {
        Ok(University {
            id: UniversityId::new(row.number("UniversityID")?),
            name: row.required("Name")?,
            university_type: UniversityType::from_str(&row.required("Type")?)?,
            city: row.required("City")?,
            website: row.required("Website")?,
        })
    })
}

pub fn load_programs(path: &Path) -> Result<Vec<Program>, CatalogError> {
    read_rows(path, |row| {
        Ok(Program {
            id: ProgramId::new(row.number("ProgramID")?),
            university_id: UniversityId::new(row.number("UniversityID")?),
            name: row.required("Name")?,
            degree_type: row.required("DegreeType")?,
            duration_years: row.number("Duration")?,
        })
    })
}

pub fn load_fees(path: &Path) -> Result<Vec<Fee>, CatalogError> {
    read_rows(path, |row| {
        Ok(Fee {
            program_id: ProgramId::new(row.number("ProgramID")?),
            tuition_fee: row.number("TuitionFee")?,
            admission_fee: row.number("AdmissionFee")?,
            hostel_fee: row.number("HostelFee")?,
        })
    })
}

pub fn load_eligibility(path: &Path) -> Result<Vec<Eligibility>, CatalogError> {
    read_rows(path, |row| {
        Ok(Eligibility {
            program_id: ProgramId::new(row.number("ProgramID")?),
            min_percentage: Percentage::new(row.number("MinPercentage")?)?,
        })
    })
}

/// One CSV record with by-name column access.
struct Row<'a> {
    path: &'a Path,
    headers: &'a StringRecord,
    record: &'a StringRecord,
}

impl Row<'_> {
    fn get(&self, column: &str) -> Option<&str> {
        self.headers
            .iter()
            .position(|header| header.trim_matches('\u{feff}') == column)
            .and_then(|index| self.record.get(index))
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    fn required(&self, column: &str) -> Result<String, CatalogError> {
        self.get(column)
            .map(ToString::to_string)
            .ok_or_else(|| CatalogError::MissingColumn {
                path: self.path.to_path_buf(),
                column: column.to_string(),
            })
    }

    fn number<T: FromStr>(&self, column: &str) -> Result<T, CatalogError> {
        let raw = self.required(column)?;
        raw.parse().map_err(|_| CatalogError::InvalidNumber {
            path: self.path.to_path_buf(),
            column: column.to_string(),
            value: raw,
        })
    }
}

fn read_rows<T>(
    path: &Path,
    mut build: impl FnMut(&Row<'_>) -> Result<T, CatalogError>,
) -> Result<Vec<T>, CatalogError> {
    let bytes = std::fs::read(path).map_err(|e| CatalogError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| CatalogError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();

    let mut results = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| CatalogError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let row = Row {
            path,
            headers: &headers,
            record: &record,
        };
        results.push(build(&row)?);
    }
    Ok(results)
}
