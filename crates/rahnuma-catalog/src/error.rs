#![deny(unsafe_code)]

use std::path::PathBuf;

use rahnuma_model::{ModelError, ProgramId, UniversityId};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("missing column {column} in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("invalid number in {path} column {column}: {value}")]
    InvalidNumber {
        path: PathBuf,
        column: String,
        value: String,
    },

    #[error("duplicate university id {0}")]
    DuplicateUniversity(UniversityId),

    #[error("duplicate program id {0}")]
    DuplicateProgram(ProgramId),

    #[error("duplicate fee row for program {0}")]
    DuplicateFee(ProgramId),

    #[error("duplicate eligibility row for program {0}")]
    DuplicateEligibility(ProgramId),

    #[error("program {program} references unknown university {university}")]
    UnknownUniversity {
        program: ProgramId,
        university: UniversityId,
    },

    #[error("program {0} has no fee row")]
    MissingFee(ProgramId),

    #[error("program {0} has no eligibility row")]
    MissingEligibility(ProgramId),

    #[error("program {0} has zero duration")]
    ZeroDuration(ProgramId),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
