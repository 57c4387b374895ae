use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::ids::{Percentage, ProgramId, UniversityId};

/// Funding type of a university.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum UniversityType {
    Public,
    Private,
}

impl Serialize for UniversityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl UniversityType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
        }
    }
}

impl fmt::Display for UniversityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UniversityType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        if normalized.eq_ignore_ascii_case("public") {
            Ok(Self::Public)
        } else if normalized.eq_ignore_ascii_case("private") {
            Ok(Self::Private)
        } else {
            Err(ModelError::InvalidUniversityType(s.to_string()))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct University {
    pub id: UniversityId,
    pub name: String,
    pub university_type: UniversityType,
    pub city: String,
    pub website: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub university_id: UniversityId,
    pub name: String,
    /// Degree code as published by the university (e.g. "BS", "BBA").
    pub degree_type: String,
    pub duration_years: u32,
}

/// Itemized annual and one-time charges for a program, in rupees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fee {
    pub program_id: ProgramId,
    pub tuition_fee: u64,
    pub admission_fee: u64,
    pub hostel_fee: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Eligibility {
    pub program_id: ProgramId,
    pub min_percentage: Percentage,
}
