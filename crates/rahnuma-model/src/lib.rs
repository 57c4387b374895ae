pub mod detail;
pub mod error;
pub mod ids;
pub mod tables;

pub use detail::ProgramDetail;
pub use error::{ModelError, Result};
pub use ids::{Percentage, ProgramId, UniversityId};
pub use tables::{Eligibility, Fee, Program, University, UniversityType};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn percentage_rejects_out_of_range() {
        assert!(Percentage::new(100).is_ok());
        let error = Percentage::new(101).expect_err("101 must be rejected");
        assert!(matches!(error, ModelError::PercentageOutOfRange(101)));
    }

    #[test]
    fn university_type_parses_case_insensitively() {
        assert_eq!(
            UniversityType::from_str("public").expect("parse public"),
            UniversityType::Public
        );
        assert_eq!(
            UniversityType::from_str(" Private ").expect("parse private"),
            UniversityType::Private
        );
        assert!(UniversityType::from_str("charter").is_err());
    }

    #[test]
    fn detail_serializes() {
        let detail = ProgramDetail {
            program_id: ProgramId::new(1),
            program_name: "Computer Science".to_string(),
            degree_type: "BS".to_string(),
            duration_years: 4,
            university_id: UniversityId::new(1),
            university_name: "COMSATS University".to_string(),
            university_type: UniversityType::Public,
            city: "Lahore".to_string(),
            website: "comsats.edu.pk".to_string(),
            tuition_fee: 120_000,
            admission_fee: 10_000,
            hostel_fee: 30_000,
            min_percentage: Percentage::new(80).expect("valid percentage"),
        };
        let json = serde_json::to_string(&detail).expect("serialize detail");
        let round: ProgramDetail = serde_json::from_str(&json).expect("deserialize detail");
        assert_eq!(round.program_id, detail.program_id);
        assert_eq!(round.min_percentage, detail.min_percentage);
    }

    #[test]
    fn percentage_deserialization_validates() {
        let parsed: Percentage = serde_json::from_str("85").expect("valid percentage");
        assert_eq!(parsed.get(), 85);
        assert!(serde_json::from_str::<Percentage>("150").is_err());
    }
}
