use serde::{Deserialize, Serialize};

/// Per-ability points with their sum, kept for audit displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillPoints {
    pub reading: u16,
    pub writing: u16,
    pub listening: u16,
    pub speaking: u16,
    pub total: u16,
}

impl SkillPoints {
    pub(crate) fn from_levels(levels: [u8; 4], points: impl Fn(u8) -> u16) -> Self {
        let [reading, writing, listening, speaking] = levels.map(points);
        Self {
            reading,
            writing,
            listening,
            speaking,
            total: reading + writing + listening + speaking,
        }
    }
}

/// Second-language points before and after the four-skill cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondLanguagePoints {
    pub skills: SkillPoints,
    pub cap: u16,
    pub capped: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreDetails {
    pub age: u16,
    pub education: u16,
    pub first_language: SkillPoints,
    pub second_language: Option<SecondLanguagePoints>,
    pub canadian_work: u16,
    pub subtotal: u16,
    pub cap: u16,
    pub capped: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpouseDetails {
    pub scored: bool,
    pub education: u16,
    pub language: SkillPoints,
    pub canadian_work: u16,
    pub subtotal: u16,
    pub capped: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransferabilityDetails {
    pub education_language: u16,
    pub education_canadian_work: u16,
    pub education_subtotal: u16,
    pub education_capped: u16,
    pub foreign_work_language: u16,
    pub foreign_work_canadian_work: u16,
    pub foreign_work_subtotal: u16,
    pub foreign_work_capped: u16,
    pub certificate_of_qualification: u16,
    pub subtotal: u16,
    pub capped: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdditionalDetails {
    pub provincial_nomination: u16,
    pub french_language: u16,
    pub canadian_education: u16,
    pub sibling_in_canada: u16,
    pub subtotal: u16,
    pub capped: u16,
}

/// Capped contribution of each section to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub core: u16,
    pub spouse: u16,
    pub transferability: u16,
    pub additional: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub core: CoreDetails,
    pub spouse: SpouseDetails,
    pub transferability: TransferabilityDetails,
    pub additional: AdditionalDetails,
}

/// Final CRS total with the itemized trail that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrsResult {
    pub total: u16,
    pub breakdown: Breakdown,
    pub details: ScoreDetails,
}
