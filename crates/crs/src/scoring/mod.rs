//! Comprehensive Ranking System scoring engine.
//!
//! `score` is a pure function: it normalizes the profile, scores the four
//! sections independently and caps each one before summing.

mod additional;
mod human_capital;
pub mod profile;
pub mod result;
mod spouse;
mod tables;
mod transferability;

pub use profile::{CandidateProfile, CanadianEducation, EducationLevel, MAX_AGE, MAX_WORK_YEARS};
pub use result::{
    AdditionalDetails, Breakdown, CoreDetails, CrsResult, ScoreDetails, SecondLanguagePoints,
    SkillPoints, SpouseDetails, TransferabilityDetails,
};

/// Upper bound of the CRS total.
pub const MAX_TOTAL: u16 = tables::TOTAL_CAP;

pub fn score(profile: &CandidateProfile) -> CrsResult {
    let normalized = profile.normalize();

    let core = human_capital::score_core(&normalized);
    let spouse = spouse::score_spouse(&normalized);
    let transferability = transferability::score_transferability(&normalized);
    let additional = additional::score_additional(&normalized);

    let breakdown = Breakdown {
        core: core.capped,
        spouse: spouse.capped,
        transferability: transferability.capped,
        additional: additional.capped,
    };
    let total = (breakdown.core + breakdown.spouse + breakdown.transferability + breakdown.additional)
        .min(tables::TOTAL_CAP);

    CrsResult {
        total,
        breakdown,
        details: ScoreDetails {
            core,
            spouse,
            transferability,
            additional,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{LanguageResult, LanguageScores, LanguageTest};

    #[test]
    fn total_is_the_sum_of_capped_sections() {
        let mut profile = CandidateProfile::new(
            35,
            EducationLevel::TwoYear,
            LanguageResult::new(LanguageTest::Celpip, LanguageScores::uniform(7)),
        );
        profile.sibling_in_canada = true;

        let result = score(&profile);
        let breakdown = result.breakdown;

        assert_eq!(
            result.total,
            breakdown.core + breakdown.spouse + breakdown.transferability + breakdown.additional
        );
        assert_eq!(breakdown.additional, 15);
    }

    #[test]
    fn score_does_not_mutate_its_input() {
        let profile = CandidateProfile::new(
            -4,
            EducationLevel::Phd,
            LanguageResult::new(LanguageTest::Tcf, LanguageScores::uniform(40)),
        );
        let before = profile.clone();

        let first = score(&profile);
        let second = score(&profile);

        assert_eq!(profile, before);
        assert_eq!(first, second);
    }
}
