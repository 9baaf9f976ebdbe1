use super::profile::{EducationLevel, NormalizedLanguage, NormalizedProfile};
use super::result::TransferabilityDetails;
use super::tables::{TRANSFERABILITY_CAP, TRANSFERABILITY_SUB_BLOCK_CAP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LanguageTier {
    Below,
    /// CLB 7 or more on every ability.
    Moderate,
    /// CLB 9 or more on every ability.
    High,
}

impl LanguageTier {
    fn of(language: &NormalizedLanguage) -> Self {
        if language.all_at_least(9) {
            LanguageTier::High
        } else if language.all_at_least(7) {
            LanguageTier::Moderate
        } else {
            LanguageTier::Below
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EducationTier {
    Below,
    /// One post-secondary credential of one year or longer.
    Single,
    /// Two or more credentials, or a graduate degree.
    TwoOrMore,
}

impl EducationTier {
    fn of(level: EducationLevel) -> Self {
        match level {
            EducationLevel::None | EducationLevel::HighSchool => EducationTier::Below,
            EducationLevel::OneYear | EducationLevel::TwoYear | EducationLevel::Bachelors => {
                EducationTier::Single
            }
            EducationLevel::TwoOrMore | EducationLevel::Masters | EducationLevel::Phd => {
                EducationTier::TwoOrMore
            }
        }
    }
}

/// Every combination grid shares the same 0/13/25/50 shape:
/// weak on both axes earns 13, strong on one earns 25, strong on both earns 50.
fn combination(strong_first: bool, strong_second: bool) -> u16 {
    match (strong_first, strong_second) {
        (false, false) => 13,
        (true, true) => 50,
        _ => 25,
    }
}

fn education_language(education: EducationTier, language: LanguageTier) -> u16 {
    if education == EducationTier::Below || language == LanguageTier::Below {
        return 0;
    }
    combination(
        education == EducationTier::TwoOrMore,
        language == LanguageTier::High,
    )
}

fn education_canadian_work(education: EducationTier, canadian_years: u8) -> u16 {
    if education == EducationTier::Below || canadian_years == 0 {
        return 0;
    }
    combination(education == EducationTier::TwoOrMore, canadian_years >= 2)
}

fn foreign_work_language(foreign_years: u8, language: LanguageTier) -> u16 {
    if foreign_years == 0 || language == LanguageTier::Below {
        return 0;
    }
    combination(foreign_years >= 3, language == LanguageTier::High)
}

fn foreign_work_canadian_work(foreign_years: u8, canadian_years: u8) -> u16 {
    if foreign_years == 0 || canadian_years == 0 {
        return 0;
    }
    combination(foreign_years >= 3, canadian_years >= 2)
}

fn certificate_points(held: bool, language: &NormalizedLanguage) -> u16 {
    if !held {
        return 0;
    }
    if language.all_at_least(7) {
        50
    } else if language.all_at_least(5) {
        25
    } else {
        0
    }
}

pub(crate) fn score_transferability(profile: &NormalizedProfile) -> TransferabilityDetails {
    let language = LanguageTier::of(&profile.first_language);
    let education = EducationTier::of(profile.education);

    let education_language = education_language(education, language);
    let education_canadian_work = education_canadian_work(education, profile.canadian_work);
    let education_subtotal = education_language + education_canadian_work;
    let education_capped = education_subtotal.min(TRANSFERABILITY_SUB_BLOCK_CAP);

    let foreign_work_language = foreign_work_language(profile.foreign_work, language);
    let foreign_work_canadian_work =
        foreign_work_canadian_work(profile.foreign_work, profile.canadian_work);
    let foreign_work_subtotal = foreign_work_language + foreign_work_canadian_work;
    let foreign_work_capped = foreign_work_subtotal.min(TRANSFERABILITY_SUB_BLOCK_CAP);

    let certificate_of_qualification =
        certificate_points(profile.certificate_of_qualification, &profile.first_language);

    let subtotal = education_capped + foreign_work_capped + certificate_of_qualification;

    TransferabilityDetails {
        education_language,
        education_canadian_work,
        education_subtotal,
        education_capped,
        foreign_work_language,
        foreign_work_canadian_work,
        foreign_work_subtotal,
        foreign_work_capped,
        certificate_of_qualification,
        subtotal,
        capped: subtotal.min(TRANSFERABILITY_CAP),
    }
}
