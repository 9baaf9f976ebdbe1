use super::profile::NormalizedProfile;
use super::result::{SkillPoints, SpouseDetails};
use super::tables::{
    spouse_canadian_work_points, spouse_education_points, spouse_language_points, SPOUSE_CAP,
};

/// Spouse factors only count when the spouse accompanies the applicant.
pub(crate) fn score_spouse(profile: &NormalizedProfile) -> SpouseDetails {
    if !profile.has_spouse {
        return SpouseDetails::default();
    }

    let education = profile
        .spouse_education
        .map_or(0, spouse_education_points);
    let language = profile
        .spouse_language
        .map(|language| SkillPoints::from_levels(language.levels, spouse_language_points))
        .unwrap_or_default();
    let canadian_work = profile
        .spouse_canadian_work
        .map_or(0, spouse_canadian_work_points);

    let subtotal = education + language.total + canadian_work;

    SpouseDetails {
        scored: true,
        education,
        language,
        canadian_work,
        subtotal,
        capped: subtotal.min(SPOUSE_CAP),
    }
}
