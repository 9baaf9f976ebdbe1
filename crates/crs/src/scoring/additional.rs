use super::profile::{NormalizedLanguage, NormalizedProfile};
use super::result::AdditionalDetails;
use super::tables::{
    canadian_education_points, ADDITIONAL_CAP, FRENCH_ONLY_POINTS, FRENCH_WITH_ENGLISH_POINTS,
    PROVINCIAL_NOMINATION_POINTS, SIBLING_POINTS,
};
use crate::language::LanguageFamily;

/// French bonus: NCLC 7+ on all four French abilities, upgraded when English
/// reaches CLB 5+ on all four. The first result of each family is used.
fn french_language_points(
    first: &NormalizedLanguage,
    second: Option<&NormalizedLanguage>,
) -> u16 {
    let results = || std::iter::once(first).chain(second);
    let french = results().find(|language| language.family == LanguageFamily::French);
    let english = results().find(|language| language.family == LanguageFamily::English);

    match french {
        Some(french) if french.all_at_least(7) => {
            if english.is_some_and(|english| english.all_at_least(5)) {
                FRENCH_WITH_ENGLISH_POINTS
            } else {
                FRENCH_ONLY_POINTS
            }
        }
        _ => 0,
    }
}

pub(crate) fn score_additional(profile: &NormalizedProfile) -> AdditionalDetails {
    let provincial_nomination = if profile.nomination_certificate {
        PROVINCIAL_NOMINATION_POINTS
    } else {
        0
    };
    let french_language =
        french_language_points(&profile.first_language, profile.second_language.as_ref());
    let canadian_education = canadian_education_points(profile.canadian_education);
    let sibling_in_canada = if profile.sibling_in_canada {
        SIBLING_POINTS
    } else {
        0
    };

    let subtotal = provincial_nomination + french_language + canadian_education + sibling_in_canada;

    AdditionalDetails {
        provincial_nomination,
        french_language,
        canadian_education,
        sibling_in_canada,
        subtotal,
        capped: subtotal.min(ADDITIONAL_CAP),
    }
}
