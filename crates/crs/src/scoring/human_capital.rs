use super::profile::NormalizedProfile;
use super::result::{CoreDetails, SecondLanguagePoints, SkillPoints};
use super::tables::{
    age_points, canadian_work_points, education_points, first_language_points,
    second_language_points, CORE_CAP_SINGLE, CORE_CAP_WITH_SPOUSE, SECOND_LANGUAGE_CAP_SINGLE,
    SECOND_LANGUAGE_CAP_WITH_SPOUSE,
};

pub(crate) fn score_core(profile: &NormalizedProfile) -> CoreDetails {
    let has_spouse = profile.has_spouse;

    let age = age_points(profile.age, has_spouse);
    let education = education_points(profile.education, has_spouse);
    let first_language = SkillPoints::from_levels(profile.first_language.levels, |level| {
        first_language_points(level, has_spouse)
    });

    let second_language = profile.second_language.map(|language| {
        let skills = SkillPoints::from_levels(language.levels, second_language_points);
        let cap = if has_spouse {
            SECOND_LANGUAGE_CAP_WITH_SPOUSE
        } else {
            SECOND_LANGUAGE_CAP_SINGLE
        };
        SecondLanguagePoints {
            skills,
            cap,
            capped: skills.total.min(cap),
        }
    });

    let canadian_work = canadian_work_points(profile.canadian_work, has_spouse);

    let subtotal = age
        + education
        + first_language.total
        + second_language.map_or(0, |points| points.capped)
        + canadian_work;
    let cap = if has_spouse {
        CORE_CAP_WITH_SPOUSE
    } else {
        CORE_CAP_SINGLE
    };

    CoreDetails {
        age,
        education,
        first_language,
        second_language,
        canadian_work,
        subtotal,
        cap,
        capped: subtotal.min(cap),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{LanguageResult, LanguageScores, LanguageTest};
    use crate::scoring::profile::{CandidateProfile, EducationLevel};

    fn profile(has_spouse: bool) -> CandidateProfile {
        let mut profile = CandidateProfile::new(
            29,
            EducationLevel::Bachelors,
            LanguageResult::new(LanguageTest::Celpip, LanguageScores::uniform(9)),
        );
        profile.has_spouse = has_spouse;
        profile.canadian_work_experience = 1;
        profile
    }

    #[test]
    fn single_applicant_core_matches_published_grid() {
        let details = score_core(&profile(false).normalize());

        assert_eq!(details.age, 110);
        assert_eq!(details.education, 120);
        assert_eq!(details.first_language.total, 124);
        assert_eq!(details.canadian_work, 40);
        assert_eq!(details.subtotal, 394);
        assert_eq!(details.capped, 394);
        assert!(details.second_language.is_none());
    }

    #[test]
    fn second_language_is_capped_for_spouse_status() {
        let mut single = profile(false);
        single.second_language = Some(LanguageResult::new(
            LanguageTest::Tef,
            LanguageScores::uniform(10),
        ));
        let mut partnered = single.clone();
        partnered.has_spouse = true;

        let single_points = score_core(&single.normalize())
            .second_language
            .expect("second language scored");
        let partnered_points = score_core(&partnered.normalize())
            .second_language
            .expect("second language scored");

        assert_eq!(single_points.skills.total, 24);
        assert_eq!(single_points.capped, 24);
        assert_eq!(partnered_points.skills.total, 24);
        assert_eq!(partnered_points.capped, 22);
    }

    #[test]
    fn strongest_partnered_profile_reaches_the_section_ceiling() {
        let mut strong = profile(true);
        strong.education_level = EducationLevel::Phd;
        strong.first_language.scores = LanguageScores::uniform(12);
        strong.canadian_work_experience = 5;
        strong.second_language = Some(LanguageResult::new(
            LanguageTest::Tcf,
            LanguageScores::uniform(12),
        ));

        let details = score_core(&strong.normalize());

        assert_eq!(details.subtotal, CORE_CAP_WITH_SPOUSE);
        assert_eq!(details.cap, CORE_CAP_WITH_SPOUSE);
        assert_eq!(details.capped, CORE_CAP_WITH_SPOUSE);
    }
}
