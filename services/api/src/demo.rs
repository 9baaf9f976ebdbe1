use crate::commands::render_result;
use crs::error::AppError;
use crs::intake::{LanguageSubmission, ProfileSubmission};
use crs::language::{LanguageScores, LanguageTest, RawLanguageScores};
use crs::scoring::{score, CanadianEducation, EducationLevel};

struct SampleCandidate {
    title: &'static str,
    submission: ProfileSubmission,
}

fn base_submission(
    age: f64,
    education_level: EducationLevel,
    first_language: LanguageSubmission,
) -> ProfileSubmission {
    ProfileSubmission {
        age,
        has_spouse: false,
        education_level,
        first_language,
        second_language: None,
        canadian_work_experience: 0.0,
        foreign_work_experience: 0.0,
        certificate_of_qualification: false,
        spouse_education_level: None,
        spouse_language: None,
        spouse_canadian_work_experience: None,
        sibling_in_canada: false,
        nomination_certificate: false,
        canadian_education: CanadianEducation::None,
    }
}

fn sample_candidates() -> Vec<SampleCandidate> {
    let mut graduate = base_submission(
        29.0,
        EducationLevel::Bachelors,
        LanguageSubmission::raw(
            LanguageTest::Ielts,
            RawLanguageScores {
                reading: 7.0,
                writing: 7.0,
                listening: 8.0,
                speaking: 7.0,
            },
        ),
    );
    graduate.canadian_work_experience = 1.0;

    let mut couple = base_submission(
        34.0,
        EducationLevel::Masters,
        LanguageSubmission::standardized(LanguageTest::Celpip, LanguageScores::new(10, 9, 10, 9)),
    );
    couple.has_spouse = true;
    couple.canadian_work_experience = 2.0;
    couple.foreign_work_experience = 3.0;
    couple.spouse_education_level = Some(EducationLevel::Bachelors);
    couple.spouse_language = Some(LanguageSubmission::standardized(
        LanguageTest::Ielts,
        LanguageScores::uniform(7),
    ));
    couple.spouse_canadian_work_experience = Some(1.0);

    let mut francophone = base_submission(
        38.0,
        EducationLevel::TwoYear,
        LanguageSubmission::raw(
            LanguageTest::Tef,
            RawLanguageScores {
                reading: 480.0,
                writing: 450.0,
                listening: 510.0,
                speaking: 470.0,
            },
        ),
    );
    francophone.second_language = Some(LanguageSubmission::standardized(
        LanguageTest::Pte,
        LanguageScores::uniform(6),
    ));
    francophone.foreign_work_experience = 4.0;
    francophone.sibling_in_canada = true;

    let mut nominee = base_submission(
        45.0,
        EducationLevel::HighSchool,
        LanguageSubmission::standardized(LanguageTest::Celpip, LanguageScores::uniform(6)),
    );
    nominee.certificate_of_qualification = true;
    nominee.canadian_work_experience = 3.0;
    nominee.nomination_certificate = true;
    nominee.canadian_education = CanadianEducation::OneOrTwoYears;

    vec![
        SampleCandidate {
            title: "Single graduate with one year of Canadian work (IELTS results)",
            submission: graduate,
        },
        SampleCandidate {
            title: "Master's holder applying with an accompanying spouse",
            submission: couple,
        },
        SampleCandidate {
            title: "French-speaking candidate with moderate English (TEF Canada results)",
            submission: francophone,
        },
        SampleCandidate {
            title: "Provincial nominee in a skilled trade",
            submission: nominee,
        },
    ]
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Comprehensive Ranking System demo");

    for (index, sample) in sample_candidates().into_iter().enumerate() {
        let profile = sample.submission.into_profile()?;
        let result = score(&profile);
        println!("\n#{} {}", index + 1, sample.title);
        render_result(&result);
    }

    Ok(())
}
