//! Strict boundary between loosely shaped submissions and the scoring core.
//!
//! The engine itself clamps whatever it receives; callers that want rejected
//! input instead of saturated input go through `ProfileSubmission::into_profile`.

use crate::language::{
    convert_all, LanguageFamily, LanguageResult, LanguageScores, LanguageTest, RawLanguageScores,
    RawRange, Skill, MAX_LEVEL,
};
use crate::numeric::round_to_i32;
use crate::scoring::{CandidateProfile, CanadianEducation, EducationLevel, MAX_AGE, MAX_WORK_YEARS};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Which language slot of a submission a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageRole {
    First,
    Second,
    Spouse,
}

impl fmt::Display for LanguageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageRole::First => write!(f, "first language"),
            LanguageRole::Second => write!(f, "second language"),
            LanguageRole::Spouse => write!(f, "spouse language"),
        }
    }
}

/// Reasons a submission is refused before it reaches the engine.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("age must be between 0 and {max}, found {value}")]
    AgeOutOfRange { value: f64, max: u8 },
    #[error("{field} must be between 0 and {max} years, found {value}")]
    WorkExperienceOutOfRange {
        field: &'static str,
        value: f64,
        max: u8,
    },
    #[error("{role} {skill} level must be between 0 and {max}, found {value}")]
    LevelOutOfRange {
        role: LanguageRole,
        skill: &'static str,
        value: f64,
        max: u8,
    },
    #[error("{role} {skill} result {value} is not a valid {test} score ({range})")]
    RawScoreOutOfRange {
        role: LanguageRole,
        test: LanguageTest,
        skill: &'static str,
        value: f64,
        range: RawRange,
    },
    #[error("first and second language are both {family:?}; the second language must be the other official language")]
    SameLanguageFamily { family: LanguageFamily },
    #[error("spouse details were supplied but has_spouse is false")]
    SpouseFieldsWithoutSpouse,
}

/// Whether the four numbers of a language entry are test results or CLB/NCLC levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreScale {
    #[default]
    Standardized,
    Raw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSubmission {
    pub test: LanguageTest,
    #[serde(default)]
    pub scale: ScoreScale,
    pub reading: f64,
    pub writing: f64,
    pub listening: f64,
    pub speaking: f64,
}

impl LanguageSubmission {
    pub fn standardized(test: LanguageTest, scores: LanguageScores) -> Self {
        Self {
            test,
            scale: ScoreScale::Standardized,
            reading: f64::from(scores.reading),
            writing: f64::from(scores.writing),
            listening: f64::from(scores.listening),
            speaking: f64::from(scores.speaking),
        }
    }

    pub fn raw(test: LanguageTest, raw: RawLanguageScores) -> Self {
        Self {
            test,
            scale: ScoreScale::Raw,
            reading: raw.reading,
            writing: raw.writing,
            listening: raw.listening,
            speaking: raw.speaking,
        }
    }

    fn raw_scores(&self) -> RawLanguageScores {
        RawLanguageScores {
            reading: self.reading,
            writing: self.writing,
            listening: self.listening,
            speaking: self.speaking,
        }
    }

    fn validate(&self, role: LanguageRole) -> Result<LanguageResult, IntakeError> {
        let raw = self.raw_scores();

        let scores = match self.scale {
            ScoreScale::Standardized => {
                for skill in Skill::ALL {
                    let value = raw.get(skill);
                    if !value.is_finite() || value < 0.0 || value > f64::from(MAX_LEVEL) {
                        return Err(IntakeError::LevelOutOfRange {
                            role,
                            skill: skill.label(),
                            value,
                            max: MAX_LEVEL,
                        });
                    }
                }
                LanguageScores::new(
                    round_to_i32(raw.reading),
                    round_to_i32(raw.writing),
                    round_to_i32(raw.listening),
                    round_to_i32(raw.speaking),
                )
            }
            ScoreScale::Raw => {
                for skill in Skill::ALL {
                    let value = raw.get(skill);
                    let range = self.test.raw_range(skill);
                    if !range.contains(value) {
                        return Err(IntakeError::RawScoreOutOfRange {
                            role,
                            test: self.test,
                            skill: skill.label(),
                            value,
                            range,
                        });
                    }
                }
                let scores = convert_all(self.test, &raw);
                debug!(%role, test = %self.test, ?scores, "converted raw language results");
                scores
            }
        };

        Ok(LanguageResult::new(self.test, scores))
    }
}

/// Candidate profile as received from an outer surface (HTTP body, CSV row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub age: f64,
    #[serde(default)]
    pub has_spouse: bool,
    pub education_level: EducationLevel,
    pub first_language: LanguageSubmission,
    #[serde(default)]
    pub second_language: Option<LanguageSubmission>,
    #[serde(default)]
    pub canadian_work_experience: f64,
    #[serde(default)]
    pub foreign_work_experience: f64,
    #[serde(default)]
    pub certificate_of_qualification: bool,
    #[serde(default)]
    pub spouse_education_level: Option<EducationLevel>,
    #[serde(default)]
    pub spouse_language: Option<LanguageSubmission>,
    #[serde(default)]
    pub spouse_canadian_work_experience: Option<f64>,
    #[serde(default)]
    pub sibling_in_canada: bool,
    #[serde(default)]
    pub nomination_certificate: bool,
    #[serde(default)]
    pub canadian_education: CanadianEducation,
}

fn validate_years(field: &'static str, value: f64) -> Result<i32, IntakeError> {
    if !value.is_finite() || value < 0.0 || value > f64::from(MAX_WORK_YEARS) {
        return Err(IntakeError::WorkExperienceOutOfRange {
            field,
            value,
            max: MAX_WORK_YEARS,
        });
    }
    Ok(round_to_i32(value))
}

impl ProfileSubmission {
    pub fn into_profile(self) -> Result<CandidateProfile, IntakeError> {
        if !self.age.is_finite() || self.age < 0.0 || self.age > f64::from(MAX_AGE) {
            return Err(IntakeError::AgeOutOfRange {
                value: self.age,
                max: MAX_AGE,
            });
        }

        let has_spouse_fields = self.spouse_education_level.is_some()
            || self.spouse_language.is_some()
            || self.spouse_canadian_work_experience.is_some();
        if has_spouse_fields && !self.has_spouse {
            return Err(IntakeError::SpouseFieldsWithoutSpouse);
        }

        let first_language = self.first_language.validate(LanguageRole::First)?;
        let second_language = self
            .second_language
            .as_ref()
            .map(|language| language.validate(LanguageRole::Second))
            .transpose()?;
        if let Some(second) = &second_language {
            if second.family() == first_language.family() {
                return Err(IntakeError::SameLanguageFamily {
                    family: first_language.family(),
                });
            }
        }
        let spouse_language = self
            .spouse_language
            .as_ref()
            .map(|language| language.validate(LanguageRole::Spouse))
            .transpose()?;

        let canadian_work_experience =
            validate_years("canadian_work_experience", self.canadian_work_experience)?;
        let foreign_work_experience =
            validate_years("foreign_work_experience", self.foreign_work_experience)?;
        let spouse_canadian_work_experience = self
            .spouse_canadian_work_experience
            .map(|years| validate_years("spouse_canadian_work_experience", years))
            .transpose()?;

        Ok(CandidateProfile {
            age: round_to_i32(self.age),
            has_spouse: self.has_spouse,
            education_level: self.education_level,
            first_language,
            second_language,
            canadian_work_experience,
            foreign_work_experience,
            certificate_of_qualification: self.certificate_of_qualification,
            spouse_education_level: self.spouse_education_level,
            spouse_language,
            spouse_canadian_work_experience,
            sibling_in_canada: self.sibling_in_canada,
            nomination_certificate: self.nomination_certificate,
            canadian_education: self.canadian_education,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ProfileSubmission {
        ProfileSubmission {
            age: 29.0,
            has_spouse: false,
            education_level: EducationLevel::Bachelors,
            first_language: LanguageSubmission::standardized(
                LanguageTest::Celpip,
                LanguageScores::uniform(9),
            ),
            second_language: None,
            canadian_work_experience: 1.0,
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

    #[test]
    fn accepts_and_rounds_fractional_values() {
        let mut input = submission();
        input.age = 28.6;
        input.first_language.speaking = 8.5;

        let profile = input.into_profile().expect("submission accepted");

        assert_eq!(profile.age, 29);
        assert_eq!(profile.first_language.scores.speaking, 9);
        assert_eq!(profile.canadian_work_experience, 1);
    }

    #[test]
    fn rejects_negative_age() {
        let mut input = submission();
        input.age = -1.0;

        match input.into_profile() {
            Err(IntakeError::AgeOutOfRange { value, max }) => {
                assert_eq!(value, -1.0);
                assert_eq!(max, MAX_AGE);
            }
            other => panic!("expected age rejection, got {other:?}"),
        }
    }

    #[test]
    fn converts_raw_results_through_the_band_tables() {
        let mut input = submission();
        input.first_language = LanguageSubmission::raw(
            LanguageTest::Ielts,
            RawLanguageScores {
                reading: 6.5,
                writing: 6.5,
                listening: 7.5,
                speaking: 6.5,
            },
        );

        let profile = input.into_profile().expect("submission accepted");

        assert_eq!(profile.first_language.scores, LanguageScores::uniform(8));
    }

    #[test]
    fn rejects_raw_results_outside_the_test_range() {
        let mut input = submission();
        input.first_language = LanguageSubmission::raw(
            LanguageTest::Ielts,
            RawLanguageScores {
                reading: 6.25,
                writing: 6.5,
                listening: 7.5,
                speaking: 6.5,
            },
        );

        let error = input.into_profile().expect_err("quarter bands rejected");
        assert!(matches!(
            error,
            IntakeError::RawScoreOutOfRange {
                role: LanguageRole::First,
                skill: "reading",
                ..
            }
        ));
        assert!(error.to_string().contains("IELTS General Training"));
    }

    #[test]
    fn rejects_two_languages_of_the_same_family() {
        let mut input = submission();
        input.second_language = Some(LanguageSubmission::standardized(
            LanguageTest::Ielts,
            LanguageScores::uniform(7),
        ));

        assert!(matches!(
            input.into_profile(),
            Err(IntakeError::SameLanguageFamily {
                family: LanguageFamily::English
            })
        ));
    }

    #[test]
    fn rejects_spouse_fields_for_single_applicants() {
        let mut input = submission();
        input.spouse_education_level = Some(EducationLevel::Masters);

        assert!(matches!(
            input.into_profile(),
            Err(IntakeError::SpouseFieldsWithoutSpouse)
        ));
    }

    #[test]
    fn rejects_out_of_range_work_experience() {
        let mut input = submission();
        input.foreign_work_experience = 12.0;

        assert!(matches!(
            input.into_profile(),
            Err(IntakeError::WorkExperienceOutOfRange {
                field: "foreign_work_experience",
                ..
            })
        ));
    }

    #[test]
    fn deserializes_with_standardized_scale_by_default() {
        let json = r#"{
            "age": 31,
            "education_level": "masters",
            "first_language": {
                "test": "tef", "reading": 8, "writing": 8, "listening": 8, "speaking": 8
            }
        }"#;

        let input: ProfileSubmission = serde_json::from_str(json).expect("submission parses");

        assert_eq!(input.first_language.scale, ScoreScale::Standardized);
        let profile = input.into_profile().expect("submission accepted");
        assert_eq!(profile.first_language.scores, LanguageScores::uniform(8));
    }
}
