use crate::language::{LanguageFamily, LanguageResult, LanguageScores, Skill, MAX_LEVEL};
use crate::numeric::{clamp_to_u8, deserialize_optional_rounded, deserialize_rounded};
use serde::{Deserialize, Serialize};

pub const MAX_AGE: u8 = 99;
pub const MAX_WORK_YEARS: u8 = 10;

/// Highest completed credential, ordered from least to most advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    None,
    HighSchool,
    OneYear,
    TwoYear,
    Bachelors,
    TwoOrMore,
    Masters,
    Phd,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 8] = [
        EducationLevel::None,
        EducationLevel::HighSchool,
        EducationLevel::OneYear,
        EducationLevel::TwoYear,
        EducationLevel::Bachelors,
        EducationLevel::TwoOrMore,
        EducationLevel::Masters,
        EducationLevel::Phd,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::None => "less than secondary school",
            EducationLevel::HighSchool => "secondary diploma",
            EducationLevel::OneYear => "one-year post-secondary program",
            EducationLevel::TwoYear => "two-year post-secondary program",
            EducationLevel::Bachelors => "bachelor's degree or three-year program",
            EducationLevel::TwoOrMore => "two or more credentials",
            EducationLevel::Masters => "master's or professional degree",
            EducationLevel::Phd => "doctoral degree",
        }
    }
}

/// Credential earned in Canada, used for the additional-points section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanadianEducation {
    #[default]
    None,
    OneOrTwoYears,
    ThreeYearsOrMore,
}

/// Complete scoring input for one principal applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(deserialize_with = "deserialize_rounded")]
    pub age: i32,
    #[serde(default)]
    pub has_spouse: bool,
    pub education_level: EducationLevel,
    pub first_language: LanguageResult,
    #[serde(default)]
    pub second_language: Option<LanguageResult>,
    #[serde(default, deserialize_with = "deserialize_rounded")]
    pub canadian_work_experience: i32,
    #[serde(default, deserialize_with = "deserialize_rounded")]
    pub foreign_work_experience: i32,
    #[serde(default)]
    pub certificate_of_qualification: bool,
    #[serde(default)]
    pub spouse_education_level: Option<EducationLevel>,
    #[serde(default)]
    pub spouse_language: Option<LanguageResult>,
    #[serde(default, deserialize_with = "deserialize_optional_rounded")]
    pub spouse_canadian_work_experience: Option<i32>,
    #[serde(default)]
    pub sibling_in_canada: bool,
    #[serde(default)]
    pub nomination_certificate: bool,
    #[serde(default)]
    pub canadian_education: CanadianEducation,
}

impl CandidateProfile {
    /// Minimal single applicant; every optional factor absent.
    pub fn new(age: i32, education_level: EducationLevel, first_language: LanguageResult) -> Self {
        Self {
            age,
            has_spouse: false,
            education_level,
            first_language,
            second_language: None,
            canadian_work_experience: 0,
            foreign_work_experience: 0,
            certificate_of_qualification: false,
            spouse_education_level: None,
            spouse_language: None,
            spouse_canadian_work_experience: None,
            sibling_in_canada: false,
            nomination_certificate: false,
            canadian_education: CanadianEducation::None,
        }
    }

    pub(crate) fn normalize(&self) -> NormalizedProfile {
        NormalizedProfile {
            age: clamp_to_u8(self.age, MAX_AGE),
            has_spouse: self.has_spouse,
            education: self.education_level,
            first_language: NormalizedLanguage::from(&self.first_language),
            second_language: self.second_language.as_ref().map(NormalizedLanguage::from),
            canadian_work: clamp_to_u8(self.canadian_work_experience, MAX_WORK_YEARS),
            foreign_work: clamp_to_u8(self.foreign_work_experience, MAX_WORK_YEARS),
            certificate_of_qualification: self.certificate_of_qualification,
            spouse_education: self.spouse_education_level,
            spouse_language: self.spouse_language.as_ref().map(NormalizedLanguage::from),
            spouse_canadian_work: self
                .spouse_canadian_work_experience
                .map(|years| clamp_to_u8(years, MAX_WORK_YEARS)),
            sibling_in_canada: self.sibling_in_canada,
            nomination_certificate: self.nomination_certificate,
            canadian_education: self.canadian_education,
        }
    }
}

/// Profile with every numeric field clamped into its table range.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NormalizedProfile {
    pub age: u8,
    pub has_spouse: bool,
    pub education: EducationLevel,
    pub first_language: NormalizedLanguage,
    pub second_language: Option<NormalizedLanguage>,
    pub canadian_work: u8,
    pub foreign_work: u8,
    pub certificate_of_qualification: bool,
    pub spouse_education: Option<EducationLevel>,
    pub spouse_language: Option<NormalizedLanguage>,
    pub spouse_canadian_work: Option<u8>,
    pub sibling_in_canada: bool,
    pub nomination_certificate: bool,
    pub canadian_education: CanadianEducation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NormalizedLanguage {
    pub family: LanguageFamily,
    /// Levels in `Skill::ALL` order.
    pub levels: [u8; 4],
}

impl NormalizedLanguage {
    pub fn all_at_least(&self, level: u8) -> bool {
        self.levels.iter().all(|value| *value >= level)
    }
}

impl From<&LanguageResult> for NormalizedLanguage {
    fn from(result: &LanguageResult) -> Self {
        Self {
            family: result.family(),
            levels: normalize_scores(&result.scores),
        }
    }
}

fn normalize_scores(scores: &LanguageScores) -> [u8; 4] {
    Skill::ALL.map(|skill| clamp_to_u8(scores.get(skill), MAX_LEVEL))
}
