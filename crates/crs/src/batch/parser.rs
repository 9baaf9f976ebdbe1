use crate::intake::{LanguageSubmission, ProfileSubmission, ScoreScale};
use crate::language::LanguageTest;
use crate::scoring::{CanadianEducation, EducationLevel};
use serde::Deserialize;
use std::io::Read;

/// One flattened candidate as exported from the intake spreadsheet.
#[derive(Debug, Deserialize)]
pub(crate) struct CandidateRow {
    pub(crate) candidate_id: String,
    age: f64,
    #[serde(default)]
    has_spouse: Option<bool>,
    education_level: EducationLevel,
    first_test: LanguageTest,
    #[serde(default)]
    first_reading: Option<f64>,
    #[serde(default)]
    first_writing: Option<f64>,
    #[serde(default)]
    first_listening: Option<f64>,
    #[serde(default)]
    first_speaking: Option<f64>,
    #[serde(default)]
    second_test: Option<LanguageTest>,
    #[serde(default)]
    second_reading: Option<f64>,
    #[serde(default)]
    second_writing: Option<f64>,
    #[serde(default)]
    second_listening: Option<f64>,
    #[serde(default)]
    second_speaking: Option<f64>,
    #[serde(default)]
    canadian_work_experience: Option<f64>,
    #[serde(default)]
    foreign_work_experience: Option<f64>,
    #[serde(default)]
    certificate_of_qualification: Option<bool>,
    #[serde(default)]
    spouse_education_level: Option<EducationLevel>,
    #[serde(default)]
    spouse_test: Option<LanguageTest>,
    #[serde(default)]
    spouse_reading: Option<f64>,
    #[serde(default)]
    spouse_writing: Option<f64>,
    #[serde(default)]
    spouse_listening: Option<f64>,
    #[serde(default)]
    spouse_speaking: Option<f64>,
    #[serde(default)]
    spouse_canadian_work_experience: Option<f64>,
    #[serde(default)]
    sibling_in_canada: Option<bool>,
    #[serde(default)]
    nomination_certificate: Option<bool>,
    #[serde(default)]
    canadian_education: Option<CanadianEducation>,
}

/// Column prefix of a language block that is only partly filled in: a test
/// without all four levels, or levels without a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IncompleteLanguage(pub(crate) &'static str);

fn language_block(
    prefix: &'static str,
    test: Option<LanguageTest>,
    levels: [Option<f64>; 4],
) -> Result<Option<LanguageSubmission>, IncompleteLanguage> {
    let Some(test) = test else {
        if levels.iter().any(Option::is_some) {
            return Err(IncompleteLanguage(prefix));
        }
        return Ok(None);
    };
    let [Some(reading), Some(writing), Some(listening), Some(speaking)] = levels else {
        return Err(IncompleteLanguage(prefix));
    };

    Ok(Some(LanguageSubmission {
        test,
        scale: ScoreScale::Standardized,
        reading,
        writing,
        listening,
        speaking,
    }))
}

impl CandidateRow {
    pub(crate) fn into_submission(self) -> Result<ProfileSubmission, IncompleteLanguage> {
        let first_language = language_block(
            "first",
            Some(self.first_test),
            [
                self.first_reading,
                self.first_writing,
                self.first_listening,
                self.first_speaking,
            ],
        )?
        .ok_or(IncompleteLanguage("first"))?;
        let second_language = language_block(
            "second",
            self.second_test,
            [
                self.second_reading,
                self.second_writing,
                self.second_listening,
                self.second_speaking,
            ],
        )?;
        let spouse_language = language_block(
            "spouse",
            self.spouse_test,
            [
                self.spouse_reading,
                self.spouse_writing,
                self.spouse_listening,
                self.spouse_speaking,
            ],
        )?;

        Ok(ProfileSubmission {
            age: self.age,
            has_spouse: self.has_spouse.unwrap_or(false),
            education_level: self.education_level,
            first_language,
            second_language,
            canadian_work_experience: self.canadian_work_experience.unwrap_or(0.0),
            foreign_work_experience: self.foreign_work_experience.unwrap_or(0.0),
            certificate_of_qualification: self.certificate_of_qualification.unwrap_or(false),
            spouse_education_level: self.spouse_education_level,
            spouse_language,
            spouse_canadian_work_experience: self.spouse_canadian_work_experience,
            sibling_in_canada: self.sibling_in_canada.unwrap_or(false),
            nomination_certificate: self.nomination_certificate.unwrap_or(false),
            canadian_education: self.canadian_education.unwrap_or_default(),
        })
    }
}

pub(crate) fn parse_rows<R: Read>(
    reader: R,
) -> impl Iterator<Item = Result<CandidateRow, csv::Error>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize::<CandidateRow>()
}
