//! Point grids published for each CRS factor.
//!
//! Grids that differ by marital status are stored as `(single, with_spouse)`.

use super::profile::{CanadianEducation, EducationLevel};

pub(crate) const CORE_CAP_SINGLE: u16 = 500;
pub(crate) const CORE_CAP_WITH_SPOUSE: u16 = 460;
pub(crate) const SECOND_LANGUAGE_CAP_SINGLE: u16 = 24;
pub(crate) const SECOND_LANGUAGE_CAP_WITH_SPOUSE: u16 = 22;
pub(crate) const SPOUSE_CAP: u16 = 40;
pub(crate) const TRANSFERABILITY_SUB_BLOCK_CAP: u16 = 50;
pub(crate) const TRANSFERABILITY_CAP: u16 = 100;
pub(crate) const ADDITIONAL_CAP: u16 = 600;
pub(crate) const TOTAL_CAP: u16 = 1200;

pub(crate) const PROVINCIAL_NOMINATION_POINTS: u16 = 600;
pub(crate) const SIBLING_POINTS: u16 = 15;
pub(crate) const FRENCH_WITH_ENGLISH_POINTS: u16 = 50;
pub(crate) const FRENCH_ONLY_POINTS: u16 = 25;

/// Age 17 through 44; every other age earns nothing.
const AGE_POINTS: [(u16, u16); 28] = [
    (0, 0),
    (99, 90),
    (105, 95),
    (110, 100),
    (110, 100),
    (110, 100),
    (110, 100),
    (110, 100),
    (110, 100),
    (110, 100),
    (110, 100),
    (110, 100),
    (110, 100),
    (105, 95),
    (99, 90),
    (94, 85),
    (88, 80),
    (83, 75),
    (77, 70),
    (72, 65),
    (66, 60),
    (61, 55),
    (55, 50),
    (50, 45),
    (39, 35),
    (28, 25),
    (17, 15),
    (6, 5),
];
const FIRST_AGE: u8 = 17;

/// Canadian work experience, 0 through 5+ years.
const CANADIAN_WORK_POINTS: [(u16, u16); 6] =
    [(0, 0), (40, 35), (53, 46), (64, 56), (72, 63), (80, 70)];

const SPOUSE_CANADIAN_WORK_POINTS: [u16; 6] = [0, 5, 7, 8, 9, 10];

fn pick(pair: (u16, u16), has_spouse: bool) -> u16 {
    if has_spouse {
        pair.1
    } else {
        pair.0
    }
}

pub(crate) fn age_points(age: u8, has_spouse: bool) -> u16 {
    age.checked_sub(FIRST_AGE)
        .and_then(|offset| AGE_POINTS.get(usize::from(offset)))
        .map(|pair| pick(*pair, has_spouse))
        .unwrap_or(0)
}

pub(crate) fn education_points(level: EducationLevel, has_spouse: bool) -> u16 {
    let pair = match level {
        EducationLevel::None => (0, 0),
        EducationLevel::HighSchool => (30, 28),
        EducationLevel::OneYear => (90, 84),
        EducationLevel::TwoYear => (98, 91),
        EducationLevel::Bachelors => (120, 112),
        EducationLevel::TwoOrMore => (128, 119),
        EducationLevel::Masters => (135, 126),
        EducationLevel::Phd => (150, 140),
    };
    pick(pair, has_spouse)
}

/// Points for one ability of the first official language.
pub(crate) fn first_language_points(level: u8, has_spouse: bool) -> u16 {
    let pair = match level {
        10.. => (34, 32),
        9 => (31, 29),
        8 => (23, 22),
        7 => (17, 16),
        6 => (9, 8),
        4 | 5 => (6, 6),
        _ => (0, 0),
    };
    pick(pair, has_spouse)
}

/// Points for one ability of the second official language, before the four-skill cap.
pub(crate) fn second_language_points(level: u8) -> u16 {
    match level {
        9.. => 6,
        7 | 8 => 3,
        5 | 6 => 1,
        _ => 0,
    }
}

pub(crate) fn canadian_work_points(years: u8, has_spouse: bool) -> u16 {
    let index = usize::from(years.min(5));
    pick(CANADIAN_WORK_POINTS[index], has_spouse)
}

pub(crate) fn spouse_education_points(level: EducationLevel) -> u16 {
    match level {
        EducationLevel::None => 0,
        EducationLevel::HighSchool => 2,
        EducationLevel::OneYear => 6,
        EducationLevel::TwoYear => 7,
        EducationLevel::Bachelors => 8,
        EducationLevel::TwoOrMore => 9,
        EducationLevel::Masters | EducationLevel::Phd => 10,
    }
}

pub(crate) fn spouse_language_points(level: u8) -> u16 {
    match level {
        9.. => 5,
        7 | 8 => 3,
        5 | 6 => 1,
        _ => 0,
    }
}

pub(crate) fn spouse_canadian_work_points(years: u8) -> u16 {
    SPOUSE_CANADIAN_WORK_POINTS[usize::from(years.min(5))]
}

pub(crate) fn canadian_education_points(education: CanadianEducation) -> u16 {
    match education {
        CanadianEducation::None => 0,
        CanadianEducation::OneOrTwoYears => 15,
        CanadianEducation::ThreeYearsOrMore => 30,
    }
}
