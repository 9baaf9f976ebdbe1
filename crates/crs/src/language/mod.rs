//! Language test catalogue and conversion onto the CLB/NCLC scale.

mod bands;

use crate::numeric::deserialize_rounded;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest level on the standardized proficiency scale.
pub const MAX_LEVEL: u8 = 12;

/// Language tests accepted for Express Entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageTest {
    Celpip,
    Ielts,
    Pte,
    Tef,
    Tcf,
}

impl LanguageTest {
    pub const ALL: [LanguageTest; 5] = [
        LanguageTest::Celpip,
        LanguageTest::Ielts,
        LanguageTest::Pte,
        LanguageTest::Tef,
        LanguageTest::Tcf,
    ];

    pub const fn family(self) -> LanguageFamily {
        match self {
            LanguageTest::Celpip | LanguageTest::Ielts | LanguageTest::Pte => {
                LanguageFamily::English
            }
            LanguageTest::Tef | LanguageTest::Tcf => LanguageFamily::French,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LanguageTest::Celpip => "CELPIP-General",
            LanguageTest::Ielts => "IELTS General Training",
            LanguageTest::Pte => "PTE Core",
            LanguageTest::Tef => "TEF Canada",
            LanguageTest::Tcf => "TCF Canada",
        }
    }

    /// Inclusive range of raw results the test reports for a skill.
    pub const fn raw_range(self, skill: Skill) -> RawRange {
        match (self, skill) {
            (LanguageTest::Celpip, _) => RawRange::new(0.0, 12.0, 1.0),
            (LanguageTest::Ielts, _) => RawRange::new(0.0, 9.0, 0.5),
            (LanguageTest::Pte, _) => RawRange::new(10.0, 90.0, 1.0),
            (LanguageTest::Tef, _) => RawRange::new(0.0, 699.0, 1.0),
            (LanguageTest::Tcf, Skill::Writing | Skill::Speaking) => {
                RawRange::new(0.0, 20.0, 1.0)
            }
            (LanguageTest::Tcf, Skill::Reading | Skill::Listening) => {
                RawRange::new(0.0, 699.0, 1.0)
            }
        }
    }
}

impl fmt::Display for LanguageTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Official-language family a test certifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageFamily {
    English,
    French,
}

impl LanguageFamily {
    /// Name of the standardized scale for the family.
    pub const fn scale(self) -> &'static str {
        match self {
            LanguageFamily::English => "CLB",
            LanguageFamily::French => "NCLC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Reading,
    Writing,
    Listening,
    Speaking,
}

impl Skill {
    pub const ALL: [Skill; 4] = [
        Skill::Reading,
        Skill::Writing,
        Skill::Listening,
        Skill::Speaking,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Skill::Reading => "reading",
            Skill::Writing => "writing",
            Skill::Listening => "listening",
            Skill::Speaking => "speaking",
        }
    }
}

/// Range and granularity of raw results for one test skill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl RawRange {
    const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        let steps = (value - self.min) / self.step;
        (steps - steps.round()).abs() < 1e-9
    }
}

impl fmt::Display for RawRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} in steps of {}", self.min, self.max, self.step)
    }
}

/// Standardized (CLB/NCLC) levels for the four abilities of one person in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageScores {
    #[serde(deserialize_with = "deserialize_rounded")]
    pub reading: i32,
    #[serde(deserialize_with = "deserialize_rounded")]
    pub writing: i32,
    #[serde(deserialize_with = "deserialize_rounded")]
    pub listening: i32,
    #[serde(deserialize_with = "deserialize_rounded")]
    pub speaking: i32,
}

impl LanguageScores {
    pub const fn new(reading: i32, writing: i32, listening: i32, speaking: i32) -> Self {
        Self {
            reading,
            writing,
            listening,
            speaking,
        }
    }

    /// Same level on every ability.
    pub const fn uniform(level: i32) -> Self {
        Self::new(level, level, level, level)
    }

    pub const fn get(&self, skill: Skill) -> i32 {
        match skill {
            Skill::Reading => self.reading,
            Skill::Writing => self.writing,
            Skill::Listening => self.listening,
            Skill::Speaking => self.speaking,
        }
    }
}

/// Raw, unconverted results as printed on a test report.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawLanguageScores {
    pub reading: f64,
    pub writing: f64,
    pub listening: f64,
    pub speaking: f64,
}

impl RawLanguageScores {
    pub const fn get(&self, skill: Skill) -> f64 {
        match skill {
            Skill::Reading => self.reading,
            Skill::Writing => self.writing,
            Skill::Listening => self.listening,
            Skill::Speaking => self.speaking,
        }
    }
}

/// A test tag paired with the standardized levels it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageResult {
    pub test: LanguageTest,
    pub scores: LanguageScores,
}

impl LanguageResult {
    pub const fn new(test: LanguageTest, scores: LanguageScores) -> Self {
        Self { test, scores }
    }

    pub const fn family(&self) -> LanguageFamily {
        self.test.family()
    }
}

/// Converts one raw result onto the standardized scale.
///
/// Results below the lowest band, negative values and NaN all convert to 0.
pub fn convert(test: LanguageTest, skill: Skill, raw: f64) -> u8 {
    bands::lookup(bands::table_for(test, skill), raw)
}

pub fn convert_all(test: LanguageTest, raw: &RawLanguageScores) -> LanguageScores {
    let level = |skill| i32::from(convert(test, skill, raw.get(skill)));
    LanguageScores::new(
        level(Skill::Reading),
        level(Skill::Writing),
        level(Skill::Listening),
        level(Skill::Speaking),
    )
}
