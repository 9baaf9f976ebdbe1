//! Official test-score to CLB/NCLC conversion charts.
//!
//! Every table is sorted by threshold, highest first. Thresholds are inclusive
//! lower bounds; a raw score below the last threshold converts to level 0.

use super::{LanguageTest, Skill};

pub(crate) type BandTable = &'static [(f64, u8)];

// CELPIP-General levels map one to one onto CLB for every skill.
const CELPIP: BandTable = &[
    (12.0, 12),
    (11.0, 11),
    (10.0, 10),
    (9.0, 9),
    (8.0, 8),
    (7.0, 7),
    (6.0, 6),
    (5.0, 5),
    (4.0, 4),
];

const IELTS_READING: BandTable = &[
    (8.0, 10),
    (7.0, 9),
    (6.5, 8),
    (6.0, 7),
    (5.0, 6),
    (4.0, 5),
    (3.5, 4),
];

const IELTS_WRITING: BandTable = &[
    (7.5, 10),
    (7.0, 9),
    (6.5, 8),
    (6.0, 7),
    (5.5, 6),
    (5.0, 5),
    (4.0, 4),
];

const IELTS_LISTENING: BandTable = &[
    (8.5, 10),
    (8.0, 9),
    (7.5, 8),
    (6.0, 7),
    (5.5, 6),
    (5.0, 5),
    (4.5, 4),
];

const IELTS_SPEAKING: BandTable = &[
    (7.5, 10),
    (7.0, 9),
    (6.5, 8),
    (6.0, 7),
    (5.5, 6),
    (5.0, 5),
    (4.0, 4),
];

const PTE_READING: BandTable = &[
    (88.0, 10),
    (78.0, 9),
    (69.0, 8),
    (60.0, 7),
    (51.0, 6),
    (42.0, 5),
    (33.0, 4),
    (24.0, 3),
];

const PTE_WRITING: BandTable = &[
    (90.0, 10),
    (88.0, 9),
    (79.0, 8),
    (69.0, 7),
    (60.0, 6),
    (51.0, 5),
    (41.0, 4),
    (32.0, 3),
];

const PTE_LISTENING: BandTable = &[
    (89.0, 10),
    (82.0, 9),
    (71.0, 8),
    (60.0, 7),
    (50.0, 6),
    (39.0, 5),
    (28.0, 4),
    (18.0, 3),
];

const PTE_SPEAKING: BandTable = &[
    (89.0, 10),
    (84.0, 9),
    (76.0, 8),
    (68.0, 7),
    (59.0, 6),
    (51.0, 5),
    (42.0, 4),
    (34.0, 3),
];

const TEF_READING: BandTable = &[
    (546.0, 10),
    (503.0, 9),
    (462.0, 8),
    (434.0, 7),
    (393.0, 6),
    (371.0, 5),
    (352.0, 4),
];

const TEF_WRITING: BandTable = &[
    (558.0, 10),
    (512.0, 9),
    (472.0, 8),
    (428.0, 7),
    (379.0, 6),
    (330.0, 5),
    (268.0, 4),
];

const TEF_LISTENING: BandTable = &[
    (546.0, 10),
    (503.0, 9),
    (462.0, 8),
    (434.0, 7),
    (393.0, 6),
    (371.0, 5),
    (352.0, 4),
];

const TEF_SPEAKING: BandTable = &[
    (556.0, 10),
    (518.0, 9),
    (494.0, 8),
    (456.0, 7),
    (422.0, 6),
    (387.0, 5),
    (328.0, 4),
];

const TCF_READING: BandTable = &[
    (549.0, 10),
    (524.0, 9),
    (499.0, 8),
    (453.0, 7),
    (406.0, 6),
    (375.0, 5),
    (342.0, 4),
];

const TCF_LISTENING: BandTable = &[
    (549.0, 10),
    (523.0, 9),
    (503.0, 8),
    (458.0, 7),
    (398.0, 6),
    (369.0, 5),
    (331.0, 4),
];

// TCF writing and speaking are reported on the 0-20 level scale.
const TCF_WRITING: BandTable = &[
    (16.0, 10),
    (14.0, 9),
    (12.0, 8),
    (10.0, 7),
    (7.0, 6),
    (6.0, 5),
    (4.0, 4),
];

const TCF_SPEAKING: BandTable = &[
    (16.0, 10),
    (14.0, 9),
    (12.0, 8),
    (10.0, 7),
    (7.0, 6),
    (6.0, 5),
    (4.0, 4),
];

pub(crate) fn table_for(test: LanguageTest, skill: Skill) -> BandTable {
    match (test, skill) {
        (LanguageTest::Celpip, _) => CELPIP,
        (LanguageTest::Ielts, Skill::Reading) => IELTS_READING,
        (LanguageTest::Ielts, Skill::Writing) => IELTS_WRITING,
        (LanguageTest::Ielts, Skill::Listening) => IELTS_LISTENING,
        (LanguageTest::Ielts, Skill::Speaking) => IELTS_SPEAKING,
        (LanguageTest::Pte, Skill::Reading) => PTE_READING,
        (LanguageTest::Pte, Skill::Writing) => PTE_WRITING,
        (LanguageTest::Pte, Skill::Listening) => PTE_LISTENING,
        (LanguageTest::Pte, Skill::Speaking) => PTE_SPEAKING,
        (LanguageTest::Tef, Skill::Reading) => TEF_READING,
        (LanguageTest::Tef, Skill::Writing) => TEF_WRITING,
        (LanguageTest::Tef, Skill::Listening) => TEF_LISTENING,
        (LanguageTest::Tef, Skill::Speaking) => TEF_SPEAKING,
        (LanguageTest::Tcf, Skill::Reading) => TCF_READING,
        (LanguageTest::Tcf, Skill::Writing) => TCF_WRITING,
        (LanguageTest::Tcf, Skill::Listening) => TCF_LISTENING,
        (LanguageTest::Tcf, Skill::Speaking) => TCF_SPEAKING,
    }
}

pub(crate) fn lookup(table: BandTable, raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }

    table
        .iter()
        .find(|(threshold, _)| raw >= *threshold)
        .map(|(_, level)| *level)
        .unwrap_or(0)
}
