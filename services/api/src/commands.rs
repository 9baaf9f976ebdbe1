use crate::infra::{load_profile, parse_skill, parse_test};
use clap::Args;
use crs::batch::{CandidateRanker, RankedCandidate};
use crs::config::AppConfig;
use crs::error::AppError;
use crs::language::{convert, LanguageTest, Skill};
use crs::scoring::{score, CrsResult, SkillPoints};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a candidate profile in JSON
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Print the full result as JSON instead of the itemized breakdown
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ConvertArgs {
    /// Language test (celpip, ielts, pte, tef, tcf)
    #[arg(long, value_parser = parse_test)]
    pub(crate) test: LanguageTest,
    /// Skill the result was reported for
    #[arg(long, value_parser = parse_skill)]
    pub(crate) skill: Skill,
    /// Raw result as printed on the test report
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) score: f64,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// CSV export with one candidate per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Only print the first N candidates
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let profile = load_profile(&args.profile)?.into_profile()?;
    let result = score(&profile);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_result(&result);
    }
    Ok(())
}

pub(crate) fn run_convert(args: ConvertArgs) -> Result<(), AppError> {
    let level = convert(args.test, args.skill, args.score);
    println!(
        "{} {} {} -> {} {}",
        args.test,
        args.skill.label(),
        args.score,
        args.test.family().scale(),
        level
    );
    Ok(())
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let ranked = CandidateRanker::new(config.ranking.max_rows).rank_path(&args.csv)?;
    let shown = args.limit.unwrap_or(ranked.len());

    println!("Ranked {} candidates from {}", ranked.len(), args.csv.display());
    for candidate in ranked.iter().take(shown) {
        render_ranked(candidate);
    }
    Ok(())
}

fn render_ranked(candidate: &RankedCandidate) {
    let breakdown = &candidate.result.breakdown;
    println!(
        "{:>4}. {:<16} {:>5}  (core {}, spouse {}, transferability {}, additional {})",
        candidate.rank,
        candidate.candidate_id,
        candidate.result.total,
        breakdown.core,
        breakdown.spouse,
        breakdown.transferability,
        breakdown.additional
    );
}

fn skill_line(label: &str, points: &SkillPoints) -> String {
    format!(
        "{label}: {} (R {}, W {}, L {}, S {})",
        points.total, points.reading, points.writing, points.listening, points.speaking
    )
}

fn capped_suffix(subtotal: u16, capped: u16) -> String {
    if subtotal > capped {
        format!(" (capped from {subtotal})")
    } else {
        String::new()
    }
}

pub(crate) fn render_result(result: &CrsResult) {
    let details = &result.details;
    let core = &details.core;
    println!("CRS total: {}", result.total);

    println!(
        "- Core / human capital: {}{}",
        core.capped,
        capped_suffix(core.subtotal, core.capped)
    );
    println!("    age: {}", core.age);
    println!("    education: {}", core.education);
    println!("    {}", skill_line("first official language", &core.first_language));
    if let Some(second) = &core.second_language {
        println!(
            "    {}{}",
            skill_line("second official language", &second.skills),
            capped_suffix(second.skills.total, second.capped)
        );
    }
    println!("    Canadian work experience: {}", core.canadian_work);

    let spouse = &details.spouse;
    if spouse.scored {
        println!("- Spouse factors: {}", spouse.capped);
        println!("    education: {}", spouse.education);
        println!("    {}", skill_line("language", &spouse.language));
        println!("    Canadian work experience: {}", spouse.canadian_work);
    }

    let transferability = &details.transferability;
    println!(
        "- Skill transferability: {}{}",
        transferability.capped,
        capped_suffix(transferability.subtotal, transferability.capped)
    );
    println!(
        "    education: {} (language {}, Canadian work {})",
        transferability.education_capped,
        transferability.education_language,
        transferability.education_canadian_work
    );
    println!(
        "    foreign work: {} (language {}, Canadian work {})",
        transferability.foreign_work_capped,
        transferability.foreign_work_language,
        transferability.foreign_work_canadian_work
    );
    println!(
        "    certificate of qualification: {}",
        transferability.certificate_of_qualification
    );

    let additional = &details.additional;
    println!(
        "- Additional points: {}{}",
        additional.capped,
        capped_suffix(additional.subtotal, additional.capped)
    );
    println!(
        "    provincial nomination: {}",
        additional.provincial_nomination
    );
    println!("    French language: {}", additional.french_language);
    println!("    Canadian education: {}", additional.canadian_education);
    println!("    sibling in Canada: {}", additional.sibling_in_canada);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_sections_show_their_raw_subtotal() {
        assert_eq!(capped_suffix(150, 100), " (capped from 150)");
        assert_eq!(capped_suffix(38, 38), "");
    }

    #[test]
    fn skill_lines_list_each_ability() {
        let points = SkillPoints {
            reading: 31,
            writing: 31,
            listening: 31,
            speaking: 31,
            total: 124,
        };
        assert_eq!(
            skill_line("first", &points),
            "first: 124 (R 31, W 31, L 31, S 31)"
        );
    }
}
