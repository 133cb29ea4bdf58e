use std::fmt::Write;

use super::domain::Criterion;
use super::AnalysisResult;

const RULE_WIDTH: usize = 70;

/// Plain-text export of an analysis, suitable for download or terminal output.
pub fn render_text_report(result: &AnalysisResult) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write_report(&mut out, result, &heavy, &light);
    out
}

fn write_report(
    out: &mut String,
    result: &AnalysisResult,
    heavy: &str,
    light: &str,
) -> std::fmt::Result {
    writeln!(out, "{heavy}")?;
    writeln!(out, "DATABASE DECISION ADVISOR - ANALYSIS REPORT")?;
    writeln!(out, "{heavy}")?;
    writeln!(out)?;

    writeln!(out, "USER REQUIREMENTS:")?;
    writeln!(out, "{light}")?;
    for criterion in Criterion::ALL {
        writeln!(
            out,
            "{}: {}",
            criterion.display_name(),
            result.requirements.value(criterion).label()
        )?;
    }
    writeln!(out)?;

    let recommendation = &result.recommendation;
    writeln!(out, "RECOMMENDATION:")?;
    writeln!(out, "{light}")?;
    writeln!(out, "Database: {}", recommendation.database)?;
    writeln!(out, "Confidence: {}", recommendation.confidence.label())?;
    writeln!(out)?;
    writeln!(out, "Reasoning:")?;
    for reason in &recommendation.reasoning {
        writeln!(out, "  - {reason}")?;
    }
    writeln!(out)?;

    writeln!(out, "DATABASE COMPARISON:")?;
    writeln!(out, "{light}")?;
    for scored in &result.profiles {
        let profile = scored.profile;
        writeln!(out)?;
        writeln!(out, "#{} {} (Score: {})", scored.rank, profile.name, scored.score)?;
        writeln!(out, "Type: {}", profile.kind)?;
        writeln!(out, "Pros:")?;
        for pro in profile.pros {
            writeln!(out, "  + {pro}")?;
        }
        writeln!(out, "Cons:")?;
        for con in profile.cons {
            writeln!(out, "  x {con}")?;
        }
    }
    writeln!(out)?;

    if !result.tradeoffs.is_empty() {
        writeln!(out, "KEY TRADE-OFFS:")?;
        writeln!(out, "{light}")?;
        for tradeoff in &result.tradeoffs {
            writeln!(out)?;
            writeln!(out, "{}", tradeoff.title)?;
            writeln!(out, "  {}", tradeoff.description)?;
            for side in &tradeoff.sides {
                writeln!(out, "  * {}: {}", side.favors, side.narrative)?;
            }
        }
        writeln!(out)?;
    }

    if !result.alternatives.is_empty() {
        writeln!(out, "ALTERNATIVE DATABASES:")?;
        writeln!(out, "{light}")?;
        for alternative in &result.alternatives {
            writeln!(out)?;
            writeln!(out, "{}", alternative.database)?;
            writeln!(out, "  {}", alternative.reason)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{heavy}")?;
    writeln!(out, "End of Report")?;
    writeln!(out, "{heavy}")?;
    Ok(())
}
