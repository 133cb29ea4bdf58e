use std::path::PathBuf;

use clap::Args;
use db_advisor::batch::{analyze_batch, ScenarioImporter, ScenarioOutcome};
use db_advisor::decision::{
    render_text_report, AnalysisResult, DatabaseProfile, DecisionEngine, RequirementsInput,
};
use db_advisor::error::AppError;

use crate::cli::OutputFormat;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Application type (Web, Analytics, RealTime)
    #[arg(long)]
    pub(crate) app_type: String,
    /// Data structure (Structured, SemiStructured, Unstructured)
    #[arg(long)]
    pub(crate) data_structure: String,
    /// Scalability requirement (Low, Medium, High)
    #[arg(long)]
    pub(crate) scalability: String,
    /// Transaction requirement (Low, High)
    #[arg(long)]
    pub(crate) transactions: String,
    /// Whether the schema must stay flexible (Yes, No)
    #[arg(long)]
    pub(crate) schema_flexibility: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with app_type, data_structure, scalability, transactions and
    /// schema_flexibility columns, plus an optional label column
    #[arg(long)]
    pub(crate) csv: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let input = RequirementsInput::new(
        args.app_type,
        args.data_structure,
        args.scalability,
        args.transactions,
        args.schema_flexibility,
    );
    let result = DecisionEngine::standard().analyze(&input)?;
    println!("{}", render_analysis(&result, args.format)?);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let scenarios = ScenarioImporter::from_path(&args.csv)?;
    let outcomes = analyze_batch(&DecisionEngine::standard(), &scenarios)?;
    println!("{}", render_outcomes(&outcomes, args.format)?);
    Ok(())
}

pub(crate) fn run_databases() -> Result<(), AppError> {
    let profiles = DecisionEngine::standard().knowledge().profiles;
    print!("{}", render_profiles(profiles));
    Ok(())
}

pub(crate) fn render_analysis(
    result: &AnalysisResult,
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(render_text_report(result)),
        OutputFormat::Json => to_json(result),
    }
}

pub(crate) fn render_outcomes(
    outcomes: &[ScenarioOutcome],
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => to_json(outcomes),
        OutputFormat::Text => {
            let recommended = outcomes.iter().filter(|o| o.is_recommended()).count();
            let mut lines: Vec<String> = outcomes.iter().map(ScenarioOutcome::summary_line).collect();
            lines.push(format!(
                "{} scenarios analyzed, {} rejected",
                outcomes.len(),
                outcomes.len() - recommended
            ));
            Ok(lines.join("\n"))
        }
    }
}

pub(crate) fn render_profiles(profiles: &[DatabaseProfile]) -> String {
    let mut out = String::new();
    for profile in profiles {
        out.push_str(&format!("{} ({})\n", profile.name, profile.kind));
        out.push_str(&format!("  Best fit: {}\n", profile.best_fit.join(", ")));
        for pro in profile.pros {
            out.push_str(&format!("  + {pro}\n"));
        }
        for con in profile.cons {
            out.push_str(&format!("  x {con}\n"));
        }
    }
    out
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}
