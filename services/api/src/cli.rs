use crate::commands::{run_analyze, run_batch, run_databases, AnalyzeArgs, BatchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand, ValueEnum};
use db_advisor::config::AppConfig;
use db_advisor::error::AppError;
use db_advisor::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "db-advisor",
    about = "Recommend MySQL, PostgreSQL or MongoDB for a set of application requirements",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Analyze one requirement combination and print the recommendation
    Analyze(AnalyzeArgs),
    /// Analyze every scenario in a CSV file
    Batch(BatchArgs),
    /// List the database profiles in the knowledge base
    Databases,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => {
            init_command_telemetry()?;
            run_analyze(args)
        }
        Command::Batch(args) => {
            init_command_telemetry()?;
            run_batch(args)
        }
        Command::Databases => {
            init_command_telemetry()?;
            run_databases()
        }
    }
}

/// One-shot commands log to stderr with the same filter the server uses; `serve`
/// initialises telemetry itself after applying its overrides.
pub(crate) fn init_command_telemetry() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["db-advisor"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn analyze_accepts_every_criterion_and_a_format() {
        let cli = Cli::try_parse_from([
            "db-advisor",
            "analyze",
            "--app-type",
            "web",
            "--data-structure",
            "structured",
            "--scalability",
            "medium",
            "--transactions",
            "high",
            "--schema-flexibility",
            "no",
            "--format",
            "json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(args.app_type, "web");
            }
            other => panic!("expected analyze, got {other:?}"),
        }
    }

    #[test]
    fn command_telemetry_installs_a_global_subscriber() {
        init_command_telemetry().expect("telemetry initialises");

        assert!(tracing::dispatcher::has_been_set());
    }

    #[test]
    fn batch_requires_a_csv_path() {
        assert!(Cli::try_parse_from(["db-advisor", "batch"]).is_err());
    }
}
