use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use stress_scale::adapters::{
    renderer_for, AnswerSheet, LocalReportStorage, ScriptedPrompter, TerminalPrompter,
};
use stress_scale::application::{
    ExportReportCommand, ExportReportHandler, RunAssessmentCommand, RunAssessmentHandler,
};
use stress_scale::config::{AppConfig, LoggingConfig};
use stress_scale::domain::catalog;
use stress_scale::domain::scoring::AssessmentReport;
use stress_scale::ports::{AssessmentPrompter, ExportFormat, ReportRenderer};

#[derive(Parser)]
#[command(name = "stress-scale")]
#[command(about = "Combined College Student Stress Scale (CCSSS)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the assessment and export the report
    Run {
        /// Answer from a YAML or JSON answer sheet instead of the terminal
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Export format (pdf, csv, markdown, json); repeatable
        #[arg(long = "format", value_name = "FORMAT")]
        formats: Vec<ExportFormat>,

        /// Directory reports are written to
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Skip writing report files
        #[arg(long)]
        no_export: bool,
    },

    /// Score an answer sheet and print the result as JSON
    Score {
        #[arg(long)]
        answers: PathBuf,

        /// Print the full report instead of the result only
        #[arg(long)]
        report: bool,
    },

    /// List the question catalog
    Questions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    init_tracing(&config.logging)?;

    match cli.command {
        Commands::Run {
            answers,
            formats,
            output_dir,
            no_export,
        } => {
            let run = RunAssessmentCommand {
                max_onboarding_attempts: config.assessment.max_onboarding_attempts,
                allow_retake: config.assessment.allow_retake && answers.is_none(),
            };
            let Some(report) = run_assessment(answers, run)? else {
                tracing::info!("Assessment not started");
                return Ok(());
            };

            if no_export || !config.export.enabled {
                return Ok(());
            }
            let formats = if formats.is_empty() {
                config.export.format_list()?
            } else {
                formats
            };
            let output_dir = output_dir.unwrap_or_else(|| config.export.output_dir.clone());
            export(report, formats, output_dir).await?;
        }
        Commands::Score { answers, report } => {
            let sheet = AnswerSheet::load(&answers)?;
            let mut prompter = ScriptedPrompter::new(sheet);
            let run = RunAssessmentCommand {
                allow_retake: false,
                ..RunAssessmentCommand::default()
            };
            RunAssessmentHandler::new().handle(&mut prompter, run)?;
            let finished = prompter
                .into_report()
                .context("Answer sheet did not complete the assessment")?;

            let json = if report {
                serde_json::to_string_pretty(&finished)?
            } else {
                serde_json::to_string_pretty(finished.result())?
            };
            println!("{}", json);
        }
        Commands::Questions => print_catalog(),
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter()?)
        .with_writer(std::io::stderr);
    if logging.is_json() {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

/// Runs the questionnaire, returning the report of the last attempt.
fn run_assessment(
    answers: Option<PathBuf>,
    cmd: RunAssessmentCommand,
) -> Result<Option<AssessmentReport>> {
    let mut prompter: Box<dyn AssessmentPrompter> = match answers {
        Some(path) => Box::new(ScriptedPrompter::new(AnswerSheet::load(&path)?)),
        None => Box::new(TerminalPrompter::stdio()),
    };
    let result = RunAssessmentHandler::new().handle(prompter.as_mut(), cmd)?;
    tracing::info!(
        attempts = result.reports.len(),
        abandoned = result.abandoned,
        "Assessment finished"
    );
    Ok(result.latest().cloned())
}

async fn export(
    report: AssessmentReport,
    formats: Vec<ExportFormat>,
    output_dir: PathBuf,
) -> Result<()> {
    let renderers: Vec<Arc<dyn ReportRenderer>> = ExportFormat::ALL
        .iter()
        .map(|f| Arc::from(renderer_for(*f)))
        .collect();
    let storage = Arc::new(LocalReportStorage::new(output_dir));
    let handler = ExportReportHandler::new(storage, renderers);

    let result = handler.handle(ExportReportCommand { report, formats }).await?;
    for stored in &result.stored {
        println!("Saved {} ({} bytes)", stored.path.display(), stored.size_bytes);
    }
    Ok(())
}

fn print_catalog() {
    println!("Core Assessment");
    for question in catalog::core_questions() {
        println!("  {:<4} {}", question.id().as_str(), question.text());
    }
    for module in catalog::modules() {
        println!();
        println!("{}", module.name());
        for question in module.questions() {
            println!("  {:<4} {}", question.id().as_str(), question.text());
        }
    }
    println!();
    println!("{} questions", catalog::question_count());
}
