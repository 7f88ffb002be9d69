use crate::report::{render_catalog, render_score_report};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vocational_test::assessment::{
    answer_sheet_from_slice, calculate_result, AnswerSheetSummary, QuestionCatalog,
};
use vocational_test::config::AppConfig;
use vocational_test::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Vocational Test",
    about = "Score vocational questionnaires and serve the scoring API",
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
    /// Score an answer sheet stored as JSON
    Score(ScoreArgs),
    /// Print the active questionnaire
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// CSV question catalog (id,area,prompt); defaults to the built-in questionnaire
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding the answers array
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// CSV question catalog (id,area,prompt)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the raw scoring result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// CSV question catalog (id,area,prompt)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Catalog(args) => run_catalog(args),
    }
}

fn load_catalog(override_path: Option<PathBuf>) -> Result<QuestionCatalog, AppError> {
    let config = AppConfig::load()?;
    let path = override_path.or(config.catalog.path);
    Ok(QuestionCatalog::load(path.as_deref())?)
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        catalog,
        json,
    } = args;

    let catalog = load_catalog(catalog)?;
    let raw = std::fs::read(&answers)?;
    let sheet = answer_sheet_from_slice(&raw)?;

    let result = calculate_result(Some(catalog.questions()), Some(sheet.as_slice()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let summary = AnswerSheetSummary::new(&result, &sheet);
    render_score_report(&answers, &catalog, &summary);
    Ok(())
}

fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog)?;
    render_catalog(&catalog);
    Ok(())
}
