//! `civic` - render the tracker's pages as JSON
//!
//! Stands in for the browser front end: each subcommand builds the view
//! state a page would hold, renders it and prints the result wrapped in an
//! `ApiResponse` envelope.

use civic_client::{
    ClientConfig, ClientResult, IssueBoard, IssuesView, MapView, ProgressView, logger, seed,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use shared::error::ApiResponse;
use shared::filter::{CategoryFilter, StatusFilter};
use shared::models::{CATEGORIES, IssueCreate, Urgency};
use shared::util::today;
use std::io::Write;

#[derive(Parser)]
#[command(name = "civic", version, about = "Civic issue tracker pages as JSON")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Community issues list
    Issues {
        /// "all", "reported", "in-progress" or "resolved"
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// Matches title, description or location, any case
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Map markers, legend and issues in view
    Map {
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// "all" or a category key such as "road-infrastructure"
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },
    /// My reports and community progress
    Progress,
    /// Totals for the issues on the board
    Stats,
    /// Category keys and labels accepted by the report form
    Categories,
    /// Submit a report and print the created issue
    Report {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long)]
        urgency: Option<Urgency>,
    },
}

fn to_value<T: Serialize>(value: T) -> ClientResult<Value> {
    Ok(serde_json::to_value(value)?)
}

fn run(command: Command, config: &ClientConfig, board: &mut IssueBoard) -> ClientResult<Value> {
    match command {
        Command::Issues { status, search } => {
            let view = IssuesView::default().with_status(status).with_search(search);
            to_value(view.render(board.issues()))
        }
        Command::Map { status, category } => {
            let viewport = config.viewport()?;
            let view = MapView::default().with_status(status).with_category(category);
            to_value(view.render(board.issues(), &viewport))
        }
        Command::Progress => {
            to_value(ProgressView.render(&seed::my_progress(), &seed::community_stats()))
        }
        Command::Stats => to_value(board.stats()),
        Command::Categories => to_value(CATEGORIES),
        Command::Report {
            title,
            description,
            category,
            location,
            urgency,
        } => {
            let form = IssueCreate {
                title,
                description,
                category,
                location,
                urgency,
            };
            let issue = board.submit(form, &config.reporter, today())?;
            to_value(issue)
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = ClientConfig::from_env();
    logger::init_logger(&config.log_level, config.log_dir.as_deref())?;

    let mut board = if config.seed {
        IssueBoard::seeded()
    } else {
        IssueBoard::default()
    };
    tracing::debug!(issues = board.len(), "Board ready");

    let mut stdout = std::io::stdout().lock();
    match run(cli.command, &config, &mut board) {
        Ok(data) => {
            serde_json::to_writer_pretty(&mut stdout, &ApiResponse::success(data))?;
            writeln!(stdout)?;
            Ok(())
        }
        Err(err) => {
            let err = err.into_app_error();
            tracing::warn!(code = %err.code, "{}", err.message);
            serde_json::to_writer_pretty(&mut stdout, &ApiResponse::<()>::error(&err))?;
            writeln!(stdout)?;
            drop(stdout);
            std::process::exit(1);
        }
    }
}
