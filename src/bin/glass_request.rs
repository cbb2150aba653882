use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::info;

use glass_request::configure;
use glass_request::desk::RequestDesk;
use glass_request::logger::setup_logger;
use glass_request::models::{FormDraft, RequestSession};
use glass_request::sheet::SheetsApiClient;

#[derive(Parser, Debug)]
#[command(author, version, about = "Team 1 glass request tool", long_about = None)]
struct Args {
    /// Config file (defaults to config/config.yaml)
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the request number a new request would receive
    Preview {
        #[arg(long)]
        project_code: String,
        /// Request date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Submit a glass request
    Submit(SubmitArgs),
    /// List allowed glass descriptions
    Descriptions,
}

#[derive(clap::Args, Debug)]
struct SubmitArgs {
    #[arg(long)]
    project_code: String,
    /// Request date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,
    #[arg(long, default_value = "")]
    customer: String,
    #[arg(long, default_value = "")]
    project: String,
    #[arg(long, default_value_t = 0.0)]
    project_sqm: f64,
    /// Cutting list received (e.g. Yes / No)
    #[arg(long, default_value = "")]
    cutting: String,
    #[arg(long, default_value = "")]
    glass_desc: String,
    #[arg(long, default_value_t = 0.0)]
    height_mm: f64,
    #[arg(long, default_value_t = 0.0)]
    width_mm: f64,
    #[arg(long, default_value_t = 0)]
    qty: u32,
    #[arg(long, default_value_t = 0.0)]
    wastage: f64,
    #[arg(long, default_value = "")]
    remarks: String,
}

impl SubmitArgs {
    fn into_draft(self) -> FormDraft {
        let mut draft = FormDraft::new(self.date.unwrap_or_else(today));
        draft.project_code = self.project_code;
        draft.customer_name = self.customer;
        draft.project_name = self.project;
        draft.project_sqm = self.project_sqm;
        draft.cutting_list_received = self.cutting;
        draft.glass_description = self.glass_desc;
        draft.height_mm = self.height_mm;
        draft.width_mm = self.width_mm;
        draft.quantity = self.qty;
        draft.wastage_percent = self.wastage;
        draft.remarks = self.remarks;
        draft
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => configure::load_config_from(path),
        None => configure::load_config(),
    }
    .context("Failed to load config")?;

    setup_logger(&config).map_err(|e| anyhow::anyhow!("Failed to set up logger: {}", e))?;
    info!("sheet api: {}", config.api_url);

    let desk = RequestDesk::from_sheet(Arc::new(SheetsApiClient::new(&config)));

    match args.command {
        Command::Preview { project_code, date } => {
            let mut draft = FormDraft::new(date.unwrap_or_else(today));
            draft.project_code = project_code;
            let number = desk.preview_number(&draft).await;
            println!("{}", number);
        }
        Command::Submit(submit) => {
            let mut session = RequestSession::new(submit.into_draft());
            println!("SQM: {:.2}", session.draft.sqm());
            match desk.submit(&mut session).await {
                Ok(record) => println!("Request saved: {}", record.request_number),
                Err(e) => {
                    eprintln!("Failed to save request [{}]: {}", e.error_code(), e);
                    std::process::exit(1);
                }
            }
        }
        Command::Descriptions => {
            for description in desk.glass_descriptions().await {
                println!("{}", description);
            }
        }
    }

    Ok(())
}
