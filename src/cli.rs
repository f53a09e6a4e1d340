use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Build a searchable driver and firmware catalog from spreadsheet sheets
#[derive(Parser, Debug)]
#[command(name = "driver-catalog")]
#[command(version)]
#[command(
    about = "Build a searchable driver and firmware catalog from spreadsheet sheets",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./driver-catalog.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// ID of the published spreadsheet to read
    #[arg(long, value_name = "ID")]
    pub spreadsheet_id: Option<String>,

    /// Base URL of the sheet JSON API
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Tall driver sheet to load; repeat for several sheets
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheets: Vec<String>,

    /// Firmware sheet to load; repeat for several sheets
    #[arg(long = "firmware-sheet", value_name = "NAME")]
    pub firmware_sheets: Vec<String>,

    /// Wide (model-column) sheet to load; repeat for several sheets
    #[arg(long = "wide-sheet", value_name = "NAME", requires = "model_columns")]
    pub wide_sheets: Vec<String>,

    /// Model-version column of the wide sheets; repeat for several columns
    #[arg(long = "model-column", value_name = "COLUMN")]
    pub model_columns: Vec<String>,

    /// Read sheets from <DIR>/<sheet>.json instead of the network
    #[arg(long, value_name = "DIR")]
    pub from_dir: Option<PathBuf>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Only show products matching this text (case-insensitive)
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Include the sidebar grouping tree in the output
    #[arg(long)]
    pub tree: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Fail instead of rendering sample data when every sheet fails
    #[arg(long)]
    pub no_sample_fallback: bool,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..=600))]
    pub timeout: Option<u64>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether any sheet was named on the command line
    pub fn names_sheets(&self) -> bool {
        !(self.sheets.is_empty() && self.firmware_sheets.is_empty() && self.wide_sheets.is_empty())
    }
}
