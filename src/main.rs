use driver_catalog::adapters::outbound::console::StderrProgressReporter;
use driver_catalog::adapters::outbound::filesystem::DirectorySheetSource;
use driver_catalog::adapters::outbound::network::{
    OpenSheetClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
use driver_catalog::application::dto::{CatalogRequest, CatalogResponse, OutputFormat};
use driver_catalog::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use driver_catalog::application::read_models::CatalogReadModelBuilder;
use driver_catalog::application::use_cases::BuildCatalogUseCase;
use driver_catalog::catalog::domain::SheetSpec;
use driver_catalog::catalog::policies::FieldAliases;
use driver_catalog::cli::Args;
use driver_catalog::config::{discover_config, load_config_from_path, ConfigFile};
use driver_catalog::ports::outbound::{ProgressReporter, SheetSource};
use driver_catalog::shared::error::{CatalogError, ExitCode};
use driver_catalog::shared::Result;
use std::process;
use std::time::Duration;

/// Effective settings after merging the config file and CLI flags
#[derive(Debug)]
struct Settings {
    request: CatalogRequest,
    format: OutputFormat,
    spreadsheet_id: Option<String>,
    base_url: String,
    timeout: Duration,
}

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    match run(args).await {
        Ok(ExitCode::Success) => {}
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let progress_reporter = StderrProgressReporter::new();

    let config = load_config(&args)?;
    if let Some(config) = &config {
        for warning in config.unknown_field_warnings() {
            progress_reporter.report_error(&warning);
        }
    }

    let settings = resolve_settings(&args, config.as_ref())?;

    let response = match &args.from_dir {
        Some(dir) => {
            progress_reporter.report(&format!("📂 Reading sheets from: {}", dir.display()));
            let source = DirectorySheetSource::new(dir)?;
            build_catalog(source, progress_reporter, settings.request).await?
        }
        None => {
            let spreadsheet_id = settings
                .spreadsheet_id
                .as_deref()
                .ok_or(CatalogError::MissingSpreadsheetId)?;
            let source = OpenSheetClient::new(spreadsheet_id, &settings.base_url, settings.timeout)?;
            build_catalog(source, progress_reporter, settings.request).await?
        }
    };

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let model = CatalogReadModelBuilder::build(&response);
    let output = FormatterFactory::create(settings.format).format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&output)?;

    if response.used_sample_data {
        Ok(ExitCode::SampleDataUsed)
    } else {
        Ok(ExitCode::Success)
    }
}

async fn build_catalog<S: SheetSource>(
    source: S,
    progress_reporter: StderrProgressReporter,
    request: CatalogRequest,
) -> Result<CatalogResponse> {
    BuildCatalogUseCase::new(source, progress_reporter)
        .execute(request)
        .await
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => Ok(Some(load_config_from_path(path)?)),
        None => discover_config(&std::env::current_dir()?),
    }
}

/// Merges config file values with CLI flags; CLI flags win
fn resolve_settings(args: &Args, config: Option<&ConfigFile>) -> Result<Settings> {
    let sheets = if args.names_sheets() {
        Some(sheets_from_args(args)?)
    } else {
        match config {
            Some(config) => config.sheet_specs()?,
            None => None,
        }
    };

    let aliases = match config {
        Some(config) => config.aliases()?,
        None => FieldAliases::default(),
    };

    let format = match (args.format, config) {
        (Some(format), _) => format,
        (None, Some(config)) => config.output_format()?.unwrap_or_default(),
        (None, None) => OutputFormat::default(),
    };

    let mut builder = CatalogRequest::builder()
        .aliases(aliases)
        .search(args.search.clone().unwrap_or_default())
        .include_tree(args.tree)
        .sample_fallback(!args.no_sample_fallback);
    if let Some(sheets) = sheets {
        builder = builder.sheets(sheets);
    }

    let timeout_secs = args
        .timeout
        .or_else(|| config.and_then(|c| c.timeout_secs))
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(Settings {
        request: builder.build()?,
        format,
        spreadsheet_id: args
            .spreadsheet_id
            .clone()
            .or_else(|| config.and_then(|c| c.spreadsheet_id.clone())),
        base_url: args
            .base_url
            .clone()
            .or_else(|| config.and_then(|c| c.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        timeout: Duration::from_secs(timeout_secs),
    })
}

/// Tall sheets first, then wide sheets, then firmware sheets
fn sheets_from_args(args: &Args) -> Result<Vec<SheetSpec>> {
    let tall = args.sheets.iter().map(SheetSpec::tall);
    let wide = args
        .wide_sheets
        .iter()
        .map(|name| SheetSpec::wide(name, args.model_columns.iter().cloned()));
    let firmware = args.firmware_sheets.iter().map(SheetSpec::firmware);

    tall.chain(wide).chain(firmware).collect()
}
