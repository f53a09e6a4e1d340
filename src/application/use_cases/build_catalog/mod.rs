use crate::application::dto::{CatalogRequest, CatalogResponse, SheetReport};
use crate::catalog::domain::{Catalog, RawRow, SheetBatch, SheetSpec};
use crate::catalog::services::{Aggregator, CatalogFilter, SampleData, SidebarTree};
use crate::ports::outbound::{ProgressReporter, SheetSource};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use futures::future::join_all;
use std::cell::Cell;

/// BuildCatalogUseCase - Core use case for building the driver catalog
///
/// Fetches every configured sheet concurrently, normalizes the rows into
/// a catalog, then applies the search filter and sidebar grouping.
///
/// # Type Parameters
/// * `S` - SheetSource implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildCatalogUseCase<S, PR> {
    sheet_source: S,
    progress_reporter: PR,
}

impl<S, PR> BuildCatalogUseCase<S, PR>
where
    S: SheetSource,
    PR: ProgressReporter,
{
    /// Creates a new BuildCatalogUseCase with injected dependencies
    pub fn new(sheet_source: S, progress_reporter: PR) -> Self {
        Self {
            sheet_source,
            progress_reporter,
        }
    }

    /// Executes the build-catalog use case
    ///
    /// A sheet that fails to load contributes no rows and a warning. When
    /// every sheet fails the sample dataset is used instead, unless the
    /// request disables that fallback.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The search query is invalid
    /// - Every sheet failed and sample fallback is disabled
    pub async fn execute(&self, request: CatalogRequest) -> Result<CatalogResponse> {
        let filter = CatalogFilter::new(&request.search)?;

        // Step 1: Fetch all sheets concurrently
        let (batches, sheets) = self.fetch_sheets(&request.sheets).await;

        // Step 2: Normalize, or fall back when nothing loaded
        let used_sample_data = sheets.iter().all(SheetReport::is_failed);
        let catalog = if used_sample_data {
            self.fallback_catalog(&request, sheets.len())?
        } else {
            self.normalize(&batches, &request)
        };

        let status_message = Self::status_message(&catalog, &sheets, used_sample_data);

        // Step 3: Filter and group
        let products = filter.filter(&catalog);
        let sidebar = request
            .include_tree
            .then(|| SidebarTree::build(&products));

        if !filter.is_empty() {
            self.progress_reporter.report(&format!(
                "🔍 {} of {} product(s) match '{}'",
                products.len(),
                catalog.len(),
                request.search.trim()
            ));
        }
        self.progress_reporter
            .report_completion(&format!("✅ {}", status_message));

        Ok(CatalogResponse {
            catalog,
            products,
            sidebar,
            sheets,
            status_message,
            used_sample_data,
            search: request.search,
        })
    }

    /// Fetches every sheet at once; failures become empty batches
    async fn fetch_sheets(&self, sheets: &[SheetSpec]) -> (Vec<SheetBatch>, Vec<SheetReport>) {
        let total = sheets.len();
        self.progress_reporter
            .report(&format!("📊 Loading {} sheet(s)...", total));

        let completed = Cell::new(0usize);
        let fetches = sheets.iter().map(|sheet| {
            let completed = &completed;
            async move {
                let result = self.sheet_source.fetch_rows(sheet.name()).await;
                completed.set(completed.get() + 1);
                self.progress_reporter
                    .report_progress(completed.get(), total, Some(sheet.name()));
                self.settle(sheet, result)
            }
        });

        join_all(fetches).await.into_iter().unzip()
    }

    /// Maps one fetch result to its batch and report
    fn settle(&self, sheet: &SheetSpec, result: Result<Vec<RawRow>>) -> (SheetBatch, SheetReport) {
        match result {
            Ok(rows) => {
                let report = SheetReport::loaded(sheet.name(), rows.len());
                (SheetBatch::new(sheet.clone(), rows), report)
            }
            Err(e) => {
                let details = one_line(&e);
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Skipping sheet '{}': {}",
                    sheet.name(),
                    details
                ));
                (
                    SheetBatch::new(sheet.clone(), Vec::new()),
                    SheetReport::failed(sheet.name(), details),
                )
            }
        }
    }

    fn normalize(&self, batches: &[SheetBatch], request: &CatalogRequest) -> Catalog {
        let rows: usize = batches.iter().map(|b| b.rows.len()).sum();
        let catalog = Aggregator::normalize(batches, &request.aliases);
        self.progress_reporter.report(&format!(
            "🔧 Normalized {} row(s) into {} product(s) with {} driver entr{}",
            rows,
            catalog.len(),
            catalog.driver_count(),
            if catalog.driver_count() == 1 { "y" } else { "ies" }
        ));
        catalog
    }

    fn fallback_catalog(&self, request: &CatalogRequest, sheet_count: usize) -> Result<Catalog> {
        if !request.sample_fallback {
            return Err(CatalogError::AllSourcesUnavailable { count: sheet_count }.into());
        }

        self.progress_reporter.report_error(&format!(
            "⚠️  Warning: All {} sheet(s) failed to load, using the built-in sample data",
            sheet_count
        ));
        Ok(SampleData::catalog(&request.aliases))
    }

    fn status_message(catalog: &Catalog, sheets: &[SheetReport], used_sample_data: bool) -> String {
        let total = sheets.len();
        if used_sample_data {
            return format!(
                "Data load failed for all {} sheet(s); showing {} sample product(s)",
                total,
                catalog.len()
            );
        }

        let loaded = sheets.iter().filter(|s| !s.is_failed()).count();
        format!(
            "Loaded {} product(s) from {} of {} sheet(s)",
            catalog.len(),
            loaded,
            total
        )
    }
}

/// Flattens a multi-line error display into one line
fn one_line(error: &anyhow::Error) -> String {
    error
        .to_string()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
