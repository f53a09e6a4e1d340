//! driver-catalog - Hardware driver and firmware catalog builder
//!
//! This library turns loosely structured spreadsheet sheets (one tab per
//! operating system, plus firmware and model-matrix tabs) into a
//! normalized product catalog, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`catalog`): rows, products, header aliases,
//!   fill-down, classification, aggregation, search and grouping
//! - **Application Layer** (`application`): the build-catalog use case,
//!   DTOs, read models and factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): sheet API client, directory source,
//!   formatters, output and console adapters
//! - **Shared** (`shared`): error types, result alias and file safety checks
//!
//! # Example
//!
//! ```no_run
//! use driver_catalog::prelude::*;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! let source = OpenSheetClient::new("my-sheet-id", DEFAULT_BASE_URL, Duration::from_secs(30))?;
//! let use_case = BuildCatalogUseCase::new(source, StderrProgressReporter::new());
//!
//! let request = CatalogRequest::builder().search("x710").build()?;
//! let response = use_case.execute(request).await?;
//!
//! let model = CatalogReadModelBuilder::build(&response);
//! println!("{}", MarkdownFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DirectorySheetSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{OpenSheetClient, DEFAULT_BASE_URL};
    pub use crate::application::dto::{CatalogRequest, CatalogResponse, OutputFormat};
    pub use crate::application::read_models::{CatalogReadModel, CatalogReadModelBuilder};
    pub use crate::application::use_cases::BuildCatalogUseCase;
    pub use crate::catalog::domain::{
        Catalog, DriverEntry, Product, RawRow, SheetBatch, SheetLayout, SheetSpec,
    };
    pub use crate::catalog::policies::{FieldAliases, LogicalField};
    pub use crate::catalog::services::{Aggregator, CatalogFilter, SampleData, SidebarTree};
    pub use crate::ports::outbound::{
        CatalogFormatter, OutputPresenter, ProgressReporter, SheetSource,
    };
    pub use crate::shared::Result;
}
