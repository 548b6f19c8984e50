//! nac-compare - Network Access Control vendor comparison
//!
//! This library compares NAC vendors from a curated, versioned dataset:
//! total cost of ownership, ROI and payback, risk and compliance scores,
//! operational effort, zero-trust maturity and business value. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`comparison`): Vendor model, configuration and the pure metric calculators
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Dataset loading, report formatting and output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use nac_compare::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = CompareVendorsUseCase::new(
//!     EmbeddedDatasetRepository::new(),
//!     StderrProgressReporter::new(),
//!     CalculationTables::standard(),
//! );
//!
//! let request = AnalysisRequest::new(ConfigurationInput {
//!     devices: Some(2500),
//!     industry: Some("healthcare".to_string()),
//!     vendors: vec!["portnox".to_string(), "cisco_ise".to_string()],
//!     ..Default::default()
//! });
//! let response = use_case.execute(request)?;
//!
//! let model = ComparisonReadModelBuilder::build(&response.outcome, &response.metadata);
//! let output = MarkdownFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod comparison;
pub mod config;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::dataset::{
        EmbeddedDatasetRepository, FileDatasetRepository,
    };
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{AnalysisRequest, AnalysisResponse, OutputFormat};
    pub use crate::application::read_models::{ComparisonReadModel, ComparisonReadModelBuilder};
    pub use crate::application::use_cases::CompareVendorsUseCase;
    pub use crate::comparison::domain::{
        AggregationOutcome, AnalysisConfiguration, CalculationResult, Comparison,
        ComparisonReport, ConfigurationInput, ConfigurationIssue, Metric, Payback, VendorDataset,
        VendorId, VendorRecord,
    };
    pub use crate::comparison::policies::{CalculationConstants, CalculationTables};
    pub use crate::comparison::services::MetricsAggregator;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ReportFormatter, VendorDatasetRepository,
    };
    pub use crate::shared::Result;
}
