use crate::application::dto::{AnalysisRequest, AnalysisResponse, VendorListing, VendorSummary};
use crate::comparison::domain::{AggregationOutcome, ComparisonReport, PricingModel, VendorDataset};
use crate::comparison::policies::CalculationTables;
use crate::comparison::services::{MetadataGenerator, MetricsAggregator};
use crate::ports::inbound::VendorComparisonPort;
use crate::ports::outbound::{ProgressReporter, VendorDatasetRepository};
use crate::shared::Result;

/// CompareVendorsUseCase - Core use case for vendor comparison
///
/// Loads the dataset through the repository port, runs the metrics
/// aggregator with the injected calculation tables, and stamps the
/// outcome with report metadata.
///
/// # Type Parameters
/// * `DR` - VendorDatasetRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct CompareVendorsUseCase<DR, PR> {
    dataset_repository: DR,
    progress_reporter: PR,
    tables: CalculationTables,
}

impl<DR, PR> CompareVendorsUseCase<DR, PR>
where
    DR: VendorDatasetRepository,
    PR: ProgressReporter,
{
    /// Creates a new CompareVendorsUseCase with injected dependencies
    pub fn new(dataset_repository: DR, progress_reporter: PR, tables: CalculationTables) -> Self {
        Self {
            dataset_repository,
            progress_reporter,
            tables,
        }
    }

    /// Executes the comparison
    ///
    /// # Errors
    /// Returns an error if the dataset cannot be loaded. An unusable
    /// configuration is not an error; it comes back as
    /// `AggregationOutcome::InsufficientConfiguration`.
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        let dataset = self.load_and_report_dataset()?;

        let aggregator = MetricsAggregator::new(&dataset, &self.tables);
        let outcome = aggregator.aggregate(&request.input);

        match &outcome {
            AggregationOutcome::Computed(report) => self.report_computed(report),
            AggregationOutcome::InsufficientConfiguration { issues } => {
                for issue in issues {
                    self.progress_reporter
                        .report_error(&format!("❌ Configuration issue: {}", issue));
                }
            }
        }

        Ok(AnalysisResponse::new(
            outcome,
            MetadataGenerator::generate_default_metadata(),
        ))
    }

    /// Lists the vendors of the active dataset
    pub fn list_vendors(&self) -> Result<VendorListing> {
        let dataset = self.dataset_repository.load_dataset()?;
        Ok(Self::build_listing(&dataset))
    }

    fn load_and_report_dataset(&self) -> Result<VendorDataset> {
        self.progress_reporter.report(&format!(
            "📖 Loading vendor dataset from: {}",
            self.dataset_repository.source()
        ));

        let dataset = self.dataset_repository.load_dataset()?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} vendor(s), dataset version {}",
            dataset.len(),
            dataset.version()
        ));

        Ok(dataset)
    }

    fn report_computed(&self, report: &ComparisonReport) {
        for id in &report.skipped_vendors {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Vendor '{}' is not in the dataset and was skipped.",
                id
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "📊 Compared {} vendor(s) over {} year(s)",
            report.results.len(),
            report.configuration.years()
        ));
    }

    fn build_listing(dataset: &VendorDataset) -> VendorListing {
        VendorListing {
            dataset_version: dataset.version().to_string(),
            vendors: dataset
                .vendors()
                .iter()
                .map(|v| VendorSummary {
                    id: v.id.to_string(),
                    name: v.name.clone(),
                    deployment: v.deployment.as_str().to_string(),
                    pricing_model: match v.pricing.model {
                        PricingModel::PerDevice => "per_device",
                        PricingModel::PerUser => "per_user",
                        PricingModel::FlatRate => "flat_rate",
                    }
                    .to_string(),
                    monthly_rate: v.pricing.monthly_rate,
                })
                .collect(),
        }
    }
}

impl<DR, PR> VendorComparisonPort for CompareVendorsUseCase<DR, PR>
where
    DR: VendorDatasetRepository,
    PR: ProgressReporter,
{
    fn compare(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        self.execute(request)
    }

    fn list_vendors(&self) -> Result<VendorListing> {
        CompareVendorsUseCase::list_vendors(self)
    }
}
