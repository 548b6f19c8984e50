pub mod configuration;
pub mod dataset;
pub mod metric;
pub mod report_metadata;
pub mod result;
pub mod vendor;

pub use configuration::{
    AnalysisConfiguration, ConfigurationInput, ConfigurationIssue, Industry, OrgSize, Region,
};
pub use dataset::{RawDataset, VendorDataset};
pub use metric::{Comparison, Metric, Payback};
pub use report_metadata::ReportMetadata;
pub use result::{
    AggregationOutcome, BusinessValue, CalculationResult, ComparisonReport, ComplianceMetrics,
    FinancialAnalysis, FrameworkScore, MaturityLevel, OperationalMetrics, ProjectionYear,
    Recommendation, RecommendationScore, RiskMetrics, RoiMetrics, ScenarioOutcome,
    SensitivityAnalysis, TimelineMetrics, Tco, TcoBreakdown, YearlyCost, ZeroTrustAssessment,
};
pub use vendor::{
    Complexity, CoverageLevel, Deployment, FeatureValue, Framework, FrameworkSupport,
    PricingModel, VendorId, VendorRecord,
};
