pub mod business_value;
pub mod compliance_scorer;
pub mod financial_analysis;
pub mod metadata_generator;
pub mod metrics_aggregator;
pub mod operational;
pub mod recommendation;
pub mod risk_scorer;
pub mod roi_calculator;
pub mod tco_calculator;
pub mod zero_trust;

#[cfg(test)]
pub(crate) mod test_support;

pub use business_value::BusinessValueCalculator;
pub use compliance_scorer::ComplianceScorer;
pub use financial_analysis::FinancialAnalyzer;
pub use metadata_generator::MetadataGenerator;
pub use metrics_aggregator::MetricsAggregator;
pub use operational::OperationalEstimator;
pub use recommendation::RecommendationEngine;
pub use risk_scorer::RiskScorer;
pub use roi_calculator::RoiCalculator;
pub use tco_calculator::TcoCalculator;
pub use zero_trust::ZeroTrustClassifier;
