use crate::comparison::domain::{AggregationOutcome, ReportMetadata};

/// AnalysisResponse - Internal response DTO from the comparison use case
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    /// Computed report, or the configuration issues that blocked it
    pub outcome: AggregationOutcome,
    /// Report metadata (timestamp, tool info, report id)
    pub metadata: ReportMetadata,
}

impl AnalysisResponse {
    pub fn new(outcome: AggregationOutcome, metadata: ReportMetadata) -> Self {
        Self { outcome, metadata }
    }

    /// Whether the configuration was accepted and a report computed
    pub fn is_computed(&self) -> bool {
        matches!(self.outcome, AggregationOutcome::Computed(_))
    }
}
