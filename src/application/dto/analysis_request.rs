use crate::comparison::domain::ConfigurationInput;

/// AnalysisRequest - Internal request DTO for the comparison use case
///
/// Carries the raw, unvalidated configuration; validation happens in the
/// aggregator so that problems come back as issues rather than errors.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub input: ConfigurationInput,
}

impl AnalysisRequest {
    pub fn new(input: ConfigurationInput) -> Self {
        Self { input }
    }
}
