use crate::application::read_models::ComparisonReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::AnalysisError;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable comparison reports
///
/// Serializes the read model as-is; field names in the read model are
/// the JSON schema.
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ComparisonReadModel) -> Result<String> {
        let mut output =
            serde_json::to_string_pretty(model).map_err(|e| AnalysisError::OutputGenerationError {
                format: "JSON".to_string(),
                details: e.to_string(),
            })?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::fixtures;
    use serde_json::Value;

    fn format(model: &ComparisonReadModel) -> Value {
        let output = JsonFormatter::new().format(model).unwrap();
        assert!(output.ends_with('\n'));
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_json_computed_report() {
        let json = format(&fixtures::computed_model());

        assert_eq!(json["status"], "computed");
        assert_eq!(json["metadata"]["dataset_version"], "fixture-1");
        assert_eq!(json["configuration"]["devices"], 1000);
        assert_eq!(json["configuration"]["industry"], "healthcare");
        assert_eq!(json["vendors"].as_array().unwrap().len(), 2);
        assert_eq!(json["skipped_vendors"][0], "ghost");
        assert!(json["recommendation"]["ranking"].is_array());
        assert!(json["recommendation_note"].is_null());
    }

    #[test]
    fn test_json_vendor_fields() {
        let json = format(&fixtures::computed_model());
        let alpha = &json["vendors"][0];

        assert_eq!(alpha["id"], "alpha");
        assert_eq!(alpha["cost_breakdown"].as_array().unwrap().len(), 7);
        assert!(alpha["roi"]["baseline_cost"].is_number());
        assert!(alpha["risk"]["risk_score"].is_number());
        assert!(alpha["compliance"]["frameworks"].is_array());
        assert!(alpha["zero_trust"]["level"].is_string());
    }

    #[test]
    fn test_json_roi_sentinels_are_tagged() {
        let json = format(&fixtures::computed_model());
        let alpha = &json["vendors"][0];
        let beta = &json["vendors"][1];

        assert_eq!(beta["total_cost"], 0.0);
        assert_eq!(beta["roi"]["percentage"]["status"], "not_applicable");
        assert!(beta["roi"]["percentage"].get("value").is_none());
        assert_eq!(beta["roi"]["payback"]["status"], "months");
        assert!(beta["cost_per_security_point"].is_number());

        assert_eq!(alpha["roi"]["percentage"]["status"], "value");
        assert!(alpha["roi"]["percentage"]["value"].is_number());
        assert_eq!(alpha["roi"]["payback"]["status"], "no_payback");
    }

    #[test]
    fn test_json_financials() {
        let json = format(&fixtures::computed_model());
        let alpha = &json["vendors"][0];

        assert_eq!(alpha["yearly_costs"].as_array().unwrap().len(), 3);
        assert_eq!(alpha["yearly_costs"][0]["year"], 1);
        let financials = &alpha["financials"];
        assert_eq!(financials["discount_rate"], 8.0);
        assert!(financials["npv"].is_number());
        assert!(financials["irr"]["status"].is_string());
        assert_eq!(financials["scenarios"].as_array().unwrap().len(), 3);
        assert_eq!(financials["scenarios"][2]["scenario"], "optimistic");
        assert_eq!(financials["projections"].as_array().unwrap().len(), 3);

        let beta = &json["vendors"][1];
        assert_eq!(beta["financials"]["profitability_index"]["status"], "not_applicable");
    }

    #[test]
    fn test_json_single_vendor_has_roi_note() {
        let json = format(&fixtures::single_vendor_model());
        let alpha = &json["vendors"][0];

        assert!(alpha["roi"].is_null());
        assert!(alpha["financials"].is_null());
        assert!(alpha["roi_note"].is_string());
        assert!(json["recommendation"].is_null());
        assert!(json["recommendation_note"].is_string());
    }

    #[test]
    fn test_json_insufficient_configuration() {
        let json = format(&fixtures::insufficient_model());

        assert_eq!(json["status"], "insufficient_configuration");
        assert_eq!(json["issues"][0], "device count is required");
        assert!(json["configuration"].is_null());
        assert_eq!(json["vendors"].as_array().unwrap().len(), 0);
    }
}
