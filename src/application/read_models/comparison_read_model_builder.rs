//! Builder for constructing ComparisonReadModel from domain objects
//!
//! Rounding happens here and nowhere else: money to cents, ratios to two
//! decimal places, scores, rates and durations to one.

use super::comparison_read_model::{
    ComparisonReadModel, ConfigurationView, RankingView, RecommendationView, ReportMetadataView,
    ReportStatus,
};
use super::vendor_view::{
    BusinessValueView, ComplianceView, CostLineView, FinancialsView, FrameworkView,
    OperationalView, ProjectionView, RiskView, RoiView, ScenarioView, TimelineView, VendorView,
    YearlyCostView, ZeroTrustView,
};
use crate::comparison::domain::{
    AggregationOutcome, AnalysisConfiguration, CalculationResult, Comparison, ComparisonReport,
    FinancialAnalysis, Recommendation, ReportMetadata,
};

/// Builder for constructing ComparisonReadModel from domain objects
pub struct ComparisonReadModelBuilder;

impl ComparisonReadModelBuilder {
    pub fn build(outcome: &AggregationOutcome, metadata: &ReportMetadata) -> ComparisonReadModel {
        match outcome {
            AggregationOutcome::Computed(report) => Self::build_computed(report, metadata),
            AggregationOutcome::InsufficientConfiguration { issues } => ComparisonReadModel {
                metadata: Self::build_metadata(metadata, None),
                status: ReportStatus::InsufficientConfiguration,
                configuration: None,
                issues: issues.iter().map(|issue| issue.to_string()).collect(),
                vendors: Vec::new(),
                skipped_vendors: Vec::new(),
                recommendation: None,
                recommendation_note: None,
            },
        }
    }

    fn build_computed(report: &ComparisonReport, metadata: &ReportMetadata) -> ComparisonReadModel {
        let (recommendation, recommendation_note) = match &report.recommendation {
            Comparison::Available(rec) => (Some(Self::build_recommendation(rec)), None),
            Comparison::InsufficientData { reason } => (None, Some(reason.clone())),
        };

        ComparisonReadModel {
            metadata: Self::build_metadata(metadata, Some(&report.dataset_version)),
            status: ReportStatus::Computed,
            configuration: Some(Self::build_configuration(&report.configuration)),
            issues: Vec::new(),
            vendors: report.results.iter().map(Self::build_vendor).collect(),
            skipped_vendors: report
                .skipped_vendors
                .iter()
                .map(|id| id.to_string())
                .collect(),
            recommendation,
            recommendation_note,
        }
    }

    fn build_metadata(
        metadata: &ReportMetadata,
        dataset_version: Option<&str>,
    ) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
            dataset_version: dataset_version.map(str::to_string),
        }
    }

    fn build_configuration(config: &AnalysisConfiguration) -> ConfigurationView {
        ConfigurationView {
            devices: config.devices(),
            users: config.users(),
            years: config.years(),
            industry: config.industry().to_string(),
            org_size: config.org_size().to_string(),
            region: config.region().to_string(),
            vendors: config.vendors().iter().map(|id| id.to_string()).collect(),
            baseline_vendor: config.baseline_vendor().map(|id| id.to_string()),
        }
    }

    fn build_vendor(result: &CalculationResult) -> VendorView {
        let roi = result.roi.clone().map(|roi| RoiView {
            baseline_cost: money(roi.baseline_cost),
            total_savings: money(roi.total_savings),
            annual_savings: money(roi.annual_savings),
            percentage: roi.percentage.map(tenth),
            payback: roi.payback.map(tenth),
        });
        let (roi, roi_note) = match roi {
            Comparison::Available(view) => (Some(view), None),
            Comparison::InsufficientData { reason } => (None, Some(reason)),
        };

        let risk = &result.risk;
        let compliance = &result.compliance;
        let ops = &result.operational;
        let value = &result.business_value;

        VendorView {
            id: result.vendor_id.to_string(),
            name: result.vendor_name.clone(),
            total_cost: money(result.tco.total),
            per_device_per_month: money(result.per_device_per_month),
            cost_breakdown: result
                .tco
                .breakdown
                .entries()
                .iter()
                .map(|(category, amount)| CostLineView {
                    category: category.to_string(),
                    amount: money(*amount),
                })
                .collect(),
            yearly_costs: result
                .tco
                .yearly
                .iter()
                .map(|y| YearlyCostView {
                    year: y.year,
                    one_time: money(y.one_time),
                    recurring: money(y.recurring),
                    total: money(y.total),
                })
                .collect(),
            roi,
            roi_note,
            financials: result.financials.as_available().map(Self::build_financials),
            risk: RiskView {
                risk_score: tenth(risk.risk_score),
                security_score: tenth(risk.security_score),
                breach_risk_reduction: tenth(risk.breach_risk_reduction),
                cve_count: risk.cve_exposure,
                vendor_risk: tenth(risk.vendor_risk),
            },
            compliance: ComplianceView {
                score: tenth(compliance.score),
                automation_score: tenth(compliance.automation_score),
                frameworks: compliance
                    .frameworks
                    .iter()
                    .map(|(framework, score)| FrameworkView {
                        framework: framework.display_name().to_string(),
                        weight: score.weight,
                        coverage: tenth(score.coverage),
                        automation: tenth(score.automation),
                    })
                    .collect(),
                gaps: compliance
                    .gaps
                    .iter()
                    .map(|f| f.display_name().to_string())
                    .collect(),
            },
            operational: OperationalView {
                automation_level: tenth(ops.automation_level),
                fte_required: tenth(ops.fte_required),
                fte_saved: tenth(ops.fte_saved),
                maintenance_windows: ops.maintenance_windows,
                mttr_hours: tenth(ops.mttr_hours),
            },
            timeline: TimelineView {
                complexity: result.timeline.complexity.as_str().to_string(),
                time_to_value_days: result.timeline.time_to_value_days,
                implementation_weeks: result.timeline.implementation_weeks,
                training_days: result.timeline.training_days,
            },
            zero_trust: ZeroTrustView {
                score: tenth(result.zero_trust.score),
                level: result.zero_trust.level.as_str().to_string(),
            },
            cost_per_security_point: result.cost_per_security_point.value().map(money),
            business_value: BusinessValueView {
                productivity_gain: money(value.productivity_gain),
                compliance_value: money(value.compliance_value),
                downtime_avoidance: money(value.downtime_avoidance),
                security_savings: money(value.security_savings),
                annual_total: money(value.annual_total),
                horizon_total: money(value.horizon_total),
            },
        }
    }

    fn build_financials(financials: &FinancialAnalysis) -> FinancialsView {
        FinancialsView {
            discount_rate: tenth(financials.discount_rate * 100.0),
            net_cash_flows: financials.net_cash_flows.iter().copied().map(money).collect(),
            npv: money(financials.npv),
            irr: financials.irr.map(tenth),
            profitability_index: financials.profitability_index.map(hundredth),
            scenarios: financials
                .sensitivity
                .entries()
                .iter()
                .map(|(name, outcome)| ScenarioView {
                    scenario: name.to_string(),
                    benefit_factor: outcome.benefit_factor,
                    total_savings: money(outcome.total_savings),
                    percentage: outcome.percentage.map(tenth),
                    payback: outcome.payback.map(tenth),
                    npv: money(outcome.npv),
                })
                .collect(),
            projections: financials
                .projections
                .iter()
                .map(|p| ProjectionView {
                    year: p.year,
                    cumulative_net_savings: money(p.cumulative_net_savings),
                    risk_adjusted: money(p.risk_adjusted),
                })
                .collect(),
        }
    }

    fn build_recommendation(rec: &Recommendation) -> RecommendationView {
        RecommendationView {
            vendor_id: rec.vendor_id.to_string(),
            vendor_name: rec.vendor_name.clone(),
            ranking: rec
                .ranking
                .iter()
                .enumerate()
                .map(|(i, score)| RankingView {
                    rank: i + 1,
                    vendor_id: score.vendor_id.to_string(),
                    total: tenth(score.total),
                    cost: tenth(score.cost),
                    roi: tenth(score.roi),
                    security: tenth(score.security),
                    deployment: tenth(score.deployment),
                })
                .collect(),
        }
    }
}

fn hundredth(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn money(value: f64) -> f64 {
    hundredth(value)
}

fn tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::domain::{ConfigurationInput, ConfigurationIssue, Metric, Payback};

    fn metadata() -> ReportMetadata {
        ReportMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "nac-compare".to_string(),
            "0.1.0".to_string(),
            "urn:uuid:test".to_string(),
        )
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(money(1234.5678), 1234.57);
        assert_eq!(tenth(72.46), 72.5);
        assert_eq!(tenth(-40.04), -40.0);
    }

    #[test]
    fn test_vendor_view_keeps_sentinel_tags() {
        let model = crate::adapters::outbound::formatters::fixtures::computed_model();
        let beta = &model.vendors[1];

        let roi = beta.roi.as_ref().unwrap();
        assert_eq!(roi.percentage, Metric::NotApplicable);
        assert!(roi.payback.months().is_some());
        let json = serde_json::to_value(roi).unwrap();
        assert_eq!(json["percentage"]["status"], "not_applicable");
        assert_eq!(json["payback"]["status"], "months");

        let alpha = &model.vendors[0];
        assert_eq!(alpha.roi.as_ref().unwrap().payback, Payback::NoPayback);
        let json = serde_json::to_value(alpha.roi.as_ref().unwrap()).unwrap();
        assert_eq!(json["payback"], serde_json::json!({"status": "no_payback"}));
    }

    #[test]
    fn test_financials_view_follows_roi_availability() {
        let computed = crate::adapters::outbound::formatters::fixtures::computed_model();
        let alpha = &computed.vendors[0];
        let financials = alpha.financials.as_ref().unwrap();

        assert_eq!(alpha.yearly_costs.len(), 3);
        assert_eq!(financials.discount_rate, 8.0);
        assert_eq!(financials.net_cash_flows.len(), 3);
        assert_eq!(financials.projections.len(), 3);
        let names: Vec<&str> = financials.scenarios.iter().map(|s| s.scenario.as_str()).collect();
        assert_eq!(names, vec!["pessimistic", "realistic", "optimistic"]);

        let single = crate::adapters::outbound::formatters::fixtures::single_vendor_model();
        assert!(single.vendors[0].financials.is_none());
        assert_eq!(single.vendors[0].yearly_costs.len(), 3);
    }

    #[test]
    fn test_insufficient_configuration_view() {
        let outcome = AggregationOutcome::InsufficientConfiguration {
            issues: vec![
                ConfigurationIssue::MissingDeviceCount,
                ConfigurationIssue::NoVendorsSelected,
            ],
        };

        let model = ComparisonReadModelBuilder::build(&outcome, &metadata());
        assert_eq!(model.status, ReportStatus::InsufficientConfiguration);
        assert_eq!(
            model.issues,
            vec!["device count is required", "no vendors selected"]
        );
        assert!(model.vendors.is_empty());
        assert!(model.metadata.dataset_version.is_none());
    }

    #[test]
    fn test_configuration_view() {
        let config = ConfigurationInput {
            devices: Some(800),
            vendors: vec!["a".to_string(), "b".to_string()],
            baseline_vendor: Some("b".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap();

        let view = ComparisonReadModelBuilder::build_configuration(&config);
        assert_eq!(view.org_size, "medium");
        assert_eq!(view.region, "north_america");
        assert_eq!(view.industry, "default");
        assert_eq!(view.baseline_vendor.as_deref(), Some("b"));
    }
}
