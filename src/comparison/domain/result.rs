use super::configuration::{AnalysisConfiguration, ConfigurationIssue};
use super::metric::{Comparison, Metric, Payback};
use super::vendor::{Complexity, Framework, VendorId};
use serde::Serialize;
use std::collections::BTreeMap;

/// TCO broken down by cost category; every component is in dollars over the
/// full analysis horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TcoBreakdown {
    pub licensing: f64,
    pub hardware: f64,
    pub implementation: f64,
    pub training: f64,
    pub support: f64,
    pub personnel: f64,
    pub hidden: f64,
}

impl TcoBreakdown {
    pub fn sum(&self) -> f64 {
        self.licensing
            + self.hardware
            + self.implementation
            + self.training
            + self.support
            + self.personnel
            + self.hidden
    }

    /// Category name and amount pairs, in report order
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("licensing", self.licensing),
            ("hardware", self.hardware),
            ("implementation", self.implementation),
            ("training", self.training),
            ("support", self.support),
            ("personnel", self.personnel),
            ("hidden", self.hidden),
        ]
    }
}

/// Cost incurred in one year of the horizon. Implementation and training
/// land in year 1; every other component is spread evenly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyCost {
    pub year: u32,
    pub one_time: f64,
    pub recurring: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tco {
    pub total: f64,
    pub breakdown: TcoBreakdown,
    /// One entry per year, summing to `total`
    pub yearly: Vec<YearlyCost>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiMetrics {
    pub baseline_cost: f64,
    pub total_savings: f64,
    pub annual_savings: f64,
    pub percentage: Metric,
    pub payback: Payback,
}

/// ROI, payback and NPV with the avoided baseline cost scaled by
/// `benefit_factor`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub benefit_factor: f64,
    pub total_savings: f64,
    pub percentage: Metric,
    pub payback: Payback,
    pub npv: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensitivityAnalysis {
    pub pessimistic: ScenarioOutcome,
    pub realistic: ScenarioOutcome,
    pub optimistic: ScenarioOutcome,
}

impl SensitivityAnalysis {
    /// Scenario name and outcome pairs, worst first
    pub fn entries(&self) -> [(&'static str, &ScenarioOutcome); 3] {
        [
            ("pessimistic", &self.pessimistic),
            ("realistic", &self.realistic),
            ("optimistic", &self.optimistic),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionYear {
    pub year: u32,
    pub cumulative_net_savings: f64,
    /// Cumulative net savings discounted for forecast uncertainty
    pub risk_adjusted: f64,
}

/// Discounted view of the yearly savings against the baseline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialAnalysis {
    pub discount_rate: f64,
    /// Baseline cost minus vendor cost, per year
    pub net_cash_flows: Vec<f64>,
    pub npv: f64,
    /// Annual rate in percent; undefined unless the cash flows change sign
    pub irr: Metric,
    /// NPV per dollar of the vendor's total cost
    pub profitability_index: Metric,
    pub sensitivity: SensitivityAnalysis,
    pub projections: Vec<ProjectionYear>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskMetrics {
    /// Weighted coverage of the capabilities that matter to the industry
    pub risk_score: f64,
    pub security_score: f64,
    pub breach_risk_reduction: f64,
    pub cve_exposure: u32,
    /// Higher is riskier
    pub vendor_risk: f64,
    pub capabilities: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameworkScore {
    pub weight: f64,
    pub coverage: f64,
    pub automation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceMetrics {
    pub score: f64,
    pub automation_score: f64,
    pub frameworks: BTreeMap<Framework, FrameworkScore>,
    /// Applicable frameworks with less than full coverage
    pub gaps: Vec<Framework>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperationalMetrics {
    pub automation_level: f64,
    pub fte_required: f64,
    pub fte_saved: f64,
    pub maintenance_windows: u32,
    pub mttr_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelineMetrics {
    pub complexity: Complexity,
    pub time_to_value_days: u32,
    pub implementation_weeks: u32,
    pub training_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    Initial,
    Developing,
    Defined,
    Managed,
    Optimized,
}

impl MaturityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaturityLevel::Initial => "Initial",
            MaturityLevel::Developing => "Developing",
            MaturityLevel::Defined => "Defined",
            MaturityLevel::Managed => "Managed",
            MaturityLevel::Optimized => "Optimized",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZeroTrustAssessment {
    pub score: f64,
    pub level: MaturityLevel,
    /// Mean score per feature category
    pub category_coverage: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BusinessValue {
    pub productivity_gain: f64,
    pub compliance_value: f64,
    pub downtime_avoidance: f64,
    pub security_savings: f64,
    pub annual_total: f64,
    pub horizon_total: f64,
}

/// Metrics for one (vendor, configuration) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub tco: Tco,
    pub per_device_per_month: f64,
    pub roi: Comparison<RoiMetrics>,
    pub financials: Comparison<FinancialAnalysis>,
    pub risk: RiskMetrics,
    pub compliance: ComplianceMetrics,
    pub operational: OperationalMetrics,
    pub timeline: TimelineMetrics,
    pub zero_trust: ZeroTrustAssessment,
    pub cost_per_security_point: Metric,
    pub business_value: BusinessValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationScore {
    pub vendor_id: VendorId,
    pub cost: f64,
    pub roi: f64,
    pub security: f64,
    pub deployment: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub vendor_id: VendorId,
    pub vendor_name: String,
    /// All compared vendors, best first
    pub ranking: Vec<RecommendationScore>,
}

/// Full comparison over the selected vendors, in selection order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub dataset_version: String,
    pub configuration: AnalysisConfiguration,
    pub results: Vec<CalculationResult>,
    pub skipped_vendors: Vec<VendorId>,
    pub recommendation: Comparison<Recommendation>,
}

impl ComparisonReport {
    pub fn result_for(&self, id: &VendorId) -> Option<&CalculationResult> {
        self.results.iter().find(|r| &r.vendor_id == id)
    }
}

/// What one aggregator call produces
#[derive(Debug, Clone, PartialEq)]
pub enum AggregationOutcome {
    Computed(ComparisonReport),
    InsufficientConfiguration { issues: Vec<ConfigurationIssue> },
}

impl AggregationOutcome {
    pub fn report(&self) -> Option<&ComparisonReport> {
        match self {
            AggregationOutcome::Computed(report) => Some(report),
            AggregationOutcome::InsufficientConfiguration { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_sum_matches_entries() {
        let breakdown = TcoBreakdown {
            licensing: 100.0,
            hardware: 20.0,
            implementation: 30.0,
            training: 5.0,
            support: 12.0,
            personnel: 300.0,
            hidden: 8.0,
        };
        let from_entries: f64 = breakdown.entries().iter().map(|(_, v)| v).sum();
        assert_eq!(breakdown.sum(), 475.0);
        assert_eq!(from_entries, breakdown.sum());
    }

    #[test]
    fn test_maturity_levels_are_ordered() {
        assert!(MaturityLevel::Initial < MaturityLevel::Developing);
        assert!(MaturityLevel::Managed < MaturityLevel::Optimized);
        assert_eq!(MaturityLevel::Defined.as_str(), "Defined");
    }
}
