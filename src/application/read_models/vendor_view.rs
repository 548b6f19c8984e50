//! Per-vendor view of a comparison

use crate::comparison::domain::{Metric, Payback};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct VendorView {
    pub id: String,
    pub name: String,
    pub total_cost: f64,
    pub per_device_per_month: f64,
    pub cost_breakdown: Vec<CostLineView>,
    pub yearly_costs: Vec<YearlyCostView>,
    /// `None` when fewer than two vendors were compared
    pub roi: Option<RoiView>,
    pub roi_note: Option<String>,
    /// `None` exactly when `roi` is
    pub financials: Option<FinancialsView>,
    pub risk: RiskView,
    pub compliance: ComplianceView,
    pub operational: OperationalView,
    pub timeline: TimelineView,
    pub zero_trust: ZeroTrustView,
    /// `None` when the vendor has no security score
    pub cost_per_security_point: Option<f64>,
    pub business_value: BusinessValueView,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostLineView {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearlyCostView {
    pub year: u32,
    pub one_time: f64,
    pub recurring: f64,
    pub total: f64,
}

/// Sentinels keep their tag: `{"status": "not_applicable"}` for a free
/// vendor, `{"status": "no_payback"}` when savings never recover the cost.
#[derive(Debug, Clone, Serialize)]
pub struct RoiView {
    pub baseline_cost: f64,
    pub total_savings: f64,
    pub annual_savings: f64,
    pub percentage: Metric,
    pub payback: Payback,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancialsView {
    /// Percent
    pub discount_rate: f64,
    pub net_cash_flows: Vec<f64>,
    pub npv: f64,
    /// Percent
    pub irr: Metric,
    pub profitability_index: Metric,
    /// Pessimistic, realistic, optimistic
    pub scenarios: Vec<ScenarioView>,
    pub projections: Vec<ProjectionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioView {
    pub scenario: String,
    pub benefit_factor: f64,
    pub total_savings: f64,
    pub percentage: Metric,
    pub payback: Payback,
    pub npv: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectionView {
    pub year: u32,
    pub cumulative_net_savings: f64,
    pub risk_adjusted: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskView {
    pub risk_score: f64,
    pub security_score: f64,
    pub breach_risk_reduction: f64,
    pub cve_count: u32,
    pub vendor_risk: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameworkView {
    pub framework: String,
    pub weight: f64,
    pub coverage: f64,
    pub automation: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceView {
    pub score: f64,
    pub automation_score: f64,
    pub frameworks: Vec<FrameworkView>,
    pub gaps: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationalView {
    pub automation_level: f64,
    pub fte_required: f64,
    pub fte_saved: f64,
    pub maintenance_windows: u32,
    pub mttr_hours: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineView {
    pub complexity: String,
    pub time_to_value_days: u32,
    pub implementation_weeks: u32,
    pub training_days: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZeroTrustView {
    pub score: f64,
    pub level: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BusinessValueView {
    pub productivity_gain: f64,
    pub compliance_value: f64,
    pub downtime_avoidance: f64,
    pub security_savings: f64,
    pub annual_total: f64,
    pub horizon_total: f64,
}
