use super::roi_calculator::RoiCalculator;
use crate::comparison::domain::{
    AnalysisConfiguration, FinancialAnalysis, Metric, ProjectionYear, ScenarioOutcome,
    SensitivityAnalysis, Tco,
};
use crate::comparison::policies::CalculationConstants;

/// Annual rates bracketing the IRR search
const IRR_LOWER_BOUND: f64 = -0.99;
const IRR_UPPER_BOUND: f64 = 10.0;
const IRR_MAX_ITERATIONS: u32 = 200;
const IRR_TOLERANCE: f64 = 1e-10;

/// FinancialAnalyzer - discounted cash flows of a vendor against the baseline
///
/// The net cash flow of year t is the baseline's cost in year t minus the
/// vendor's, discounted by (1 + rate)^t. Undiscounted, the flows add up to
/// the total savings.
pub struct FinancialAnalyzer;

impl FinancialAnalyzer {
    pub fn analyze(
        tco: &Tco,
        baseline_yearly: &[f64],
        config: &AnalysisConfiguration,
        constants: &CalculationConstants,
    ) -> FinancialAnalysis {
        let rate = constants.discount_rate;
        let flows = Self::net_cash_flows(tco, baseline_yearly, 1.0);
        let npv = Self::npv(&flows, rate);
        let scenario = |factor| Self::scenario(tco, baseline_yearly, factor, config, rate);

        FinancialAnalysis {
            discount_rate: rate,
            npv,
            irr: Self::irr(&flows),
            profitability_index: Metric::ratio(npv, tco.total),
            sensitivity: SensitivityAnalysis {
                pessimistic: scenario(constants.pessimistic_benefit_factor),
                realistic: scenario(1.0),
                optimistic: scenario(constants.optimistic_benefit_factor),
            },
            projections: Self::projections(&flows, constants.projection_uncertainty),
            net_cash_flows: flows,
        }
    }

    /// Present value of yearly flows, the first discounted by one full year.
    pub fn npv(flows: &[f64], rate: f64) -> f64 {
        flows
            .iter()
            .enumerate()
            .map(|(i, flow)| flow / (1.0 + rate).powi(i as i32 + 1))
            .sum()
    }

    /// Rate at which the NPV of `flows` is zero, in percent.
    ///
    /// Found by bisection. Flows without both an outflow and an inflow have
    /// no such rate, and neither do flows whose NPV keeps its sign across
    /// the searched bracket.
    pub fn irr(flows: &[f64]) -> Metric {
        let has_outflow = flows.iter().any(|flow| *flow < 0.0);
        let has_inflow = flows.iter().any(|flow| *flow > 0.0);
        if !(has_outflow && has_inflow) {
            return Metric::NotApplicable;
        }

        let (mut low, mut high) = (IRR_LOWER_BOUND, IRR_UPPER_BOUND);
        let mut npv_low = Self::npv(flows, low);
        let npv_high = Self::npv(flows, high);
        let bracketed = npv_low.is_finite()
            && npv_high.is_finite()
            && npv_low.signum() != npv_high.signum();
        if !bracketed {
            tracing::debug!(?flows, "no sign change in NPV, IRR undefined");
            return Metric::NotApplicable;
        }

        for _ in 0..IRR_MAX_ITERATIONS {
            let mid = (low + high) / 2.0;
            let npv_mid = Self::npv(flows, mid);
            if npv_mid == 0.0 || high - low < IRR_TOLERANCE {
                return Metric::Value(mid * 100.0);
            }
            if npv_mid.signum() == npv_low.signum() {
                low = mid;
                npv_low = npv_mid;
            } else {
                high = mid;
            }
        }
        Metric::Value((low + high) / 2.0 * 100.0)
    }

    fn net_cash_flows(tco: &Tco, baseline_yearly: &[f64], benefit_factor: f64) -> Vec<f64> {
        tco.yearly
            .iter()
            .zip(baseline_yearly)
            .map(|(cost, baseline)| baseline * benefit_factor - cost.total)
            .collect()
    }

    fn scenario(
        tco: &Tco,
        baseline_yearly: &[f64],
        benefit_factor: f64,
        config: &AnalysisConfiguration,
        rate: f64,
    ) -> ScenarioOutcome {
        let baseline_cost = baseline_yearly.iter().sum::<f64>() * benefit_factor;
        let roi = RoiCalculator::compute(tco.total, config, baseline_cost);
        let flows = Self::net_cash_flows(tco, baseline_yearly, benefit_factor);

        ScenarioOutcome {
            benefit_factor,
            total_savings: roi.total_savings,
            percentage: roi.percentage,
            payback: roi.payback,
            npv: Self::npv(&flows, rate),
        }
    }

    fn projections(flows: &[f64], uncertainty: f64) -> Vec<ProjectionYear> {
        let mut cumulative = 0.0;
        flows
            .iter()
            .zip(1u32..)
            .map(|(flow, year)| {
                cumulative += flow;
                ProjectionYear {
                    year,
                    cumulative_net_savings: cumulative,
                    risk_adjusted: cumulative * (1.0 - uncertainty).powi(year as i32 - 1),
                }
            })
            .collect()
    }
}
