use crate::comparison::domain::{AnalysisConfiguration, BusinessValue, CalculationResult};
use crate::comparison::policies::CalculationTables;

/// BusinessValueCalculator - annual value delivered beyond cost savings
///
/// Each component is a simple product against the industry's constants:
/// - productivity: automation share x efficiency gain x FTE saved x value per FTE
/// - compliance: compliance score share x penalty exposure x value factor
/// - downtime: share of maintenance windows avoided x hourly cost x hours per window
/// - security: breach cost x breach probability x breach-risk reduction share
pub struct BusinessValueCalculator;

impl BusinessValueCalculator {
    pub fn compute(
        result: &CalculationResult,
        config: &AnalysisConfiguration,
        tables: &CalculationTables,
    ) -> BusinessValue {
        let profile = tables.industries.profile(config.industry());
        let constants = &tables.constants;
        let ops = &result.operational;

        let productivity_gain = ops.automation_level / 100.0
            * profile.efficiency_gain
            * ops.fte_saved
            * constants.productivity_value_per_fte;

        let compliance_value = result.compliance.score / 100.0
            * profile.compliance_penalty
            * constants.compliance_value_factor;

        let windows_avoided = if constants.max_maintenance_windows > 0.0 {
            (1.0 - f64::from(ops.maintenance_windows) / constants.max_maintenance_windows)
                .max(0.0)
        } else {
            0.0
        };
        let downtime_avoidance =
            windows_avoided * profile.downtime_hourly * constants.downtime_hours_per_window;

        let security_savings = profile.breach_cost
            * profile.breach_probability
            * result.risk.breach_risk_reduction
            / 100.0;

        let annual_total =
            productivity_gain + compliance_value + downtime_avoidance + security_savings;

        BusinessValue {
            productivity_gain,
            compliance_value,
            downtime_avoidance,
            security_savings,
            annual_total,
            horizon_total: annual_total * f64::from(config.years()),
        }
    }
}
