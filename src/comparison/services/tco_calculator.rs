use crate::comparison::domain::{
    AnalysisConfiguration, Tco, TcoBreakdown, VendorRecord, YearlyCost,
};
use crate::comparison::policies::{CalculationConstants, RegionalCostPolicy};

/// TcoCalculator - total cost of ownership over the analysis horizon
///
/// Components:
/// - licensing: rate x billable units x 12 x years, less the org-size tier discount
/// - hardware: annual hardware x regional hardware multiplier x years
/// - implementation: one-time services x org-size multiplier
/// - training: one-time
/// - support: percentage of licensing + hardware
/// - personnel: FTE x loaded salary x regional labor multiplier x years
/// - hidden: complexity overhead as a fraction of licensing
///
/// The yearly series books implementation and training in year 1 and
/// spreads the other components evenly. Values are never rounded here.
pub struct TcoCalculator;

impl TcoCalculator {
    pub fn compute(
        vendor: &VendorRecord,
        config: &AnalysisConfiguration,
        constants: &CalculationConstants,
    ) -> Tco {
        let years = f64::from(config.years());
        let region = RegionalCostPolicy::factors(config.region());
        let units = vendor.billable_units(config.devices(), config.users());
        let discount = vendor.pricing.discount_for(config.org_size()) / 100.0;
        let costs = &vendor.costs;

        let licensing = vendor.pricing.monthly_rate * units * 12.0 * years * (1.0 - discount);
        let hardware = costs.hardware_annual * region.hardware * years;
        let implementation = costs.implementation
            * constants
                .org_size_multipliers
                .for_size(config.org_size());
        let training = costs.training;
        let support = costs.support_percent / 100.0 * (licensing + hardware);
        let personnel = costs.fte_factor * constants.loaded_salary * region.labor * years;
        let hidden = costs.hidden_cost_multiplier * licensing;

        let breakdown = TcoBreakdown {
            licensing,
            hardware,
            implementation,
            training,
            support,
            personnel,
            hidden,
        };

        Tco {
            total: breakdown.sum(),
            yearly: Self::yearly(&breakdown, config.years()),
            breakdown,
        }
    }

    fn yearly(breakdown: &TcoBreakdown, years: u32) -> Vec<YearlyCost> {
        let one_time = breakdown.implementation + breakdown.training;
        let recurring = (breakdown.sum() - one_time) / f64::from(years);
        (1..=years)
            .map(|year| {
                let one_time = if year == 1 { one_time } else { 0.0 };
                YearlyCost {
                    year,
                    one_time,
                    recurring,
                    total: one_time + recurring,
                }
            })
            .collect()
    }

    /// Total spread over every device-month of the horizon
    pub fn per_device_per_month(tco: &Tco, config: &AnalysisConfiguration) -> f64 {
        let device_months = config.devices() as f64 * 12.0 * f64::from(config.years());
        tco.total / device_months
    }
}
