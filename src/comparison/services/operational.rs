use crate::comparison::domain::{OperationalMetrics, TimelineMetrics, VendorRecord};
use crate::comparison::policies::CalculationConstants;

const DAYS_PER_WEEK: u32 = 7;
const HOURS_PER_TRAINING_DAY: u32 = 8;

/// OperationalEstimator - staffing, maintenance and rollout estimates
pub struct OperationalEstimator;

impl OperationalEstimator {
    /// Staffing and incident-response estimates.
    ///
    /// FTE saved is measured against a fully manual baseline team and never
    /// goes negative. MTTR starts from the complexity's base hours and
    /// shrinks by half the automation level.
    pub fn operational(
        vendor: &VendorRecord,
        constants: &CalculationConstants,
    ) -> OperationalMetrics {
        let automation_level = vendor.operational.automation_level;
        let fte_required = vendor.costs.fte_factor;
        let base_mttr = constants
            .mttr_base_hours
            .for_complexity(vendor.implementation.complexity);

        OperationalMetrics {
            automation_level,
            fte_required,
            fte_saved: (constants.baseline_fte - fte_required).max(0.0),
            maintenance_windows: vendor.implementation.maintenance_windows,
            mttr_hours: base_mttr * (1.0 - automation_level / 200.0),
        }
    }

    pub fn timeline(vendor: &VendorRecord) -> TimelineMetrics {
        let implementation = &vendor.implementation;
        TimelineMetrics {
            complexity: implementation.complexity,
            time_to_value_days: implementation.deploy_days,
            implementation_weeks: implementation.deploy_days.div_ceil(DAYS_PER_WEEK),
            training_days: implementation.training_hours.div_ceil(HOURS_PER_TRAINING_DAY),
        }
    }
}
