use crate::comparison::domain::{Complexity, OrgSize};
use serde::{Deserialize, Serialize};

/// Tunable constants behind the derived metrics.
///
/// Every field has a default, so a config file only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculationConstants {
    /// Fully loaded annual cost of one FTE, dollars
    pub loaded_salary: f64,
    /// FTE needed without an automated NAC
    pub baseline_fte: f64,
    /// Annual value of one FTE's freed-up time in the productivity formula
    pub productivity_value_per_fte: f64,
    /// Share of the industry penalty exposure credited as compliance value
    pub compliance_value_factor: f64,
    /// Outage hours avoided per eliminated maintenance window
    pub downtime_hours_per_window: f64,
    /// Maintenance windows per year of the worst-case product
    pub max_maintenance_windows: f64,
    pub org_size_multipliers: OrgSizeMultipliers,
    pub mttr_base_hours: MttrBaseHours,
    pub recommendation_weights: RecommendationWeights,
    /// Weight of the vendor's own zero-trust score in the maturity score
    pub zero_trust_vendor_weight: f64,
    /// Maturity thresholds, lowest first: developing, defined, managed, optimized
    pub maturity_thresholds: [f64; 4],
    /// Annual rate for discounting yearly cash flows
    pub discount_rate: f64,
    /// Confidence lost per projected year in the risk-adjusted projection
    pub projection_uncertainty: f64,
    /// Scales the baseline cost avoided in the optimistic scenario
    pub optimistic_benefit_factor: f64,
    /// Scales the baseline cost avoided in the pessimistic scenario
    pub pessimistic_benefit_factor: f64,
}

impl Default for CalculationConstants {
    fn default() -> Self {
        Self {
            loaded_salary: 125_000.0,
            baseline_fte: 3.0,
            productivity_value_per_fte: 150_000.0,
            compliance_value_factor: 0.1,
            downtime_hours_per_window: 8.0,
            max_maintenance_windows: 12.0,
            org_size_multipliers: OrgSizeMultipliers::default(),
            mttr_base_hours: MttrBaseHours::default(),
            recommendation_weights: RecommendationWeights::default(),
            zero_trust_vendor_weight: 0.6,
            maturity_thresholds: [30.0, 50.0, 70.0, 85.0],
            discount_rate: 0.08,
            projection_uncertainty: 0.06,
            optimistic_benefit_factor: 1.2,
            pessimistic_benefit_factor: 0.8,
        }
    }
}

impl CalculationConstants {
    /// Checks values a config override could break.
    ///
    /// Returns a description of the first offending field.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let m = &self.org_size_multipliers;
        let h = &self.mttr_base_hours;
        let w = &self.recommendation_weights;
        let named = [
            ("loaded_salary", self.loaded_salary),
            ("baseline_fte", self.baseline_fte),
            ("productivity_value_per_fte", self.productivity_value_per_fte),
            ("compliance_value_factor", self.compliance_value_factor),
            ("downtime_hours_per_window", self.downtime_hours_per_window),
            ("max_maintenance_windows", self.max_maintenance_windows),
            ("org_size_multipliers.small", m.small),
            ("org_size_multipliers.medium", m.medium),
            ("org_size_multipliers.large", m.large),
            ("org_size_multipliers.enterprise", m.enterprise),
            ("mttr_base_hours.low", h.low),
            ("mttr_base_hours.medium", h.medium),
            ("mttr_base_hours.high", h.high),
            ("mttr_base_hours.very_high", h.very_high),
            ("recommendation_weights.cost", w.cost),
            ("recommendation_weights.roi", w.roi),
            ("recommendation_weights.security", w.security),
            ("recommendation_weights.deployment", w.deployment),
            ("optimistic_benefit_factor", self.optimistic_benefit_factor),
            ("pessimistic_benefit_factor", self.pessimistic_benefit_factor),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative number (got {})", name, value));
            }
        }

        if w.cost + w.roi + w.security + w.deployment <= 0.0 {
            return Err("recommendation_weights must not all be zero".to_string());
        }

        if !(0.0..=1.0).contains(&self.zero_trust_vendor_weight) {
            return Err(format!(
                "zero_trust_vendor_weight must be within 0-1 (got {})",
                self.zero_trust_vendor_weight
            ));
        }

        if !(0.0..=1.0).contains(&self.discount_rate) {
            return Err(format!(
                "discount_rate must be within 0-1 (got {})",
                self.discount_rate
            ));
        }

        if !(0.0..1.0).contains(&self.projection_uncertainty) {
            return Err(format!(
                "projection_uncertainty must be at least 0 and below 1 (got {})",
                self.projection_uncertainty
            ));
        }

        if self.pessimistic_benefit_factor > self.optimistic_benefit_factor {
            return Err(format!(
                "pessimistic_benefit_factor ({}) exceeds optimistic_benefit_factor ({})",
                self.pessimistic_benefit_factor, self.optimistic_benefit_factor
            ));
        }

        let t = &self.maturity_thresholds;
        if t.iter().any(|v| !(0.0..=100.0).contains(v)) || t.windows(2).any(|p| p[0] >= p[1]) {
            return Err(format!(
                "maturity_thresholds must be strictly ascending within 0-100 (got {:?})",
                t
            ));
        }

        Ok(())
    }
}

/// Professional-services scaling by organization size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrgSizeMultipliers {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
    pub enterprise: f64,
}

impl Default for OrgSizeMultipliers {
    fn default() -> Self {
        Self {
            small: 0.8,
            medium: 1.0,
            large: 1.3,
            enterprise: 1.6,
        }
    }
}

impl OrgSizeMultipliers {
    pub fn for_size(&self, size: OrgSize) -> f64 {
        match size {
            OrgSize::Small => self.small,
            OrgSize::Medium => self.medium,
            OrgSize::Large => self.large,
            OrgSize::Enterprise => self.enterprise,
        }
    }
}

/// Mean time to repair before automation, hours
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MttrBaseHours {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    pub very_high: f64,
}

impl Default for MttrBaseHours {
    fn default() -> Self {
        Self {
            low: 1.0,
            medium: 2.0,
            high: 4.0,
            very_high: 6.0,
        }
    }
}

impl MttrBaseHours {
    pub fn for_complexity(&self, complexity: Complexity) -> f64 {
        match complexity {
            Complexity::Low => self.low,
            Complexity::Medium => self.medium,
            Complexity::High => self.high,
            Complexity::VeryHigh => self.very_high,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecommendationWeights {
    pub cost: f64,
    pub roi: f64,
    pub security: f64,
    pub deployment: f64,
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            cost: 0.3,
            roi: 0.25,
            security: 0.25,
            deployment: 0.2,
        }
    }
}
