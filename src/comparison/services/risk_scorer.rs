use crate::comparison::domain::{AnalysisConfiguration, RiskMetrics, VendorRecord};
use crate::comparison::policies::IndustryProfiles;
use std::collections::BTreeMap;

/// Market share and security rating at which vendor risk is neutral
const NEUTRAL_VENDOR_RISK: f64 = 50.0;
const NEUTRAL_SECURITY_RATING: f64 = 70.0;

/// RiskScorer - how well a vendor covers the capabilities that matter to
/// the configured industry
///
/// The risk score is the weighted mean of the industry's capabilities,
/// with flags counting as 0 or 100. A capability the vendor does not list
/// counts as unsupported.
pub struct RiskScorer;

impl RiskScorer {
    pub fn compute(
        vendor: &VendorRecord,
        config: &AnalysisConfiguration,
        industries: &IndustryProfiles,
    ) -> RiskMetrics {
        let profile = industries.profile(config.industry());

        let mut capabilities = BTreeMap::new();
        let mut weighted = 0.0;
        let mut total_weight = 0.0;
        for (capability, weight) in &profile.risk_capabilities {
            let score = vendor
                .capability(capability)
                .map(|value| value.score())
                .unwrap_or(0.0);
            capabilities.insert(capability.clone(), score);
            weighted += score * weight;
            total_weight += weight;
        }

        let risk_score = if total_weight > 0.0 {
            weighted / total_weight
        } else {
            0.0
        };

        RiskMetrics {
            risk_score: clamp_score(risk_score),
            security_score: vendor.security.security_rating,
            breach_risk_reduction: vendor.security.breach_risk_reduction,
            cve_exposure: vendor.security.cve_count,
            vendor_risk: Self::vendor_risk(vendor),
            capabilities,
        }
    }

    /// Supplier risk: larger, better-rated vendors are safer bets
    pub fn vendor_risk(vendor: &VendorRecord) -> f64 {
        clamp_score(
            NEUTRAL_VENDOR_RISK
                - vendor.market_share
                - (vendor.security.security_rating - NEUTRAL_SECURITY_RATING),
        )
    }
}

pub(crate) fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::domain::ConfigurationInput;
    use crate::comparison::services::test_support::vendor;

    fn config(industry: &str) -> AnalysisConfiguration {
        ConfigurationInput {
            devices: Some(1000),
            industry: Some(industry.to_string()),
            vendors: vec!["acme".to_string()],
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_healthcare_weighted_capabilities() {
        let risk = RiskScorer::compute(
            &vendor("acme"),
            &config("healthcare"),
            &IndustryProfiles::standard(),
        );

        // iot 60*.3 + microseg 80*.25 + compliance 100*.2 + device_trust 0*.15 + guest 0*.1
        let expected = 60.0 * 0.3 + 80.0 * 0.25 + 100.0 * 0.2;
        assert!((risk.risk_score - expected).abs() < 1e-9);
        assert_eq!(risk.capabilities["guest_access"], 0.0);
        assert_eq!(risk.capabilities["iot_profiling"], 60.0);
    }

    #[test]
    fn test_default_industry_uses_core_capabilities() {
        let risk = RiskScorer::compute(
            &vendor("acme"),
            &config("default"),
            &IndustryProfiles::standard(),
        );
        let expected = (100.0 + 90.0 + 100.0 + 80.0) / 4.0;
        assert!((risk.risk_score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_vendor_risk() {
        let mut v = vendor("acme");
        // 50 - 10 - (80 - 70)
        assert_eq!(RiskScorer::vendor_risk(&v), 30.0);

        v.market_share = 45.0;
        v.security.security_rating = 95.0;
        assert_eq!(RiskScorer::vendor_risk(&v), 0.0);

        v.market_share = 0.0;
        v.security.security_rating = 0.0;
        assert_eq!(RiskScorer::vendor_risk(&v), 100.0);
    }

    #[test]
    fn test_scores_pass_through_security_profile() {
        let risk = RiskScorer::compute(
            &vendor("acme"),
            &config("technology"),
            &IndustryProfiles::standard(),
        );
        assert_eq!(risk.security_score, 80.0);
        assert_eq!(risk.breach_risk_reduction, 60.0);
        assert_eq!(risk.cve_exposure, 2);
    }
}
