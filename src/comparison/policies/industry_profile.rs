use crate::comparison::domain::{Framework, Industry};
use std::collections::BTreeMap;

/// Per-industry constants and weighting sets.
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryProfile {
    /// Average cost of a breach, dollars
    pub breach_cost: f64,
    /// Annual probability of a breach, 0-1
    pub breach_probability: f64,
    /// Productivity multiplier for automated operations
    pub efficiency_gain: f64,
    /// Annual regulatory penalty exposure, dollars
    pub compliance_penalty: f64,
    /// Cost of one hour of network downtime, dollars
    pub downtime_hourly: f64,
    /// Applicable compliance frameworks and their weights
    pub frameworks: Vec<(Framework, f64)>,
    /// Capabilities that reduce the industry's risk, with weights
    pub risk_capabilities: Vec<(String, f64)>,
}

/// Typed industry table. The default profile is mandatory, so every
/// industry without its own entry resolves to it.
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryProfiles {
    default: IndustryProfile,
    profiles: BTreeMap<Industry, IndustryProfile>,
}

impl IndustryProfiles {
    pub fn new(default: IndustryProfile) -> Self {
        Self {
            default,
            profiles: BTreeMap::new(),
        }
    }

    pub fn with(mut self, industry: Industry, profile: IndustryProfile) -> Self {
        if industry == Industry::Default {
            self.default = profile;
        } else {
            self.profiles.insert(industry, profile);
        }
        self
    }

    /// Profile for `industry`, or the default profile when none is mapped
    pub fn profile(&self, industry: Industry) -> &IndustryProfile {
        self.profiles.get(&industry).unwrap_or_else(|| {
            tracing::debug!(%industry, "no industry profile, using default weighting");
            &self.default
        })
    }

    /// Table built from published breach-cost and penalty figures.
    pub fn standard() -> Self {
        use Framework::*;

        Self::new(profile(
            4_500_000.0,
            0.35,
            1.2,
            2_000_000.0,
            7_500.0,
            &[(Iso27001, 0.5), (Nist80053, 0.25), (CisControls, 0.25)],
            &[
                ("dot1x", 0.25),
                ("device_profiling", 0.25),
                ("posture_assessment", 0.25),
                ("micro_segmentation", 0.25),
            ],
        ))
        .with(
            Industry::Healthcare,
            profile(
                10_930_000.0,
                0.32,
                1.2,
                5_000_000.0,
                8_500.0,
                &[(Hipaa, 0.5), (Gdpr, 0.2), (Iso27001, 0.3)],
                &[
                    ("iot_profiling", 0.3),
                    ("micro_segmentation", 0.25),
                    ("continuous_compliance", 0.2),
                    ("device_trust", 0.15),
                    ("guest_access", 0.1),
                ],
            ),
        )
        .with(
            Industry::Financial,
            profile(
                5_720_000.0,
                0.35,
                1.1,
                10_000_000.0,
                12_000.0,
                &[(PciDss, 0.35), (Sox, 0.25), (Glba, 0.2), (Iso27001, 0.2)],
                &[
                    ("risk_based_access", 0.3),
                    ("mfa", 0.2),
                    ("micro_segmentation", 0.2),
                    ("continuous_compliance", 0.15),
                    ("behavior_analytics", 0.15),
                ],
            ),
        )
        .with(
            Industry::Retail,
            profile(
                3_280_000.0,
                0.45,
                1.3,
                1_000_000.0,
                5_500.0,
                &[(PciDss, 0.5), (Gdpr, 0.25), (Ccpa, 0.25)],
                &[
                    ("micro_segmentation", 0.35),
                    ("guest_access", 0.25),
                    ("iot_profiling", 0.2),
                    ("continuous_compliance", 0.2),
                ],
            ),
        )
        .with(
            Industry::Manufacturing,
            profile(
                4_470_000.0,
                0.39,
                1.4,
                2_000_000.0,
                15_000.0,
                &[(Nist800171, 0.4), (Iso27001, 0.4), (CisControls, 0.2)],
                &[
                    ("iot_profiling", 0.35),
                    ("micro_segmentation", 0.35),
                    ("agentless", 0.3),
                ],
            ),
        )
        .with(
            Industry::Education,
            profile(
                3_790_000.0,
                0.43,
                1.1,
                500_000.0,
                3_000.0,
                &[(Ferpa, 0.6), (Iso27001, 0.2), (CisControls, 0.2)],
                &[
                    ("byod_onboarding", 0.4),
                    ("guest_access", 0.3),
                    ("cloud_pki", 0.3),
                ],
            ),
        )
        .with(
            Industry::Government,
            profile(
                4_740_000.0,
                0.28,
                1.0,
                15_000_000.0,
                8_000.0,
                &[(Fisma, 0.3), (Fedramp, 0.3), (Nist80053, 0.4)],
                &[
                    ("mfa", 0.25),
                    ("device_trust", 0.25),
                    ("continuous_compliance", 0.25),
                    ("posture_assessment", 0.25),
                ],
            ),
        )
        .with(
            Industry::Technology,
            profile(
                4_880_000.0,
                0.37,
                1.5,
                3_000_000.0,
                10_000.0,
                &[(Iso27001, 0.5), (Gdpr, 0.3), (Ccpa, 0.2)],
                &[
                    ("api_access", 0.3),
                    ("automated_response", 0.3),
                    ("risk_based_access", 0.2),
                    ("cloud_pki", 0.2),
                ],
            ),
        )
    }
}

fn profile(
    breach_cost: f64,
    breach_probability: f64,
    efficiency_gain: f64,
    compliance_penalty: f64,
    downtime_hourly: f64,
    frameworks: &[(Framework, f64)],
    risk_capabilities: &[(&str, f64)],
) -> IndustryProfile {
    IndustryProfile {
        breach_cost,
        breach_probability,
        efficiency_gain,
        compliance_penalty,
        downtime_hourly,
        frameworks: frameworks.to_vec(),
        risk_capabilities: risk_capabilities
            .iter()
            .map(|(name, weight)| (name.to_string(), *weight))
            .collect(),
    }
}
