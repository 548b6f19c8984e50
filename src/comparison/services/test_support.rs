//! Vendor fixtures shared by the calculator tests.

use crate::comparison::domain::vendor::{
    CostFactors, ImplementationProfile, MarketPosition, OperationalProfile, Pricing,
    SecurityProfile,
};
use crate::comparison::domain::{
    Complexity, CoverageLevel, Deployment, FeatureValue, Framework, FrameworkSupport, OrgSize,
    PricingModel, VendorId, VendorRecord,
};
use std::collections::BTreeMap;

pub fn vendor(id: &str) -> VendorRecord {
    let mut compliance = BTreeMap::new();
    compliance.insert(
        Framework::Hipaa,
        FrameworkSupport {
            coverage: CoverageLevel::Full,
            automation: 90.0,
        },
    );
    compliance.insert(
        Framework::Iso27001,
        FrameworkSupport {
            coverage: CoverageLevel::Substantial,
            automation: 70.0,
        },
    );
    compliance.insert(
        Framework::PciDss,
        FrameworkSupport {
            coverage: CoverageLevel::Partial,
            automation: 50.0,
        },
    );

    let mut features = BTreeMap::new();
    features.insert(
        "core".to_string(),
        BTreeMap::from([
            ("dot1x".to_string(), FeatureValue::Flag(true)),
            ("device_profiling".to_string(), FeatureValue::Score(90.0)),
            ("posture_assessment".to_string(), FeatureValue::Flag(true)),
        ]),
    );
    features.insert(
        "zero_trust".to_string(),
        BTreeMap::from([
            ("micro_segmentation".to_string(), FeatureValue::Score(80.0)),
            ("continuous_compliance".to_string(), FeatureValue::Flag(true)),
            ("device_trust".to_string(), FeatureValue::Flag(false)),
            ("risk_based_access".to_string(), FeatureValue::Score(70.0)),
        ]),
    );
    features.insert(
        "iot".to_string(),
        BTreeMap::from([("iot_profiling".to_string(), FeatureValue::Score(60.0))]),
    );

    VendorRecord {
        id: VendorId::parse(id).unwrap(),
        name: format!("{} NAC", id),
        deployment: Deployment::Hybrid,
        market_position: MarketPosition::Challenger,
        market_share: 10.0,
        pricing: Pricing {
            model: PricingModel::PerDevice,
            monthly_rate: 4.0,
            tier_discounts: BTreeMap::from([
                (OrgSize::Medium, 10.0),
                (OrgSize::Large, 15.0),
                (OrgSize::Enterprise, 20.0),
            ]),
        },
        costs: CostFactors {
            hardware_annual: 10_000.0,
            implementation: 20_000.0,
            training: 5_000.0,
            support_percent: 20.0,
            fte_factor: 0.5,
            hidden_cost_multiplier: 0.1,
        },
        implementation: ImplementationProfile {
            complexity: Complexity::Medium,
            deploy_days: 30,
            training_hours: 20,
            maintenance_windows: 2,
        },
        security: SecurityProfile {
            cve_count: 2,
            zero_trust_score: 80.0,
            breach_risk_reduction: 60.0,
            security_rating: 80.0,
        },
        compliance,
        features,
        operational: OperationalProfile {
            automation_level: 60.0,
        },
    }
}

/// A vendor whose only cost is a one-time implementation fee of `cost`
/// (for a medium organization).
pub fn fixed_cost_vendor(id: &str, cost: f64) -> VendorRecord {
    let mut v = vendor(id);
    v.pricing.monthly_rate = 0.0;
    v.costs = CostFactors {
        hardware_annual: 0.0,
        implementation: cost,
        training: 0.0,
        support_percent: 0.0,
        fte_factor: 0.0,
        hidden_cost_multiplier: 0.0,
    };
    v
}
