//! Dataset fixtures built as YAML so they go through the real loader
use nac_compare::prelude::*;

/// One vendor record whose only cost is a one-time implementation fee.
///
/// With a medium organization (500-2499 devices) the services multiplier
/// is 1.0, so the vendor's TCO equals `cost` exactly.
pub fn fixed_cost_vendor_yaml(id: &str, cost: f64) -> String {
    format!(
        r#"
  - id: {id}
    name: {id} NAC
    deployment: cloud
    market_position: niche
    market_share: 5
    pricing: {{ model: per_device, monthly_rate: 0 }}
    costs:
      hardware_annual: 0
      implementation: {cost}
      training: 0
      support_percent: 0
      fte_factor: 0
      hidden_cost_multiplier: 0
    implementation: {{ complexity: low, deploy_days: 14, training_hours: 8 }}
    security: {{ cve_count: 1, zero_trust_score: 70, breach_risk_reduction: 60, security_rating: 75 }}
    compliance:
      hipaa: {{ coverage: substantial, automation: 60 }}
    features:
      core: {{ dot1x: true, device_profiling: 70 }}
"#
    )
}

/// A realistic per-device vendor with hardware, support and staffing costs
pub fn full_cost_vendor_yaml(id: &str) -> String {
    format!(
        r#"
  - id: {id}
    name: {id} NAC
    deployment: on_premise
    market_position: leader
    market_share: 25
    pricing:
      model: per_device
      monthly_rate: 8
      tier_discounts: {{ medium: 5, large: 10, enterprise: 15 }}
    costs:
      hardware_annual: 30000
      implementation: 80000
      training: 15000
      support_percent: 20
      fte_factor: 1.5
      hidden_cost_multiplier: 0.25
    implementation: {{ complexity: high, deploy_days: 120, training_hours: 40 }}
    security: {{ cve_count: 10, zero_trust_score: 65, breach_risk_reduction: 60, security_rating: 80 }}
    compliance:
      hipaa: {{ coverage: full, automation: 50 }}
      pci_dss: {{ coverage: substantial, automation: 50 }}
    features:
      core: {{ dot1x: true, device_profiling: 85, posture_assessment: 80 }}
      zero_trust: {{ micro_segmentation: 75, continuous_compliance: 60 }}
"#
    )
}

/// Wraps vendor records into a complete dataset document
pub fn dataset_yaml(version: &str, records: &[String]) -> String {
    format!("version: \"{}\"\nvendors:\n{}", version, records.concat())
}

/// The standard two-vendor fixture: `legacy` costs 1,000,000, `modern` 250,000
pub fn savings_dataset_yaml() -> String {
    dataset_yaml(
        "fixture-2024",
        &[
            fixed_cost_vendor_yaml("legacy", 1_000_000.0),
            fixed_cost_vendor_yaml("modern", 250_000.0),
            full_cost_vendor_yaml("enterprise_suite"),
        ],
    )
}

/// Analysis input for a medium organization
pub fn medium_org_input(vendors: &[&str]) -> ConfigurationInput {
    ConfigurationInput {
        devices: Some(1000),
        years: Some(3),
        vendors: vendors.iter().map(|v| v.to_string()).collect(),
        ..Default::default()
    }
}
