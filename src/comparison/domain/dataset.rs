use super::vendor::{
    Complexity, CostFactors, Deployment, FeatureMatrix, FrameworkSupport, Framework,
    ImplementationProfile, MarketPosition, OperationalProfile, Pricing, SecurityProfile, VendorId,
    VendorRecord,
};
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Security rating assumed when a record omits one
pub const DEFAULT_SECURITY_RATING: f64 = 70.0;

/// Automation level assumed when a record omits one
pub const DEFAULT_AUTOMATION_LEVEL: f64 = 40.0;

/// Maintenance windows per year assumed from the deployment model
pub fn default_maintenance_windows(deployment: Deployment) -> u32 {
    match deployment {
        Deployment::Cloud => 0,
        Deployment::Hybrid => 2,
        Deployment::OnPremise => 4,
    }
}

/// Vendor dataset as it appears on disk (YAML, JSON or TOML)
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDataset {
    pub version: String,
    pub vendors: Vec<RawVendorRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawVendorRecord {
    pub id: String,
    pub name: String,
    pub deployment: Deployment,
    pub market_position: MarketPosition,
    pub market_share: f64,
    pub pricing: Pricing,
    pub costs: CostFactors,
    pub implementation: RawImplementation,
    pub security: RawSecurity,
    #[serde(default)]
    pub compliance: BTreeMap<Framework, FrameworkSupport>,
    #[serde(default)]
    pub features: FeatureMatrix,
    #[serde(default)]
    pub operational: RawOperational,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawImplementation {
    pub complexity: Complexity,
    pub deploy_days: u32,
    pub training_hours: u32,
    pub maintenance_windows: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSecurity {
    pub cve_count: u32,
    pub zero_trust_score: f64,
    pub breach_risk_reduction: f64,
    pub security_rating: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawOperational {
    pub automation_level: Option<f64>,
}

/// Validated, versioned vendor table. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorDataset {
    version: String,
    vendors: Vec<VendorRecord>,
}

impl VendorDataset {
    /// Validates raw records and resolves every optional field to its default.
    ///
    /// # Errors
    /// Returns `AnalysisError::InvalidVendorRecord` for the first out-of-range
    /// field and `AnalysisError::InvalidDataset` for structural problems
    /// (empty table, duplicate ids, missing version).
    pub fn from_raw(raw: RawDataset) -> Result<Self> {
        let vendors = raw
            .vendors
            .into_iter()
            .map(resolve_record)
            .collect::<Result<Vec<_>>>()?;
        Self::new(raw.version, vendors)
    }

    /// Builds a dataset from already-resolved records.
    pub fn new(version: String, vendors: Vec<VendorRecord>) -> Result<Self> {
        if version.trim().is_empty() {
            return Err(AnalysisError::InvalidDataset {
                reason: "dataset version cannot be empty".to_string(),
            }
            .into());
        }

        if vendors.is_empty() {
            return Err(AnalysisError::InvalidDataset {
                reason: "dataset contains no vendors".to_string(),
            }
            .into());
        }

        let mut seen = BTreeSet::new();
        for vendor in &vendors {
            if !seen.insert(vendor.id.clone()) {
                return Err(AnalysisError::InvalidDataset {
                    reason: format!("duplicate vendor id '{}'", vendor.id),
                }
                .into());
            }
        }

        Ok(Self { version, vendors })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Records in dataset order
    pub fn vendors(&self) -> &[VendorRecord] {
        &self.vendors
    }

    pub fn get(&self, id: &VendorId) -> Option<&VendorRecord> {
        self.vendors.iter().find(|v| &v.id == id)
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

fn resolve_record(raw: RawVendorRecord) -> Result<VendorRecord> {
    let id = VendorId::parse(&raw.id).map_err(|e| AnalysisError::InvalidVendorRecord {
        vendor: raw.id.clone(),
        field: "id".to_string(),
        reason: e.to_string(),
    })?;
    let check = RecordCheck { vendor: &id };

    if raw.name.trim().is_empty() {
        return Err(check.fail("name", "cannot be empty"));
    }

    check.percent("market_share", raw.market_share)?;
    check.non_negative("pricing.monthly_rate", raw.pricing.monthly_rate)?;
    for (size, discount) in &raw.pricing.tier_discounts {
        check.percent(&format!("pricing.tier_discounts.{}", size), *discount)?;
    }

    let costs = &raw.costs;
    check.non_negative("costs.hardware_annual", costs.hardware_annual)?;
    check.non_negative("costs.implementation", costs.implementation)?;
    check.non_negative("costs.training", costs.training)?;
    check.percent("costs.support_percent", costs.support_percent)?;
    check.non_negative("costs.fte_factor", costs.fte_factor)?;
    check.non_negative("costs.hidden_cost_multiplier", costs.hidden_cost_multiplier)?;

    check.percent("security.zero_trust_score", raw.security.zero_trust_score)?;
    check.percent(
        "security.breach_risk_reduction",
        raw.security.breach_risk_reduction,
    )?;

    for (framework, support) in &raw.compliance {
        check.percent(
            &format!("compliance.{}.automation", framework),
            support.automation,
        )?;
    }

    for (category, capabilities) in &raw.features {
        for (capability, value) in capabilities {
            check.percent(
                &format!("features.{}.{}", category, capability),
                value.score(),
            )?;
        }
    }

    let security_rating = match raw.security.security_rating {
        Some(rating) => {
            check.percent("security.security_rating", rating)?;
            rating
        }
        None => {
            tracing::debug!(vendor = %id, "security_rating missing, using default {}", DEFAULT_SECURITY_RATING);
            DEFAULT_SECURITY_RATING
        }
    };

    let automation_level = match raw.operational.automation_level {
        Some(level) => {
            check.percent("operational.automation_level", level)?;
            level
        }
        None => {
            tracing::debug!(vendor = %id, "automation_level missing, using default {}", DEFAULT_AUTOMATION_LEVEL);
            DEFAULT_AUTOMATION_LEVEL
        }
    };

    let maintenance_windows = raw
        .implementation
        .maintenance_windows
        .unwrap_or_else(|| default_maintenance_windows(raw.deployment));

    Ok(VendorRecord {
        id,
        name: raw.name,
        deployment: raw.deployment,
        market_position: raw.market_position,
        market_share: raw.market_share,
        pricing: raw.pricing,
        costs: raw.costs,
        implementation: ImplementationProfile {
            complexity: raw.implementation.complexity,
            deploy_days: raw.implementation.deploy_days,
            training_hours: raw.implementation.training_hours,
            maintenance_windows,
        },
        security: SecurityProfile {
            cve_count: raw.security.cve_count,
            zero_trust_score: raw.security.zero_trust_score,
            breach_risk_reduction: raw.security.breach_risk_reduction,
            security_rating,
        },
        compliance: raw.compliance,
        features: raw.features,
        operational: OperationalProfile { automation_level },
    })
}

struct RecordCheck<'a> {
    vendor: &'a VendorId,
}

impl RecordCheck<'_> {
    fn fail(&self, field: &str, reason: &str) -> anyhow::Error {
        AnalysisError::InvalidVendorRecord {
            vendor: self.vendor.to_string(),
            field: field.to_string(),
            reason: reason.to_string(),
        }
        .into()
    }

    fn percent(&self, field: &str, value: f64) -> Result<()> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(self.fail(field, &format!("must be within 0-100 (got {})", value)));
        }
        Ok(())
    }

    fn non_negative(&self, field: &str, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(self.fail(field, &format!("must be a non-negative number (got {})", value)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "version": "test-1",
        "vendors": [{
            "id": "Acme",
            "name": "Acme NAC",
            "deployment": "hybrid",
            "market_position": "niche",
            "market_share": 2.0,
            "pricing": { "model": "per_device", "monthly_rate": 3.0 },
            "costs": {
                "hardware_annual": 10000, "implementation": 20000, "training": 5000,
                "support_percent": 18, "fte_factor": 1.0, "hidden_cost_multiplier": 0.1
            },
            "implementation": { "complexity": "medium", "deploy_days": 30, "training_hours": 16 },
            "security": { "cve_count": 3, "zero_trust_score": 60, "breach_risk_reduction": 50 }
        }]
    }"#;

    fn raw() -> RawDataset {
        serde_json::from_str(MINIMAL).unwrap()
    }

    #[test]
    fn test_from_raw_applies_defaults_once() {
        let dataset = VendorDataset::from_raw(raw()).unwrap();
        let vendor = &dataset.vendors()[0];

        assert_eq!(vendor.id.as_str(), "acme");
        assert_eq!(vendor.security.security_rating, DEFAULT_SECURITY_RATING);
        assert_eq!(vendor.operational.automation_level, DEFAULT_AUTOMATION_LEVEL);
        assert_eq!(vendor.implementation.maintenance_windows, 2);
        assert!(vendor.compliance.is_empty());
        assert_eq!(dataset.version(), "test-1");
    }

    #[test]
    fn test_from_raw_rejects_out_of_range_score() {
        let mut raw = raw();
        raw.vendors[0].security.zero_trust_score = 140.0;

        let err = VendorDataset::from_raw(raw).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("security.zero_trust_score"));
        assert!(msg.contains("got 140"));
    }

    #[test]
    fn test_from_raw_rejects_negative_cost() {
        let mut raw = raw();
        raw.vendors[0].costs.training = -1.0;

        let err = VendorDataset::from_raw(raw).unwrap_err();
        assert!(err.to_string().contains("costs.training"));
    }

    #[test]
    fn test_from_raw_rejects_duplicate_ids() {
        let mut raw = raw();
        let mut dup = raw.vendors[0].clone();
        dup.id = "ACME".to_string();
        raw.vendors.push(dup);

        let err = VendorDataset::from_raw(raw).unwrap_err();
        assert!(err.to_string().contains("duplicate vendor id 'acme'"));
    }

    #[test]
    fn test_from_raw_rejects_empty_dataset() {
        let raw = RawDataset {
            version: "v".to_string(),
            vendors: vec![],
        };
        assert!(VendorDataset::from_raw(raw).is_err());
    }

    #[test]
    fn test_unknown_field_fails_deserialization() {
        let text = MINIMAL.replace("\"cve_count\": 3", "\"cve_count\": 3, \"cves\": 4");
        assert!(serde_json::from_str::<RawDataset>(&text).is_err());
    }

    #[test]
    fn test_missing_required_field_fails_deserialization() {
        let text = MINIMAL.replace("\"cve_count\": 3,", "");
        assert!(serde_json::from_str::<RawDataset>(&text).is_err());
    }

    #[test]
    fn test_get_by_id() {
        let dataset = VendorDataset::from_raw(raw()).unwrap();
        let id = VendorId::parse("acme").unwrap();
        assert!(dataset.get(&id).is_some());
        assert!(dataset.get(&VendorId::parse("other").unwrap()).is_none());
    }
}
