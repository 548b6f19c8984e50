use super::configuration::OrgSize;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Maximum length for vendor ids
const MAX_VENDOR_ID_LENGTH: usize = 64;

/// NewType wrapper for a vendor id: a lower-case slug such as `cisco_ise`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VendorId(String);

impl VendorId {
    /// Trims and lower-cases `raw`, then validates the result.
    pub fn parse(raw: &str) -> Result<Self> {
        let id = raw.trim().to_lowercase();

        if id.is_empty() {
            anyhow::bail!("Vendor id cannot be empty");
        }

        if id.len() > MAX_VENDOR_ID_LENGTH {
            anyhow::bail!(
                "Vendor id is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_VENDOR_ID_LENGTH
            );
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
        {
            anyhow::bail!(
                "Vendor id contains invalid characters. Only lower-case letters, digits, hyphens and underscores are allowed."
            );
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Deployment {
    Cloud,
    Hybrid,
    #[serde(alias = "on-premise")]
    OnPremise,
}

impl Deployment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Deployment::Cloud => "cloud",
            Deployment::Hybrid => "hybrid",
            Deployment::OnPremise => "on_premise",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketPosition {
    Leader,
    Challenger,
    Visionary,
    Niche,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingModel {
    PerDevice,
    PerUser,
    FlatRate,
}

/// Subscription pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pricing {
    pub model: PricingModel,
    /// Dollars per unit per month (per month overall for flat rate)
    pub monthly_rate: f64,
    /// Percent discount by organization size
    #[serde(default)]
    pub tier_discounts: BTreeMap<OrgSize, f64>,
}

impl Pricing {
    pub fn discount_for(&self, size: OrgSize) -> f64 {
        self.tier_discounts.get(&size).copied().unwrap_or(0.0)
    }
}

/// Cost factors feeding the TCO breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostFactors {
    /// Dollars per year; 0 for SaaS
    pub hardware_annual: f64,
    /// One-time professional services, dollars
    pub implementation: f64,
    /// One-time training, dollars
    pub training: f64,
    /// Percent of licensing + hardware
    pub support_percent: f64,
    /// FTE needed to operate the product
    pub fte_factor: f64,
    /// Fraction of licensing lost to complexity overhead
    pub hidden_cost_multiplier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
            Complexity::VeryHigh => "very_high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImplementationProfile {
    pub complexity: Complexity,
    pub deploy_days: u32,
    pub training_hours: u32,
    /// Planned maintenance windows per year
    pub maintenance_windows: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityProfile {
    pub cve_count: u32,
    pub zero_trust_score: f64,
    pub breach_risk_reduction: f64,
    pub security_rating: f64,
}

/// How completely a product covers a compliance framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageLevel {
    Full,
    Substantial,
    Partial,
    Limited,
    None,
}

impl CoverageLevel {
    pub fn score(&self) -> f64 {
        match self {
            CoverageLevel::Full => 100.0,
            CoverageLevel::Substantial => 75.0,
            CoverageLevel::Partial => 50.0,
            CoverageLevel::Limited => 25.0,
            CoverageLevel::None => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    Hipaa,
    PciDss,
    Sox,
    Gdpr,
    #[serde(rename = "iso_27001")]
    Iso27001,
    #[serde(rename = "nist_800_53")]
    Nist80053,
    #[serde(rename = "nist_800_171")]
    Nist800171,
    Fedramp,
    Fisma,
    Ferpa,
    Glba,
    Ccpa,
    CisControls,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Hipaa => "hipaa",
            Framework::PciDss => "pci_dss",
            Framework::Sox => "sox",
            Framework::Gdpr => "gdpr",
            Framework::Iso27001 => "iso_27001",
            Framework::Nist80053 => "nist_800_53",
            Framework::Nist800171 => "nist_800_171",
            Framework::Fedramp => "fedramp",
            Framework::Fisma => "fisma",
            Framework::Ferpa => "ferpa",
            Framework::Glba => "glba",
            Framework::Ccpa => "ccpa",
            Framework::CisControls => "cis_controls",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Hipaa => "HIPAA",
            Framework::PciDss => "PCI DSS",
            Framework::Sox => "SOX",
            Framework::Gdpr => "GDPR",
            Framework::Iso27001 => "ISO 27001",
            Framework::Nist80053 => "NIST 800-53",
            Framework::Nist800171 => "NIST 800-171",
            Framework::Fedramp => "FedRAMP",
            Framework::Fisma => "FISMA",
            Framework::Ferpa => "FERPA",
            Framework::Glba => "GLBA",
            Framework::Ccpa => "CCPA",
            Framework::CisControls => "CIS Controls",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameworkSupport {
    pub coverage: CoverageLevel,
    /// Percent of the framework's controls checked automatically
    pub automation: f64,
}

/// A single cell of the feature matrix: either supported/unsupported or a
/// 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Flag(bool),
    Score(f64),
}

impl FeatureValue {
    pub fn score(&self) -> f64 {
        match self {
            FeatureValue::Flag(true) => 100.0,
            FeatureValue::Flag(false) => 0.0,
            FeatureValue::Score(s) => *s,
        }
    }
}

/// Feature matrix grouped by category, e.g. `zero_trust -> micro_segmentation`
pub type FeatureMatrix = BTreeMap<String, BTreeMap<String, FeatureValue>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationalProfile {
    pub automation_level: f64,
}

/// Static description of one NAC product. Built only by the dataset loader,
/// which applies defaults and range checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorRecord {
    pub id: VendorId,
    pub name: String,
    pub deployment: Deployment,
    pub market_position: MarketPosition,
    pub market_share: f64,
    pub pricing: Pricing,
    pub costs: CostFactors,
    pub implementation: ImplementationProfile,
    pub security: SecurityProfile,
    pub compliance: BTreeMap<Framework, FrameworkSupport>,
    pub features: FeatureMatrix,
    pub operational: OperationalProfile,
}

impl VendorRecord {
    /// Looks a capability up across all feature categories.
    pub fn capability(&self, name: &str) -> Option<FeatureValue> {
        self.features
            .values()
            .find_map(|category| category.get(name).copied())
    }

    /// Mean score of a feature category, or `None` when the vendor lists
    /// nothing for it
    pub fn category_coverage(&self, category: &str) -> Option<f64> {
        let entries = self.features.get(category)?;
        if entries.is_empty() {
            return None;
        }
        let total: f64 = entries.values().map(FeatureValue::score).sum();
        Some(total / entries.len() as f64)
    }

    /// Units the monthly rate applies to
    pub fn billable_units(&self, devices: u64, users: u64) -> f64 {
        match self.pricing.model {
            PricingModel::PerDevice => devices as f64,
            PricingModel::PerUser => users as f64,
            PricingModel::FlatRate => 1.0,
        }
    }
}
