use super::vendor::VendorId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Analysis horizon bounds in years
pub const MIN_YEARS: u32 = 1;
pub const MAX_YEARS: u32 = 5;
pub const DEFAULT_YEARS: u32 = 3;

/// Upper bound for device and user counts
pub const MAX_ENDPOINTS: u64 = 10_000_000;

/// Industry vertical; selects compliance frameworks, risk capabilities and
/// the business-value constants used for a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Healthcare,
    Financial,
    Retail,
    Manufacturing,
    Education,
    Government,
    Technology,
    Default,
}

impl Industry {
    pub const ALL: [Industry; 8] = [
        Industry::Healthcare,
        Industry::Financial,
        Industry::Retail,
        Industry::Manufacturing,
        Industry::Education,
        Industry::Government,
        Industry::Technology,
        Industry::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Healthcare => "healthcare",
            Industry::Financial => "financial",
            Industry::Retail => "retail",
            Industry::Manufacturing => "manufacturing",
            Industry::Education => "education",
            Industry::Government => "government",
            Industry::Technology => "technology",
            Industry::Default => "default",
        }
    }
}

impl FromStr for Industry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "healthcare" => Ok(Industry::Healthcare),
            "financial" | "finance" | "financial_services" => Ok(Industry::Financial),
            "retail" => Ok(Industry::Retail),
            "manufacturing" => Ok(Industry::Manufacturing),
            "education" => Ok(Industry::Education),
            "government" => Ok(Industry::Government),
            "technology" | "tech" => Ok(Industry::Technology),
            "default" | "general" => Ok(Industry::Default),
            _ => Err(format!(
                "Invalid industry: {}. Valid values: healthcare, financial, retail, manufacturing, education, government, technology, default",
                s
            )),
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Organization size bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgSize {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl OrgSize {
    /// Bracket implied by a device count when none is given explicitly
    pub fn for_devices(devices: u64) -> Self {
        match devices {
            0..=499 => OrgSize::Small,
            500..=2_499 => OrgSize::Medium,
            2_500..=9_999 => OrgSize::Large,
            _ => OrgSize::Enterprise,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrgSize::Small => "small",
            OrgSize::Medium => "medium",
            OrgSize::Large => "large",
            OrgSize::Enterprise => "enterprise",
        }
    }
}

impl FromStr for OrgSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "small" => Ok(OrgSize::Small),
            "medium" => Ok(OrgSize::Medium),
            "large" => Ok(OrgSize::Large),
            "enterprise" => Ok(OrgSize::Enterprise),
            _ => Err(format!(
                "Invalid organization size: {}. Valid values: small, medium, large, enterprise",
                s
            )),
        }
    }
}

impl fmt::Display for OrgSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic region; scales labor and hardware costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NorthAmerica,
    Europe,
    AsiaPacific,
    LatinAmerica,
    MiddleEast,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "north_america",
            Region::Europe => "europe",
            Region::AsiaPacific => "asia_pacific",
            Region::LatinAmerica => "latin_america",
            Region::MiddleEast => "middle_east",
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "north_america" | "na" => Ok(Region::NorthAmerica),
            "europe" | "eu" => Ok(Region::Europe),
            "asia_pacific" | "apac" => Ok(Region::AsiaPacific),
            "latin_america" | "latam" => Ok(Region::LatinAmerica),
            "middle_east" | "me" => Ok(Region::MiddleEast),
            _ => Err(format!(
                "Invalid region: {}. Valid values: north_america, europe, asia_pacific, latin_america, middle_east",
                s
            )),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', ' '], "_")
}

/// A problem that prevents a configuration from being evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationIssue {
    #[error("device count is required")]
    MissingDeviceCount,

    #[error("device count must be between 1 and {max} (got {value})")]
    DeviceCountOutOfRange { value: u64, max: u64 },

    #[error("user count must be between 1 and {max} (got {value})")]
    UserCountOutOfRange { value: u64, max: u64 },

    #[error("analysis horizon must be between {min} and {max} years (got {value})")]
    YearsOutOfRange { value: u32, min: u32, max: u32 },

    #[error("unknown industry '{value}'")]
    UnknownIndustry { value: String },

    #[error("unknown organization size '{value}'")]
    UnknownOrgSize { value: String },

    #[error("unknown region '{value}'")]
    UnknownRegion { value: String },

    #[error("no vendors selected")]
    NoVendorsSelected,

    #[error("invalid vendor id '{value}': {reason}")]
    InvalidVendorId { value: String, reason: String },

    #[error("baseline vendor '{vendor}' is not among the selected vendors")]
    BaselineNotSelected { vendor: String },

    #[error("none of the selected vendors exist in dataset version {dataset_version}")]
    NoKnownVendors { dataset_version: String },

    #[error("baseline vendor '{vendor}' is not in the dataset")]
    UnknownBaselineVendor { vendor: String },
}

/// Unvalidated analysis parameters as collected from flags or a config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigurationInput {
    pub devices: Option<u64>,
    pub users: Option<u64>,
    pub years: Option<u32>,
    pub industry: Option<String>,
    pub org_size: Option<String>,
    pub region: Option<String>,
    pub vendors: Vec<String>,
    pub baseline_vendor: Option<String>,
}

impl ConfigurationInput {
    /// Validates every field, collecting all issues rather than stopping at
    /// the first one.
    pub fn validate(&self) -> Result<AnalysisConfiguration, Vec<ConfigurationIssue>> {
        let mut issues = Vec::new();

        let devices = match self.devices {
            None => {
                issues.push(ConfigurationIssue::MissingDeviceCount);
                None
            }
            Some(value) if value == 0 || value > MAX_ENDPOINTS => {
                issues.push(ConfigurationIssue::DeviceCountOutOfRange {
                    value,
                    max: MAX_ENDPOINTS,
                });
                None
            }
            Some(value) => Some(value),
        };

        let users = match self.users {
            Some(value) if value == 0 || value > MAX_ENDPOINTS => {
                issues.push(ConfigurationIssue::UserCountOutOfRange {
                    value,
                    max: MAX_ENDPOINTS,
                });
                None
            }
            other => other,
        };

        let years = self.years.unwrap_or(DEFAULT_YEARS);
        if !(MIN_YEARS..=MAX_YEARS).contains(&years) {
            issues.push(ConfigurationIssue::YearsOutOfRange {
                value: years,
                min: MIN_YEARS,
                max: MAX_YEARS,
            });
        }

        let industry = parse_or_issue(self.industry.as_deref(), Industry::Default, |value| {
            ConfigurationIssue::UnknownIndustry { value }
        });
        let region = parse_or_issue(self.region.as_deref(), Region::NorthAmerica, |value| {
            ConfigurationIssue::UnknownRegion { value }
        });
        let org_size: Option<Result<OrgSize, ConfigurationIssue>> = self
            .org_size
            .as_deref()
            .map(|raw| {
                raw.parse().map_err(|_| ConfigurationIssue::UnknownOrgSize {
                    value: raw.to_string(),
                })
            });

        let mut vendors: Vec<VendorId> = Vec::new();
        for raw in &self.vendors {
            match VendorId::parse(raw) {
                Ok(id) => {
                    if !vendors.contains(&id) {
                        vendors.push(id);
                    }
                }
                Err(e) => issues.push(ConfigurationIssue::InvalidVendorId {
                    value: raw.clone(),
                    reason: e.to_string(),
                }),
            }
        }
        if self.vendors.is_empty() {
            issues.push(ConfigurationIssue::NoVendorsSelected);
        }

        let baseline_vendor = match self.baseline_vendor.as_deref() {
            None => None,
            Some(raw) => match VendorId::parse(raw) {
                Ok(id) if vendors.contains(&id) => Some(id),
                Ok(id) => {
                    issues.push(ConfigurationIssue::BaselineNotSelected {
                        vendor: id.to_string(),
                    });
                    None
                }
                Err(e) => {
                    issues.push(ConfigurationIssue::InvalidVendorId {
                        value: raw.to_string(),
                        reason: e.to_string(),
                    });
                    None
                }
            },
        };

        let industry = industry.map_err(|issue| issues.push(issue)).ok();
        let region = region.map_err(|issue| issues.push(issue)).ok();
        let org_size = match org_size {
            Some(Err(issue)) => {
                issues.push(issue);
                None
            }
            Some(Ok(size)) => Some(size),
            None => None,
        };

        match (devices, industry, region) {
            (Some(devices), Some(industry), Some(region)) if issues.is_empty() => {
                Ok(AnalysisConfiguration {
                    devices,
                    users: users.unwrap_or(devices),
                    years,
                    industry,
                    org_size: org_size.unwrap_or_else(|| OrgSize::for_devices(devices)),
                    region,
                    vendors,
                    baseline_vendor,
                })
            }
            _ => Err(issues),
        }
    }
}

fn parse_or_issue<T: FromStr>(
    raw: Option<&str>,
    default: T,
    issue: impl FnOnce(String) -> ConfigurationIssue,
) -> Result<T, ConfigurationIssue> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| issue(value.to_string())),
    }
}

/// Validated analysis parameters. Replaced wholesale when anything changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisConfiguration {
    devices: u64,
    users: u64,
    years: u32,
    industry: Industry,
    org_size: OrgSize,
    region: Region,
    vendors: Vec<VendorId>,
    baseline_vendor: Option<VendorId>,
}

impl AnalysisConfiguration {
    pub fn devices(&self) -> u64 {
        self.devices
    }

    pub fn users(&self) -> u64 {
        self.users
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn industry(&self) -> Industry {
        self.industry
    }

    pub fn org_size(&self) -> OrgSize {
        self.org_size
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Selected vendors in selection order, de-duplicated
    pub fn vendors(&self) -> &[VendorId] {
        &self.vendors
    }

    pub fn baseline_vendor(&self) -> Option<&VendorId> {
        self.baseline_vendor.as_ref()
    }

    /// Returns a copy with a different horizon, re-checking its bounds.
    pub fn with_years(&self, years: u32) -> Option<Self> {
        (MIN_YEARS..=MAX_YEARS).contains(&years).then(|| Self {
            years,
            ..self.clone()
        })
    }
}
