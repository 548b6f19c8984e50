//! Comparison read model for query operations

use super::vendor_view::VendorView;
use serde::Serialize;

/// Main read model for a comparison report
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReadModel {
    pub metadata: ReportMetadataView,
    pub status: ReportStatus,
    /// Present only when the configuration was accepted
    pub configuration: Option<ConfigurationView>,
    /// Configuration issues, empty for a computed report
    pub issues: Vec<String>,
    pub vendors: Vec<VendorView>,
    pub skipped_vendors: Vec<String>,
    pub recommendation: Option<RecommendationView>,
    /// Why no recommendation was made, when none was
    pub recommendation_note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Computed,
    InsufficientConfiguration,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
    pub dataset_version: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationView {
    pub devices: u64,
    pub users: u64,
    pub years: u32,
    pub industry: String,
    pub org_size: String,
    pub region: String,
    pub vendors: Vec<String>,
    pub baseline_vendor: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub vendor_id: String,
    pub vendor_name: String,
    pub ranking: Vec<RankingView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingView {
    pub rank: usize,
    pub vendor_id: String,
    pub total: f64,
    pub cost: f64,
    pub roi: f64,
    pub security: f64,
    pub deployment: f64,
}
