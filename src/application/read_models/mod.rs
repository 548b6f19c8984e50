//! Read models for CQRS-lite pattern
//!
//! View-optimized structs giving formatters a flat, rounded
//! representation of a comparison.

pub mod comparison_read_model;
pub mod comparison_read_model_builder;
pub mod vendor_view;

pub use comparison_read_model::{
    ComparisonReadModel, ConfigurationView, RankingView, RecommendationView, ReportMetadataView,
    ReportStatus,
};
pub use comparison_read_model_builder::ComparisonReadModelBuilder;
pub use vendor_view::{
    BusinessValueView, ComplianceView, CostLineView, FinancialsView, FrameworkView,
    OperationalView, ProjectionView, RiskView, RoiView, ScenarioView, TimelineView, VendorView,
    YearlyCostView, ZeroTrustView,
};
