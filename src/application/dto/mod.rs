/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod analysis_request;
mod analysis_response;
mod output_format;
mod vendor_listing;

pub use analysis_request::AnalysisRequest;
pub use analysis_response::AnalysisResponse;
pub use output_format::OutputFormat;
pub use vendor_listing::{VendorListing, VendorSummary};
