use crate::application::dto::{AnalysisRequest, AnalysisResponse, VendorListing};
use crate::shared::Result;

/// VendorComparisonPort - Inbound port for the comparison use case
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to run a comparison. It represents the application's public API.
pub trait VendorComparisonPort {
    /// Compares the requested vendors under the requested configuration
    ///
    /// # Returns
    /// A response holding either the computed report or the configuration
    /// issues that prevented it
    ///
    /// # Errors
    /// Returns an error only for infrastructure failures: the dataset
    /// cannot be read, parsed or validated.
    fn compare(&self, request: AnalysisRequest) -> Result<AnalysisResponse>;

    /// Lists every vendor in the active dataset
    ///
    /// # Errors
    /// Returns an error if the dataset cannot be loaded
    fn list_vendors(&self) -> Result<VendorListing>;
}
