use crate::application::read_models::ComparisonReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering a comparison
///
/// This port abstracts the output format (Markdown, JSON, etc.) so the
/// calculators never depend on a rendering technology.
pub trait ReportFormatter {
    /// Formats the comparison read model
    ///
    /// # Arguments
    /// * `model` - Presentation-ready comparison, including metadata and
    ///   any configuration issues
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ComparisonReadModel) -> Result<String>;
}
