use crate::comparison::domain::{RawDataset, VendorDataset};
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Serialization formats a dataset can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Yaml,
    Json,
    Toml,
}

impl DatasetFormat {
    /// Picks the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yml" | "yaml" => Some(DatasetFormat::Yaml),
            "json" => Some(DatasetFormat::Json),
            "toml" => Some(DatasetFormat::Toml),
            _ => None,
        }
    }
}

/// Parses dataset text into a validated `VendorDataset`
pub struct DatasetParser;

impl DatasetParser {
    /// # Errors
    /// `AnalysisError::DatasetParseError` when the text does not match the
    /// schema, or the validation errors of `VendorDataset::from_raw`.
    pub fn parse(content: &str, format: DatasetFormat, origin: &Path) -> Result<VendorDataset> {
        let raw = Self::parse_raw(content, format).map_err(|details| {
            AnalysisError::DatasetParseError {
                path: PathBuf::from(origin),
                details,
            }
        })?;

        let dataset = VendorDataset::from_raw(raw)?;
        tracing::debug!(
            origin = %origin.display(),
            version = dataset.version(),
            vendors = dataset.len(),
            "vendor dataset loaded"
        );
        Ok(dataset)
    }

    fn parse_raw(content: &str, format: DatasetFormat) -> std::result::Result<RawDataset, String> {
        match format {
            DatasetFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
            DatasetFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DatasetFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}
