use super::parser::{DatasetFormat, DatasetParser};
use crate::comparison::domain::VendorDataset;
use crate::ports::outbound::VendorDatasetRepository;
use crate::shared::Result;
use std::path::Path;

/// Curated dataset compiled into the binary
const EMBEDDED_DATASET: &str = include_str!("../../../../data/vendors.yml");

/// Label used in progress messages and parse errors
const EMBEDDED_SOURCE: &str = "built-in dataset";

/// EmbeddedDatasetRepository adapter serving the compiled-in vendor table
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedDatasetRepository;

impl EmbeddedDatasetRepository {
    pub fn new() -> Self {
        Self
    }
}

impl VendorDatasetRepository for EmbeddedDatasetRepository {
    fn load_dataset(&self) -> Result<VendorDataset> {
        DatasetParser::parse(EMBEDDED_DATASET, DatasetFormat::Yaml, Path::new(EMBEDDED_SOURCE))
    }

    fn source(&self) -> String {
        EMBEDDED_SOURCE.to_string()
    }
}
