use nac_compare::comparison::domain::RawDataset;
use nac_compare::prelude::*;

/// Mock VendorDatasetRepository serving a YAML document from memory
pub struct MockDatasetRepository {
    pub content: String,
    pub should_fail: bool,
}

impl MockDatasetRepository {
    pub fn new(content: String) -> Self {
        Self {
            content,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl VendorDatasetRepository for MockDatasetRepository {
    fn load_dataset(&self) -> Result<VendorDataset> {
        if self.should_fail {
            anyhow::bail!("Mock dataset load failure");
        }
        let raw: RawDataset = serde_yaml_ng::from_str(&self.content)?;
        VendorDataset::from_raw(raw)
    }

    fn source(&self) -> String {
        "mock dataset".to_string()
    }
}
