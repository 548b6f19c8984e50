use super::parser::{DatasetFormat, DatasetParser};
use crate::comparison::domain::VendorDataset;
use crate::ports::outbound::VendorDatasetRepository;
use crate::shared::error::AnalysisError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::path::PathBuf;

/// FileDatasetRepository adapter loading a vendor dataset from disk
///
/// The format follows the extension: `.yml`/`.yaml`, `.json` or `.toml`.
pub struct FileDatasetRepository {
    path: PathBuf,
}

impl FileDatasetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl VendorDatasetRepository for FileDatasetRepository {
    fn load_dataset(&self) -> Result<VendorDataset> {
        let format = DatasetFormat::from_path(&self.path).ok_or_else(|| {
            AnalysisError::UnsupportedDatasetFormat {
                path: self.path.clone(),
            }
        })?;

        if !self.path.exists() {
            return Err(AnalysisError::DatasetNotFound {
                path: self.path.clone(),
                suggestion: "Check the --dataset path, or omit it to use the built-in dataset"
                    .to_string(),
            }
            .into());
        }

        let content = read_checked(&self.path, "vendor dataset").map_err(|e| {
            AnalysisError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;

        DatasetParser::parse(&content, format, &self.path)
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const JSON: &str = r#"{
        "version": "file-1",
        "vendors": [{
            "id": "acme",
            "name": "Acme NAC",
            "deployment": "on_premise",
            "market_position": "niche",
            "market_share": 1,
            "pricing": { "model": "flat_rate", "monthly_rate": 2000 },
            "costs": {
                "hardware_annual": 15000, "implementation": 30000, "training": 8000,
                "support_percent": 22, "fte_factor": 1.5, "hidden_cost_multiplier": 0.25
            },
            "implementation": { "complexity": "high", "deploy_days": 120, "training_hours": 40 },
            "security": { "cve_count": 9, "zero_trust_score": 40, "breach_risk_reduction": 45 }
        }]
    }"#;

    #[test]
    fn test_load_json_dataset() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vendors.json");
        fs::write(&path, JSON).unwrap();

        let repo = FileDatasetRepository::new(path.clone());
        let dataset = repo.load_dataset().unwrap();

        assert_eq!(dataset.version(), "file-1");
        assert_eq!(dataset.vendors()[0].implementation.maintenance_windows, 4);
        assert_eq!(repo.source(), path.display().to_string());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileDatasetRepository::new(temp_dir.path().join("missing.yml"));

        let err = repo.load_dataset().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Vendor dataset not found"));
        assert!(msg.contains("--dataset"));
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vendors.csv");
        fs::write(&path, "id,name").unwrap();

        let err = FileDatasetRepository::new(path).load_dataset().unwrap_err();
        assert!(err.to_string().contains("Unsupported dataset format"));
    }

    #[test]
    fn test_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("vendors.yml");
        fs::create_dir(&dir).unwrap();

        let err = FileDatasetRepository::new(dir).load_dataset().unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }
}
