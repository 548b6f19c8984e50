use serde::Serialize;

/// One line of `--list-vendors` output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorSummary {
    pub id: String,
    pub name: String,
    pub deployment: String,
    pub pricing_model: String,
    pub monthly_rate: f64,
}

/// Vendors available in the active dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorListing {
    pub dataset_version: String,
    pub vendors: Vec<VendorSummary>,
}

impl VendorListing {
    /// Plain-text table for the terminal
    pub fn render(&self) -> String {
        let mut output = format!("Vendor dataset {}\n\n", self.dataset_version);
        let width = self
            .vendors
            .iter()
            .map(|v| v.id.len())
            .max()
            .unwrap_or(0);
        for vendor in &self.vendors {
            output.push_str(&format!(
                "  {:<width$}  {} ({}, {} ${:.2}/mo)\n",
                vendor.id,
                vendor.name,
                vendor.deployment,
                vendor.pricing_model,
                vendor.monthly_rate,
                width = width
            ));
        }
        output
    }
}
