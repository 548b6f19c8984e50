use crate::comparison::domain::VendorDataset;
use crate::shared::Result;

/// VendorDatasetRepository port for obtaining the vendor table
///
/// Implementations parse their source through the same validated schema,
/// so every dataset reaching the calculators has its defaults resolved.
pub trait VendorDatasetRepository {
    /// Loads and validates the dataset
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source cannot be read
    /// - The content does not match the vendor schema
    /// - A record fails validation
    fn load_dataset(&self) -> Result<VendorDataset>;

    /// Human-readable description of where the dataset comes from
    fn source(&self) -> String;
}

impl<T: VendorDatasetRepository + ?Sized> VendorDatasetRepository for Box<T> {
    fn load_dataset(&self) -> Result<VendorDataset> {
        (**self).load_dataset()
    }

    fn source(&self) -> String {
        (**self).source()
    }
}
