/// Vendor dataset adapters
///
/// The compiled-in dataset and external files share one parser, so both go
/// through the same schema checks and default resolution.
mod embedded;
mod file_repository;
mod parser;

pub use embedded::EmbeddedDatasetRepository;
pub use file_repository::FileDatasetRepository;
pub use parser::{DatasetFormat, DatasetParser};
