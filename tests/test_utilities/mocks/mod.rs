/// Mock implementations for testing
mod mock_dataset_repository;
mod mock_output_presenter;
mod mock_progress_reporter;

pub use mock_dataset_repository::MockDatasetRepository;
pub use mock_output_presenter::MockOutputPresenter;
pub use mock_progress_reporter::MockProgressReporter;
