/// Type alias for Result with anyhow::Error as the error type.
/// Infrastructure and application code returns this; the pure metric
/// functions never fail and do not use it.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
