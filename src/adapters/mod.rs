/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports:
/// dataset loading, report formatting, and console/file output.
pub mod outbound;
