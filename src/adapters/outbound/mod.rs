/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod dataset;
pub mod filesystem;
pub mod formatters;
