/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod vendor_comparison_port;

pub use vendor_comparison_port::VendorComparisonPort;
