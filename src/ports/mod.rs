/// Ports for the hexagonal layout
///
/// Inbound ports are what the CLI drives (vendor comparison and listing);
/// outbound ports are what the use case needs from infrastructure
/// (vendor datasets, report formatting, output, progress messages).
pub mod inbound;
pub mod outbound;
