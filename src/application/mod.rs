/// Application layer - the comparison use case, its DTOs and read models
///
/// Orchestrates the comparison services and reaches datasets, formatters
/// and output destinations only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
