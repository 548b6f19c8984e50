//! Vendor comparison domain: data model, calculation tables and the pure
//! calculators that derive comparison metrics.
pub mod domain;
pub mod policies;
pub mod services;
