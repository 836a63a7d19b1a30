//! Shared machine-readable genome annotation service contracts.

pub mod get_mrna_by_gene;

pub use get_mrna_by_gene::GetMrnaByGeneParams;
