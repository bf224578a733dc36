// Aggregation and scoring over the in-memory tables.

pub mod breakdown;
pub mod similarity;
pub mod summary;
