// Synthetic data sources: the seeded sequence and the market/prediction generator built on it.
pub mod sequence;
pub mod synthetic;
