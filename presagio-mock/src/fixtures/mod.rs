//! Deterministic fixture data for tests and examples.

pub mod series;
