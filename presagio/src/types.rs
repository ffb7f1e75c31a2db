//! Re-export of foundational types from `presagio-types`.
// Consolidated re-exports so downstream crates can depend on `presagio` only

pub use presagio_types::{PresagioError, QuantileLevel};

pub use presagio_types::{TimePoint, TimeSeries};

pub use presagio_types::{
    EncodedRecord, OutputType, Prediction, PredictionRequest, PredictionResponse, QuantileTable,
    RequestConfiguration,
};
