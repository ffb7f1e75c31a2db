//! Value types and wire DTOs for the presagio forecasting toolkit.
//!
//! Everything here is transport-free: validated time series, quantile-level
//! strings, and the serde shapes of the DeepAR-style request and response
//! payloads. The operations that use these types live in the `presagio`
//! crate.
#![warn(missing_docs)]

mod error;
mod quantile;
mod record;
mod request;
mod response;
mod series;

pub use error::PresagioError;
pub use quantile::QuantileLevel;
pub use record::EncodedRecord;
pub use request::{OutputType, PredictionRequest, RequestConfiguration};
pub use response::{Prediction, PredictionResponse, QuantileTable};
pub use series::{TimePoint, TimeSeries};
