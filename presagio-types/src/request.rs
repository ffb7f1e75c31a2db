use serde::{Deserialize, Serialize};

use crate::error::PresagioError;
use crate::quantile::QuantileLevel;
use crate::record::EncodedRecord;

/// Output families a forecasting service can be asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum OutputType {
    /// Per-level quantile tracks over the forecast horizon.
    Quantiles,
}

/// Output configuration attached to every prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestConfiguration {
    /// Number of sample trajectories the service draws per instance.
    pub num_samples: u32,
    /// Requested output families. Quantile tracks are the only family this
    /// toolkit decodes.
    pub output_types: Vec<OutputType>,
    /// Quantile levels to return, in request order.
    pub quantiles: Vec<QuantileLevel>,
}

impl Default for RequestConfiguration {
    /// Fifty samples and the 0.1/0.5/0.9 levels, the service-side defaults.
    fn default() -> Self {
        Self {
            num_samples: 50,
            output_types: vec![OutputType::Quantiles],
            quantiles: vec![
                QuantileLevel::p10(),
                QuantileLevel::median(),
                QuantileLevel::p90(),
            ],
        }
    }
}

impl RequestConfiguration {
    /// Configuration with the default output family and the given sample
    /// count and levels.
    #[must_use]
    pub fn new(num_samples: u32, quantiles: Vec<QuantileLevel>) -> Self {
        Self {
            num_samples,
            output_types: vec![OutputType::Quantiles],
            quantiles,
        }
    }

    /// Check the invariants the service enforces on its side.
    ///
    /// # Errors
    /// Returns `Err(PresagioError::InvalidInput)` when `num_samples` is zero
    /// or no quantile level is requested.
    pub fn validate(&self) -> Result<(), PresagioError> {
        if self.num_samples == 0 {
            return Err(PresagioError::invalid_input("num_samples must be positive"));
        }
        if self.quantiles.is_empty() {
            return Err(PresagioError::invalid_input(
                "at least one quantile level is required",
            ));
        }
        Ok(())
    }
}

/// Complete prediction request payload.
///
/// Struct field order is the wire key order: `instances`, then
/// `configuration`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Encoded input series, one per requested forecast.
    pub instances: Vec<EncodedRecord>,
    /// Output configuration shared by every instance.
    pub configuration: RequestConfiguration,
}
