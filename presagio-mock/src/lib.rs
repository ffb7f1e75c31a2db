use std::collections::BTreeMap;

use presagio::{
    Forecaster, Prediction, PredictionRequest, PredictionResponse, PresagioError, QuantileLevel,
};

pub mod fixtures;

/// Mock forecaster for CI-safe examples. Answers with deterministic quantile
/// tracks derived from the request itself.
///
/// Each instance gets one track per requested level, every track `horizon`
/// steps long and flat. The track for level `q` holds the instance's last
/// target value scaled by `0.5 + q`, so the median track repeats the last
/// observed value exactly and wider levels bracket it from below and above.
/// No randomness anywhere.
pub struct MockForecaster {
    horizon: usize,
    fail: bool,
}

impl MockForecaster {
    /// Mock service answering with `horizon` forecast steps per instance.
    #[must_use]
    pub const fn new(horizon: usize) -> Self {
        Self {
            horizon,
            fail: false,
        }
    }

    /// Mock service that rejects every request, for exercising error paths.
    #[must_use]
    pub const fn failing() -> Self {
        Self {
            horizon: 0,
            fail: true,
        }
    }

    fn track_for(&self, last: f64, level: &QuantileLevel) -> Vec<f64> {
        vec![last * (0.5 + level.value()); self.horizon]
    }
}

impl Forecaster for MockForecaster {
    fn name(&self) -> &'static str {
        "presagio-mock"
    }

    fn predict(&self, request: &[u8]) -> Result<Vec<u8>, PresagioError> {
        if self.fail {
            return Err(PresagioError::forecaster(self.name(), "forced failure"));
        }

        let request: PredictionRequest = serde_json::from_slice(request)?;

        let predictions = request
            .instances
            .iter()
            .map(|instance| {
                let last = instance.target.last().copied().ok_or_else(|| {
                    PresagioError::forecaster(self.name(), "instance with empty target")
                })?;
                let quantiles: BTreeMap<QuantileLevel, Vec<f64>> = request
                    .configuration
                    .quantiles
                    .iter()
                    .map(|level| (level.clone(), self.track_for(last, level)))
                    .collect();
                Ok(Prediction { quantiles })
            })
            .collect::<Result<Vec<_>, PresagioError>>()?;

        Ok(serde_json::to_vec(&PredictionResponse { predictions })?)
    }
}
