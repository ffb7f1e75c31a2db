use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::PresagioError;
use crate::quantile::QuantileLevel;

/// Wire shape of one forecast instance in a service response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Quantile level to forecast track, keyed by the exact level spelling
    /// the request carried.
    pub quantiles: BTreeMap<QuantileLevel, Vec<f64>>,
}

/// Wire shape of a complete service response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Per-instance forecasts, in request order.
    pub predictions: Vec<Prediction>,
}

/// Decoded forecast for one instance: one track per quantile level, every
/// track exactly `horizon` steps long.
///
/// Built from a [`Prediction`] via `TryFrom`, which rejects ragged tables.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileTable {
    tracks: BTreeMap<QuantileLevel, Vec<f64>>,
    horizon: usize,
}

impl QuantileTable {
    /// Number of forecast steps in every track.
    #[must_use]
    pub const fn horizon(&self) -> usize {
        self.horizon
    }

    /// Quantile levels present, in string order.
    pub fn levels(&self) -> impl Iterator<Item = &QuantileLevel> {
        self.tracks.keys()
    }

    /// Forecast track for a level, if present. The lookup uses the exact
    /// level spelling, so `"0.1"` does not find a `"0.10"` track.
    #[must_use]
    pub fn track(&self, level: &str) -> Option<&[f64]> {
        self.tracks.get(level).map(Vec::as_slice)
    }

    /// Value at `step` of the track for `level`, if both exist.
    #[must_use]
    pub fn value_at(&self, level: &str, step: usize) -> Option<f64> {
        self.track(level).and_then(|track| track.get(step)).copied()
    }
}

impl Index<&str> for QuantileTable {
    type Output = [f64];

    /// Shorthand for [`QuantileTable::track`].
    ///
    /// # Panics
    /// Panics when the level is absent; use [`QuantileTable::track`] for a
    /// fallible lookup.
    fn index(&self, level: &str) -> &Self::Output {
        match self.track(level) {
            Some(track) => track,
            None => panic!("no quantile track for level {level:?}"),
        }
    }
}

impl TryFrom<Prediction> for QuantileTable {
    type Error = PresagioError;

    /// Validates that every track in the instance has the same length.
    fn try_from(prediction: Prediction) -> Result<Self, Self::Error> {
        let mut horizon = None;
        for (level, track) in &prediction.quantiles {
            match horizon {
                None => horizon = Some(track.len()),
                Some(h) if h == track.len() => {}
                Some(h) => {
                    return Err(PresagioError::decode(format!(
                        "ragged quantile table: level {level} has {} steps, expected {h}",
                        track.len()
                    )));
                }
            }
        }
        Ok(Self {
            tracks: prediction.quantiles,
            horizon: horizon.unwrap_or(0),
        })
    }
}
