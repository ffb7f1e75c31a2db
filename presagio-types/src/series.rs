use chrono::{DateTime, Utc};

use crate::error::PresagioError;

/// A single observation: a UTC timestamp and the value recorded at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimePoint {
    /// Observation timestamp.
    pub ts: DateTime<Utc>,
    /// Observed value, e.g. an adjusted closing price.
    pub value: f64,
}

impl TimePoint {
    /// Build an observation from its parts.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, value: f64) -> Self {
        Self { ts, value }
    }
}

/// An ordered series of observations with strictly increasing timestamps.
///
/// The ordering invariant is checked once, at construction; every accessor
/// and slicing method can then rely on it. An empty series is valid and
/// carries no start timestamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    points: Vec<TimePoint>,
}

impl TimeSeries {
    /// Build a series from observations already ordered by timestamp.
    ///
    /// # Errors
    /// Returns `Err(PresagioError::InvalidInput)` when any adjacent pair of
    /// timestamps is out of order or duplicated.
    pub fn new(points: Vec<TimePoint>) -> Result<Self, PresagioError> {
        for pair in points.windows(2) {
            if pair[1].ts <= pair[0].ts {
                return Err(PresagioError::invalid_input(format!(
                    "timestamps must be strictly increasing: {} then {}",
                    pair[0].ts, pair[1].ts
                )));
            }
        }
        Ok(Self { points })
    }

    /// A series with no observations.
    #[must_use]
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Timestamp of the first observation, if any.
    #[must_use]
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.points.first().map(|p| p.ts)
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The observations in timestamp order.
    #[must_use]
    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    /// The numeric values in timestamp order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Copy of the first `n` observations, or the whole series when `n`
    /// reaches its length.
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        let keep = n.min(self.points.len());
        Self {
            points: self.points[..keep].to_vec(),
        }
    }

    /// Copy of the last `n` observations, or the whole series when `n`
    /// reaches its length.
    #[must_use]
    pub fn tail(&self, n: usize) -> Self {
        let keep = n.min(self.points.len());
        Self {
            points: self.points[self.points.len() - keep..].to_vec(),
        }
    }

    /// Copy of the observations for which `keep` returns true, preserving
    /// order. Subsequences keep the ordering invariant, so the result needs
    /// no re-validation.
    #[must_use]
    pub fn filtered(&self, mut keep: impl FnMut(&TimePoint) -> bool) -> Self {
        Self {
            points: self.points.iter().copied().filter(|p| keep(p)).collect(),
        }
    }
}
