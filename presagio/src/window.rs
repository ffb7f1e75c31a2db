use chrono::Datelike;

use crate::types::TimeSeries;

/// Truncate every series to its training prefix: all observations except
/// the last `prediction_length`.
///
/// Slice semantics apply at the boundary. When `prediction_length` reaches
/// or exceeds a series' length the result is an empty series, not an error;
/// a `prediction_length` of zero leaves the series unchanged. Inputs are
/// never mutated.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use presagio::{training_slices, TimePoint, TimeSeries};
///
/// fn t(secs: i64) -> DateTime<Utc> { DateTime::<Utc>::from_timestamp(secs, 0).unwrap() }
///
/// let series = TimeSeries::new(vec![
///     TimePoint::new(t(0), 1.0),
///     TimePoint::new(t(60), 2.0),
///     TimePoint::new(t(120), 3.0),
/// ]).unwrap();
///
/// let training = training_slices(std::slice::from_ref(&series), 1);
/// assert_eq!(training[0].values().collect::<Vec<_>>(), vec![1.0, 2.0]);
///
/// let cleared = training_slices(std::slice::from_ref(&series), 5);
/// assert!(cleared[0].is_empty());
/// ```
#[must_use]
pub fn training_slices(series_list: &[TimeSeries], prediction_length: usize) -> Vec<TimeSeries> {
    series_list
        .iter()
        .map(|s| s.head(s.len().saturating_sub(prediction_length)))
        .collect()
}

/// The complementary tails: the last `prediction_length` observations of
/// every series, the stretch a forecast is judged against.
///
/// When `prediction_length` reaches or exceeds a series' length the whole
/// series comes back; zero yields empty series.
#[must_use]
pub fn holdout_slices(series_list: &[TimeSeries], prediction_length: usize) -> Vec<TimeSeries> {
    series_list
        .iter()
        .map(|s| s.tail(prediction_length))
        .collect()
}

/// Split one series into per-calendar-year series, one per entry of
/// `years`, in the given order.
///
/// A year with no observations yields an empty series rather than an error,
/// so callers can zip the result back against `years`.
#[must_use]
pub fn yearly_slices(series: &TimeSeries, years: &[i32]) -> Vec<TimeSeries> {
    years
        .iter()
        .map(|&year| series.filtered(|p| p.ts.year() == year))
        .collect()
}
