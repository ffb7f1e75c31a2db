use crate::types::{EncodedRecord, PresagioError, TimeSeries};

/// Convert one time series into a request-ready record.
///
/// The record keeps the first observation timestamp as `start` and every
/// value, in timestamp order, as `target`. Only the start survives from the
/// time index; the service infers the rest from its configured frequency.
///
/// # Errors
/// Returns `Err(PresagioError::InvalidInput)` for an empty series: a record
/// without a start timestamp has no meaning to the service.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use presagio::{encode_series, TimePoint, TimeSeries};
///
/// fn t(secs: i64) -> DateTime<Utc> { DateTime::<Utc>::from_timestamp(secs, 0).unwrap() }
///
/// let series = TimeSeries::new(vec![
///     TimePoint::new(t(0), 101.5),
///     TimePoint::new(t(86_400), 102.25),
/// ]).unwrap();
///
/// let record = encode_series(&series).unwrap();
/// assert_eq!(record.start, t(0));
/// assert_eq!(record.target, vec![101.5, 102.25]);
/// ```
pub fn encode_series(series: &TimeSeries) -> Result<EncodedRecord, PresagioError> {
    let Some(start) = series.start() else {
        return Err(PresagioError::invalid_input(
            "cannot encode an empty series: no start timestamp",
        ));
    };
    Ok(EncodedRecord {
        start,
        target: series.values().collect(),
    })
}
