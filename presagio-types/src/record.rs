use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One time series in request-ready form.
///
/// Struct field order is the wire key order: `start`, then `target`. The
/// start timestamp serializes as an RFC 3339 string and the target carries
/// every observed value in timestamp order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedRecord {
    /// Timestamp of the first observation.
    pub start: DateTime<Utc>,
    /// Observed values in timestamp order.
    pub target: Vec<f64>,
}
