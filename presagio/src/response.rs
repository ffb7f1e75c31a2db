use crate::types::{PredictionResponse, PresagioError, QuantileTable};

/// Decode a service response payload into per-instance quantile tables.
///
/// The payload must be UTF-8 JSON of the shape
/// `{"predictions": [{"quantiles": {"<level>": [..], ..}}, ..]}`. Tables
/// come back in `predictions` order, each validated so that every quantile
/// track has the same length.
///
/// # Errors
/// Returns `Err(PresagioError::Decode)` when the payload is not valid UTF-8
/// JSON, when the `predictions` or `quantiles` keys are missing, or when an
/// instance carries tracks of unequal length.
///
/// ```
/// let payload =
///     br#"{"predictions":[{"quantiles":{"0.1":[1.0,2.0],"0.5":[2.0,3.0],"0.9":[3.0,4.0]}}]}"#;
/// let tables = presagio::decode_predictions(payload).unwrap();
/// assert_eq!(tables.len(), 1);
/// assert_eq!(tables[0]["0.5"][1], 3.0);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(payload), fields(bytes = payload.len()))
)]
pub fn decode_predictions(payload: &[u8]) -> Result<Vec<QuantileTable>, PresagioError> {
    let response: PredictionResponse = serde_json::from_slice(payload)?;
    response
        .predictions
        .into_iter()
        .map(QuantileTable::try_from)
        .collect()
}
