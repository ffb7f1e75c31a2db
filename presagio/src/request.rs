use crate::encode::encode_series;
use crate::types::{PredictionRequest, PresagioError, RequestConfiguration, TimeSeries};

/// Assemble the prediction request payload for a batch of input series.
///
/// Each series is encoded into `instances` in input order and the validated
/// configuration is attached. The payload is UTF-8 JSON with top-level keys
/// in the fixed order `instances`, `configuration`; identical inputs always
/// produce identical bytes.
///
/// # Errors
/// Returns `Err(PresagioError::InvalidInput)` when any series is empty or
/// the configuration fails validation.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(series_list, config), fields(instances = series_list.len()))
)]
pub fn build_request(
    series_list: &[TimeSeries],
    config: &RequestConfiguration,
) -> Result<Vec<u8>, PresagioError> {
    config.validate()?;
    let instances = series_list
        .iter()
        .map(encode_series)
        .collect::<Result<Vec<_>, _>>()?;

    let request = PredictionRequest {
        instances,
        configuration: config.clone(),
    };
    let payload = serde_json::to_vec(&request)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(bytes = payload.len(), "prediction request built");

    Ok(payload)
}

/// [`build_request`] with the default configuration: fifty samples and the
/// 0.1/0.5/0.9 quantile levels.
///
/// # Errors
/// Returns `Err(PresagioError::InvalidInput)` when any series is empty.
pub fn build_request_with_defaults(series_list: &[TimeSeries]) -> Result<Vec<u8>, PresagioError> {
    build_request(series_list, &RequestConfiguration::default())
}
