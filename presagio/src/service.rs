use crate::types::PresagioError;

/// The seam between this toolkit and a hosted forecasting service.
///
/// The toolkit only produces request bytes and consumes response bytes;
/// implementations own whatever transport sits in between. Keeping the seam
/// at the byte level means tests can swap in a deterministic stand-in (see
/// `presagio-mock`) without touching the codec paths.
pub trait Forecaster: Send + Sync {
    /// Stable implementation name, used when tagging errors.
    fn name(&self) -> &'static str;

    /// Submit a prediction request payload and return the raw response
    /// payload.
    ///
    /// # Errors
    /// Implementations report their own failures as
    /// `PresagioError::Forecaster`, tagged with [`Forecaster::name`].
    fn predict(&self, request: &[u8]) -> Result<Vec<u8>, PresagioError>;
}
