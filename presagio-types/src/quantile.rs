use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PresagioError;

/// A quantile level as exchanged with a forecasting service.
///
/// Levels are strings by contract: the service keys its response tables with
/// the exact spelling the request carried, so `"0.1"` and `"0.10"` are
/// distinct keys. The wrapper validates the numeric range once and then
/// preserves the original spelling; it never reformats through a float
/// round trip.
///
/// Ordering and equality follow the underlying string, which keeps lookups
/// by `&str` consistent with `BTreeMap` keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuantileLevel(String);

impl QuantileLevel {
    /// Validate and wrap a quantile-level string.
    ///
    /// # Errors
    /// Returns `Err(PresagioError::InvalidInput)` unless the string parses
    /// as a float within `[0, 1]`.
    ///
    /// ```
    /// use presagio_types::QuantileLevel;
    ///
    /// assert_eq!(QuantileLevel::new("0.25").unwrap().as_str(), "0.25");
    /// assert!(QuantileLevel::new("1.5").is_err());
    /// ```
    pub fn new(level: impl Into<String>) -> Result<Self, PresagioError> {
        let level = level.into();
        match level.parse::<f64>() {
            Ok(q) if (0.0..=1.0).contains(&q) => Ok(Self(level)),
            _ => Err(PresagioError::invalid_input(format!(
                "quantile level must be a number in [0, 1], got {level:?}"
            ))),
        }
    }

    /// The 0.1 level.
    #[must_use]
    pub fn p10() -> Self {
        Self("0.1".to_owned())
    }

    /// The median level.
    #[must_use]
    pub fn median() -> Self {
        Self("0.5".to_owned())
    }

    /// The 0.9 level.
    #[must_use]
    pub fn p90() -> Self {
        Self("0.9".to_owned())
    }

    /// The exact level string sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric value of the level.
    #[must_use]
    pub fn value(&self) -> f64 {
        // Validated at construction, so the parse cannot fail.
        self.0.parse().unwrap_or_default()
    }
}

impl fmt::Display for QuantileLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QuantileLevel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for QuantileLevel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for QuantileLevel {
    type Error = PresagioError;

    fn try_from(level: String) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl TryFrom<&str> for QuantileLevel {
    type Error = PresagioError;

    fn try_from(level: &str) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<QuantileLevel> for String {
    fn from(level: QuantileLevel) -> Self {
        level.0
    }
}
