//! Decoder configuration.
//!
//! Configuration is resolved once at process startup and then passed into the decoder.
//! Binaries read `NIC_LEGACY_CENTURY` and hand the raw value to
//! [`decoder_config_from_env_value`]; request handling never touches the environment.

use crate::constants::{DEFAULT_LEGACY_CENTURY, MAX_MODERN_YEAR};
use crate::{NicError, NicResult};

/// Decoder configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    legacy_century: i32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            legacy_century: DEFAULT_LEGACY_CENTURY,
        }
    }
}

impl DecoderConfig {
    /// Create a new `DecoderConfig`.
    ///
    /// `legacy_century` is added to the two-digit year of legacy numbers. It must be a
    /// non-negative multiple of 100 that leaves room for a full century of four-digit years.
    ///
    /// # Errors
    ///
    /// Returns [`NicError::InvalidInput`] if `legacy_century` is out of range or not a
    /// whole century.
    pub fn new(legacy_century: i32) -> NicResult<Self> {
        if !(0..=MAX_MODERN_YEAR - 99).contains(&legacy_century) {
            return Err(NicError::InvalidInput(format!(
                "legacy century must be between 0 and {}, got {legacy_century}",
                MAX_MODERN_YEAR - 99
            )));
        }
        if legacy_century % 100 != 0 {
            return Err(NicError::InvalidInput(format!(
                "legacy century must be a multiple of 100, got {legacy_century}"
            )));
        }

        Ok(Self { legacy_century })
    }

    pub fn legacy_century(&self) -> i32 {
        self.legacy_century
    }
}

/// Build a [`DecoderConfig`] from an optional legacy-century string value.
///
/// If `value` is `None` or empty/whitespace, returns the default century (1900).
pub fn decoder_config_from_env_value(value: Option<String>) -> NicResult<DecoderConfig> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DecoderConfig::default()),
        Some(v) => {
            let century = v.parse::<i32>().map_err(|e| {
                NicError::InvalidInput(format!("legacy century '{v}' is not an integer: {e}"))
            })?;
            DecoderConfig::new(century)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_century_is_1900() {
        assert_eq!(DecoderConfig::default().legacy_century(), 1900);
    }

    #[test]
    fn env_value_missing_or_blank_uses_default() {
        assert_eq!(
            decoder_config_from_env_value(None).expect("default"),
            DecoderConfig::default()
        );
        assert_eq!(
            decoder_config_from_env_value(Some("   ".into())).expect("default"),
            DecoderConfig::default()
        );
    }

    #[test]
    fn env_value_is_parsed_and_validated() {
        let cfg = decoder_config_from_env_value(Some(" 2000 ".into())).expect("valid");
        assert_eq!(cfg.legacy_century(), 2000);

        let err = decoder_config_from_env_value(Some("nineteen".into())).expect_err("not int");
        assert!(matches!(err, NicError::InvalidInput(msg) if msg.contains("not an integer")));
    }

    #[test]
    fn rejects_partial_or_out_of_range_centuries() {
        let err = DecoderConfig::new(1950).expect_err("not a whole century");
        assert!(matches!(err, NicError::InvalidInput(msg) if msg.contains("multiple of 100")));

        let err = DecoderConfig::new(-100).expect_err("negative");
        assert!(matches!(err, NicError::InvalidInput(msg) if msg.contains("between")));

        let err = DecoderConfig::new(10_000).expect_err("too large");
        assert!(matches!(err, NicError::InvalidInput(msg) if msg.contains("between")));

        assert!(DecoderConfig::new(9900).is_ok());
    }
}
