//! # NIC Core
//!
//! Decoding of Sri Lankan National Identity Card (NIC) numbers into a birth date and sex.
//!
//! Two layouts are supported:
//! - **Legacy**: `YYDDDSSSSV` — two-digit year, three-digit day field, four serial/check
//!   digits, and a `V` or `X` suffix.
//! - **Modern**: `YYYYDDDSSSSS` — four-digit year, three-digit day field, five
//!   serial/check digits.
//!
//! The day field is the ordinal day of birth, plus 500 for female holders, and always
//! reserves a slot for 29 February.
//!
//! This crate is pure: no I/O, no shared mutable state. Configuration is resolved by the
//! caller at startup (see [`config`]) and passed in.
//!
//! **No API concerns**: HTTP servers and the command line live in `api-rest` and `nic-cli`.

pub mod calendar;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod encode;
pub mod error;
pub mod fields;
pub mod format;

pub use config::{decoder_config_from_env_value, DecoderConfig};
pub use decoder::{DecodedIdentity, Decoder};
pub use encode::encode;
pub use error::{DecodeError, DecodeErrorKind, NicError, NicResult};
pub use fields::EncodedFields;
pub use nic_types::{FormatVariant, Sex};

/// Decode a NIC number with the default configuration.
///
/// Equivalent to `Decoder::default().decode(raw)`.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode(raw: &str) -> Result<DecodedIdentity, DecodeError> {
    Decoder::default().decode(raw)
}
