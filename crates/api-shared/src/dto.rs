//! Request and response bodies for the NIC APIs.
//!
//! Enumerated values (sex, format, error kind) travel as their lowercase wire strings so the
//! OpenAPI schema stays flat.

use nic_core::{DecodeError, DecodedIdentity};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DecodeReq {
    /// NIC number in either layout. Surrounding whitespace is ignored.
    #[schema(example = "199685601234")]
    pub nic: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DecodeRes {
    /// The number as submitted.
    pub nic: String,
    /// `legacy` or `modern`.
    #[schema(example = "modern")]
    pub format: String,
    /// ISO 8601 date (`YYYY-MM-DD`).
    #[schema(example = "1996-12-21")]
    pub birth_date: String,
    /// `male` or `female`.
    #[schema(example = "female")]
    pub sex: String,
}

impl DecodeRes {
    pub fn from_identity(nic: impl Into<String>, identity: &DecodedIdentity) -> Self {
        Self {
            nic: nic.into(),
            format: identity.format.to_wire().to_string(),
            birth_date: identity.birth_date.to_string(),
            sex: identity.sex.to_wire().to_string(),
        }
    }
}

/// Body returned when a number cannot be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DecodeErrorRes {
    /// `format_error`, `encoding_error` or `range_error`.
    #[schema(example = "range_error")]
    pub kind: String,
    pub message: String,
    /// Present for `range_error` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
}

impl From<&DecodeError> for DecodeErrorRes {
    fn from(err: &DecodeError) -> Self {
        Self {
            kind: err.kind().as_str().to_string(),
            message: err.to_string(),
            sex: err.sex().map(|s| s.to_wire().to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EncodeReq {
    /// ISO 8601 date (`YYYY-MM-DD`).
    #[schema(example = "1996-12-21")]
    pub birth_date: String,
    /// `male` or `female`.
    #[schema(example = "female")]
    pub sex: String,
    /// `legacy` or `modern`.
    #[schema(example = "modern")]
    pub format: String,
    /// Trailing serial digits. Defaults to 0.
    #[serde(default)]
    pub serial: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EncodeRes {
    pub nic: String,
}

/// Generic error body for malformed requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub message: String,
}
