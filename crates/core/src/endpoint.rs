//! Endpoint Entity and Codec
//!
//! The [`Endpoint`] entity is the validated domain form of a monitoring
//! target. [`EndpointPayload`] is its flat representation used on the JSON
//! wire and when reading back from storage.
//!
//! The two directions are deliberately asymmetric: turning a payload into
//! an `Endpoint` validates the URL and the frequency and fails on bad
//! input, while decoding a stored field mapping is lenient and substitutes
//! zero for missing or unparsable numeric fields so reads stay available
//! even for records written with corrupt data. Do not unify the two.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::DomainError;

pub const FIELD_IDENTIFIER: &str = "identifier";
pub const FIELD_URL: &str = "url";
pub const FIELD_METHOD: &str = "method";
pub const FIELD_STATUS_ONLINE: &str = "status_online";
pub const FIELD_FREQUENCY: &str = "frequency";
pub const FIELD_FAIL_AFTER: &str = "fail_after";

/// Endpoint entity
///
/// A monitored target: the URL to poll, the HTTP method to use, the
/// status code considered healthy, the polling interval, and the number
/// of consecutive failures after which the target counts as down. The
/// identifier is both the domain key and the storage key suffix and is
/// immutable once chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub identifier: String,
    pub url: Url,
    pub method: String,
    pub status_online: u16,
    pub frequency: Duration,
    pub fail_after: u8,
}

impl Endpoint {
    /// Encode the endpoint as its storage field mapping
    ///
    /// Always emits all six fields as strings. The frequency renders in
    /// its canonical humantime form, the numerics as base-10 integers.
    pub fn to_fields(&self) -> Vec<(String, String)> {
        vec![
            (FIELD_IDENTIFIER.to_string(), self.identifier.clone()),
            (FIELD_URL.to_string(), self.url.to_string()),
            (FIELD_METHOD.to_string(), self.method.clone()),
            (
                FIELD_STATUS_ONLINE.to_string(),
                self.status_online.to_string(),
            ),
            (
                FIELD_FREQUENCY.to_string(),
                humantime::format_duration(self.frequency).to_string(),
            ),
            (FIELD_FAIL_AFTER.to_string(), self.fail_after.to_string()),
        ]
    }
}

/// Flat endpoint representation for the JSON wire and storage reads
///
/// URL and frequency are carried as plain strings here; validation only
/// happens when converting into an [`Endpoint`] on the write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointPayload {
    pub identifier: String,
    pub url: String,
    pub method: String,
    pub status_online: u16,
    pub frequency: String,
    pub fail_after: u8,
}

impl EndpointPayload {
    /// Decode a stored field mapping, leniently
    ///
    /// Missing fields come back as empty strings and numeric fields that
    /// fail to parse default to zero. This never fails.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        Self {
            identifier: field_or_empty(fields, FIELD_IDENTIFIER),
            url: field_or_empty(fields, FIELD_URL),
            method: field_or_empty(fields, FIELD_METHOD),
            status_online: parse_u16_or_zero(fields.get(FIELD_STATUS_ONLINE)),
            frequency: field_or_empty(fields, FIELD_FREQUENCY),
            fail_after: parse_u8_or_zero(fields.get(FIELD_FAIL_AFTER)),
        }
    }
}

impl From<&Endpoint> for EndpointPayload {
    fn from(endpoint: &Endpoint) -> Self {
        Self {
            identifier: endpoint.identifier.clone(),
            url: endpoint.url.to_string(),
            method: endpoint.method.clone(),
            status_online: endpoint.status_online,
            frequency: humantime::format_duration(endpoint.frequency).to_string(),
            fail_after: endpoint.fail_after,
        }
    }
}

impl TryFrom<EndpointPayload> for Endpoint {
    type Error = DomainError;

    fn try_from(payload: EndpointPayload) -> Result<Self, Self::Error> {
        let url = Url::parse(&payload.url).map_err(|source| DomainError::InvalidUrl {
            value: payload.url.clone(),
            source,
        })?;
        let frequency = humantime::parse_duration(&payload.frequency).map_err(|source| {
            DomainError::InvalidFrequency {
                value: payload.frequency.clone(),
                source,
            }
        })?;

        Ok(Self {
            identifier: payload.identifier,
            url,
            method: payload.method,
            status_online: payload.status_online,
            frequency,
            fail_after: payload.fail_after,
        })
    }
}

fn field_or_empty(fields: &HashMap<String, String>, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

fn parse_u16_or_zero(value: Option<&String>) -> u16 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}

fn parse_u8_or_zero(value: Option<&String>) -> u8 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}
