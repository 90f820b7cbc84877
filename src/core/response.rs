//! Response envelope.
//!
//! The `{ ok, url|address, error }` shape is the adapter's one wire
//! contract: operational failures are rendered into it at the outermost
//! boundary, never raised past it. Any transport (the bundled CLI, an
//! HTTP handler) builds its reply from these types.

use serde::Serialize;

use crate::core::registry::Resolution;
use crate::error::Result;

/// Reply envelope for the resolve endpoint.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub ok: bool,
    /// Resolution pair on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Resolution>,
    /// Rendered error on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolveResponse {
    /// Fold an operation outcome into the envelope.
    pub fn from_result(result: Result<Resolution>) -> Self {
        match result {
            Ok(url) => Self {
                ok: true,
                url: Some(url),
                error: None,
            },
            Err(err) => Self {
                ok: false,
                url: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Reply envelope for the publish endpoint.
#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub ok: bool,
    /// Identifier of the key that carries the publication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Rendered error on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PublishResponse {
    /// Fold an operation outcome into the envelope.
    pub fn from_result(result: Result<String>) -> Self {
        match result {
            Ok(address) => Self {
                ok: true,
                address: Some(address),
                error: None,
            },
            Err(err) => Self {
                ok: false,
                address: None,
                error: Some(err.to_string()),
            },
        }
    }
}
