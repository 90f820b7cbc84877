//! Error types for mooring operations.
//!
//! Operational errors are never raised past the request boundary; they are
//! rendered into the `{ ok: false, error }` response envelope. The enums
//! here exist so the layers in between can tell conditions apart without
//! matching on message text.

use thiserror::Error;

/// Top-level error for all mooring operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The daemon invocation itself failed.
    #[error(transparent)]
    Daemon(#[from] DaemonError),

    /// No key is bound to the requested name.
    #[error("no key bound to name: {0}")]
    NotFound(String),

    /// The daemon responded successfully but in an unrecognized shape.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// An inbound value was rejected before reaching the registry.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration file problems.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Response envelope serialization failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failures of the external daemon invocation.
///
/// `Failed` carries the daemon's raw diagnostic text so the caller sees
/// what the daemon said, verbatim. `KeyExists` is the one structured
/// condition: the backend owns the diagnostic-text match, so everything
/// above it can branch on the tag instead of the phrasing.
#[derive(Error, Debug)]
pub enum DaemonError {
    /// The daemon binary could not be started.
    #[error("failed to invoke {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The daemon binary is not on PATH.
    #[error("{0} not found. Install kubo from https://docs.ipfs.tech/install/")]
    Missing(String),

    /// The daemon ran and reported a fault; payload is its raw stderr.
    #[error("{stderr}")]
    Failed { command: String, stderr: String },

    /// A key with this name already exists in the daemon's keystore.
    #[error("key already exists for name: {0}")]
    KeyExists(String),
}

/// The daemon answered in a shape this adapter does not recognize.
///
/// Payload is the raw unparsed output, kept whole to diagnose daemon
/// version drift.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("unrecognized publish confirmation: {0}")]
    Confirmation(String),

    #[error("unrecognized resolution output: {0}")]
    Resolution(String),
}

/// Inbound value rejected at the request boundary.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("invalid name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("content address cannot be empty")]
    EmptyContent,

    #[error("invalid content address {content:?}: {reason}")]
    InvalidContent { content: String, reason: String },
}

/// Configuration file problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
